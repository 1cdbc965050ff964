#[derive(Debug)]
/// Represents all errors caused by a malformed statement shape.
///
/// Compile errors are detected from the text of a single line, before any
/// value is produced: a declaration or assignment that does not split into
/// exactly two sides around `=`, a call whose delimiters cannot be located,
/// or a call with the wrong number of arguments.
pub enum CompileError {
    /// A `print` statement without a readable parenthesised argument.
    InvalidPrint,
    /// A `let`/`var` line that does not have the shape `let name = expr`.
    InvalidDeclaration,
    /// An assignment line that does not have the shape `name = expr`.
    InvalidAssignment,
    /// A built-in call whose argument delimiters cannot be located.
    InvalidCall {
        /// The name of the built-in function.
        name: String,
    },
    /// A built-in call with the wrong number of arguments.
    ArgumentCount {
        /// The name of the built-in function.
        function: String,
        /// How many arguments the function requires.
        expected: usize,
        /// How many arguments were actually supplied.
        found:    usize,
    },
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPrint => write!(f, "Invalid print statement."),
            Self::InvalidDeclaration => write!(f, "Invalid variable declaration."),
            Self::InvalidAssignment => write!(f, "Invalid assignment."),
            Self::InvalidCall { name } => write!(f, "Invalid {name} function call."),
            Self::ArgumentCount { function,
                                  expected,
                                  found, } => {
                write!(f,
                       "The {function} function requires exactly {expected} parameters, but found {found}.")
            },
        }
    }
}

impl std::error::Error for CompileError {}
