#[derive(Debug)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Runtime errors are raised when a statement's shape was acceptable but a
/// value could not be produced: an expression no evaluation rule matches, a
/// value of the wrong kind reaching an operation, or a failure inside the
/// arithmetic sub-evaluator.
pub enum RuntimeError {
    /// No evaluation rule matched the expression text.
    UnknownExpression {
        /// The expression that could not be resolved.
        text: String,
    },
    /// A value of the wrong kind reached an operation.
    TypeError {
        /// Details about the type mismatch.
        details: String,
    },
    /// An arithmetic expression referenced a variable with no binding.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// An arithmetic expression referenced a variable that does not hold a
    /// numeric value.
    NonNumericVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Arithmetic overflowed the 64 bit integer range.
    Overflow,
    /// The arithmetic sub-evaluator could not make sense of the expression.
    MalformedArithmetic {
        /// The expression that failed to evaluate.
        text: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownExpression { text } => write!(f, "Unknown expression: {text}"),
            Self::TypeError { details } => write!(f, "Type error: {details}."),
            Self::UnknownVariable { name } => write!(f, "Unknown variable '{name}'."),
            Self::NonNumericVariable { name } => {
                write!(f, "Variable '{name}' does not hold a numeric value.")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Overflow => {
                write!(f, "Integer overflow while trying to compute result.")
            },
            Self::MalformedArithmetic { text } => {
                write!(f, "Cannot evaluate arithmetic expression: {text}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
