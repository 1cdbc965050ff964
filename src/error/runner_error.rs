use crate::error::{CompileError, RuntimeError};

#[derive(Debug)]
/// The union of per-statement failures, before line context is attached.
///
/// Statement handlers return this so a single `?` works across both failure
/// families; the program runner converts it into a [`RunnerError`] together
/// with the offending line's text.
pub enum StatementError {
    /// The statement's shape was malformed.
    Compile(CompileError),
    /// The statement failed while evaluating a value.
    Runtime(RuntimeError),
}

impl From<CompileError> for StatementError {
    fn from(error: CompileError) -> Self {
        Self::Compile(error)
    }
}

impl From<RuntimeError> for StatementError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for StatementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compile(error) => write!(f, "{error}"),
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for StatementError {}

#[derive(Debug)]
/// The terminal error of a run, one variant per error kind.
///
/// Every variant carries the trimmed text of the line that failed, so the
/// presentation layer can show the error kind, its message and the offending
/// statement without re-reading the source.
pub enum RunnerError {
    /// A statement's shape was malformed.
    Compilation {
        /// The underlying compile error.
        details: CompileError,
        /// The trimmed text of the offending line.
        line:    String,
    },
    /// A statement failed while evaluating a value.
    Runtime {
        /// The underlying runtime error.
        details: RuntimeError,
        /// The trimmed text of the offending line.
        line:    String,
    },
    /// Reserved for constructs outside the supported grammar. No current
    /// evaluation path raises this variant; it exists so the taxonomy stays
    /// stable when the grammar grows.
    Unsupported {
        /// Details about the unsupported construct.
        details: String,
        /// The trimmed text of the offending line.
        line:    String,
    },
}

impl RunnerError {
    /// Attaches line context to a statement failure, preserving its kind.
    #[must_use]
    pub fn from_statement(error: StatementError, line: &str) -> Self {
        match error {
            StatementError::Compile(details) => Self::Compilation { details,
                                                                    line: line.to_string() },
            StatementError::Runtime(details) => Self::Runtime { details,
                                                                line: line.to_string() },
        }
    }

    /// The trimmed text of the line that failed.
    #[must_use]
    pub fn line(&self) -> &str {
        match self {
            Self::Compilation { line, .. } | Self::Runtime { line, .. }
            | Self::Unsupported { line, .. } => line,
        }
    }
}

impl std::fmt::Display for RunnerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compilation { details, line } => {
                write!(f, "Compilation Error in line '{line}': {details}")
            },
            Self::Runtime { details, line } => {
                write!(f, "Runtime Error in line '{line}': {details}")
            },
            Self::Unsupported { details, line } => {
                write!(f, "Unsupported Operation in line '{line}': {details}")
            },
        }
    }
}

impl std::error::Error for RunnerError {}
