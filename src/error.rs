/// Compile errors.
///
/// Defines all error types caused by a malformed statement shape: bad
/// declaration/assignment splits, unlocatable call delimiters, and wrong
/// argument counts. Detected from the line text alone, before any value is
/// produced.
pub mod compile_error;
/// Runner errors.
///
/// Defines the public, terminal error of a whole run. Each variant pairs an
/// inner error with the text of the line that failed, and the `Display`
/// output renders the error kind name plus its message for the presentation
/// layer.
pub mod runner_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during expression evaluation:
/// unresolvable expressions, type mismatches, unknown or non-numeric
/// variables in arithmetic, division by zero, and overflow.
pub mod runtime_error;

pub use compile_error::CompileError;
pub use runner_error::{RunnerError, StatementError};
pub use runtime_error::RuntimeError;
