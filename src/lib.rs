//! # swiftlet
//!
//! swiftlet is a line-oriented interpreter for a small, Swift-flavoured
//! scripting language. It executes variable declarations (`let`/`var`),
//! assignments, `print` statements, string interpolation, `+ - * /`
//! arithmetic, and three built-in functions (`factorial`, `greet`, `add`),
//! one line at a time against a per-run variable store.
//!
//! The synchronous entry point is [`run`]; [`execute`] offloads a run onto
//! a worker thread and returns a [`RunHandle`] that delivers the result
//! exactly once.
//!
//! ```
//! use swiftlet::run;
//!
//! let source = r#"
//!     let name = "World"
//!     print("Hello, \(name)!")
//!     print(2 + 3 * 4)
//! "#;
//!
//! assert_eq!(run(source).unwrap(), "Hello, World!\n14\n");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for compilation, evaluation and whole runs.
///
/// This module defines all errors that can be raised while classifying or
/// executing statements. It standardizes error reporting: per-phase enums
/// carry the details, and the run-level error attaches the text of the
/// offending line for user feedback.
///
/// # Responsibilities
/// - Defines error enums for both failure families (statement shape,
///   evaluation).
/// - Defines the public three-kind run error with line context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of script execution.
///
/// This module ties together statement dispatch, expression evaluation,
/// string interpolation, the built-in function table, the value model and
/// the variable store to provide a complete runtime for script execution.
/// It exposes the public API for running programs synchronously or on a
/// worker thread.
///
/// # Responsibilities
/// - Coordinates all core components: dispatcher, evaluator, builtins,
///   interpolation, runner, executor.
/// - Provides entry points for running whole programs and evaluating
///   single expressions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
pub mod util;

pub use crate::{
    error::{CompileError, RunnerError, RuntimeError},
    interpreter::{
        executor::{RunHandle, execute},
        runner::{NO_OUTPUT_MESSAGE, run},
        store::VariableStore,
        value::Value,
    },
};
