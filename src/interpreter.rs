/// Arithmetic sub-evaluation.
///
/// Folds a `+ - * /` expression over the lexer's tokens by recursive
/// descent, resolving identifiers against the store and applying checked
/// integer arithmetic with promotion to `f64` when a float participates.
///
/// # Responsibilities
/// - Tokenizes and evaluates arithmetic sub-expressions in one pass.
/// - Enforces precedence, left associativity, and parenthesised grouping.
/// - Reports division by zero, overflow, and unresolvable identifiers.
pub mod arithmetic;
/// The built-in function table.
///
/// Defines the fixed set of three recognized call names (`factorial`,
/// `greet`, `add`) together with their argument extraction and type
/// contracts. Unrecognized calls are silently ignored.
pub mod builtins;
/// Statement classification and execution.
///
/// Classifies each trimmed source line into one of five statement kinds
/// (print, declaration, assignment, function call, no-op) through a fixed
/// ladder of substring checks, and routes it to the matching handler. The
/// ladder's order is observable behavior and must not change.
pub mod dispatcher;
/// Expression evaluation.
///
/// Resolves a single expression string to a [`value::Value`] using a fixed
/// first-match-wins rule order: string literal, boolean literal, integer
/// literal, float literal, variable lookup, arithmetic.
pub mod evaluator;
/// The execution facade.
///
/// Offloads whole runs onto worker threads and hands back a single-delivery
/// handle, keeping interactive callers unblocked.
pub mod executor;
/// String interpolation.
///
/// Replaces `\(name)` markers inside string literals with the display form
/// of the named binding, right-to-left, leaving unknown names untouched.
pub mod interpolation;
/// The lexer for arithmetic sub-expressions.
///
/// Produces numeric literals, identifiers, operator and parenthesis tokens.
/// Statements themselves are classified from raw text and never pass
/// through here.
pub mod lexer;
/// The program runner.
///
/// Iterates source lines, skips blanks, comments and imports, owns the
/// variable store for the run, accumulates printed output, and wraps the
/// first failure with the offending line's text.
pub mod runner;
/// The per-run variable store.
pub mod store;
/// The runtime value model.
///
/// Declares the closed four-kind [`value::Value`] union and its display and
/// conversion helpers. Every consumption site matches exhaustively, so a
/// value of an unexpected kind is impossible by construction.
pub mod value;
