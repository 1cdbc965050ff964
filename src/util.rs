/// General utilities for safe numeric conversion.
///
/// Provides checked conversions between `i64` and `f64` used by the
/// arithmetic sub-evaluator, so promotion and final truncation can never
/// silently lose or invent magnitude.
pub mod num;
