use crate::{
    error::RuntimeError,
    interpreter::{
        arithmetic::evaluate_arithmetic, interpolation::interpolate, store::VariableStore,
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a single expression string against the store.
///
/// The input is trimmed, then matched against the evaluation rules in a
/// fixed order; the first rule that applies wins:
///
/// 1. Surrounded by double quotes: the interior is interpolated and the
///    result is a `String`.
/// 2. Exactly `true` or `false`: a `Bool`.
/// 3. A valid `i64` literal: an `Integer`.
/// 4. A valid `f64` literal: a `Float`.
/// 5. The exact name of a binding in the store: the stored value.
/// 6. Contains any of `+ - * /`: arithmetic sub-evaluation.
/// 7. Anything else fails with an unknown-expression error.
///
/// The ordering is observable: `5` is an integer literal before it could be
/// mistaken for arithmetic, and a variable named like a literal can never
/// win over the literal itself.
///
/// # Errors
/// An unresolvable expression, or any failure from arithmetic
/// sub-evaluation.
///
/// # Example
/// ```
/// use swiftlet::{Value, VariableStore, interpreter::evaluator::evaluate};
///
/// let mut store = VariableStore::new();
/// store.set("x", Value::Integer(5));
///
/// assert_eq!(evaluate("42", &store).unwrap(), Value::Integer(42));
/// assert_eq!(evaluate("x", &store).unwrap(), Value::Integer(5));
/// assert_eq!(evaluate("x + 1", &store).unwrap(), Value::Integer(6));
/// assert!(evaluate("y", &store).is_err());
/// ```
pub fn evaluate(expression: &str, store: &VariableStore) -> EvalResult<Value> {
    let trimmed = expression.trim();

    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        let interior = &trimmed[1..trimmed.len() - 1];
        return Ok(Value::String(interpolate(interior, store)));
    }

    if trimmed == "true" {
        return Ok(Value::Bool(true));
    }
    if trimmed == "false" {
        return Ok(Value::Bool(false));
    }

    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(Value::Integer(n));
    }
    if let Ok(r) = trimmed.parse::<f64>() {
        return Ok(Value::Float(r));
    }

    if let Some(value) = store.get(trimmed) {
        return Ok(value.clone());
    }

    if trimmed.contains(['+', '-', '*', '/']) {
        return evaluate_arithmetic(trimmed, store);
    }

    Err(RuntimeError::UnknownExpression { text: trimmed.to_string() })
}
