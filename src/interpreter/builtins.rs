use crate::{
    error::{CompileError, RuntimeError},
    interpreter::{
        dispatcher::DispatchResult,
        evaluator::{EvalResult, evaluate},
        store::VariableStore,
    },
};

/// Largest argument whose factorial still fits in an `i64`; `21!` overflows.
/// Checking the bound up front also caps the recursion depth.
const MAX_FACTORIAL_ARGUMENT: i64 = 20;

/// Type alias for built-in function handlers.
///
/// A handler receives the full statement line and the store, extracts and
/// evaluates its own arguments, and returns the call's output text.
type BuiltinFn = fn(&str, &VariableStore) -> DispatchResult<String>;

/// One entry of the built-in function table.
struct BuiltinDef {
    /// The substring that identifies a call to this built-in.
    marker: &'static str,
    func:   BuiltinFn,
}

/// The fixed set of recognized built-ins, probed in order.
static BUILTIN_TABLE: &[BuiltinDef] =
    &[BuiltinDef { marker: "factorial(", func: factorial },
      BuiltinDef { marker: "greet(", func: greet },
      BuiltinDef { marker: "add(", func: add }];

/// Dispatches a parenthesised statement to the built-in function table.
///
/// A line that matches none of the three markers produces empty output and
/// is silently ignored. That tolerance is part of the language's observable
/// behavior, so no catch-all error is raised here.
///
/// # Example
/// ```
/// use swiftlet::{VariableStore, interpreter::builtins::dispatch_call};
///
/// let store = VariableStore::new();
///
/// assert_eq!(dispatch_call("factorial(5)", &store).unwrap(), "120");
/// assert_eq!(dispatch_call("mystery(5)", &store).unwrap(), "");
/// ```
pub fn dispatch_call(line: &str, store: &VariableStore) -> DispatchResult<String> {
    for builtin in BUILTIN_TABLE {
        if line.contains(builtin.marker) {
            return (builtin.func)(line, store);
        }
    }

    Ok(String::new())
}

/// Extracts the argument text of a call: everything between the first
/// occurrence of `marker` and the last `)` on the line.
///
/// Returns `None` when the marker is absent or no closing parenthesis
/// follows it.
#[must_use]
pub fn call_argument<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let start = line.find(marker)? + marker.len();
    let end = line.rfind(')')?;

    if end < start {
        return None;
    }

    Some(&line[start..end])
}

/// `factorial(n)`: requires an integer argument, outputs `n!` in decimal.
fn factorial(line: &str, store: &VariableStore) -> DispatchResult<String> {
    let argument =
        call_argument(line, "factorial(").ok_or_else(|| CompileError::InvalidCall { name:
                                                          "factorial".to_string() })?;
    let value = evaluate(argument, store)?;

    let Some(n) = value.as_integer() else {
        return Err(RuntimeError::TypeError { details:
                                                 "factorial requires an integer parameter"
                                                 .to_string() }.into());
    };

    Ok(checked_factorial(n)?.to_string())
}

/// Computes the factorial recursively with checked multiplication.
///
/// Arguments of 1 or less (including negatives) yield 1. The explicit bound
/// is the resource guard for pathological arguments: it rejects anything
/// that would overflow before any recursion happens.
fn checked_factorial(n: i64) -> EvalResult<i64> {
    if n > MAX_FACTORIAL_ARGUMENT {
        return Err(RuntimeError::Overflow);
    }
    if n <= 1 {
        return Ok(1);
    }

    n.checked_mul(checked_factorial(n - 1)?).ok_or(RuntimeError::Overflow)
}

/// `greet(name)` / `greet(name: name)`: requires a string argument, outputs
/// a greeting.
fn greet(line: &str, store: &VariableStore) -> DispatchResult<String> {
    let argument = call_argument(line, "greet(name:")
        .or_else(|| call_argument(line, "greet("))
        .ok_or_else(|| CompileError::InvalidCall { name: "greet".to_string() })?;
    let value = evaluate(argument.trim(), store)?;

    let Some(name) = value.as_str() else {
        return Err(RuntimeError::TypeError { details:
                                                 "greet requires a string parameter".to_string() }
                   .into());
    };

    Ok(format!("Hello, {name}!"))
}

/// `add(a, b)`: requires exactly two integer arguments, outputs their sum.
fn add(line: &str, store: &VariableStore) -> DispatchResult<String> {
    let arguments =
        call_argument(line, "add(").ok_or_else(|| CompileError::InvalidCall { name:
                                                      "add".to_string() })?;

    let pieces: Vec<&str> = arguments.split(',').map(str::trim).collect();
    if pieces.len() != 2 {
        return Err(CompileError::ArgumentCount { function: "add".to_string(),
                                                 expected: 2,
                                                 found:    pieces.len(), }.into());
    }

    let left = evaluate(pieces[0], store)?;
    let right = evaluate(pieces[1], store)?;

    let (Some(a), Some(b)) = (left.as_integer(), right.as_integer()) else {
        return Err(RuntimeError::TypeError { details:
                                                 "add requires integer parameters".to_string() }
                   .into());
    };

    let sum = a.checked_add(b).ok_or(RuntimeError::Overflow)?;
    Ok(sum.to_string())
}
