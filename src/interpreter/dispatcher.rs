use crate::{
    error::{CompileError, StatementError},
    interpreter::{
        builtins::{self, call_argument},
        evaluator::evaluate,
        store::VariableStore,
    },
};

/// Result type used by statement handlers.
///
/// A handler either produces the statement's output (possibly empty) or a
/// [`StatementError`] covering both failure families.
pub type DispatchResult<T> = Result<T, StatementError>;

/// Executes one trimmed source line against the store.
///
/// Classification is a fixed ladder of substring checks; the first match
/// wins, and later handlers assume earlier ones already excluded their
/// patterns:
///
/// 1. Contains `print(`: a print statement.
/// 2. Contains `let ` or `var `: a variable declaration.
/// 3. Contains a bare `=` that is not part of `==`, `!=`, `<=` or `>=`: an
///    assignment.
/// 4. Contains both `(` and `)`: a built-in function call.
/// 5. Anything else is a no-op and contributes nothing.
///
/// # Returns
/// The statement's output: the printed value's display form, a built-in's
/// result, or the empty string for statements without output.
///
/// # Example
/// ```
/// use swiftlet::{Value, VariableStore, interpreter::dispatcher::execute_line};
///
/// let mut store = VariableStore::new();
///
/// assert_eq!(execute_line("let x = 5", &mut store).unwrap(), "");
/// assert_eq!(execute_line("print(x)", &mut store).unwrap(), "5");
/// assert_eq!(store.get("x"), Some(&Value::Integer(5)));
/// ```
pub fn execute_line(line: &str, store: &mut VariableStore) -> DispatchResult<String> {
    if line.contains("print(") {
        return handle_print(line, store);
    }

    if line.contains("let ") || line.contains("var ") {
        handle_declaration(line, store)?;
        return Ok(String::new());
    }

    if line.contains('=')
       && !line.contains("==")
       && !line.contains("!=")
       && !line.contains("<=")
       && !line.contains(">=")
    {
        handle_assignment(line, store)?;
        return Ok(String::new());
    }

    if line.contains('(') && line.contains(')') {
        return builtins::dispatch_call(line, store);
    }

    Ok(String::new())
}

/// Evaluates the argument of a `print` statement and returns its display
/// form.
fn handle_print(line: &str, store: &VariableStore) -> DispatchResult<String> {
    let argument = call_argument(line, "print(").ok_or(CompileError::InvalidPrint)?;
    let value = evaluate(argument, store)?;

    Ok(value.to_string())
}

/// Handles a `let`/`var` declaration.
///
/// The line must split on `=` into exactly two sides, and the trimmed left
/// side must begin with the `let ` or `var ` marker; what remains after the
/// marker is the variable name. The right side is evaluated and stored,
/// overwriting any existing binding.
fn handle_declaration(line: &str, store: &mut VariableStore) -> DispatchResult<()> {
    let sides: Vec<&str> = line.split('=').collect();
    if sides.len() != 2 {
        return Err(CompileError::InvalidDeclaration.into());
    }

    let left = sides[0].trim();
    let name = left.strip_prefix("let ")
                   .or_else(|| left.strip_prefix("var "))
                   .ok_or(CompileError::InvalidDeclaration)?
                   .trim();

    let value = evaluate(sides[1].trim(), store)?;
    store.set(name, value);

    Ok(())
}

/// Handles a bare assignment.
///
/// The line must split on `=` into exactly two sides. The trimmed left side
/// is the variable name as written; the right side is evaluated and stored,
/// creating the binding if it did not exist.
fn handle_assignment(line: &str, store: &mut VariableStore) -> DispatchResult<()> {
    let sides: Vec<&str> = line.split('=').collect();
    if sides.len() != 2 {
        return Err(CompileError::InvalidAssignment.into());
    }

    let name = sides[0].trim();
    let value = evaluate(sides[1].trim(), store)?;
    store.set(name, value);

    Ok(())
}
