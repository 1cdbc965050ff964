use tracing::debug;

use crate::{
    error::RunnerError,
    interpreter::{dispatcher::execute_line, store::VariableStore},
};

/// Fixed result text for a run that produced no output.
pub const NO_OUTPUT_MESSAGE: &str = "Code executed successfully (no output)";

/// Runs a whole source program and returns its accumulated output.
///
/// The source is split into lines. Lines that are empty after trimming, or
/// that start with `//` or `import`, are skipped before dispatch. Every
/// remaining line is executed in order against one fresh variable store
/// owned by this call, so repeated runs of the same source are independent
/// and yield identical results.
///
/// Each statement's non-empty output is accumulated with a trailing
/// newline. A run that finishes without any output yields the fixed
/// [`NO_OUTPUT_MESSAGE`] text instead of an empty string.
///
/// # Errors
/// The first failing line aborts the run. The statement's error is wrapped
/// into the matching [`RunnerError`] kind together with the offending
/// line's trimmed text; no partial output is returned.
///
/// # Example
/// ```
/// use swiftlet::run;
///
/// let output = run("let name = \"World\"\nprint(\"Hello, \\(name)!\")").unwrap();
/// assert_eq!(output, "Hello, World!\n");
///
/// let output = run("// nothing but comments").unwrap();
/// assert_eq!(output, "Code executed successfully (no output)");
/// ```
pub fn run(source: &str) -> Result<String, RunnerError> {
    let mut store = VariableStore::new();
    let mut output = String::new();

    debug!(lines = source.lines().count(), "starting run");

    for line in source.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with("//") || trimmed.starts_with("import") {
            continue;
        }

        match execute_line(trimmed, &mut store) {
            Ok(result) => {
                if !result.is_empty() {
                    output.push_str(&result);
                    output.push('\n');
                }
            },
            Err(error) => {
                debug!(line = trimmed, "run aborted");
                return Err(RunnerError::from_statement(error, trimmed));
            },
        }
    }

    debug!(variables = store.len(), bytes = output.len(), "run finished");

    if output.is_empty() {
        return Ok(NO_OUTPUT_MESSAGE.to_string());
    }

    Ok(output)
}
