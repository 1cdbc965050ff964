use std::fs;

use swiftlet::{NO_OUTPUT_MESSAGE, RunnerError, run};
use walkdir::WalkDir;

#[test]
fn docs_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("docs").into_iter()
                            .filter_map(Result::ok)
                            .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_script_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run(&code) {
                panic!("Script example {} in {:?} failed:\n{}\nError: {}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No script examples found in docs");
}

fn extract_script_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```swiftlet") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn run_ok(src: &str) -> String {
    run(src).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

fn run_err(src: &str) -> RunnerError {
    match run(src) {
        Ok(output) => panic!("Script succeeded but was expected to fail: {output}"),
        Err(e) => e,
    }
}

#[test]
fn literal_expressions() {
    assert_eq!(run_ok("print(42)"), "42\n");
    assert_eq!(run_ok("print(-7)"), "-7\n");
    assert_eq!(run_ok("print(3.5)"), "3.5\n");
    assert_eq!(run_ok("print(true)"), "true\n");
    assert_eq!(run_ok("print(false)"), "false\n");
    assert_eq!(run_ok(r#"print("plain text")"#), "plain text\n");
}

#[test]
fn declarations_and_assignment() {
    assert_eq!(run_ok("let x = 5\nprint(x)"), "5\n");
    assert_eq!(run_ok("var y = 1\nprint(y)"), "1\n");
    assert_eq!(run_ok("let x = 5\nx = 7\nprint(x)"), "7\n");
    assert_eq!(run_ok("let x = 5\nlet x = 6\nprint(x)"), "6\n");
    assert_eq!(run_ok("let a = 2\nlet b = a\nprint(b)"), "2\n");
}

#[test]
fn string_interpolation() {
    assert_eq!(run_ok("let name = \"World\"\nprint(\"Hello, \\(name)!\")"),
               "Hello, World!\n");
    assert_eq!(run_ok("let a = 1\nlet b = 2\nprint(\"\\(a) and \\(b)\")"),
               "1 and 2\n");
    assert_eq!(run_ok("let pi = 3.14\nprint(\"Pi: \\(pi)\")"), "Pi: 3.14\n");
    assert_eq!(run_ok("let ok = true\nprint(\"ok: \\(ok)\")"), "ok: true\n");
}

#[test]
fn unresolved_interpolation_marker_is_left_untouched() {
    assert_eq!(run_ok(r#"print("\(missing)")"#), "\\(missing)\n");
}

#[test]
fn arithmetic_precedence_and_grouping() {
    assert_eq!(run_ok("print(2 + 3 * 4)"), "14\n");
    assert_eq!(run_ok("print((2 + 3) * 4)"), "20\n");
    assert_eq!(run_ok("print(10 - 4 - 3)"), "3\n");
    assert_eq!(run_ok("let x = 4\nprint(x * x - 6)"), "10\n");
}

#[test]
fn integer_division_truncates() {
    assert_eq!(run_ok("print(10 / 4)"), "2\n");
    assert_eq!(run_ok("print(-7 / 2)"), "-3\n");
}

#[test]
fn float_arithmetic_truncates_to_integer() {
    assert_eq!(run_ok("print(7.5 + 1)"), "8\n");
    assert_eq!(run_ok("let half = 0.5\nprint(half * 5)"), "2\n");
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(run_err("print(1 / 0)"), RunnerError::Runtime { .. }));
}

#[test]
fn arithmetic_with_unknown_variable_is_error() {
    let error = run_err("print(nope + 1)");
    assert!(matches!(error, RunnerError::Runtime { .. }));
}

#[test]
fn factorial_builtin() {
    assert_eq!(run_ok("factorial(5)"), "120\n");
    assert_eq!(run_ok("factorial(1)"), "1\n");
    assert_eq!(run_ok("factorial(0)"), "1\n");
    assert_eq!(run_ok("let n = 4\nfactorial(n)"), "24\n");
}

#[test]
fn factorial_requires_integer() {
    assert!(matches!(run_err(r#"factorial("x")"#), RunnerError::Runtime { .. }));
    assert!(matches!(run_err("factorial(2.5)"), RunnerError::Runtime { .. }));
}

#[test]
fn factorial_overflow_is_error() {
    assert_eq!(run_ok("factorial(20)"), "2432902008176640000\n");
    assert!(matches!(run_err("factorial(21)"), RunnerError::Runtime { .. }));
}

#[test]
fn greet_builtin() {
    assert_eq!(run_ok(r#"greet("World")"#), "Hello, World!\n");
    assert_eq!(run_ok(r#"greet(name: "Ada")"#), "Hello, Ada!\n");
    assert_eq!(run_ok("let who = \"Bob\"\ngreet(who)"), "Hello, Bob!\n");
}

#[test]
fn greet_requires_string() {
    assert!(matches!(run_err("greet(5)"), RunnerError::Runtime { .. }));
}

#[test]
fn add_builtin() {
    assert_eq!(run_ok("add(5, 3)"), "8\n");
    assert_eq!(run_ok("let a = 40\nlet b = 2\nadd(a, b)"), "42\n");
}

#[test]
fn add_wrong_arity_is_compilation_error() {
    assert!(matches!(run_err("add(5)"), RunnerError::Compilation { .. }));
    assert!(matches!(run_err("add(1, 2, 3)"), RunnerError::Compilation { .. }));
}

#[test]
fn add_requires_integers() {
    assert!(matches!(run_err(r#"add("a", 1)"#), RunnerError::Runtime { .. }));
}

#[test]
fn unknown_call_is_silently_ignored() {
    assert_eq!(run_ok("mystery(1)"), NO_OUTPUT_MESSAGE);
    assert_eq!(run_ok("mystery(1)\nprint(2)"), "2\n");
}

#[test]
fn comments_and_imports_are_skipped() {
    assert_eq!(run_ok("// just a comment\nimport Foundation\n\n"), NO_OUTPUT_MESSAGE);
    assert_eq!(run_ok("import Foundation\n// setup\nprint(1)"), "1\n");
}

#[test]
fn empty_print_produces_no_output() {
    assert_eq!(run_ok(r#"print("")"#), NO_OUTPUT_MESSAGE);
}

#[test]
fn unrecognized_lines_are_no_ops() {
    assert_eq!(run_ok("let x = 1\nsomething unrecognized\nprint(x)"), "1\n");
}

#[test]
fn failing_line_aborts_run_with_context() {
    let error = run_err("let a = 1\nprint(unknownVar)\nprint(a)");

    assert!(matches!(error, RunnerError::Runtime { .. }));
    assert!(error.to_string().contains("print(unknownVar)"));
    assert!(error.to_string().contains("Unknown expression"));
}

#[test]
fn malformed_declarations_are_compilation_errors() {
    assert!(matches!(run_err("let x"), RunnerError::Compilation { .. }));
    assert!(matches!(run_err("let x = 1 = 2"), RunnerError::Compilation { .. }));
    assert!(matches!(run_err("x = let y"), RunnerError::Compilation { .. }));
    // A second `=` anywhere on the line breaks the two-sided split, even
    // inside a string literal.
    assert!(matches!(run_err(r#"let s = "a=b""#), RunnerError::Compilation { .. }));
}

#[test]
fn runs_are_idempotent() {
    let src = "let x = 2\nprint(x * 3)\nfactorial(x)";
    assert_eq!(run_ok(src), run_ok(src));
}

#[test]
fn example_script_works() {
    let script = fs::read_to_string("tests/example.sw").expect("missing file");
    assert_eq!(run_ok(&script),
               "Hello from swiftlet!\n42\nupdated\n720\n42\nHello, friend!\n");
}
