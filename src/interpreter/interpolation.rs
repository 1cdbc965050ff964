use std::ops::Range;

use crate::interpreter::store::VariableStore;

/// Substitutes interpolation markers inside a string literal's interior.
///
/// A marker has the form `\(name)`: a backslash, an opening parenthesis, one
/// or more non-`)` characters, and a closing parenthesis. Each captured name
/// is looked up as a bare variable, exactly as written (no trimming), and
/// the whole marker is replaced with the value's display form. Markers whose
/// name has no binding are left untouched, literal backslash and all; this
/// tolerance is deliberate, so a typo inside a string never fails the run.
///
/// Markers are replaced right-to-left, so a replacement never shifts the
/// offsets of markers that are still pending.
///
/// # Example
/// ```
/// use swiftlet::{Value, VariableStore, interpreter::interpolation::interpolate};
///
/// let mut store = VariableStore::new();
/// store.set("name", Value::String("World".to_string()));
///
/// assert_eq!(interpolate("Hello, \\(name)!", &store), "Hello, World!");
/// assert_eq!(interpolate("\\(missing)", &store), "\\(missing)");
/// ```
#[must_use]
pub fn interpolate(text: &str, store: &VariableStore) -> String {
    let mut result = text.to_string();

    for (marker, name) in find_markers(text).into_iter().rev() {
        if let Some(value) = store.get(&text[name]) {
            result.replace_range(marker, &value.to_string());
        }
    }

    result
}

/// Locates every interpolation marker in `text`, left to right.
///
/// Returns the byte range of each whole marker paired with the byte range of
/// the name inside it. Ranges index into the original `text`; callers that
/// replace right-to-left can use them without adjustment.
fn find_markers(text: &str) -> Vec<(Range<usize>, Range<usize>)> {
    let bytes = text.as_bytes();
    let mut markers = Vec::new();
    let mut i = 0;

    while i + 1 < bytes.len() {
        if bytes[i] == b'\\' && bytes[i + 1] == b'(' {
            let name_start = i + 2;

            match text[name_start..].find(')') {
                // An empty `\()` is not a marker.
                Some(0) => {},
                Some(offset) => {
                    let name_end = name_start + offset;
                    markers.push((i..name_end + 1, name_start..name_end));
                    i = name_end + 1;
                    continue;
                },
                // No closing parenthesis anywhere ahead, so no marker can
                // start after this point either.
                None => break,
            }
        }
        i += 1;
    }

    markers
}
