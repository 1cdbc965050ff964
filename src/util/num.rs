/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: u64 = 9_007_199_254_740_991;

/// `2^63` as an `f64`; the first value past the top of the `i64` range.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds [`MAX_SAFE_INT`] in absolute
/// value.
///
/// ## Example
/// ```
/// use swiftlet::util::num::{MAX_SAFE_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42, "too big!").unwrap(), 42.0);
///
/// let big = MAX_SAFE_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Truncates an `f64` toward zero and converts it to `i64` if the result is
/// representable.
///
/// ## Returns
/// - `Some(i64)`: The truncated value if it is finite and in range.
/// - `None`: For NaN, infinities, or magnitudes outside the `i64` range.
///
/// ## Example
/// ```
/// use swiftlet::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(7.9), Some(7));
/// assert_eq!(f64_to_i64_truncated(-7.9), Some(-7));
/// assert_eq!(f64_to_i64_truncated(f64::INFINITY), None);
/// assert_eq!(f64_to_i64_truncated(1e300), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_truncated(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }

    let truncated = value.trunc();
    if truncated < -I64_LIMIT || truncated >= I64_LIMIT {
        return None;
    }

    Some(truncated as i64)
}
