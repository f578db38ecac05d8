/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Floors a guest number and converts it to a host index.
///
/// Returns `None` for negative, non-finite or oversized values, which the
/// evaluator treats as out of range.
///
/// ## Example
/// ```
/// use mylang::util::num::f64_to_index;
///
/// assert_eq!(f64_to_index(2.0), Some(2));
/// assert_eq!(f64_to_index(1.9), Some(1));
/// assert_eq!(f64_to_index(-0.5), None);
/// assert_eq!(f64_to_index(f64::NAN), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn f64_to_index(value: f64) -> Option<usize> {
    let floored = value.floor();
    if !floored.is_finite() || floored < 0.0 || floored > MAX_SAFE_INTEGER {
        return None;
    }
    usize::try_from(floored as u64).ok()
}

/// Converts a host length to a guest number.
///
/// Lengths above `2^53` cannot occur for in-memory strings and arrays, so the
/// conversion is exact in practice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64(value: usize) -> f64 {
    value as f64
}

/// Renders a number the way the language prints it.
///
/// Integral values print without a fractional part, negative zero prints as
/// `0`, and non-finite values print as `NaN`, `Infinity` or `-Infinity`.
/// Finite values never use exponent notation, so every rendering lexes back
/// to the same number.
///
/// ## Example
/// ```
/// use mylang::util::num::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(-5.0), "-5");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// assert_eq!(format_number(1e-7), "0.0000001");
/// assert_eq!(format_number(1e21), "1000000000000000000000");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
