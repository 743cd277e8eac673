use crate::error::RuntimeError;

/// Rewrites a numeral into the canonical form produced by the tokenizer.
///
/// A mantissa that ends with a decimal point gets a `0` appended, both at the
/// end of the literal and in front of an exponent marker. Everything else is
/// copied unchanged.
///
/// ## Example
/// ```
/// use calculon::util::num::normalize_numeral;
///
/// assert_eq!(normalize_numeral("3."), "3.0");
/// assert_eq!(normalize_numeral("."), ".0");
/// assert_eq!(normalize_numeral("1.e5"), "1.0e5");
/// assert_eq!(normalize_numeral("2.5E-3"), "2.5E-3");
/// ```
#[must_use]
pub fn normalize_numeral(text: &str) -> String {
    let (mantissa, exponent) = text.find(['e', 'E'])
                                   .map_or((text, ""), |at| text.split_at(at));

    let mut normalized = String::with_capacity(text.len() + 1);
    normalized.push_str(mantissa);
    if mantissa.ends_with('.') {
        normalized.push('0');
    }
    normalized.push_str(exponent);
    normalized
}

/// Parses a numeral in the tokenizer's grammar into an `f64`.
///
/// The grammar is `digits [ "." digits ] [ ("e" | "E") [ "+" | "-" ] digits ]`
/// where either side of the decimal point may be empty. The dot is always the
/// decimal separator regardless of the host locale. Anything outside that
/// grammar (including `inf` and `nan`, which Rust's own parser would accept)
/// is rejected.
///
/// ## Returns
/// - `Some(f64)`: The value, rounded exactly as `str::parse::<f64>` rounds.
/// - `None`: If the text is not a numeral.
///
/// ## Example
/// ```
/// use calculon::util::num::parse_numeral;
///
/// assert_eq!(parse_numeral("1.5e-3"), Some(0.0015));
/// assert_eq!(parse_numeral(".5"), Some(0.5));
/// assert_eq!(parse_numeral("3."), Some(3.0));
/// assert_eq!(parse_numeral("nan"), None);
/// assert_eq!(parse_numeral("1e"), None);
/// ```
#[must_use]
pub fn parse_numeral(text: &str) -> Option<f64> {
    if !is_numeral(text) {
        return None;
    }
    normalize_numeral(text).parse().ok()
}

/// Checks `text` against the numeral grammar without allocating.
fn is_numeral(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    if i == 0 {
        return false;
    }
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let digits_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == digits_start {
            return false;
        }
    }
    i == bytes.len()
}

/// Length in bytes of an exponent suffix at the start of `rest`.
///
/// An exponent is a marker (`e` or `E`), an optional sign and at least one
/// digit. When the digits are missing the marker does not belong to the
/// numeral and `0` is returned.
///
/// ## Example
/// ```
/// use calculon::util::num::exponent_len;
///
/// assert_eq!(exponent_len("e-10 + 1"), 4);
/// assert_eq!(exponent_len("E3"), 2);
/// assert_eq!(exponent_len("e"), 0);
/// assert_eq!(exponent_len("e+"), 0);
/// assert_eq!(exponent_len("x"), 0);
/// ```
#[must_use]
pub fn exponent_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return 0;
    }

    let mut i = 1;
    if matches!(bytes.get(i), Some(b'+' | b'-')) {
        i += 1;
    }
    let digits = bytes[i..].iter().take_while(|b| b.is_ascii_digit()).count();

    if digits == 0 { 0 } else { i + digits }
}

/// Truncates an `f64` toward zero into an `i32`.
///
/// Out-of-range values saturate at `i32::MIN` / `i32::MAX` and NaN becomes
/// `0`. Every bitwise operator goes through this conversion.
///
/// ## Example
/// ```
/// use calculon::util::num::truncate_to_i32;
///
/// assert_eq!(truncate_to_i32(5.9), 5);
/// assert_eq!(truncate_to_i32(-5.9), -5);
/// assert_eq!(truncate_to_i32(1e12), i32::MAX);
/// assert_eq!(truncate_to_i32(f64::NAN), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub const fn truncate_to_i32(value: f64) -> i32 {
    value as i32
}

/// Safely converts an `f64` to `u64` if the value is finite, non-negative,
/// and not fractional.
///
/// ## Errors
/// Returns `RuntimeError::InvalidArgument` naming `function` for negative,
/// fractional or non-finite values, and `RuntimeError::Overflow` for values
/// beyond `u64::MAX`.
///
/// ## Example
/// ```
/// use calculon::{error::RuntimeError, util::num::f64_to_u64_checked};
///
/// assert_eq!(f64_to_u64_checked(7.0, "choose").unwrap(), 7);
///
/// let err = f64_to_u64_checked(-1.0, "choose").unwrap_err();
/// assert!(matches!(err, RuntimeError::InvalidArgument { .. }));
///
/// let err = f64_to_u64_checked(2.5, "choose").unwrap_err();
/// assert!(matches!(err, RuntimeError::InvalidArgument { .. }));
///
/// let err = f64_to_u64_checked(1e20, "choose").unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_u64_checked(value: f64, function: &str) -> Result<u64, RuntimeError> {
    if !value.is_finite() || value < 0.0 {
        return Err(RuntimeError::InvalidArgument { details: format!("{function}(n) can't have negative or non-finite values for n, found {value}") });
    }
    if value.fract() != 0.0 {
        return Err(RuntimeError::InvalidArgument { details: format!("{function}(n) requires a whole number, found {value}") });
    }
    if value >= u64::MAX as f64 {
        return Err(RuntimeError::Overflow { function: function.to_string() });
    }
    Ok(value as u64)
}

/// Widens a `u64` result to `f64`.
///
/// Values above `2^53` are rounded to the nearest representable `f64`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn u64_to_f64(value: u64) -> f64 {
    value as f64
}
