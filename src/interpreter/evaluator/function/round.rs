use crate::{
    error::RuntimeError, interpreter::evaluator::core::EvalResult, util::num::truncate_to_i32,
};

/// Largest number of fractional digits accepted by `round(value, digits)`.
pub const MAX_ROUND_DIGITS: i32 = 15;

/// Rounds to the nearest integer, with ties going to the even neighbour.
///
/// # Example
/// ```
/// use calculon::interpreter::evaluator::function::round::round;
///
/// assert_eq!(round(&[2.5]).unwrap(), 2.0);
/// assert_eq!(round(&[3.5]).unwrap(), 4.0);
/// assert_eq!(round(&[-1.7]).unwrap(), -2.0);
/// ```
pub fn round(args: &[f64]) -> EvalResult<f64> {
    Ok(args[0].round_ties_even())
}

/// Rounds to a number of fractional digits, ties to even.
///
/// The digit count is truncated toward zero and must lie in
/// `0..=MAX_ROUND_DIGITS`.
///
/// # Errors
/// `InvalidArgument` for a digit count outside that range.
///
/// # Example
/// ```
/// use calculon::interpreter::evaluator::function::round::round_digits;
///
/// assert_eq!(round_digits(&[3.14159, 2.0]).unwrap(), 3.14);
/// assert_eq!(round_digits(&[2.675, 0.0]).unwrap(), 3.0);
/// assert!(round_digits(&[1.0, 16.0]).is_err());
/// ```
pub fn round_digits(args: &[f64]) -> EvalResult<f64> {
    let value = args[0];
    let digits = truncate_to_i32(args[1]);

    if !(0..=MAX_ROUND_DIGITS).contains(&digits) {
        return Err(RuntimeError::InvalidArgument { details: format!("round: digits must be between 0 and {MAX_ROUND_DIGITS}, found {}", args[1]) });
    }

    let scale = 10f64.powi(digits);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return Ok(value);
    }

    Ok(scaled.round_ties_even() / scale)
}
