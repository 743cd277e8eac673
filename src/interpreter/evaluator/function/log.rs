use crate::interpreter::evaluator::core::EvalResult;

/// Computes the logarithm of a value with respect to a given base.
///
/// Accepts exactly two arguments: `value` and `base`, and computes
/// `ln(value) / ln(base)`. A base of `1` divides by zero and yields an
/// infinity or NaN.
///
/// # Example
/// ```
/// use calculon::interpreter::evaluator::function::log::log;
///
/// let result = log(&[8.0, 2.0]).unwrap();
/// assert!((result - 3.0).abs() < 1e-12);
/// ```
pub fn log(args: &[f64]) -> EvalResult<f64> {
    Ok(args[0].log(args[1]))
}
