use crate::interpreter::evaluator::core::EvalResult;

/// Computes the n-th root: `value ^ (1 / n)`.
///
/// Called as `root(value, n)`. Negative values have no real root and yield
/// NaN; a zeroth root yields `value ^ inf`.
///
/// # Example
/// ```
/// use calculon::interpreter::evaluator::function::root::root;
///
/// // 4th root of 16 -> 2
/// assert_eq!(root(&[16.0, 4.0]).unwrap(), 2.0);
/// ```
pub fn root(args: &[f64]) -> EvalResult<f64> {
    Ok(args[0].powf(1.0 / args[1]))
}
