use crate::interpreter::evaluator::core::EvalResult;

/// Computes the minimum or maximum of two numeric values.
///
/// The operation is selected by the `name` parameter, which must be `"min"` or
/// `"max"`. If exactly one argument is NaN the other one is returned.
///
/// # Example
/// ```
/// use calculon::interpreter::evaluator::function::min_max::min_max;
///
/// assert_eq!(min_max("min", &[3.0, 7.0]).unwrap(), 3.0);
/// assert_eq!(min_max("max", &[2.5, 1.0]).unwrap(), 2.5);
/// ```
pub fn min_max(name: &str, args: &[f64]) -> EvalResult<f64> {
    let (left, right) = (args[0], args[1]);

    let value = if name == "min" {
        left.min(right)
    } else {
        left.max(right)
    };

    Ok(value)
}
