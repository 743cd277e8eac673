use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Clamps a numeric value between a minimum and maximum bound.
///
/// Called as `clamp(value, min, max)`.
///
/// # Errors
/// `InvalidArgument` if `min > max`.
///
/// # Example
/// ```
/// use calculon::interpreter::evaluator::function::clamp::clamp;
///
/// // 5 clamped between 0 and 3 yields 3
/// assert_eq!(clamp(&[5.0, 0.0, 3.0]).unwrap(), 3.0);
/// assert_eq!(clamp(&[-1.0, 0.0, 3.0]).unwrap(), 0.0);
/// assert!(clamp(&[1.0, 3.0, 0.0]).is_err());
/// ```
pub fn clamp(args: &[f64]) -> EvalResult<f64> {
    let (value, min, max) = (args[0], args[1], args[2]);

    if min > max {
        return Err(RuntimeError::InvalidArgument { details: format!("clamp: min ({min}) > max ({max})") });
    }

    let clamped = if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    };

    Ok(clamped)
}
