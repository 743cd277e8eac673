use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Sums any number of values. The empty sum is `0`.
///
/// # Example
/// ```
/// use calculon::interpreter::evaluator::function::statistics::sum;
///
/// assert_eq!(sum(&[1.0, 2.0, 3.5]).unwrap(), 6.5);
/// assert_eq!(sum(&[]).unwrap(), 0.0);
/// ```
pub fn sum(args: &[f64]) -> EvalResult<f64> {
    Ok(args.iter().sum())
}

/// Arithmetic mean of one or more values.
///
/// # Errors
/// `InvalidArgument` if called without arguments.
///
/// # Example
/// ```
/// use calculon::interpreter::evaluator::function::statistics::average;
///
/// assert_eq!(average(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
/// assert!(average(&[]).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn average(args: &[f64]) -> EvalResult<f64> {
    require_values("average", args)?;
    Ok(args.iter().sum::<f64>() / args.len() as f64)
}

/// Population variance: the mean of the squared deviations from the mean.
///
/// # Errors
/// `InvalidArgument` if called without arguments.
///
/// # Example
/// ```
/// use calculon::interpreter::evaluator::function::statistics::variance;
///
/// assert_eq!(variance(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap(), 4.0);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn variance(args: &[f64]) -> EvalResult<f64> {
    let mean = average(args)?;
    let squared = args.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>();
    Ok(squared / args.len() as f64)
}

/// Population standard deviation: the square root of [`variance`].
///
/// # Errors
/// `InvalidArgument` if called without arguments.
///
/// # Example
/// ```
/// use calculon::interpreter::evaluator::function::statistics::standard_deviation;
///
/// assert_eq!(standard_deviation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap(), 2.0);
/// ```
pub fn standard_deviation(args: &[f64]) -> EvalResult<f64> {
    Ok(variance(args)?.sqrt())
}

fn require_values(function: &str, args: &[f64]) -> EvalResult<()> {
    if args.is_empty() {
        return Err(RuntimeError::InvalidArgument { details: format!("{function} needs at least one value") });
    }
    Ok(())
}
