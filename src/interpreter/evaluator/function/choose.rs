use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{f64_to_u64_checked, u64_to_f64},
};

/// Calculates the binomial coefficient of two values, *n* and *k*.
///
/// Follows the recurrence `choose(n, k) = n / k * choose(n - 1, k - 1)` with
/// `choose(n, 0) = 1`, unrolled into a loop that starts at the base case.
/// `n` may be fractional; `k` must be a non-negative whole number so that the
/// recurrence reaches its base case. For whole `n` the smaller of `k` and
/// `n - k` is used, and the loop stops as soon as the result is infinite.
///
/// # Errors
/// `InvalidArgument` if `n < k` or `k` is negative or fractional.
///
/// # Example
/// ```
/// use calculon::interpreter::evaluator::function::choose::choose;
///
/// assert_eq!(choose(&[5.0, 2.0]).unwrap(), 10.0);
/// assert_eq!(choose(&[7.0, 0.0]).unwrap(), 1.0);
/// assert_eq!(choose(&[1e17, 1e17]).unwrap(), 1.0);
/// assert!(choose(&[2.0, 5.0]).is_err());
/// ```
pub fn choose(args: &[f64]) -> EvalResult<f64> {
    let (n, k) = (args[0], args[1]);

    if n < k {
        return Err(RuntimeError::InvalidArgument { details: format!("In 'n choose k', n must be greater than or equal to k, but found choose({n}, {k})") });
    }

    let k = if n.fract() == 0.0 && k.fract() == 0.0 { k.min(n - k) } else { k };
    let steps = match f64_to_u64_checked(k, "choose") {
        Ok(steps) => steps,
        Err(RuntimeError::Overflow { .. }) => return Ok(f64::INFINITY),
        Err(RuntimeError::InvalidArgument { .. }) => {
            return Err(RuntimeError::InvalidArgument { details: format!("In 'n choose k', k must be a non-negative whole number, but found {k}") });
        },
        Err(e) => return Err(e),
    };

    let mut result = 1.0;
    for i in 1..=steps {
        let i = u64_to_f64(i);
        result = (n - k + i) * result / i;
        if !result.is_finite() {
            break;
        }
    }

    Ok(result)
}
