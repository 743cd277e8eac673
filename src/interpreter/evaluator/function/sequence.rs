use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult, util::num::u64_to_f64};

/// Computes the n-th Fibonacci number iteratively, with `fib(0) = 0` and
/// `fib(1) = 1`.
///
/// A fractional `n` behaves like the next whole number, so
/// `fib(2.5) == fib(3)`. Large results become infinite.
///
/// # Errors
/// `InvalidArgument` for negative `n`.
///
/// # Example
/// ```
/// use calculon::interpreter::evaluator::function::sequence::fib;
///
/// assert_eq!(fib(&[10.0]).unwrap(), 55.0);
/// assert_eq!(fib(&[0.0]).unwrap(), 0.0);
/// assert_eq!(fib(&[2.5]).unwrap(), 2.0);
/// assert!(fib(&[-1.0]).is_err());
/// ```
#[allow(clippy::float_cmp)]
pub fn fib(args: &[f64]) -> EvalResult<f64> {
    let n = require_non_negative("fib", args[0])?;
    if n == 0.0 || n.is_nan() {
        return Ok(n);
    }

    let (mut previous, mut current): (f64, f64) = (0.0, 1.0);
    let mut step = 1u64;
    while u64_to_f64(step) < n && current.is_finite() {
        (previous, current) = (current, previous + current);
        step += 1;
    }

    Ok(current)
}

/// Computes `n!` iteratively, with `0! = 1`.
///
/// A fractional `n` multiplies every whole number up to it, so
/// `fac(2.5) == 2`. Large results become infinite.
///
/// # Errors
/// `InvalidArgument` for negative `n`.
///
/// # Example
/// ```
/// use calculon::interpreter::evaluator::function::sequence::fac;
///
/// assert_eq!(fac(&[5.0]).unwrap(), 120.0);
/// assert_eq!(fac(&[0.0]).unwrap(), 1.0);
/// assert_eq!(fac(&[2.5]).unwrap(), 2.0);
/// assert_eq!(fac(&[171.0]).unwrap(), f64::INFINITY);
/// ```
pub fn fac(args: &[f64]) -> EvalResult<f64> {
    let n = require_non_negative("fac", args[0])?;
    if n.is_nan() {
        return Ok(n);
    }

    let mut product: f64 = 1.0;
    let mut factor = 1u64;
    while u64_to_f64(factor) <= n && product.is_finite() {
        product *= u64_to_f64(factor);
        factor += 1;
    }

    Ok(product)
}

fn require_non_negative(function: &str, n: f64) -> EvalResult<f64> {
    if n < 0.0 {
        return Err(RuntimeError::InvalidArgument { details: format!("{function}(n) can't have negative values for n, found {n}") });
    }
    Ok(n)
}
