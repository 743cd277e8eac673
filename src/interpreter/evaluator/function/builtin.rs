use crate::interpreter::evaluator::core::EvalResult;

/// Generates a one-argument builtin from an `f64` method.
///
/// The generated function applies the method to its single argument and
/// never fails; out-of-domain inputs produce NaN or an infinity, as the
/// underlying `f64` method does.
///
/// # Example
/// ```
/// use calculon::interpreter::evaluator::function::builtin::sin;
///
/// let r = sin(&[std::f64::consts::PI / 2.0]).unwrap();
/// assert_eq!(r, 1.0);
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(args: &[f64]) -> EvalResult<f64> {
            Ok(args[0].$real_fn())
        }
    };
}

real_builtin!(abs, abs);
real_builtin!(acos, acos);
real_builtin!(acosh, acosh);
real_builtin!(asin, asin);
real_builtin!(asinh, asinh);
real_builtin!(atan, atan);
real_builtin!(atanh, atanh);
real_builtin!(cos, cos);
real_builtin!(cosh, cosh);
real_builtin!(sin, sin);
real_builtin!(sinh, sinh);
real_builtin!(tan, tan);
real_builtin!(tanh, tanh);
real_builtin!(exp, exp);
real_builtin!(ln, ln);
real_builtin!(log2, log2);
real_builtin!(log10, log10);
real_builtin!(ceil, ceil);
real_builtin!(floor, floor);
real_builtin!(sqrt, sqrt);

/// Adds one to the argument.
pub fn increment(args: &[f64]) -> EvalResult<f64> {
    Ok(args[0] + 1.0)
}

/// Subtracts one from the argument.
pub fn decrement(args: &[f64]) -> EvalResult<f64> {
    Ok(args[0] - 1.0)
}

/// Four-quadrant arctangent of `y / x`, called as `atan2(y, x)`.
///
/// # Example
/// ```
/// use calculon::interpreter::evaluator::function::builtin::atan2;
///
/// let r = atan2(&[1.0, 1.0]).unwrap();
/// assert!((r - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
/// ```
pub fn atan2(args: &[f64]) -> EvalResult<f64> {
    Ok(args[0].atan2(args[1]))
}

/// Raises the first argument to the power of the second.
pub fn pow(args: &[f64]) -> EvalResult<f64> {
    Ok(args[0].powf(args[1]))
}
