use crate::{ast::Expr, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The capability an expression tree is evaluated against.
///
/// An execution context resolves variable names and function calls. The
/// crate ships [`StandardLibrary`](super::library::StandardLibrary); callers
/// can implement this trait to supply their own variables and functions.
///
/// # Example
/// ```
/// use calculon::{
///     error::RuntimeError,
///     evaluate,
///     interpreter::evaluator::core::{EvalResult, ExecutionContext},
/// };
///
/// /// Every variable is 2 and every function sums its arguments.
/// struct Twos;
///
/// impl ExecutionContext for Twos {
///     fn get_variable(&self, _name: &str) -> EvalResult<f64> {
///         Ok(2.0)
///     }
///
///     fn set_variable(&mut self, name: &str, _value: f64) -> EvalResult<f64> {
///         Err(RuntimeError::ConstantReassignment { name: name.to_string() })
///     }
///
///     fn call_function(&mut self, _name: &str, args: &[f64]) -> EvalResult<f64> {
///         Ok(args.iter().sum())
///     }
/// }
///
/// assert_eq!(evaluate("anything(x, y, 3) * z", &mut Twos).unwrap(), 14.0);
/// assert!(evaluate("x = 1", &mut Twos).is_err());
/// ```
pub trait ExecutionContext {
    /// Returns the value of a variable or constant.
    fn get_variable(&self, name: &str) -> EvalResult<f64>;

    /// Stores a value and returns the value now held by the variable.
    fn set_variable(&mut self, name: &str, value: f64) -> EvalResult<f64>;

    /// Invokes a function with already evaluated arguments.
    fn call_function(&mut self, name: &str, args: &[f64]) -> EvalResult<f64>;
}

impl Expr {
    /// Evaluates the expression against `context` and returns its value.
    ///
    /// Operands are evaluated eagerly and from left to right, including both
    /// sides of `&&` and `||`. Nothing is rolled back on failure: an
    /// assignment that completed before the failing sub-expression stays in
    /// the context.
    ///
    /// # Errors
    /// Propagates whatever the context raises and `DivisionByZero` for an
    /// integer division by zero.
    ///
    /// # Example
    /// ```
    /// use calculon::{interpreter::evaluator::library::StandardLibrary, parse};
    ///
    /// let mut context = StandardLibrary::new();
    /// let expr = parse("y = 2 * 21").unwrap();
    ///
    /// assert_eq!(expr.eval(&mut context).unwrap(), 42.0);
    /// assert_eq!(context.variable("y"), Some(42.0));
    /// ```
    pub fn eval<C>(&self, context: &mut C) -> EvalResult<f64>
        where C: ExecutionContext + ?Sized
    {
        match self {
            Self::Literal { value, .. } => Ok(*value),
            Self::Variable { name, .. } => context.get_variable(name),
            Self::UnaryOp { op, expr, .. } => {
                let value = expr.eval(context)?;
                Ok(op.apply(value))
            },
            Self::BinaryOp { left, op, right, .. } => {
                let left = left.eval(context)?;
                let right = right.eval(context)?;
                op.apply(left, right)
            },
            Self::Assignment { name, value, .. } => {
                let value = value.eval(context)?;
                context.set_variable(name, value)
            },
            Self::FunctionCall { name, arguments, .. } => {
                let args = arguments.iter()
                                    .map(|arg| arg.eval(context))
                                    .collect::<EvalResult<Vec<_>>>()?;
                context.call_function(name, &args)
            },
        }
    }
}
