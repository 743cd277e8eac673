#[derive(Debug, Clone, PartialEq, thiserror::Error)]
/// Represents all errors that can occur during evaluation.
///
/// Raised by [`ExecutionContext`](crate::interpreter::evaluator::core::ExecutionContext)
/// implementations and propagated unchanged through the expression tree.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    #[error("Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that does not exist.
    #[error("Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// Tried to assign to a built-in constant such as `pi`.
    #[error("Variable '{name}' is a constant and can't be changed.")]
    ConstantReassignment {
        /// The name of the constant.
        name: String,
    },
    /// A known function was called with an unsupported number of arguments.
    #[error("Function '{name}' does not accept {found} argument(s).")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:  String,
        /// The number of arguments supplied.
        found: usize,
    },
    /// An argument was outside the domain of a function.
    #[error("Invalid argument: {details}.")]
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
    /// Integer arithmetic overflowed inside a builtin.
    #[error("Integer overflow while trying to compute {function}.")]
    Overflow {
        /// The builtin that overflowed.
        function: String,
    },
    /// Attempted integer division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// Any other failure reported by a caller-supplied context.
    #[error("{message}")]
    Other {
        /// Details about the failure.
        message: String,
    },
}
