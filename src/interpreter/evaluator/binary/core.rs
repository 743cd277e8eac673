use crate::{ast::BinaryOperator, interpreter::evaluator::core::EvalResult};

impl BinaryOperator {
    /// Applies the operator to two already evaluated operands.
    ///
    /// Arithmetic is plain `f64` arithmetic: division by zero yields an
    /// infinity or NaN, and `%` is the truncated remainder. Comparisons and
    /// logical operators go to `apply_comparison` and `apply_logic`; bitwise
    /// operators, shifts and `//` go to `apply_bitwise`.
    ///
    /// # Errors
    /// Only integer division (`//`) by zero fails, with `DivisionByZero`.
    ///
    /// # Example
    /// ```
    /// use calculon::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Add.apply(3.0, 4.0).unwrap(), 7.0);
    /// assert_eq!(BinaryOperator::Pow.apply(2.0, 10.0).unwrap(), 1024.0);
    /// assert_eq!(BinaryOperator::Less.apply(1.0, 2.0).unwrap(), 1.0);
    /// assert_eq!(BinaryOperator::IntDiv.apply(7.9, 2.0).unwrap(), 3.0);
    /// assert!(BinaryOperator::IntDiv.apply(1.0, 0.0).is_err());
    /// ```
    pub fn apply(self, left: f64, right: f64) -> EvalResult<f64> {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, IntDiv, Less,
            LessEqual, Mod, Mul, NotEqual, Or, Pow, ShiftLeft, ShiftRight, Sub,
        };

        match self {
            Add => Ok(left + right),
            Sub => Ok(left - right),
            Mul => Ok(left * right),
            Div => Ok(left / right),
            Mod => Ok(left % right),
            Pow => Ok(left.powf(right)),

            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => {
                Ok(self.apply_comparison(left, right))
            },

            And | Or => Ok(self.apply_logic(left, right)),

            BitOr | BitXor | BitAnd | ShiftLeft | ShiftRight | IntDiv => {
                self.apply_bitwise(left, right)
            },
        }
    }
}
