use crate::{ast::BinaryOperator, interpreter::evaluator::binary::truth};

impl BinaryOperator {
    /// Evaluates a logical operation.
    ///
    /// An operand counts as true when it is strictly greater than zero, so
    /// negative values are false here even though `!` treats them as nonzero.
    /// Both operands have already been evaluated; there is no short circuit.
    ///
    /// # Example
    /// ```
    /// use calculon::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::And.apply_logic(1.0, 0.0), 0.0);
    /// assert_eq!(BinaryOperator::Or.apply_logic(0.0, 2.5), 1.0);
    /// assert_eq!(BinaryOperator::Or.apply_logic(-1.0, 0.0), 0.0);
    /// ```
    #[must_use]
    pub fn apply_logic(self, left: f64, right: f64) -> f64 {
        match self {
            Self::And => truth(left > 0.0 && right > 0.0),
            Self::Or => truth(left > 0.0 || right > 0.0),
            _ => unreachable!("{self} is not a logical operator"),
        }
    }
}
