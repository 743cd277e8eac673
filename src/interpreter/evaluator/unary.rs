use crate::{ast::UnaryOperator, util::num::truncate_to_i32};

impl UnaryOperator {
    /// Applies the operator to a value.
    ///
    /// - `Negate`: arithmetic negation.
    /// - `Not`: `1` if the value is exactly zero, otherwise `0`.
    /// - `Complement`: bitwise NOT of the value truncated to a 32-bit signed
    ///   integer.
    ///
    /// # Example
    /// ```
    /// use calculon::ast::UnaryOperator;
    ///
    /// assert_eq!(UnaryOperator::Negate.apply(5.0), -5.0);
    /// assert_eq!(UnaryOperator::Not.apply(0.0), 1.0);
    /// assert_eq!(UnaryOperator::Not.apply(-3.0), 0.0);
    /// assert_eq!(UnaryOperator::Complement.apply(5.7), -6.0);
    /// ```
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Negate => -value,
            Self::Not => {
                if value == 0.0 {
                    1.0
                } else {
                    0.0
                }
            },
            Self::Complement => f64::from(!truncate_to_i32(value)),
        }
    }
}
