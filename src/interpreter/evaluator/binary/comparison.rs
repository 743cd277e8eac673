use crate::{ast::BinaryOperator, interpreter::evaluator::binary::truth};

impl BinaryOperator {
    /// Compares two values, producing `1.0` for true and `0.0` for false.
    ///
    /// Comparisons follow IEEE 754, so any comparison involving NaN is false
    /// except `!=`.
    ///
    /// # Example
    /// ```
    /// use calculon::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::GreaterEqual.apply_comparison(2.0, 2.0), 1.0);
    /// assert_eq!(BinaryOperator::NotEqual.apply_comparison(2.0, 2.0), 0.0);
    /// ```
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn apply_comparison(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Equal => truth(left == right),
            Self::NotEqual => truth(left != right),
            Self::Less => truth(left < right),
            Self::LessEqual => truth(left <= right),
            Self::Greater => truth(left > right),
            Self::GreaterEqual => truth(left >= right),
            _ => unreachable!("{self} is not a comparison operator"),
        }
    }
}
