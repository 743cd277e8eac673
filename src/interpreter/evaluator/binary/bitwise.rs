use crate::{
    ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::EvalResult,
    util::num::truncate_to_i32,
};

impl BinaryOperator {
    /// Evaluates an operator that works on 32-bit integers.
    ///
    /// Both operands are truncated toward zero to `i32` (saturating, NaN is
    /// `0`), the operation is carried out on integers and the result is
    /// widened back to `f64`. Shift counts are masked to their low five bits.
    ///
    /// # Errors
    /// `DivisionByZero` for `//` with a right operand that truncates to zero.
    ///
    /// # Example
    /// ```
    /// use calculon::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::BitAnd.apply_bitwise(5.0, 3.0).unwrap(), 1.0);
    /// assert_eq!(BinaryOperator::BitXor.apply_bitwise(5.0, 3.0).unwrap(), 6.0);
    /// assert_eq!(BinaryOperator::ShiftLeft.apply_bitwise(1.0, 4.0).unwrap(), 16.0);
    /// assert_eq!(BinaryOperator::IntDiv.apply_bitwise(-7.0, 2.0).unwrap(), -3.0);
    /// ```
    #[allow(clippy::cast_sign_loss)]
    pub fn apply_bitwise(self, left: f64, right: f64) -> EvalResult<f64> {
        let a = truncate_to_i32(left);
        let b = truncate_to_i32(right);

        let result = match self {
            Self::BitOr => a | b,
            Self::BitXor => a ^ b,
            Self::BitAnd => a & b,
            Self::ShiftLeft => a.wrapping_shl(b as u32),
            Self::ShiftRight => a.wrapping_shr(b as u32),
            Self::IntDiv => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                a.wrapping_div(b)
            },
            _ => unreachable!("{self} is not a bitwise operator"),
        };

        Ok(f64::from(result))
    }
}
