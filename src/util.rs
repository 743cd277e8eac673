/// Numeric parsing and conversion helpers.
///
/// This module provides the locale-independent decimal parser used for
/// numeric literals, the truncating `f64` to `i32` conversion that backs every
/// bitwise operator, and checked conversions used by the integer-valued
/// builtins such as `choose`.
pub mod num;
