/// Operator dispatch and arithmetic.
pub mod core;

/// Logical AND and OR.
pub mod logic;

/// Equality and relational comparisons.
pub mod comparison;

/// Bitwise operators, shifts and integer division.
pub mod bitwise;

/// Converts a predicate result to the evaluator's boolean encoding.
const fn truth(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}
