/// The builtin function table and the registry built from it.
pub mod core;

/// One- and two-argument wrappers around `f64` methods.
pub mod builtin;

/// Binomial coefficient.
pub mod choose;

/// Clamping a value between two bounds.
pub mod clamp;

/// Logarithm with an explicit base.
pub mod log;

/// Minimum and maximum of two values.
pub mod min_max;

/// Rounding half to even, optionally to a number of decimal digits.
pub mod round;

/// N-th roots.
pub mod root;

/// Fibonacci numbers and factorials.
pub mod sequence;

/// Variadic statistics: sum, average, variance, standard deviation.
pub mod statistics;
