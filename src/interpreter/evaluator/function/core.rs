use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::evaluator::{
        core::EvalResult,
        function::{
            builtin, choose, clamp, log, min_max, root, round, sequence, statistics,
        },
    },
};

/// Signature shared by every native function.
///
/// A native receives the evaluated arguments. The registry has already
/// checked the argument count against the function's [`Arity`].
pub type NativeFn = fn(&[f64]) -> EvalResult<f64>;

/// Specifies the accepted number of arguments for a native function.
///
/// - `Exact(n)` means the function must receive exactly `n` arguments.
/// - `Variadic` means the function accepts any number of arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Variadic,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity.
    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exact(n) => n == count,
            Self::Variadic => true,
        }
    }
}

/// A callable entry of the registry.
#[derive(Debug, Clone, Copy)]
pub struct FunctionDescriptor {
    /// Accepted argument count.
    pub arity:  Arity,
    /// The native implementation.
    pub invoke: NativeFn,
}

/// Defines builtin functions by generating a static table and a name list.
///
/// Each entry provides:
/// - a lowercase name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// A name may appear several times with different arities (`log`, `round`).
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table the registry is built from),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names, with repeats).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[(&str, FunctionDescriptor)] = &[
            $(
                ($name, FunctionDescriptor { arity: $arity, invoke: $func }),
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"       => { arity: Arity::Exact(1), func: builtin::abs },
    "acos"      => { arity: Arity::Exact(1), func: builtin::acos },
    "acosh"     => { arity: Arity::Exact(1), func: builtin::acosh },
    "asin"      => { arity: Arity::Exact(1), func: builtin::asin },
    "asinh"     => { arity: Arity::Exact(1), func: builtin::asinh },
    "atan"      => { arity: Arity::Exact(1), func: builtin::atan },
    "atanh"     => { arity: Arity::Exact(1), func: builtin::atanh },
    "cos"       => { arity: Arity::Exact(1), func: builtin::cos },
    "cosh"      => { arity: Arity::Exact(1), func: builtin::cosh },
    "sin"       => { arity: Arity::Exact(1), func: builtin::sin },
    "sinh"      => { arity: Arity::Exact(1), func: builtin::sinh },
    "tan"       => { arity: Arity::Exact(1), func: builtin::tan },
    "tanh"      => { arity: Arity::Exact(1), func: builtin::tanh },
    "exp"       => { arity: Arity::Exact(1), func: builtin::exp },
    "log"       => { arity: Arity::Exact(1), func: builtin::ln },
    "log2"      => { arity: Arity::Exact(1), func: builtin::log2 },
    "log10"     => { arity: Arity::Exact(1), func: builtin::log10 },
    "ceiling"   => { arity: Arity::Exact(1), func: builtin::ceil },
    "floor"     => { arity: Arity::Exact(1), func: builtin::floor },
    "sqrt"      => { arity: Arity::Exact(1), func: builtin::sqrt },
    "increment" => { arity: Arity::Exact(1), func: builtin::increment },
    "decrement" => { arity: Arity::Exact(1), func: builtin::decrement },
    "round"     => { arity: Arity::Exact(1), func: round::round },
    "round"     => { arity: Arity::Exact(2), func: round::round_digits },
    "atan2"     => { arity: Arity::Exact(2), func: builtin::atan2 },
    "pow"       => { arity: Arity::Exact(2), func: builtin::pow },
    "log"       => { arity: Arity::Exact(2), func: log::log },
    "min"       => { arity: Arity::Exact(2), func: |args| min_max::min_max("min", args) },
    "max"       => { arity: Arity::Exact(2), func: |args| min_max::min_max("max", args) },
    "root"      => { arity: Arity::Exact(2), func: root::root },
    "clamp"     => { arity: Arity::Exact(3), func: clamp::clamp },
    "fib"       => { arity: Arity::Exact(1), func: sequence::fib },
    "fac"       => { arity: Arity::Exact(1), func: sequence::fac },
    "choose"    => { arity: Arity::Exact(2), func: choose::choose },
    "sum"       => { arity: Arity::Variadic, func: statistics::sum },
    "avg"       => { arity: Arity::Variadic, func: statistics::average },
    "average"   => { arity: Arity::Variadic, func: statistics::average },
    "var"       => { arity: Arity::Variadic, func: statistics::variance },
    "variance"  => { arity: Arity::Variadic, func: statistics::variance },
    "sd"        => { arity: Arity::Variadic, func: statistics::standard_deviation },
    "stddev"    => { arity: Arity::Variadic, func: statistics::standard_deviation },
}

/// Maps function names to their callable entries.
///
/// Built once per context from the builtin table. Lookup is by exact name;
/// callers normalize case beforehand.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    entries: HashMap<&'static str, Vec<FunctionDescriptor>>,
}

impl FunctionRegistry {
    /// Builds a registry holding every builtin function.
    #[must_use]
    pub fn standard() -> Self {
        let mut entries: HashMap<&'static str, Vec<FunctionDescriptor>> = HashMap::new();
        for (name, descriptor) in BUILTIN_TABLE {
            entries.entry(*name).or_default().push(*descriptor);
        }
        Self { entries }
    }

    /// Returns `true` if any entry exists for `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Finds the entry to call for `name` with `count` arguments.
    ///
    /// A variadic entry wins over fixed-arity entries of the same name;
    /// otherwise the entry whose exact arity equals `count` is chosen.
    ///
    /// # Errors
    /// - `UnknownFunction` if nothing is registered under `name`.
    /// - `ArgumentCountMismatch` if entries exist but none accepts `count`.
    pub fn resolve(&self, name: &str, count: usize) -> EvalResult<&FunctionDescriptor> {
        let candidates =
            self.entries
                .get(name)
                .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string() })?;

        candidates.iter()
                  .find(|d| d.arity == Arity::Variadic)
                  .or_else(|| candidates.iter().find(|d| d.arity.accepts(count)))
                  .ok_or_else(|| RuntimeError::ArgumentCountMismatch { name:  name.to_string(),
                                                                       found: count, })
    }

    /// Resolves `name` and invokes it with `args`.
    ///
    /// # Example
    /// ```
    /// use calculon::interpreter::evaluator::function::core::FunctionRegistry;
    ///
    /// let registry = FunctionRegistry::standard();
    ///
    /// assert_eq!(registry.call("max", &[2.0, 9.0]).unwrap(), 9.0);
    /// assert_eq!(registry.call("sum", &[1.0, 2.0, 3.0, 4.0]).unwrap(), 10.0);
    /// assert!(registry.call("max", &[1.0]).is_err());
    /// assert!(registry.call("nope", &[]).is_err());
    /// ```
    ///
    /// # Errors
    /// Resolution errors from [`FunctionRegistry::resolve`] and whatever the
    /// native function returns.
    pub fn call(&self, name: &str, args: &[f64]) -> EvalResult<f64> {
        let descriptor = self.resolve(name, args.len())?;
        (descriptor.invoke)(args)
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
