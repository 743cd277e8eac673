use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::evaluator::{
        core::{EvalResult, ExecutionContext},
        function::core::FunctionRegistry,
    },
};

/// Read-only named constants, checked before user variables.
pub const CONSTANTS: &[(&str, f64)] = &[("pi", std::f64::consts::PI), ("e", std::f64::consts::E)];

/// Stores the standard evaluation context.
///
/// Holds the builtin constants and functions together with the user variables
/// assigned so far. All names are case-insensitive: they are lowercased before
/// every lookup or assignment.
///
/// ## Usage
///
/// A `StandardLibrary` is created once and reused across evaluations, so that
/// an assignment made by one expression is visible to the next.
///
/// ```
/// use calculon::{evaluate, interpreter::evaluator::library::StandardLibrary};
///
/// let mut context = StandardLibrary::new();
///
/// assert_eq!(evaluate("Radius = 2", &mut context).unwrap(), 2.0);
/// let area = evaluate("PI * radius ** 2", &mut context).unwrap();
/// assert!((area - 12.566_370_614_359_172).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct StandardLibrary {
    constants: HashMap<&'static str, f64>,
    functions: FunctionRegistry,
    /// User variables, keyed by lowercase name.
    variables: HashMap<String, f64>,
}

impl StandardLibrary {
    /// Creates a context with all builtin constants and functions and no user
    /// variables.
    #[must_use]
    pub fn new() -> Self {
        Self { constants: CONSTANTS.iter().copied().collect(),
               functions: FunctionRegistry::standard(),
               variables: HashMap::new(), }
    }

    /// Returns `true` if `name` refers to a read-only constant.
    #[must_use]
    pub fn is_constant(&self, name: &str) -> bool {
        self.constants.contains_key(name.to_lowercase().as_str())
    }

    /// Returns `true` if a builtin function is registered under `name`.
    #[must_use]
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains(&name.to_lowercase())
    }

    /// The current value of a user variable, if it has been assigned.
    /// Constants are not reported here.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(&name.to_lowercase()).copied()
    }

    /// All user variables, sorted by name.
    pub fn variables(&self) -> impl Iterator<Item = (&str, f64)> {
        let mut entries = self.variables
                              .iter()
                              .map(|(name, value)| (name.as_str(), *value))
                              .collect::<Vec<_>>();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    /// Forgets every user variable. Constants and functions are unaffected.
    pub fn clear_variables(&mut self) {
        self.variables.clear();
    }
}

impl Default for StandardLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutionContext for StandardLibrary {
    /// Resolves a constant first, then a user variable.
    ///
    /// # Errors
    /// `UnknownVariable` if the name is neither.
    fn get_variable(&self, name: &str) -> EvalResult<f64> {
        let name = name.to_lowercase();

        if let Some(value) = self.constants.get(name.as_str()) {
            return Ok(*value);
        }

        self.variables
            .get(&name)
            .copied()
            .ok_or(RuntimeError::UnknownVariable { name })
    }

    /// Inserts or updates a user variable and returns the stored value.
    ///
    /// # Errors
    /// `ConstantReassignment` if the name belongs to a constant.
    fn set_variable(&mut self, name: &str, value: f64) -> EvalResult<f64> {
        let name = name.to_lowercase();

        if self.constants.contains_key(name.as_str()) {
            return Err(RuntimeError::ConstantReassignment { name });
        }

        tracing::debug!(name = %name, value, "variable assigned");
        self.variables.insert(name, value);
        Ok(value)
    }

    /// Dispatches to the builtin registered under the lowercased name.
    ///
    /// # Errors
    /// `UnknownFunction`, `ArgumentCountMismatch`, or the builtin's own error.
    fn call_function(&mut self, name: &str, args: &[f64]) -> EvalResult<f64> {
        self.functions.call(&name.to_lowercase(), args)
    }
}
