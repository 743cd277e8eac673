use std::collections::HashMap;

use calculon::{
    Error, ExecutionContext, StandardLibrary,
    error::RuntimeError,
    evaluate,
    interpreter::evaluator::{
        core::EvalResult,
        function::core::{Arity, BUILTIN_FUNCTIONS, FunctionRegistry},
    },
    parse,
};

/// Context that records every call it receives, in order.
#[derive(Default)]
struct Recorder {
    variables: HashMap<String, f64>,
    log:       Vec<String>,
}

impl ExecutionContext for Recorder {
    fn get_variable(&self, name: &str) -> EvalResult<f64> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }

    fn set_variable(&mut self, name: &str, value: f64) -> EvalResult<f64> {
        self.log.push(format!("set {name}={value}"));
        self.variables.insert(name.to_string(), value);
        Ok(value)
    }

    fn call_function(&mut self, name: &str, args: &[f64]) -> EvalResult<f64> {
        self.log.push(format!("call {name}{args:?}"));
        Ok(args.len() as f64)
    }
}

#[test]
fn custom_context_sees_operations_in_evaluation_order() {
    let mut context = Recorder::default();

    let value = evaluate("(a = f(1, 2)) + g() * (b = 4)", &mut context).unwrap();

    assert_eq!(value, 2.0);
    assert_eq!(context.log,
               vec!["call f[1.0, 2.0]", "set a=2", "call g[]", "set b=4"]);
}

#[test]
fn custom_context_owns_name_resolution() {
    let mut context = Recorder::default();
    context.variables.insert("X".to_string(), 3.0);

    assert_eq!(evaluate("X * 2", &mut context).unwrap(), 6.0);
    assert!(evaluate("x * 2", &mut context).is_err());
    assert_eq!(evaluate("anything(1, 2, 3, 4)", &mut context).unwrap(), 4.0);
}

/// Context whose functions are backed by a service that is offline.
struct Offline;

impl ExecutionContext for Offline {
    fn get_variable(&self, _name: &str) -> EvalResult<f64> {
        Ok(1.0)
    }

    fn set_variable(&mut self, _name: &str, value: f64) -> EvalResult<f64> {
        Ok(value)
    }

    fn call_function(&mut self, name: &str, _args: &[f64]) -> EvalResult<f64> {
        Err(RuntimeError::Other { message: format!("{name} is unavailable offline") })
    }
}

#[test]
fn custom_context_errors_reach_the_caller_unchanged() {
    let error = evaluate("x + quote(x)", &mut Offline).unwrap_err();

    assert_eq!(error,
               Error::Runtime(RuntimeError::Other { message: "quote is unavailable offline".to_string() }));
    assert_eq!(error.to_string(), "quote is unavailable offline");
    assert_eq!(evaluate("y = x + 1", &mut Offline).unwrap(), 2.0);
}

#[test]
fn parsed_expression_can_be_evaluated_against_several_contexts() {
    let expr = parse("x = x + 1").unwrap();
    let mut first = StandardLibrary::new();
    let mut second = StandardLibrary::new();

    evaluate("x = 10", &mut first).unwrap();
    evaluate("x = 20", &mut second).unwrap();

    assert_eq!(expr.eval(&mut first).unwrap(), 11.0);
    assert_eq!(expr.eval(&mut first).unwrap(), 12.0);
    assert_eq!(expr.eval(&mut second).unwrap(), 21.0);
}

#[test]
fn standard_library_names_are_case_insensitive() {
    let mut library = StandardLibrary::new();

    evaluate("Total = 3", &mut library).unwrap();

    assert_eq!(library.variable("TOTAL"), Some(3.0));
    assert_eq!(evaluate("total + ToTaL", &mut library).unwrap(), 6.0);
    assert_eq!(evaluate("FIB(7) + Max(1, 2)", &mut library).unwrap(), 15.0);
    assert!(library.is_constant("Pi"));
    assert!(!library.is_constant("total"));
    assert_eq!(evaluate("Ärea = 4", &mut library).unwrap(), 4.0);
    assert_eq!(evaluate("ärea * 2", &mut library).unwrap(), 8.0);
    assert!(library.has_function("CHOOSE"));
    assert!(!library.has_function("total"));
}

#[test]
fn standard_library_lists_and_clears_variables() {
    let mut library = StandardLibrary::new();

    evaluate("b = 2", &mut library).unwrap();
    evaluate("A = 1", &mut library).unwrap();

    assert_eq!(library.variables().collect::<Vec<_>>(), vec![("a", 1.0), ("b", 2.0)]);

    library.clear_variables();
    assert_eq!(library.variables().count(), 0);
    assert!(evaluate("a", &mut library).is_err());
    assert!(evaluate("pi", &mut library).is_ok());
}

#[test]
fn constants_shadow_nothing_and_cannot_be_set() {
    let mut library = StandardLibrary::default();

    assert_eq!(library.set_variable("PI", 3.0),
               Err(RuntimeError::ConstantReassignment { name: "pi".to_string() }));
    assert_eq!(library.get_variable("pi"), Ok(std::f64::consts::PI));
    assert_eq!(library.variable("pi"), None);
}

#[test]
fn registry_knows_every_builtin() {
    let registry = FunctionRegistry::standard();

    for name in BUILTIN_FUNCTIONS {
        assert!(registry.contains(name), "missing builtin `{name}`");
    }
    for name in ["abs", "acos", "acosh", "asin", "asinh", "atan", "atan2", "atanh", "decrement",
                 "increment", "ceiling", "clamp", "cos", "cosh", "exp", "floor", "log2", "log",
                 "log10", "max", "min", "pow", "round", "sin", "sinh", "sqrt", "tan", "tanh",
                 "root", "avg", "sum", "var", "sd", "fib", "fac", "choose"]
    {
        assert!(registry.contains(name), "missing builtin `{name}`");
    }
    assert!(!registry.contains("LOG"));
}

#[test]
fn registry_resolves_overloads_by_argument_count() {
    let registry = FunctionRegistry::standard();

    assert_eq!(registry.resolve("round", 1).unwrap().arity, Arity::Exact(1));
    assert_eq!(registry.resolve("round", 2).unwrap().arity, Arity::Exact(2));
    assert_eq!(registry.resolve("sum", 0).unwrap().arity, Arity::Variadic);
    assert_eq!(registry.resolve("sum", 7).unwrap().arity, Arity::Variadic);

    assert!((registry.call("log", &[100.0, 10.0]).unwrap() - 2.0).abs() < 1e-12);
    assert_eq!(registry.call("round", &[2.675, 1.0]).ok(), Some(2.7));
    assert!(matches!(registry.resolve("round", 3),
                     Err(RuntimeError::ArgumentCountMismatch { found: 3, .. })));
    assert!(matches!(registry.resolve("nope", 1),
                     Err(RuntimeError::UnknownFunction { .. })));
}

#[test]
fn arity_accepts_matching_counts() {
    assert!(Arity::Exact(2).accepts(2));
    assert!(!Arity::Exact(2).accepts(1));
    assert!(Arity::Variadic.accepts(0));
    assert!(Arity::Variadic.accepts(99));
}

#[test]
fn sequences_and_combinatorics() {
    let mut library = StandardLibrary::new();
    let mut eval = |src: &str| evaluate(src, &mut library);

    assert_eq!(eval("fib(0)").unwrap(), 0.0);
    assert_eq!(eval("fib(1)").unwrap(), 1.0);
    assert_eq!(eval("fib(2)").unwrap(), 1.0);
    assert_eq!(eval("fib(50)").unwrap(), 12_586_269_025.0);
    assert_eq!(eval("fac(0)").unwrap(), 1.0);
    assert_eq!(eval("fac(20)").unwrap(), 2_432_902_008_176_640_000.0);
    assert_eq!(eval("choose(5, 0)").unwrap(), 1.0);
    assert_eq!(eval("choose(5, 5)").unwrap(), 1.0);
    assert_eq!(eval("choose(52, 5)").unwrap(), 2_598_960.0);
}

#[test]
fn rounding_uses_ties_to_even() {
    let mut library = StandardLibrary::new();
    let mut eval = |src: &str| evaluate(src, &mut library).unwrap();

    assert_eq!(eval("round(0.5)"), 0.0);
    assert_eq!(eval("round(1.5)"), 2.0);
    assert_eq!(eval("round(-2.5)"), -2.0);
    assert_eq!(eval("round(2.6)"), 3.0);
    assert_eq!(eval("round(12.5, 0)"), 12.0);
    assert_eq!(eval("round(1.25, 1)"), 1.2);
}
