/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, applies operators to `f64` operands and
/// resolves variables and function calls through an execution context. It
/// also provides the standard library context with its builtin constants
/// and functions.
///
/// # Responsibilities
/// - Declares the `ExecutionContext` capability and evaluates AST nodes.
/// - Implements the arithmetic, comparison, logical and bitwise operators.
/// - Provides the builtin function registry and `StandardLibrary`.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence of
/// tokens, each corresponding to a number, identifier, boolean literal,
/// operator or punctuation mark. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input into tokens with kind, text and source offset.
/// - Resolves one- versus two-character operators and the numeric literal
///   grammar.
/// - Reports lexical errors for invalid input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser walks the token sequence with a cursor and constructs an AST
/// honoring the operator precedence hierarchy, from assignment at the bottom
/// to literals and function calls at the top.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates grammar and reports syntax errors with source offsets.
/// - Supports arithmetic, logic, bitwise operators, function calls and
///   assignment.
pub mod parser;
