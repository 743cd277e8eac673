/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers the closed set of constructs a single-line expression can
/// contain: literals, variable references, unary and binary operations,
/// assignments and function calls. Every variant records the byte offset of
/// the token that introduced it. Children are boxed and owned exclusively by
/// their parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal. Boolean literals are stored as `1.0` / `0.0`.
    Literal {
        /// The constant value.
        value:  f64,
        /// Byte offset in the source code.
        offset: usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:   String,
        /// Byte offset in the source code.
        offset: usize,
    },
    /// A unary prefix operation (e.g. `-x`).
    UnaryOp {
        /// The unary operator to apply.
        op:     UnaryOperator,
        /// The operand expression.
        expr:   Box<Self>,
        /// Byte offset of the operator.
        offset: usize,
    },
    /// A binary operation (addition, comparison, shifting, etc.).
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Byte offset of the operator.
        offset: usize,
    },
    /// Assignment of a value to a variable (`x = 5`). Evaluates to the value.
    Assignment {
        /// The name of the variable.
        name:   String,
        /// The value which is being assigned.
        value:  Box<Self>,
        /// Byte offset of the variable name.
        offset: usize,
    },
    /// Function call expression (e.g. `sin(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
        /// Byte offset of the function name.
        offset:    usize,
    },
}

impl Expr {
    /// Gets the source offset from `self`.
    /// ## Example
    /// ```
    /// use calculon::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:   "x".to_string(),
    ///                             offset: 5, };
    ///
    /// assert_eq!(expr.offset(), 5);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Literal { offset, .. }
            | Self::Variable { offset, .. }
            | Self::UnaryOp { offset, .. }
            | Self::BinaryOp { offset, .. }
            | Self::Assignment { offset, .. }
            | Self::FunctionCall { offset, .. } => *offset,
        }
    }
}

/// Represents a binary operator.
///
/// The parser groups these into precedence levels; see
/// [`crate::interpreter::parser::binary`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Logical or (`||`)
    Or,
    /// Logical and (`&&`)
    And,
    /// Bitwise or (`|`)
    BitOr,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Bitwise and (`&`)
    BitAnd,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Shift left (`<<`)
    ShiftLeft,
    /// Shift right (`>>`)
    ShiftRight,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Integer division (`//`)
    IntDiv,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
}

/// Represents a unary prefix operator.
///
/// The no-op `+` prefix is dropped by the parser and has no variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
    /// Bitwise complement (e.g. `~x`).
    Complement,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, IntDiv, Less,
            LessEqual, Mod, Mul, NotEqual, Or, Pow, ShiftLeft, ShiftRight, Sub,
        };
        let operator = match self {
            Or => "||",
            And => "&&",
            BitOr => "|",
            BitXor => "^",
            BitAnd => "&",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            ShiftLeft => "<<",
            ShiftRight => ">>",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            IntDiv => "//",
            Mod => "%",
            Pow => "**",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
            Self::Complement => "~",
        };
        write!(f, "{operator}")
    }
}
