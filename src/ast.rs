use std::rc::Rc;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constant values that can appear directly in
/// source code: numbers, strings, booleans and `null`. Array and object
/// literals are expressions in their own right because their elements are
/// evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A double-precision number literal such as `42` or `3.14`.
    Number(f64),
    /// A string literal with its quotes stripped and escapes left as written.
    Str(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// The `null` literal.
    Null,
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// The root of a parsed source text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A braced sequence of statements.
///
/// Blocks only appear as the body of `if`, `while`, `for` and functions; a
/// `{` at statement position starts an object literal instead.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// Statements inside the braces.
    pub statements: Vec<Statement>,
}

/// The shared shape of function declarations and function expressions.
///
/// Held behind an `Rc` so that every closure created from the same
/// definition points at one body instead of copying it.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
    /// The body evaluated when the function is called.
    pub body:   Block,
}

/// A conditional statement with an optional `else` branch.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    /// The condition, tested for truthiness.
    pub condition:   Expr,
    /// Block evaluated when the condition is truthy.
    pub consequence: Block,
    /// Optional `else` block or chained `else if`.
    pub alternative: Option<ElseBranch>,
}

/// The branch taken when an `if` condition is falsy.
#[derive(Debug, Clone, PartialEq)]
pub enum ElseBranch {
    /// `else { ... }`
    Block(Block),
    /// `else if (...) { ... }`
    If(Box<IfStatement>),
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A mutable variable declaration using `let`.
    Let {
        /// The name of the variable.
        name:  String,
        /// The initial value of the variable.
        value: Expr,
    },
    /// A constant declaration using `const`.
    Const {
        /// The name of the constant.
        name:  String,
        /// The value of the constant.
        value: Expr,
    },
    /// A standalone expression evaluated for its result.
    Expression(Expr),
    /// A nested block opening its own scope.
    Block(Block),
    /// `if (condition) { ... } else ...`
    If(IfStatement),
    /// `while (condition) { ... }`
    While {
        /// Loop condition, re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Block,
    },
    /// `for (init; condition; update) { ... }`
    For {
        /// Optional `let` or expression statement run once before the loop.
        init:      Option<Box<Self>>,
        /// Optional condition; a missing condition loops until `return`.
        condition: Option<Expr>,
        /// Optional expression evaluated after every iteration.
        update:    Option<Expr>,
        /// The loop body.
        body:      Block,
    },
    /// A named function declaration `fn name(params) { ... }`.
    Function {
        /// The name the function is bound to.
        name: String,
        /// Parameters and body.
        def:  Rc<FunctionDef>,
    },
    /// `return` with an optional value.
    Return(Option<Expr>),
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expression nodes carry no source positions; diagnostics refer to token
/// positions and are produced while parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A constant literal.
    Literal(LiteralValue),
    /// Reference to a variable by name.
    Identifier(String),
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A prefix operation.
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A call such as `add(1, 2)` or `makeAdder(5)(3)`.
    Call {
        /// The expression producing the callee.
        callee:    Box<Self>,
        /// Arguments, evaluated left to right.
        arguments: Vec<Self>,
    },
    /// Property access with a bare name, `object.property`.
    Member {
        /// The object being accessed.
        object:   Box<Self>,
        /// The property name.
        property: String,
    },
    /// Indexing, `object[index]`.
    Index {
        /// The array, string or object to index into.
        object: Box<Self>,
        /// The index expression.
        index:  Box<Self>,
    },
    /// Assignment to an existing binding. Targets are bare names only.
    Assignment {
        /// The variable being assigned.
        name:  String,
        /// The new value.
        value: Box<Self>,
    },
    /// Array literal expression.
    ArrayLiteral {
        /// Elements of the array.
        elements: Vec<Self>,
    },
    /// Object literal expression with bare identifier keys.
    ObjectLiteral {
        /// Key and value pairs in source order.
        properties: Vec<(String, Self)>,
    },
    /// An anonymous function `fn(params) { ... }`.
    Function(Rc<FunctionDef>),
}

impl Expr {
    /// Builds a number literal expression.
    ///
    /// ## Example
    /// ```
    /// use mylang::ast::{Expr, LiteralValue};
    ///
    /// assert_eq!(Expr::number(2.0), Expr::Literal(LiteralValue::Number(2.0)));
    /// ```
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Literal(LiteralValue::Number(value))
    }

    /// Returns the variable name if this expression is a bare identifier.
    ///
    /// The parser uses this to decide whether an `=` may follow.
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Self::Identifier(name) => Some(name),
            _ => None,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and the logical
/// connectives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}
