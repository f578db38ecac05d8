use std::{fmt, rc::Rc};

use indexmap::IndexMap;

use crate::{
    ast::{FunctionDef, LiteralValue},
    interpreter::{evaluator::function::core::BuiltinDef, value::environment::Env},
};

/// Represents a runtime value in the interpreter.
///
/// Arrays and objects are immutable once built and shared behind an `Rc`;
/// operations like `push` return a new collection instead of mutating one.
#[derive(Debug, Clone)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value.
    Str(Rc<str>),
    /// A boolean value (`true` or `false`).
    Boolean(bool),
    /// The absence of a value.
    Null,
    /// An ordered sequence of values.
    Array(Rc<Vec<Self>>),
    /// A mapping from property name to value, kept in insertion order.
    Object(Rc<IndexMap<String, Self>>),
    /// A user function together with the scope it was defined in.
    Function(Rc<Closure>),
    /// A native function provided by the interpreter.
    Builtin(&'static BuiltinDef),
}

/// A function value: parameters and body plus the captured defining scope.
pub struct Closure {
    /// The shared function definition from the AST.
    pub def: Rc<FunctionDef>,
    /// The scope active where the function was defined.
    pub env: Env,
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
         .field("params", &self.def.params)
         .finish_non_exhaustive()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<IndexMap<String, Self>> for Value {
    fn from(v: IndexMap<String, Self>) -> Self {
        Self::Object(Rc::new(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Str(s) => Self::from(s.as_str()),
            LiteralValue::Bool(b) => Self::Boolean(*b),
            LiteralValue::Null => Self::Null,
        }
    }
}

impl Value {
    /// Maps the value to a boolean for conditions and logical operators.
    ///
    /// `false`, `null`, `0`, the empty string and the empty array are falsy;
    /// everything else, including every object and function, is truthy.
    ///
    /// # Example
    /// ```
    /// use mylang::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Number(0.0).is_truthy());
    /// assert!(Value::from("a").is_truthy());
    /// assert!(!Value::from(Vec::new()).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Boolean(b) => *b,
            Self::Null => false,
            Self::Number(n) => *n != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Array(elements) => !elements.is_empty(),
            Self::Object(_) | Self::Function(_) | Self::Builtin(_) => true,
        }
    }

    /// Returns the tag name reported by the `type()` builtin and used in
    /// error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Null => "null",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
            Self::Builtin(_) => "builtin",
        }
    }

    /// Returns `true` when both values carry the same runtime tag.
    #[must_use]
    pub fn same_type(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}
