use crate::interpreter::value::core::Value;

/// How a statement finished.
///
/// Every construct that evaluates nested statements inspects this after each
/// one and stops early on [`ControlFlow::Return`], handing it outward until a
/// function call (or the top level) unwraps it.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlFlow {
    /// The statement completed and produced a value.
    Normal(Value),
    /// A `return` is unwinding with its payload.
    Return(Value),
}

impl ControlFlow {
    /// Returns the carried value, discarding the `return` marker.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Normal(value) | Self::Return(value) => value,
        }
    }

    /// Returns `true` if a `return` is unwinding.
    #[must_use]
    pub const fn is_return(&self) -> bool {
        matches!(self, Self::Return(_))
    }
}
