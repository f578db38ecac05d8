use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all faults that can occur during evaluation.
///
/// There is no guest-level way to catch these: the first one aborts the
/// program and is surfaced to the host.
pub enum RuntimeError {
    /// Read or assigned a name no enclosing scope defines.
    #[error("Undefined variable: {name}")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Declared a name that the same scope already binds.
    #[error("Variable already defined: {name}")]
    DuplicateDefinition {
        /// The name of the variable.
        name: String,
    },
    /// Assigned to a name declared with `const`.
    #[error("Cannot reassign constant: {name}")]
    ConstReassignment {
        /// The name of the constant.
        name: String,
    },
    /// An operator, builtin, index or call received values of the wrong type.
    #[error("{details}")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
    },
    /// A function received the wrong number of arguments.
    #[error("Expected {expected} arguments, got {found}")]
    ArityMismatch {
        /// The declared parameter count.
        expected: usize,
        /// The number of arguments actually supplied.
        found:    usize,
    },
    /// Attempted division by zero.
    #[error("Division by zero")]
    DivisionByZero,
}

impl RuntimeError {
    /// Shorthand for a [`RuntimeError::TypeError`] with the given message.
    pub fn type_error(details: impl Into<String>) -> Self {
        Self::TypeError { details: details.into() }
    }
}
