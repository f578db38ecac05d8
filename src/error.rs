/// Lexing and parsing diagnostics.
///
/// Defines the errors produced before evaluation: characters the lexer could
/// not scan and token sequences the grammar does not accept. Both carry the
/// source position of the offending input and are returned as data, never
/// raised.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all faults that can be raised during evaluation. The first fault
/// aborts the running program and is handed to the host as a single error.
pub mod runtime_error;

pub use parse_error::{LexError, ParseError};
pub use runtime_error::RuntimeError;

/// Errors returned by the one-shot [`crate::run`] entry point.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The source did not lex or parse; holds the rendered diagnostics.
    #[error("{}", .0.join("\n"))]
    Syntax(Vec<String>),
    /// Evaluation faulted.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
