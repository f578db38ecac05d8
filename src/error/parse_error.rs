use thiserror::Error;

use crate::interpreter::lexer::{Position, Token};

/// A slice of input that matches no token rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A quote opened a string literal that never closes.
    #[error("Lexer error at {position}: unterminated string literal")]
    UnterminatedString {
        /// Where the opening quote is.
        position: Position,
    },
    /// The scanner could not match the text starting at `position`.
    #[error("Lexer error at {position}: unexpected character '{slice}'")]
    UnexpectedCharacter {
        /// The unmatched source text.
        slice:    String,
        /// Where the unmatched text starts.
        position: Position,
    },
}

impl LexError {
    /// Returns the source position of the error.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnterminatedString { position } | Self::UnexpectedCharacter { position, .. } => {
                *position
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token the current grammar rule does not accept.
    #[error("Parse error at {position}: expected {expected}, found {found}")]
    UnexpectedToken {
        /// Description of what the rule accepts at this point.
        expected: String,
        /// The token encountered.
        found:    Token,
        /// Where the token starts.
        position: Position,
    },
    /// Reached the end of input while a rule was still open.
    #[error("Parse error at {position}: expected {expected}, found end of input")]
    UnexpectedEndOfInput {
        /// Description of what the rule accepts at this point.
        expected: String,
        /// The end-of-input position.
        position: Position,
    },
}

impl ParseError {
    /// Builds the error for `found` at `position`, choosing the end-of-input
    /// variant when the parser ran out of tokens.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: &Token, position: Position) -> Self {
        let expected = expected.into();
        match found {
            Token::Eof => Self::UnexpectedEndOfInput { expected, position },
            _ => Self::UnexpectedToken { expected,
                                         found: found.clone(),
                                         position },
        }
    }

    /// Returns the source position of the error.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. } | Self::UnexpectedEndOfInput { position, .. } => {
                *position
            },
        }
    }
}
