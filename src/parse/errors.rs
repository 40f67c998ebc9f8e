//! Error types for expression parsing
//!
//! These never reach the UI: the evaluator logs them and reports `NoResult`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Nothing to evaluate
    #[error("Empty expression")]
    Empty,

    /// Ends with an operator, a dot or an opening bracket
    #[error("Expression is incomplete")]
    Incomplete,

    #[error("Unexpected character '{ch}' at {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    #[error("Unknown identifier '{0}'")]
    UnknownIdentifier(String),

    #[error("Unknown command '\\{0}'")]
    UnknownCommand(String),

    #[error("Unexpected {found} at {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("Unexpected end of expression")]
    UnexpectedEnd,
}

pub type ParseResult<T> = Result<T, ParseError>;
