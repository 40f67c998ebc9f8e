//! Parsing module
//!
//! Converts expression text (keypad symbols and LaTeX commands alike) into
//! an [`Expr`](crate::models::Expr) tree.

pub mod errors;
pub mod grammar;
pub mod tokens;

// Re-export commonly used types
pub use errors::{ParseError, ParseResult};
pub use grammar::parse;
pub use tokens::{tokenize, Token, TokenKind};
