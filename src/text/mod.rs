//! Token-aware text editing
//!
//! Pure text storage with no knowledge of arithmetic. The evaluator and the
//! live preview read the text produced here; neither writes back.
//!
//! ## Modules
//!
//! - `buffer`: Text storage, insertion, deletion and cursor movement
//! - `cursor`: Direction and character ranges
//! - `token`: Atomic command token detection

pub mod buffer;
pub mod cursor;
pub mod token;

// Re-exports for convenience
pub use buffer::{BufferSnapshot, TextCore, TokenBuffer};
pub use cursor::{Direction, TextRange};
pub use token::LOOKBACK_WINDOW;
