//! Renderers for the math tutor
//!
//! Converts buffer text into preview LaTeX and segments tutor answers
//! into displayable blocks.

pub mod latex_preview;
pub mod markdown;

// Re-export commonly used types
pub use latex_preview::render_preview;
pub use markdown::{segment_response, Block, Inline};
