//! Utility modules
//!
//! Formatting helpers shared across the calculator views.

pub mod format;

// Re-export commonly used functions
pub use format::*;
