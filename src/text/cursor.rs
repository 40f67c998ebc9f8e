//! Cursor direction and character ranges
//!
//! Positions are character offsets into a single-line expression.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Horizontal cursor movement
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum Direction {
    Left = 0,
    Right = 1,
}

/// A range of characters from start (inclusive) to end (exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a range covering a single character
    pub fn single_char(pos: usize) -> Self {
        Self { start: pos, end: pos + 1 }
    }

    /// Check if a position lies strictly inside this range (not on either boundary)
    pub fn splits(&self, pos: usize) -> bool {
        pos > self.start && pos < self.end
    }
}
