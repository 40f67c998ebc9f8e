//! Token-aware text buffer
//!
//! Holds an expression and a cursor. Insertion is unrestricted; deletion and
//! cursor movement step over atomic command tokens (see [`super::token`]).

use super::cursor::{Direction, TextRange};
use super::token::{token_len_at, token_len_before, units};
use serde::{Deserialize, Serialize};

/// Core editing interface shared by the calculator display and the math input
pub trait TextCore {
    /// Full text content
    fn text(&self) -> String;

    /// Cursor position as a character offset
    fn cursor(&self) -> usize;

    /// Splice `text` in at the cursor and move past it
    fn insert_at_cursor(&mut self, text: &str);

    /// Remove the unit before the cursor; returns the removed text
    fn delete_before_cursor(&mut self) -> Option<String>;

    /// Move the cursor by one unit; returns false at a boundary
    fn move_cursor(&mut self, direction: Direction) -> bool;

    /// Reset to empty
    fn clear(&mut self);
}

/// Character-vector backed buffer with an atomic-token cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBuffer {
    content: Vec<char>,
    cursor: usize,
}

/// Serializable view of a buffer for the JS side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferSnapshot {
    pub text: String,
    pub cursor: usize,
}

impl TokenBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with the cursor at the end of `text`
    pub fn from_text(text: &str) -> Self {
        let content: Vec<char> = text.chars().collect();
        let cursor = content.len();
        Self { content, cursor }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Last non-whitespace character
    pub fn last_significant_char(&self) -> Option<char> {
        self.content.iter().rev().copied().find(|c| !c.is_whitespace())
    }

    /// Replace the whole content and put the cursor at the end
    pub fn replace_all(&mut self, text: &str) {
        *self = Self::from_text(text);
    }

    /// Replace the trailing `count` characters with `text` (cursor goes to the end)
    pub fn replace_tail(&mut self, count: usize, text: &str) {
        let keep = self.content.len().saturating_sub(count);
        self.content.truncate(keep);
        self.content.extend(text.chars());
        self.cursor = self.content.len();
    }

    /// Place the cursor, clamped to the text and snapped out of any token it would split
    pub fn set_cursor(&mut self, pos: usize) {
        let pos = pos.min(self.content.len());
        self.cursor = units(&self.content)
            .into_iter()
            .find(|unit| unit.atomic && unit.range.splits(pos))
            .map_or(pos, |unit| unit.range.start);
    }

    /// The atomic token (or single character) immediately before the cursor
    pub fn unit_before_cursor(&self) -> Option<TextRange> {
        if self.cursor == 0 {
            return None;
        }
        let len = token_len_before(&self.content, self.cursor).unwrap_or(1);
        Some(TextRange::new(self.cursor - len, self.cursor))
    }

    /// The atomic token (or single character) starting at the cursor
    pub fn unit_after_cursor(&self) -> Option<TextRange> {
        if self.cursor >= self.content.len() {
            return None;
        }
        let len = token_len_at(&self.content, self.cursor).unwrap_or(1);
        Some(TextRange::new(self.cursor, self.cursor + len))
    }

    pub fn snapshot(&self) -> BufferSnapshot {
        BufferSnapshot { text: self.text(), cursor: self.cursor }
    }
}

impl TextCore for TokenBuffer {
    fn text(&self) -> String {
        self.content.iter().collect()
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn insert_at_cursor(&mut self, text: &str) {
        let inserted: Vec<char> = text.chars().collect();
        let count = inserted.len();
        self.content.splice(self.cursor..self.cursor, inserted);
        self.cursor += count;

        // A trailing command can absorb an opener that was already there: `\pi` + `(2)`
        let joined = units(&self.content)
            .into_iter()
            .find(|unit| unit.atomic && unit.range.splits(self.cursor));
        if let Some(unit) = joined {
            log::trace!("insert joined token {:?}, cursor {} -> {}", unit.range, self.cursor, unit.range.end);
            self.cursor = unit.range.end;
        }
    }

    fn delete_before_cursor(&mut self) -> Option<String> {
        let range = self.unit_before_cursor()?;
        let removed: String = self.content.drain(range.start..range.end).collect();
        self.cursor = range.start;
        log::trace!("deleted {:?}, cursor now {}", removed, self.cursor);
        Some(removed)
    }

    fn move_cursor(&mut self, direction: Direction) -> bool {
        let target = match direction {
            Direction::Left => self.unit_before_cursor().map(|r| r.start),
            Direction::Right => self.unit_after_cursor().map(|r| r.end),
        };

        match target {
            Some(pos) => {
                self.cursor = pos;
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }
}
