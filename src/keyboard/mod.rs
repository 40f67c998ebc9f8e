//! Math keyboard and input field
//!
//! Keys either act on the field (clear, delete) or insert text. What a key
//! inserts is derived from its LaTeX and value so the field reads like real
//! LaTeX (`\sqrt{`, `\times`) wherever that can be typed directly.

pub mod layout;

pub use layout::{Tab, TabLayout};

use serde::{Deserialize, Serialize};

use crate::eval::evaluate;
use crate::models::{AngleUnit, Evaluation};
use crate::renderers::render_preview;
use crate::text::{BufferSnapshot, Direction, TextCore, TokenBuffer};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    Clear,
    Delete,
}

/// Colour group of a key
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KeyCategory {
    Number,
    Operator,
    Function,
    Base,
    Submit,
    Danger,
    Warning,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MathKey {
    Action {
        label: &'static str,
        action: KeyAction,
        category: KeyCategory,
    },
    Insert {
        label: Option<&'static str>,
        latex: Option<&'static str>,
        value: &'static str,
        category: KeyCategory,
    },
}

impl MathKey {
    /// Text this key inserts; `None` for action keys
    pub fn insertion(&self) -> Option<String> {
        match self {
            MathKey::Action { .. } => None,
            MathKey::Insert { latex, value, .. } => Some(insertion_for(*latex, value)),
        }
    }
}

/// Text inserted for a key with the given LaTeX and value
///
/// - `\sqrt{x}` inserts `\sqrt{` and `\sqrt[n]{x}` inserts `\sqrt[`
/// - other LaTeX commands insert themselves (plus `(` for function values),
///   unless they contain a `box` placeholder
/// - `/` and `*` become `\div` and `\times`
/// - everything else inserts its value
pub fn insertion_for(latex: Option<&str>, value: &str) -> String {
    match value {
        "/" => return "\\div".to_string(),
        "*" => return "\\times".to_string(),
        _ => {}
    }

    let Some(latex) = latex else {
        return value.to_string();
    };

    if latex.contains("{x}") || latex.contains("{n}") {
        return match latex {
            "\\sqrt{x}" => "\\sqrt{".to_string(),
            "\\sqrt[n]{x}" => "\\sqrt[".to_string(),
            _ => value.to_string(),
        };
    }

    // Case-sensitive: `\Box` placeholders do not count
    if latex.starts_with('\\') && !latex.contains("box") {
        let mut text = latex.to_string();
        if value.ends_with('(') && !text.ends_with('{') {
            text.push('(');
        }
        return text;
    }

    value.to_string()
}

/// Input field state for the JS side
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MathInputSnapshot {
    #[serde(flatten)]
    pub buffer: BufferSnapshot,
    pub preview: String,
    pub result: Evaluation,
}

/// Expression field driven by the math keyboard
#[derive(Debug, Clone, Default)]
pub struct MathInput {
    buffer: TokenBuffer,
}

impl MathInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        Self { buffer: TokenBuffer::from_text(text) }
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    /// Apply a keyboard key
    pub fn press(&mut self, key: &MathKey) {
        match key {
            MathKey::Action { action: KeyAction::Clear, .. } => self.clear(),
            MathKey::Action { action: KeyAction::Delete, .. } => {
                self.delete();
            }
            MathKey::Insert { .. } => {
                if let Some(text) = key.insertion() {
                    self.insert(&text);
                }
            }
        }
    }

    pub fn insert(&mut self, text: &str) {
        self.buffer.insert_at_cursor(text);
    }

    /// Delete the unit before the cursor
    pub fn delete(&mut self) -> Option<String> {
        self.buffer.delete_before_cursor()
    }

    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        self.buffer.move_cursor(direction)
    }

    pub fn set_cursor(&mut self, pos: usize) {
        self.buffer.set_cursor(pos);
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Preview LaTeX with the cursor bar
    pub fn preview(&self) -> String {
        render_preview(&self.buffer.text(), Some(self.buffer.cursor()))
    }

    pub fn evaluate(&self, angle_unit: AngleUnit) -> Evaluation {
        evaluate(&self.buffer.text(), angle_unit)
    }

    pub fn snapshot(&self, angle_unit: AngleUnit) -> MathInputSnapshot {
        MathInputSnapshot {
            buffer: self.buffer.snapshot(),
            preview: self.preview(),
            result: self.evaluate(angle_unit),
        }
    }
}
