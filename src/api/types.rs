//! Shared types for the WASM API

use serde::{Deserialize, Serialize};

use crate::keyboard::MathInput;
use crate::models::AngleUnit;

/// Result of an edit on the math input (mutation primitive)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EditResult {
    pub text: String,
    pub cursor: usize,
    /// Preview LaTeX with the cursor bar
    pub preview: String,
    /// Live result text ("" when the text does not evaluate)
    pub result: String,
    /// Text removed by a delete, if any
    pub removed: Option<String>,
}

impl EditResult {
    pub fn from_input(input: &MathInput, angle_unit: AngleUnit, removed: Option<String>) -> Self {
        Self {
            text: input.text(),
            cursor: input.cursor(),
            preview: input.preview(),
            result: input.evaluate(angle_unit).display(),
            removed,
        }
    }
}

/// Result of evaluating loose text
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EvaluationResult {
    pub value: Option<f64>,
    pub display: String,
}
