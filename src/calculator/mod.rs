//! Calculator session
//!
//! Display text, angle unit, the `2nd` toggle and the solve history. Keys
//! append to the display; the live result is recomputed from the display
//! every time it is read.

pub mod keypad;

pub use keypad::{basic_keypad, scientific_keypad, CalcKey, KeyStyle};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::eval::evaluate;
use crate::models::AngleUnit;
use crate::text::{TextCore, TokenBuffer};

/// Trailing (possibly negative) number for the sign toggle
static TRAILING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?[\d.]+$").expect("trailing number pattern is valid"));

/// Characters after which the bracket key closes rather than opens
const CLOSES_AFTER: &[char] = &['.', ')', 'e', 'π', '!'];

/// Suffix marking history entries solved in radians
const RADIAN_TAG: &str = " [rad]";

/// One solved expression
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: String,
}

/// What the calculator screen shows
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CalculatorSnapshot {
    pub display: String,
    pub cursor: usize,
    pub live_result: String,
    pub angle_unit: AngleUnit,
    pub angle_label: String,
    pub second: bool,
    pub scientific: bool,
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    display: TokenBuffer,
    angle_unit: AngleUnit,
    second: bool,
    scientific: bool,
    history: Vec<HistoryEntry>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> String {
        self.display.text()
    }

    pub fn angle_unit(&self) -> AngleUnit {
        self.angle_unit
    }

    pub fn is_second(&self) -> bool {
        self.second
    }

    pub fn is_scientific(&self) -> bool {
        self.scientific
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Switch between the basic and scientific keypads
    pub fn toggle_scientific(&mut self) {
        self.scientific = !self.scientific;
    }

    /// Handle one key press
    pub fn press(&mut self, key: &str) {
        match key {
            "clear" => self.display.clear(),
            "delete" => {
                self.display.delete_before_cursor();
            }
            "2nd" => self.second = !self.second,
            "deg_rad" => {
                self.angle_unit = self.angle_unit.toggled();
                log::debug!("angle unit -> {}", self.angle_unit.label());
            }
            "parens" => {
                let closes = self
                    .display
                    .last_significant_char()
                    .is_some_and(|c| c.is_ascii_digit() || CLOSES_AFTER.contains(&c));
                self.append(if closes { ")" } else { "(" });
            }
            "negate" => self.negate(),
            "solve" => self.solve(),
            other => self.append(function_text(other)),
        }
    }

    fn append(&mut self, text: &str) {
        let end = self.display.len();
        self.display.set_cursor(end);
        self.display.insert_at_cursor(text);
    }

    /// Toggle the sign of the trailing number, or start a negative one
    fn negate(&mut self) {
        let text = self.display.text();
        match TRAILING_NUMBER.find(&text) {
            Some(number) => {
                let number = number.as_str();
                let toggled = match number.strip_prefix('-') {
                    Some(rest) => rest.to_string(),
                    None => format!("-{}", number),
                };
                self.display.replace_tail(number.chars().count(), &toggled);
            }
            None => self.append("-"),
        }
    }

    /// Record the expression and replace the display with its result
    pub fn solve(&mut self) {
        let result = self.live_result();
        if result.is_empty() {
            return;
        }

        let mut expression = self.display.text();
        if self.angle_unit == AngleUnit::Radians {
            expression.push_str(RADIAN_TAG);
        }
        log::info!("solved {} = {}", expression, result);

        self.history.push(HistoryEntry { expression, result: result.clone() });
        self.display.replace_all(&result);
    }

    /// Current value of the display ("" when it does not evaluate)
    pub fn live_result(&self) -> String {
        if self.display.is_empty() {
            return String::new();
        }
        evaluate(&self.display.text(), self.angle_unit).display()
    }

    /// Put a history entry's result back on the display
    pub fn load_history(&mut self, index: usize) -> bool {
        match self.history.get(index) {
            Some(entry) => {
                let result = entry.result.clone();
                self.display.replace_all(&result);
                true
            }
            None => false,
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn snapshot(&self) -> CalculatorSnapshot {
        CalculatorSnapshot {
            display: self.display.text(),
            cursor: self.display.cursor(),
            live_result: self.live_result(),
            angle_unit: self.angle_unit,
            angle_label: self.angle_unit.label().to_string(),
            second: self.second,
            scientific: self.scientific,
            history: self.history.clone(),
        }
    }
}

/// Text appended by a function key; any other key is appended as is
fn function_text(key: &str) -> &str {
    match key {
        "sin" => "sin(",
        "cos" => "cos(",
        "tan" => "tan(",
        "asin" => "asin(",
        "acos" => "acos(",
        "atan" => "atan(",
        "log" => "log(",
        "ln" => "ln(",
        "sqrt" => "√(",
        "sqr" => "^2",
        "fact" => "!",
        "inv" => "^(-1)",
        "pow" => "^",
        "pi" => "π",
        "e" => "e",
        "10pow" => "10^",
        "epow" => "e^",
        "percent" => "%",
        other => other,
    }
}
