//! Core value types for expression evaluation
//!
//! The angle unit selects how trigonometric functions read and produce
//! angles; an [`Evaluation`] is what the live preview displays.

use serde::{Deserialize, Serialize};
use std::fmt;
use wasm_bindgen::prelude::*;

use crate::utils::format::format_number;

/// Angle unit used by `sin`/`cos`/`tan` arguments and inverse trig results
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum AngleUnit {
    /// Degrees (calculator default)
    #[default]
    Degrees = 0,

    /// Radians
    Radians = 1,
}

impl AngleUnit {
    pub fn toggled(self) -> Self {
        match self {
            AngleUnit::Degrees => AngleUnit::Radians,
            AngleUnit::Radians => AngleUnit::Degrees,
        }
    }

    /// Keypad label ("DEG" / "RAD")
    pub fn label(self) -> &'static str {
        match self {
            AngleUnit::Degrees => "DEG",
            AngleUnit::Radians => "RAD",
        }
    }

    /// Convert an angle in this unit to radians
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Degrees => angle * std::f64::consts::PI / 180.0,
            AngleUnit::Radians => angle,
        }
    }

    /// Convert an angle in radians to this unit
    pub fn from_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Degrees => angle * 180.0 / std::f64::consts::PI,
            AngleUnit::Radians => angle,
        }
    }
}

/// Outcome of evaluating an expression
///
/// Every failure (syntax, unknown name, incomplete input, non-finite value)
/// is `NoResult`; the preview simply shows nothing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Evaluation {
    Number(f64),
    NoResult,
}

impl Evaluation {
    pub fn value(&self) -> Option<f64> {
        match self {
            Evaluation::Number(v) => Some(*v),
            Evaluation::NoResult => None,
        }
    }

    /// Text shown in the preview ("" when there is no result)
    pub fn display(&self) -> String {
        match self {
            Evaluation::Number(v) => format_number(*v),
            Evaluation::NoResult => String::new(),
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_unit_conversion() {
        let unit = AngleUnit::Degrees;
        assert!((unit.to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
        assert!((unit.from_radians(std::f64::consts::FRAC_PI_2) - 90.0).abs() < 1e-12);
        assert_eq!(AngleUnit::Radians.to_radians(1.5), 1.5);
    }

    #[test]
    fn test_angle_unit_toggle_and_label() {
        assert_eq!(AngleUnit::default(), AngleUnit::Degrees);
        assert_eq!(AngleUnit::Degrees.toggled(), AngleUnit::Radians);
        assert_eq!(AngleUnit::Radians.label(), "RAD");
    }

    #[test]
    fn test_evaluation_display() {
        assert_eq!(Evaluation::Number(120.0).display(), "120");
        assert_eq!(Evaluation::Number(0.5).display(), "0.5");
        assert_eq!(Evaluation::NoResult.display(), "");
        assert_eq!(Evaluation::NoResult.value(), None);
    }

    #[test]
    fn test_evaluation_serialization() {
        let json = serde_json::to_string(&Evaluation::Number(2.5)).unwrap();
        assert_eq!(json, r#"{"kind":"Number","value":2.5}"#);
        let json = serde_json::to_string(&Evaluation::NoResult).unwrap();
        assert_eq!(json, r#"{"kind":"NoResult"}"#);
    }
}
