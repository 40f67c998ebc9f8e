//! Calculator keypad layouts
//!
//! Labels depend on the `2nd` toggle and the angle unit, so the scientific
//! layout is rebuilt from session state.

use serde::{Deserialize, Serialize};

use crate::models::AngleUnit;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KeyStyle {
    Number,
    Operator,
    Function,
    Accent,
    Danger,
    Submit,
}

/// A key: what it shows and what it sends to [`super::Calculator::press`]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CalcKey {
    pub label: String,
    pub key: String,
    pub style: KeyStyle,
}

impl CalcKey {
    fn new(label: &str, key: &str, style: KeyStyle) -> Self {
        Self { label: label.to_string(), key: key.to_string(), style }
    }

    fn digit(d: &str) -> Self {
        Self::new(d, d, KeyStyle::Number)
    }
}

/// Four-column basic layout
pub fn basic_keypad() -> Vec<CalcKey> {
    use KeyStyle::*;
    vec![
        CalcKey::new("C", "clear", Danger),
        CalcKey::new("( )", "parens", Operator),
        CalcKey::new("%", "percent", Operator),
        CalcKey::new("÷", "÷", Operator),
        CalcKey::digit("7"),
        CalcKey::digit("8"),
        CalcKey::digit("9"),
        CalcKey::new("×", "×", Operator),
        CalcKey::digit("4"),
        CalcKey::digit("5"),
        CalcKey::digit("6"),
        CalcKey::new("-", "-", Operator),
        CalcKey::digit("1"),
        CalcKey::digit("2"),
        CalcKey::digit("3"),
        CalcKey::new("+", "+", Operator),
        CalcKey::new("+/-", "negate", Number),
        CalcKey::digit("0"),
        CalcKey::digit("."),
        CalcKey::new("=", "solve", Submit),
    ]
}

/// Five-column scientific layout
pub fn scientific_keypad(second: bool, angle_unit: AngleUnit) -> Vec<CalcKey> {
    use KeyStyle::*;
    let pick = |normal: (&str, &str), shifted: (&str, &str)| {
        let (label, key) = if second { shifted } else { normal };
        CalcKey::new(label, key, Function)
    };

    vec![
        CalcKey::new("2nd", "2nd", if second { Accent } else { Function }),
        CalcKey::new(angle_unit.label(), "deg_rad", Function),
        pick(("sin", "sin"), ("sin⁻¹", "asin")),
        pick(("cos", "cos"), ("cos⁻¹", "acos")),
        pick(("tan", "tan"), ("tan⁻¹", "atan")),
        CalcKey::new("x^y", "pow", Function),
        pick(("log", "log"), ("10^x", "10pow")),
        pick(("ln", "ln"), ("e^x", "epow")),
        CalcKey::new("(", "parens", Function),
        CalcKey::new(")", "parens", Function),
        pick(("√", "sqrt"), ("x²", "sqr")),
        CalcKey::digit("7"),
        CalcKey::digit("8"),
        CalcKey::digit("9"),
        CalcKey::new("÷", "÷", Operator),
        CalcKey::new("x!", "fact", Function),
        CalcKey::digit("4"),
        CalcKey::digit("5"),
        CalcKey::digit("6"),
        CalcKey::new("×", "×", Operator),
        CalcKey::new("1/x", "inv", Function),
        CalcKey::digit("1"),
        CalcKey::digit("2"),
        CalcKey::digit("3"),
        CalcKey::new("-", "-", Operator),
        CalcKey::new("π", "pi", Function),
        CalcKey::digit("0"),
        CalcKey::digit("."),
        CalcKey::new("C", "clear", Danger),
        CalcKey::new("+", "+", Operator),
        CalcKey::new("e", "e", Function),
        CalcKey::new("%", "percent", Function),
        CalcKey::new("+/-", "negate", Function),
        CalcKey::new("DEL", "delete", Danger),
        CalcKey::new("=", "solve", Submit),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_sizes() {
        assert_eq!(basic_keypad().len(), 20);
        assert_eq!(scientific_keypad(false, AngleUnit::Degrees).len(), 35);
    }

    #[test]
    fn test_second_swaps_functions() {
        let keys = scientific_keypad(true, AngleUnit::Radians);
        assert_eq!(keys[0].style, KeyStyle::Accent);
        assert_eq!(keys[1].label, "RAD");
        assert_eq!(keys[2].key, "asin");
        assert_eq!(keys[6].key, "10pow");
        assert_eq!(keys[10].label, "x²");
    }
}
