//! Unit converter
//!
//! Two fields (top and bottom), one of which has focus. The focused field
//! holds the typed text; the other shows the converted value. Ratio units
//! convert through the category's base unit; temperature goes through
//! Celsius by formula.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use super::{ConversionError, ConversionResult};
use crate::utils::format::{format_exponential, format_fixed, format_number, format_significant};

/// Above this magnitude (or below `SMALL_LIMIT`) results switch to exponent form
const LARGE_LIMIT: f64 = 1e6;
const SMALL_LIMIT: f64 = 1e-6;

/// Leading float the way `parseFloat` reads it
static FLOAT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("float prefix pattern is valid")
});

const AREA: &[(&str, f64)] = &[
    ("Acres", 4046.86),
    ("Ares", 100.0),
    ("Hectares", 10000.0),
    ("Square meters", 1.0),
    ("Square feet", 0.092903),
    ("Square inches", 0.00064516),
];

const LENGTH: &[(&str, f64)] = &[
    ("Meters", 1.0),
    ("Kilometers", 1000.0),
    ("Centimeters", 0.01),
    ("Millimeters", 0.001),
    ("Inches", 0.0254),
    ("Feet", 0.3048),
    ("Yards", 0.9144),
    ("Miles", 1609.34),
];

const TEMPERATURE: &[&str] = &["Celsius", "Fahrenheit", "Kelvin"];

const VOLUME: &[(&str, f64)] = &[
    ("Liters", 1.0),
    ("Milliliters", 0.001),
    ("Gallons (US)", 3.78541),
    ("Cups (US)", 0.236588),
    ("Fluid Ounces (US)", 0.0295735),
    ("Cubic meters", 1000.0),
];

const MASS: &[(&str, f64)] = &[
    ("Kilograms", 1.0),
    ("Grams", 0.001),
    ("Milligrams", 0.000001),
    ("Pounds", 0.453592),
    ("Ounces", 0.0283495),
    ("Tons", 1000.0),
];

const DATA: &[(&str, f64)] = &[
    ("Bytes", 1.0),
    ("Kilobytes", 1024.0),
    ("Megabytes", 1048576.0),
    ("Gigabytes", 1073741824.0),
    ("Terabytes", 1099511627776.0),
    ("Petabytes", 1125899906842624.0),
];

const SPEED: &[(&str, f64)] = &[
    ("Meters/second", 1.0),
    ("Kilometers/hour", 0.277778),
    ("Miles/hour", 0.44704),
    ("Knots", 0.514444),
];

const TIME: &[(&str, f64)] = &[
    ("Milliseconds", 0.001),
    ("Seconds", 1.0),
    ("Minutes", 60.0),
    ("Hours", 3600.0),
    ("Days", 86400.0),
    ("Weeks", 604800.0),
];

const SYMBOLS: &[(&str, &str)] = &[
    ("Meters", "m"),
    ("Kilometers", "km"),
    ("Centimeters", "cm"),
    ("Millimeters", "mm"),
    ("Inches", "in"),
    ("Feet", "ft"),
    ("Yards", "yd"),
    ("Miles", "mi"),
    ("Acres", "ac"),
    ("Ares", "a"),
    ("Hectares", "ha"),
    ("Square meters", "m²"),
    ("Square feet", "ft²"),
    ("Square inches", "in²"),
    ("Celsius", "°C"),
    ("Fahrenheit", "°F"),
    ("Kelvin", "K"),
    ("Liters", "l"),
    ("Milliliters", "ml"),
    ("Gallons (US)", "gal"),
    ("Cups (US)", "cup"),
    ("Fluid Ounces (US)", "fl oz"),
    ("Cubic meters", "m³"),
    ("Kilograms", "kg"),
    ("Grams", "g"),
    ("Milligrams", "mg"),
    ("Pounds", "lb"),
    ("Ounces", "oz"),
    ("Tons", "t"),
    ("Bytes", "B"),
    ("Kilobytes", "KB"),
    ("Megabytes", "MB"),
    ("Gigabytes", "GB"),
    ("Terabytes", "TB"),
    ("Petabytes", "PB"),
    ("Meters/second", "m/s"),
    ("Kilometers/hour", "km/h"),
    ("Miles/hour", "mph"),
    ("Knots", "kn"),
    ("Milliseconds", "ms"),
    ("Seconds", "s"),
    ("Minutes", "min"),
    ("Hours", "h"),
    ("Days", "d"),
    ("Weeks", "wk"),
];

/// Conversion category (tab order)
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum Category {
    #[default]
    Area = 0,
    Length = 1,
    Temperature = 2,
    Volume = 3,
    Mass = 4,
    Data = 5,
    Speed = 6,
    Time = 7,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Area,
        Category::Length,
        Category::Temperature,
        Category::Volume,
        Category::Mass,
        Category::Data,
        Category::Speed,
        Category::Time,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Area => "Area",
            Category::Length => "Length",
            Category::Temperature => "Temperature",
            Category::Volume => "Volume",
            Category::Mass => "Mass",
            Category::Data => "Data",
            Category::Speed => "Speed",
            Category::Time => "Time",
        }
    }

    pub fn from_name(name: &str) -> ConversionResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| ConversionError::UnknownCategory(name.to_string()))
    }

    /// Temperature converts by formula instead of ratios
    pub fn uses_formula(self) -> bool {
        self == Category::Temperature
    }

    fn ratios(self) -> &'static [(&'static str, f64)] {
        match self {
            Category::Area => AREA,
            Category::Length => LENGTH,
            Category::Temperature => &[],
            Category::Volume => VOLUME,
            Category::Mass => MASS,
            Category::Data => DATA,
            Category::Speed => SPEED,
            Category::Time => TIME,
        }
    }

    /// Unit names in display order
    pub fn units(self) -> Vec<&'static str> {
        if self.uses_formula() {
            return TEMPERATURE.to_vec();
        }
        self.ratios().iter().map(|(name, _)| *name).collect()
    }

    pub fn has_unit(self, unit: &str) -> bool {
        self.units().contains(&unit)
    }

    /// Size of one `unit` in the category's base unit
    pub fn ratio(self, unit: &str) -> ConversionResult<f64> {
        self.ratios()
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, ratio)| *ratio)
            .ok_or_else(|| self.unknown_unit(unit))
    }

    fn unknown_unit(self, unit: &str) -> ConversionError {
        ConversionError::UnknownUnit { category: self.name().to_string(), unit: unit.to_string() }
    }
}

/// Short unit symbol; unlisted names use their first two letters lowercased
pub fn symbol(unit: &str) -> String {
    SYMBOLS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, symbol)| symbol.to_string())
        .unwrap_or_else(|| unit.chars().take(2).collect::<String>().to_lowercase())
}

/// Leading number in `text` (`"12.5abc"` -> 12.5); `None` when there is none
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    FLOAT_PREFIX
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

fn to_celsius(unit: &str, value: f64) -> ConversionResult<f64> {
    match unit {
        "Celsius" => Ok(value),
        "Fahrenheit" => Ok((value - 32.0) * 5.0 / 9.0),
        "Kelvin" => Ok(value - 273.15),
        _ => Err(Category::Temperature.unknown_unit(unit)),
    }
}

fn from_celsius(unit: &str, celsius: f64) -> ConversionResult<f64> {
    match unit {
        "Celsius" => Ok(celsius),
        "Fahrenheit" => Ok(celsius * 9.0 / 5.0 + 32.0),
        "Kelvin" => Ok(celsius + 273.15),
        _ => Err(Category::Temperature.unknown_unit(unit)),
    }
}

/// Convert `value` between two units of `category`
pub fn convert(category: Category, value: f64, from: &str, to: &str) -> ConversionResult<f64> {
    if category.uses_formula() {
        return from_celsius(to, to_celsius(from, value)?);
    }
    Ok(value * category.ratio(from)? / category.ratio(to)?)
}

/// Display text for a converted value
pub fn format_converted(category: Category, value: f64) -> String {
    if category.uses_formula() {
        return format_fixed(value, 2);
    }
    if !value.is_finite() {
        return format_number(value);
    }

    let magnitude = value.abs();
    if (magnitude < SMALL_LIMIT && value != 0.0) || magnitude > LARGE_LIMIT {
        format_exponential(value, 4)
    } else {
        format_significant(value, 6)
    }
}

/// Field shown on screen
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConverterDisplay {
    pub category: Category,
    pub input_unit: String,
    pub output_unit: String,
    pub top_value: String,
    pub bottom_value: String,
    pub top_symbol: String,
    pub bottom_symbol: String,
    pub focus_on_top: bool,
}

/// Converter state: active category, the two units and the typed text
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UnitConverter {
    category: Category,
    input_unit: String,
    output_unit: String,
    input_value: String,
    focus_on_top: bool,
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitConverter {
    pub fn new() -> Self {
        let mut converter = Self {
            category: Category::Area,
            input_unit: String::new(),
            output_unit: String::new(),
            input_value: String::new(),
            focus_on_top: true,
        };
        converter.select_category(Category::Area);
        converter
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn input_unit(&self) -> &str {
        &self.input_unit
    }

    pub fn output_unit(&self) -> &str {
        &self.output_unit
    }

    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    pub fn focus_on_top(&self) -> bool {
        self.focus_on_top
    }

    /// Switch category: first two units selected, input cleared
    pub fn select_category(&mut self, category: Category) {
        let units = category.units();
        self.category = category;
        self.input_unit = units.first().copied().unwrap_or_default().to_string();
        self.output_unit = units.get(1).copied().unwrap_or_default().to_string();
        self.input_value.clear();
        log::debug!("unit converter category -> {}", category.name());
    }

    /// Set the top field's unit
    pub fn set_input_unit(&mut self, unit: &str) -> ConversionResult<()> {
        self.check_unit(unit)?;
        self.input_unit = unit.to_string();
        Ok(())
    }

    /// Set the bottom field's unit
    pub fn set_output_unit(&mut self, unit: &str) -> ConversionResult<()> {
        self.check_unit(unit)?;
        self.output_unit = unit.to_string();
        Ok(())
    }

    fn check_unit(&self, unit: &str) -> ConversionResult<()> {
        if self.category.has_unit(unit) {
            Ok(())
        } else {
            Err(self.category.unknown_unit(unit))
        }
    }

    /// Give focus to a field; the value it was showing becomes the typed text
    pub fn focus_field(&mut self, top: bool) {
        if top == self.focus_on_top {
            return;
        }
        self.input_value = self.converted_value();
        self.focus_on_top = top;
    }

    /// Keypad: `C`, `backspace`, `negate`, `switch_focus`, anything else is appended
    pub fn press(&mut self, key: &str) {
        match key {
            "C" => self.input_value.clear(),
            "backspace" => {
                self.input_value.pop();
            }
            "switch_focus" => self.focus_field(!self.focus_on_top),
            "negate" => {
                self.input_value = match self.input_value.strip_prefix('-') {
                    Some(rest) => rest.to_string(),
                    None => format!("-{}", self.input_value),
                };
            }
            other => self.input_value.push_str(other),
        }
    }

    /// Text for the unfocused field ("" when the input is not a number)
    pub fn converted_value(&self) -> String {
        let Some(value) = parse_float_prefix(&self.input_value) else {
            return String::new();
        };

        let (from, to) = if self.focus_on_top {
            (&self.input_unit, &self.output_unit)
        } else {
            (&self.output_unit, &self.input_unit)
        };

        match convert(self.category, value, from, to) {
            Ok(result) => format_converted(self.category, result),
            Err(err) => {
                log::warn!("unit conversion failed: {}", err);
                String::new()
            }
        }
    }

    pub fn display(&self) -> ConverterDisplay {
        let typed = if self.input_value.is_empty() { "0".to_string() } else { self.input_value.clone() };
        let converted = self.converted_value();
        let converted = if converted.is_empty() { "0".to_string() } else { converted };

        let (top_value, bottom_value) =
            if self.focus_on_top { (typed, converted) } else { (converted, typed) };

        ConverterDisplay {
            category: self.category,
            input_unit: self.input_unit.clone(),
            output_unit: self.output_unit.clone(),
            top_value,
            bottom_value,
            top_symbol: symbol(&self.input_unit),
            bottom_symbol: symbol(&self.output_unit),
            focus_on_top: self.focus_on_top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(converter: &mut UnitConverter, keys: &str) {
        for c in keys.chars() {
            converter.press(&c.to_string());
        }
    }

    #[test]
    fn test_category_reset() {
        let mut converter = UnitConverter::new();
        assert_eq!(converter.input_unit(), "Acres");
        assert_eq!(converter.output_unit(), "Ares");

        typed(&mut converter, "12");
        converter.select_category(Category::Length);
        assert_eq!(converter.input_unit(), "Meters");
        assert_eq!(converter.output_unit(), "Kilometers");
        assert_eq!(converter.input_value(), "");
    }

    #[test]
    fn test_ratio_conversion() {
        let mut converter = UnitConverter::new();
        converter.select_category(Category::Length);
        typed(&mut converter, "1500");
        assert_eq!(converter.converted_value(), "1.5");
    }

    #[test]
    fn test_exponential_formatting() {
        assert_eq!(format_converted(Category::Data, 12345678.0), "1.2346e+7");
        assert_eq!(format_converted(Category::Data, 0.0000001), "1.0000e-7");
        assert_eq!(format_converted(Category::Data, 0.0), "0");
        assert_eq!(format_converted(Category::Data, -2000000.0), "-2.0000e+6");
    }

    #[test]
    fn test_temperature_formula() {
        assert_eq!(convert(Category::Temperature, 100.0, "Celsius", "Fahrenheit"), Ok(212.0));
        assert_eq!(format_converted(Category::Temperature, 0.0), "0.00");

        let mut converter = UnitConverter::new();
        converter.select_category(Category::Temperature);
        typed(&mut converter, "100");
        assert_eq!(converter.converted_value(), "212.00");
    }

    #[test]
    fn test_switch_focus_carries_value() {
        let mut converter = UnitConverter::new();
        converter.select_category(Category::Length);
        typed(&mut converter, "2000");
        converter.press("switch_focus");

        assert!(!converter.focus_on_top());
        assert_eq!(converter.input_value(), "2");
        // Bottom (Kilometers) now drives the top (Meters)
        assert_eq!(converter.converted_value(), "2000");
    }

    #[test]
    fn test_keypad_editing() {
        let mut converter = UnitConverter::new();
        typed(&mut converter, "42");
        converter.press("negate");
        assert_eq!(converter.input_value(), "-42");
        converter.press("negate");
        assert_eq!(converter.input_value(), "42");
        converter.press("backspace");
        assert_eq!(converter.input_value(), "4");
        converter.press("C");
        assert_eq!(converter.input_value(), "");
        assert_eq!(converter.converted_value(), "");
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let mut converter = UnitConverter::new();
        assert!(matches!(
            converter.set_input_unit("Meters"),
            Err(ConversionError::UnknownUnit { .. })
        ));
        assert!(converter.set_output_unit("Hectares").is_ok());
    }

    #[test]
    fn test_symbols() {
        assert_eq!(symbol("Square meters"), "m²");
        assert_eq!(symbol("Furlongs"), "fu");
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("12.5abc"), Some(12.5));
        assert_eq!(parse_float_prefix("-.5"), Some(-0.5));
        assert_eq!(parse_float_prefix("1.2346e+7"), Some(12346000.0));
        assert_eq!(parse_float_prefix("-"), None);
        assert_eq!(parse_float_prefix(""), None);
    }
}
