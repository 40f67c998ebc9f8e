//! Unit converter and date calculator exports

use chrono::{Datelike, Local, NaiveDate};
use wasm_bindgen::prelude::*;

use super::helpers::{js_error, serialize};
use crate::converters::dates::parse_date;
use crate::converters::units::symbol;
use crate::converters::{
    CalendarMonth, Category, DateCalculator, DateField, DateOperation, DateTab, UnitConverter,
};
use crate::{wasm_info, wasm_warn};

/// Browser-local calendar date
fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_else(|| Local::now().date_naive())
}

// ============================================================================
// Unit converter
// ============================================================================

#[wasm_bindgen(js_name = UnitConverter)]
pub struct UnitConverterHandle {
    converter: UnitConverter,
}

#[wasm_bindgen(js_class = UnitConverter)]
impl UnitConverterHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> UnitConverterHandle {
        UnitConverterHandle { converter: UnitConverter::new() }
    }

    #[wasm_bindgen(js_name = selectCategory)]
    pub fn select_category(&mut self, category: Category) -> Result<JsValue, JsValue> {
        wasm_info!("selectCategory: {}", category.name());
        self.converter.select_category(category);
        self.display()
    }

    #[wasm_bindgen(js_name = setInputUnit)]
    pub fn set_input_unit(&mut self, unit: &str) -> Result<JsValue, JsValue> {
        self.converter.set_input_unit(unit).map_err(js_error)?;
        self.display()
    }

    #[wasm_bindgen(js_name = setOutputUnit)]
    pub fn set_output_unit(&mut self, unit: &str) -> Result<JsValue, JsValue> {
        self.converter.set_output_unit(unit).map_err(js_error)?;
        self.display()
    }

    /// Tap on a field; `top` selects the upper one
    #[wasm_bindgen(js_name = focusField)]
    pub fn focus_field(&mut self, top: bool) -> Result<JsValue, JsValue> {
        self.converter.focus_field(top);
        self.display()
    }

    pub fn press(&mut self, key: &str) -> Result<JsValue, JsValue> {
        self.converter.press(key);
        self.display()
    }

    pub fn display(&self) -> Result<JsValue, JsValue> {
        serialize(&self.converter.display(), "Failed to serialize converter display")
    }
}

impl Default for UnitConverterHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Unit names and symbols of a category
#[wasm_bindgen(js_name = getUnits)]
pub fn get_units(category: Category) -> Result<JsValue, JsValue> {
    let units: Vec<(&str, String)> = category.units().into_iter().map(|unit| (unit, symbol(unit))).collect();
    serialize(&units, "Failed to serialize units")
}

#[wasm_bindgen(js_name = getCategories)]
pub fn get_categories() -> Result<JsValue, JsValue> {
    let names: Vec<&str> = Category::ALL.iter().map(|category| category.name()).collect();
    serialize(&names, "Failed to serialize categories")
}

// ============================================================================
// Date calculator
// ============================================================================

#[wasm_bindgen(js_name = DateCalculator)]
pub struct DateCalculatorHandle {
    calculator: DateCalculator,
}

#[wasm_bindgen(js_class = DateCalculator)]
impl DateCalculatorHandle {
    /// All fields start at today's local date
    #[wasm_bindgen(constructor)]
    pub fn new() -> DateCalculatorHandle {
        DateCalculatorHandle { calculator: DateCalculator::new(today()) }
    }

    #[wasm_bindgen(js_name = setTab)]
    pub fn set_tab(&mut self, tab: DateTab) -> Result<JsValue, JsValue> {
        self.calculator.tab = tab;
        self.state()
    }

    #[wasm_bindgen(js_name = setActiveField)]
    pub fn set_active_field(&mut self, field: DateField) -> Result<JsValue, JsValue> {
        self.calculator.active_field = field;
        self.state()
    }

    /// Difference keypad
    pub fn press(&mut self, key: &str) -> Result<JsValue, JsValue> {
        self.calculator.press(key);
        self.state()
    }

    /// Fill a difference field from the date picker
    #[wasm_bindgen(js_name = setDate)]
    pub fn set_date(&mut self, field: DateField, date: &str) -> Result<JsValue, JsValue> {
        parse_date(date).map_err(js_error)?;
        match field {
            DateField::From => self.calculator.from_date = date.to_string(),
            DateField::To => self.calculator.to_date = date.to_string(),
        }
        self.state()
    }

    /// Base date for add/subtract (free text; bad dates give "Invalid Date")
    #[wasm_bindgen(js_name = setBaseDate)]
    pub fn set_base_date(&mut self, date: &str) -> Result<JsValue, JsValue> {
        self.calculator.base_date = date.to_string();
        self.state()
    }

    #[wasm_bindgen(js_name = setOperation)]
    pub fn set_operation(&mut self, operation: DateOperation) -> Result<JsValue, JsValue> {
        self.calculator.operation = operation;
        self.state()
    }

    /// Years, months and days fields as typed
    #[wasm_bindgen(js_name = setOffsets)]
    pub fn set_offsets(&mut self, years: &str, months: &str, days: &str) -> Result<JsValue, JsValue> {
        self.calculator.years = years.to_string();
        self.calculator.months = months.to_string();
        self.calculator.days = days.to_string();
        self.state()
    }

    /// `null` while either date is incomplete
    pub fn difference(&self) -> Result<JsValue, JsValue> {
        serialize(&self.calculator.difference(), "Failed to serialize date difference")
    }

    #[wasm_bindgen(js_name = addSubtractResult)]
    pub fn add_subtract_result(&self) -> String {
        self.calculator.add_subtract_result()
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        serialize(&self.calculator, "Failed to serialize date calculator")
    }
}

impl Default for DateCalculatorHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Picker page `offset` months from the month of `date` (or from today)
#[wasm_bindgen(js_name = getCalendarMonth)]
pub fn get_calendar_month(date: Option<String>, offset: i32) -> Result<JsValue, JsValue> {
    let anchor = match date.as_deref().map(parse_date) {
        Some(Ok(anchor)) => anchor,
        Some(Err(err)) => {
            wasm_warn!("{}; showing current month", err);
            today()
        }
        None => today(),
    };

    let month = CalendarMonth::new(anchor.year(), anchor.month(), i64::from(offset))
        .ok_or_else(|| js_error("Calendar month out of range"))?;
    serialize(&month, "Failed to serialize calendar month")
}

