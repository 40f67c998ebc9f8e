//! Date calculator
//!
//! Dates are entered and shown as `DD-MM-YYYY`. Arithmetic follows the
//! browser's `Date` setters: out-of-range months and days roll over into
//! the next unit (31 Jan + 1 month is 2 or 3 Mar).

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use super::{ConversionError, ConversionResult};

/// Digits in a complete `DDMMYYYY` entry
const MAX_DATE_DIGITS: usize = 8;

/// Length of a complete `DD-MM-YYYY` entry
const MAX_DATE_LEN: usize = 10;

/// Shown when the add/subtract base date does not parse
pub const INVALID_DATE: &str = "Invalid Date";

/// Parse `DD-MM-YYYY`; the day must exist in that month
pub fn parse_date(text: &str) -> ConversionResult<NaiveDate> {
    let invalid = || ConversionError::InvalidDate(text.to_string());

    let parts: Vec<&str> = text.split('-').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }

    let day = parse_int_prefix(parts[0]).ok_or_else(invalid)?;
    let month = parse_int_prefix(parts[1]).ok_or_else(invalid)?;
    let year = parse_int_prefix(parts[2]).ok_or_else(invalid)?;

    // Two-digit years would be read as 19xx by the browser
    if year < 100 {
        return Err(invalid());
    }

    let year = i32::try_from(year).map_err(|_| invalid())?;
    let month = u32::try_from(month).map_err(|_| invalid())?;
    let day = u32::try_from(day).map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// `DD-MM-YYYY` with an unpadded year
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}-{:02}-{}", date.day(), date.month(), date.year())
}

/// Leading integer the way `parseInt` reads it
fn parse_int_prefix(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// `parseInt(text) || 0`
pub fn parse_int_or_zero(text: &str) -> i64 {
    parse_int_prefix(text).unwrap_or(0)
}

/// Build a date from possibly out-of-range parts, rolling over like `new Date(y, m, d)`
fn rolled_date(year: i64, month0: i64, day: i64) -> Option<NaiveDate> {
    let year = year.checked_add(month0.div_euclid(12))?;
    let month = u32::try_from(month0.rem_euclid(12) + 1).ok()?;
    let first = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, 1)?;
    first.checked_add_signed(Duration::try_days(day.checked_sub(1)?)?)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    // Day 0 of the following month is the last day of this one
    rolled_date(i64::from(year), i64::from(month), 0).map_or(30, |d| d.day())
}

/// Calendar difference between two dates
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateDifference {
    pub total_days: i64,
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

/// Years, months and days from the earlier date to the later one
///
/// A negative day count borrows the length of the month before the later
/// date's month.
pub fn difference(a: NaiveDate, b: NaiveDate) -> DateDifference {
    let (from, to) = if a <= b { (a, b) } else { (b, a) };
    let total_days = to.signed_duration_since(from).num_days();

    let mut years = to.year() - from.year();
    let mut months = to.month() as i32 - from.month() as i32;
    let mut days = to.day() as i32 - from.day() as i32;

    if days < 0 {
        months -= 1;
        days += days_in_month_before(to) as i32;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    DateDifference { total_days, years, months, days }
}

fn days_in_month_before(date: NaiveDate) -> u32 {
    match date.month() {
        1 => days_in_month(date.year() - 1, 12),
        m => days_in_month(date.year(), m - 1),
    }
}

/// Add or subtract
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum DateOperation {
    #[default]
    Add = 0,
    Subtract = 1,
}

/// Shift `date` by years, then months, then days
pub fn add_subtract(date: NaiveDate, years: i64, months: i64, days: i64, op: DateOperation) -> Option<NaiveDate> {
    let sign: i64 = match op {
        DateOperation::Add => 1,
        DateOperation::Subtract => -1,
    };

    let shift = |base: i32, amount: i64| i64::from(base).checked_add(amount.checked_mul(sign)?);

    let shifted = rolled_date(
        shift(date.year(), years)?,
        i64::from(date.month0()),
        i64::from(date.day()),
    )?;
    let shifted = rolled_date(
        i64::from(shifted.year()),
        shift(shifted.month0() as i32, months)?,
        i64::from(shifted.day()),
    )?;
    rolled_date(
        i64::from(shifted.year()),
        i64::from(shifted.month0()),
        shift(shifted.day() as i32, days)?,
    )
}

/// Reformat typed digits as `DD-MM-YYYY` (at most 8 digits kept)
pub fn format_raw_date_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(MAX_DATE_DIGITS).collect();
    let mut formatted = String::with_capacity(MAX_DATE_LEN);
    for (i, c) in digits.chars().enumerate() {
        if i == 2 || i == 4 {
            formatted.push('-');
        }
        formatted.push(c);
    }
    formatted
}

/// Apply one date keypad key to `current`
///
/// Backspace over a dash removes the digit before it too; `.` and `negate`
/// do nothing.
pub fn press_date_key(current: &str, key: &str) -> String {
    match key {
        "C" => String::new(),
        "backspace" => {
            let mut value = current.to_string();
            if value.ends_with('-') {
                value.pop();
            }
            value.pop();
            value
        }
        "." | "negate" => current.to_string(),
        _ if current.chars().count() >= MAX_DATE_LEN => current.to_string(),
        _ => format_raw_date_input(&format!("{}{}", current.replace('-', ""), key)),
    }
}

/// Which calculator tab is showing
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum DateTab {
    #[default]
    Difference = 0,
    AddSubtract = 1,
}

/// Difference tab field receiving keypad input
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum DateField {
    #[default]
    From = 0,
    To = 1,
}

/// Month page for the date picker
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarMonth {
    pub year: i32,
    /// 1-based
    pub month: u32,
    pub days_in_month: u32,
    /// Weekday of the 1st, 0 = Sunday
    pub first_weekday: u32,
}

impl CalendarMonth {
    /// Page for the month `offset` months away from `year`/`month`
    pub fn new(year: i32, month: u32, offset: i64) -> Option<Self> {
        let first = rolled_date(i64::from(year), i64::from(month) - 1 + offset, 1)?;
        Some(Self {
            year: first.year(),
            month: first.month(),
            days_in_month: days_in_month(first.year(), first.month()),
            first_weekday: first.weekday().num_days_from_sunday(),
        })
    }

    /// Picked day as `DD-MM-YYYY` (overflowing days roll into the next month)
    pub fn pick(&self, day: u32) -> Option<String> {
        rolled_date(i64::from(self.year), i64::from(self.month) - 1, i64::from(day)).map(format_date)
    }
}

/// Date calculator state
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DateCalculator {
    pub tab: DateTab,
    pub from_date: String,
    pub to_date: String,
    pub active_field: DateField,
    pub base_date: String,
    pub operation: DateOperation,
    pub years: String,
    pub months: String,
    pub days: String,
}

impl DateCalculator {
    /// All date fields start at `today`
    pub fn new(today: NaiveDate) -> Self {
        let today = format_date(today);
        Self {
            tab: DateTab::Difference,
            from_date: today.clone(),
            to_date: today.clone(),
            active_field: DateField::From,
            base_date: today,
            operation: DateOperation::Add,
            years: String::new(),
            months: String::new(),
            days: String::new(),
        }
    }

    /// Difference keypad: digits, `C`, `backspace`, `switch_focus_up`/`_down`
    pub fn press(&mut self, key: &str) {
        match key {
            "switch_focus_up" => self.active_field = DateField::From,
            "switch_focus_down" => self.active_field = DateField::To,
            _ => {
                let field = match self.active_field {
                    DateField::From => &mut self.from_date,
                    DateField::To => &mut self.to_date,
                };
                *field = press_date_key(field, key);
            }
        }
    }

    /// Difference between the two dates; `None` when either fails to parse
    pub fn difference(&self) -> Option<DateDifference> {
        let from = parse_date(&self.from_date).ok()?;
        let to = parse_date(&self.to_date).ok()?;
        Some(difference(from, to))
    }

    /// Add/subtract result text
    pub fn add_subtract_result(&self) -> String {
        let base = match parse_date(&self.base_date) {
            Ok(date) => date,
            Err(err) => {
                log::debug!("{}", err);
                return INVALID_DATE.to_string();
            }
        };

        add_subtract(
            base,
            parse_int_or_zero(&self.years),
            parse_int_or_zero(&self.months),
            parse_int_or_zero(&self.days),
            self.operation,
        )
        .map_or_else(|| INVALID_DATE.to_string(), format_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_and_format() {
        assert_eq!(parse_date("05-03-2024"), Ok(date(2024, 3, 5)));
        assert_eq!(format_date(date(2024, 3, 5)), "05-03-2024");
        assert!(parse_date("31-02-2024").is_err());
        assert!(parse_date("2024-03-05").is_err());
        assert!(parse_date("05-03").is_err());
        assert!(parse_date("05-03-24").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_difference_with_borrow() {
        let diff = difference(date(2024, 1, 15), date(2024, 3, 10));
        assert_eq!(diff.total_days, 55);
        // 10 - 15 borrows February 2024 (29 days)
        assert_eq!((diff.years, diff.months, diff.days), (0, 1, 24));
    }

    #[test]
    fn test_difference_is_symmetric() {
        let a = date(2020, 6, 15);
        let b = date(2023, 2, 10);
        assert_eq!(difference(a, b), difference(b, a));
        let diff = difference(a, b);
        assert_eq!((diff.years, diff.months, diff.days), (2, 7, 26));
    }

    #[test]
    fn test_add_month_overflows() {
        assert_eq!(
            add_subtract(date(2023, 1, 31), 0, 1, 0, DateOperation::Add),
            Some(date(2023, 3, 3))
        );
        assert_eq!(
            add_subtract(date(2024, 2, 29), 1, 0, 0, DateOperation::Add),
            Some(date(2025, 3, 1))
        );
        assert_eq!(
            add_subtract(date(2024, 3, 1), 0, 0, 1, DateOperation::Subtract),
            Some(date(2024, 2, 29))
        );
        assert_eq!(
            add_subtract(date(2024, 1, 15), 0, 13, 0, DateOperation::Add),
            Some(date(2025, 2, 15))
        );
    }

    #[test]
    fn test_raw_date_formatting() {
        assert_eq!(format_raw_date_input("1"), "1");
        assert_eq!(format_raw_date_input("123"), "12-3");
        assert_eq!(format_raw_date_input("12032024"), "12-03-2024");
        assert_eq!(format_raw_date_input("1203202499"), "12-03-2024");
    }

    #[test]
    fn test_date_keypad() {
        assert_eq!(press_date_key("12-0", "3"), "12-03");
        assert_eq!(press_date_key("12-03", "backspace"), "12-0");
        assert_eq!(press_date_key("12-", "backspace"), "1");
        assert_eq!(press_date_key("12-03-2024", "5"), "12-03-2024");
        assert_eq!(press_date_key("12", "."), "12");
        assert_eq!(press_date_key("12", "C"), "");
    }

    #[test]
    fn test_calculator_state() {
        let mut calc = DateCalculator::new(date(2024, 3, 5));
        assert_eq!(calc.difference().map(|d| d.total_days), Some(0));

        calc.press("switch_focus_down");
        calc.press("C");
        for key in ["1", "5", "0", "3", "2", "0", "2", "4"] {
            calc.press(key);
        }
        assert_eq!(calc.to_date, "15-03-2024");
        assert_eq!(calc.difference().map(|d| d.total_days), Some(10));

        calc.days = "10".to_string();
        assert_eq!(calc.add_subtract_result(), "15-03-2024");

        calc.base_date = "99-99-9999".to_string();
        assert_eq!(calc.add_subtract_result(), INVALID_DATE);
    }

    #[test]
    fn test_calendar_month() {
        let page = CalendarMonth::new(2024, 12, 1).unwrap();
        assert_eq!((page.year, page.month), (2025, 1));
        assert_eq!(page.days_in_month, 31);
        // 1 Jan 2025 was a Wednesday
        assert_eq!(page.first_weekday, 3);
        assert_eq!(page.pick(2), Some("02-01-2025".to_string()));
        assert_eq!(CalendarMonth::new(2024, 2, 0).map(|p| p.days_in_month), Some(29));
    }
}
