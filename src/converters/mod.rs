//! Converters
//!
//! Unit conversion across fixed ratio tables (temperature by formula) and
//! calendar date arithmetic.

pub mod dates;
pub mod units;

use thiserror::Error;

pub use dates::{CalendarMonth, DateCalculator, DateDifference, DateField, DateOperation, DateTab};
pub use units::{Category, ConverterDisplay, UnitConverter};

/// Converter and date failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Unit name not part of the active category
    #[error("Unknown unit '{unit}' for {category}")]
    UnknownUnit { category: String, unit: String },

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

pub type ConversionResult<T> = Result<T, ConversionError>;
