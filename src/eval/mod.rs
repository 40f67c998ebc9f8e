//! Restricted expression evaluator
//!
//! Parses buffer text and evaluates it under an angle unit. Designed to run
//! on every keystroke: nothing here returns an error, every failure becomes
//! [`Evaluation::NoResult`].

pub mod interpreter;
pub mod scope;

pub use interpreter::Interpreter;
pub use scope::{factorial, Scope};

use crate::models::{AngleUnit, Evaluation};
use crate::parse;

/// Decimal places kept in results (hides noise such as cos(90°) = 6e-17)
pub const RESULT_DECIMALS: i32 = 10;

/// Evaluate an expression for display
pub fn evaluate(source: &str, angle_unit: AngleUnit) -> Evaluation {
    let expr = match parse::parse(source) {
        Ok(expr) => expr,
        Err(err) => {
            log::debug!("no result for '{}': {}", source, err);
            return Evaluation::NoResult;
        }
    };

    let value = Interpreter::new(Scope::new(angle_unit)).eval(&expr);
    if !value.is_finite() {
        log::debug!("no result for '{}': non-finite value {}", source, value);
        return Evaluation::NoResult;
    }

    Evaluation::Number(round_decimals(value, RESULT_DECIMALS))
}

/// Magnitude from which an f64 carries no fractional digits worth rounding
const ROUNDING_LIMIT: f64 = 1e15;

/// Round half up to `decimals` places; negative zero becomes zero
///
/// Values at or above [`ROUNDING_LIMIT`], or too large to scale, are returned as is.
pub fn round_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    if value.abs() >= ROUNDING_LIMIT || !(value * factor).is_finite() {
        return value;
    }

    let rounded = (value * factor + 0.5).floor() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
