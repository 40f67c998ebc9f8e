//! Math Tutor WASM API
//!
//! JavaScript-facing classes and functions, grouped by screen.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, serde conversions, error mapping
//! - `types`: result structs shared across exports
//! - `editor`: math input field, evaluation, preview, keyboard tabs
//! - `calculator`: calculator screen
//! - `converters`: unit converter and date calculator
//! - `settings`: API key storage and theme
//! - `tutor`: request building and response handling

pub mod helpers;
pub mod types;
pub mod calculator;
pub mod converters;
pub mod editor;
pub mod settings;
pub mod tutor;

pub use calculator::CalculatorHandle;
pub use converters::{get_calendar_month, get_categories, get_units, DateCalculatorHandle, UnitConverterHandle};
pub use editor::{evaluate_expression, get_keyboard_tab, get_keyboard_tabs, render_preview_latex, MathInputHandle};
pub use settings::{get_settings, load_settings, save_api_key, toggle_theme};
pub use tutor::{
    build_tutor_request, image_input_from_data_url, parse_tutor_response, segment_tutor_response,
    TutorSessionHandle,
};
