//! Shared helpers for WASM API operations
//!
//! Console logging macros, serde conversions across the JS boundary and
//! error-to-`JsValue` mapping used by every API module.

use std::fmt::Display;
use std::sync::{Mutex, MutexGuard};

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        wasm_error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        wasm_error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Error Helpers
// ============================================================================

/// Log a domain error and hand its message to JavaScript
pub fn js_error(err: impl Display) -> JsValue {
    let msg = err.to_string();
    wasm_error!("{}", msg);
    JsValue::from_str(&msg)
}

/// Lock a global, reporting poisoning as a JS error
pub fn lock<'a, T>(mutex: &'a Mutex<T>, name: &str) -> Result<MutexGuard<'a, T>, JsValue> {
    mutex
        .lock()
        .map_err(|_| js_error(format!("{} lock poisoned", name)))
}

/// Validate that an index is within bounds
pub fn validate_index(index: usize, max_length: usize, context: &str) -> Result<(), String> {
    if index >= max_length {
        return Err(format!(
            "{} index {} out of bounds (max: {})",
            context,
            index,
            max_length.saturating_sub(1)
        ));
    }

    Ok(())
}
