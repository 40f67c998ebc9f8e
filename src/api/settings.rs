//! Settings session and API key persistence
//!
//! The API key lives in `window.localStorage`; when nothing is stored the key
//! baked in at build time (`GEMINI_API_KEY`) is used instead.

use std::sync::Mutex;

use lazy_static::lazy_static;
use wasm_bindgen::prelude::*;
use web_sys::Storage;

use super::helpers::{lock, serialize};
use crate::models::settings::API_KEY_STORAGE_KEY;
use crate::models::Settings;
use crate::{wasm_info, wasm_warn};

/// Key provided by the host build, if any
const BUILD_API_KEY: Option<&str> = option_env!("GEMINI_API_KEY");

lazy_static! {
    static ref SETTINGS: Mutex<Settings> = Mutex::new(Settings::default());
}

/// Copy of the current settings for request building
pub(crate) fn current_settings() -> Result<Settings, JsValue> {
    Ok(lock(&SETTINGS, "settings")?.clone())
}

fn local_storage() -> Result<Storage, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window available"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Read the stored key and reset the session settings
#[wasm_bindgen(js_name = loadSettings)]
pub fn load_settings() -> Result<JsValue, JsValue> {
    let stored = match local_storage() {
        Ok(storage) => storage.get_item(API_KEY_STORAGE_KEY)?,
        Err(err) => {
            wasm_warn!("Settings storage unavailable: {:?}", err);
            None
        }
    };

    let settings = Settings::with_api_key(stored, BUILD_API_KEY);
    wasm_info!("loadSettings: api key {}", if settings.has_api_key() { "present" } else { "missing" });

    let mut current = lock(&SETTINGS, "settings")?;
    *current = settings;
    serialize(&*current, "Failed to serialize settings")
}

/// Store the API key and use it for subsequent requests
#[wasm_bindgen(js_name = saveApiKey)]
pub fn save_api_key(key: &str) -> Result<JsValue, JsValue> {
    local_storage()?.set_item(API_KEY_STORAGE_KEY, key)?;
    wasm_info!("saveApiKey: stored {} chars", key.len());

    let mut current = lock(&SETTINGS, "settings")?;
    current.api_key = key.to_string();
    serialize(&*current, "Failed to serialize settings")
}

#[wasm_bindgen(js_name = getSettings)]
pub fn get_settings() -> Result<JsValue, JsValue> {
    serialize(&current_settings()?, "Failed to serialize settings")
}

/// Flip dark mode; returns the new value
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Result<bool, JsValue> {
    let mut current = lock(&SETTINGS, "settings")?;
    current.toggle_theme();
    Ok(current.dark_mode)
}
