//! User settings
//!
//! Passed explicitly into the tutor request builder; the WASM layer is the
//! only place that reads or writes browser storage.

use serde::{Deserialize, Serialize};

/// Default generative-language model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-09-2025";

/// Local storage key holding the API key
pub const API_KEY_STORAGE_KEY: &str = "gemini_api_key";

/// Sampling temperature sent with every tutor request
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// API credential for the tutor endpoint (empty when not configured)
    pub api_key: String,

    /// Dark theme toggle
    pub dark_mode: bool,

    /// Model name used in the request URL
    pub model: String,

    pub temperature: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            dark_mode: true,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl Settings {
    /// Resolve the API key: stored value first, then the host-provided fallback
    pub fn with_api_key(stored: Option<String>, fallback: Option<&str>) -> Self {
        let api_key = stored
            .filter(|key| !key.trim().is_empty())
            .or_else(|| fallback.map(str::to_string))
            .unwrap_or_default();

        Self { api_key, ..Self::default() }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.dark_mode);
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert!(!settings.has_api_key());
    }

    #[test]
    fn test_api_key_resolution() {
        let settings = Settings::with_api_key(Some("stored".into()), Some("env"));
        assert_eq!(settings.api_key, "stored");

        let settings = Settings::with_api_key(Some("  ".into()), Some("env"));
        assert_eq!(settings.api_key, "env");

        let settings = Settings::with_api_key(None, None);
        assert_eq!(settings.api_key, "");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"api_key":"abc"}"#).unwrap();
        assert_eq!(settings.api_key, "abc");
        assert!(settings.dark_mode);
        assert_eq!(settings.temperature, DEFAULT_TEMPERATURE);
    }
}
