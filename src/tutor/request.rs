//! Tutor request construction
//!
//! Builds the `generateContent` URL and JSON body. The HTTP call itself is
//! made by JavaScript.

use serde::{Deserialize, Serialize};

use super::errors::{TutorError, TutorResult};
use crate::models::Settings;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Instruction sent ahead of every problem
pub const BASE_PROMPT: &str =
    "Solve this math problem step-by-step. formatting with LaTeX ($$ or $). If it's a graph, describe it. ";

const DRAWING_PROMPT: &str = "Analyzing the handwritten math image.";

const DRAWING_MIME_TYPE: &str = "image/png";

/// What the user asks about
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TutorInput {
    /// Typed expression
    Text { expression: String },
    /// Canvas drawing as base64 PNG (no data URL prefix)
    Drawing { data: String },
    /// Uploaded image
    Image { mime_type: String, data: String },
}

impl TutorInput {
    /// Split a `data:<mime>;base64,<payload>` URL into an image input
    pub fn from_data_url(url: &str) -> TutorResult<Self> {
        let rest = url.strip_prefix("data:").ok_or(TutorError::InvalidImage)?;
        let (header, data) = rest.split_once(',').ok_or(TutorError::InvalidImage)?;
        let mime_type = header.strip_suffix(";base64").ok_or(TutorError::InvalidImage)?;

        if mime_type.is_empty() || data.is_empty() {
            return Err(TutorError::InvalidImage);
        }

        Ok(TutorInput::Image { mime_type: mime_type.to_string(), data: data.to_string() })
    }

    pub fn is_empty(&self) -> bool {
        match self {
            TutorInput::Text { expression } => expression.trim().is_empty(),
            TutorInput::Drawing { data } | TutorInput::Image { data, .. } => data.is_empty(),
        }
    }

    fn parts(&self) -> Vec<Part> {
        match self {
            TutorInput::Text { expression } => {
                vec![Part::text(format!("{} Problem: {}", BASE_PROMPT, expression))]
            }
            TutorInput::Drawing { data } => vec![
                Part::text(format!("{}{}", BASE_PROMPT, DRAWING_PROMPT)),
                Part::inline(DRAWING_MIME_TYPE, data),
            ],
            TutorInput::Image { mime_type, data } => {
                vec![Part::text(BASE_PROMPT.to_string()), Part::inline(mime_type, data)]
            }
        }
    }
}

// ============================================================================
// Request body
// ============================================================================

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

impl Part {
    fn text(text: String) -> Self {
        Part::Text { text }
    }

    fn inline(mime_type: &str, data: &str) -> Self {
        Part::InlineData {
            inline_data: InlineData { mime_type: mime_type.to_string(), data: data.to_string() },
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f32,
}

/// Ready-to-send POST
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TutorRequest {
    pub url: String,
    /// JSON body
    pub body: String,
}

/// Build the request for `input`
///
/// Empty input is checked first so that pressing solve on an empty field
/// does nothing even without a key.
pub fn build_request(settings: &Settings, input: &TutorInput) -> TutorResult<TutorRequest> {
    if input.is_empty() {
        return Err(TutorError::EmptyInput);
    }
    if !settings.has_api_key() {
        return Err(TutorError::MissingApiKey);
    }

    let payload = GenerateContentRequest {
        contents: vec![Content { role: "user".to_string(), parts: input.parts() }],
        generation_config: GenerationConfig { temperature: settings.temperature },
    };
    let body = serde_json::to_string(&payload).map_err(|e| TutorError::Encode(e.to_string()))?;

    Ok(TutorRequest {
        url: format!("{}/{}:generateContent?key={}", API_BASE, settings.model, settings.api_key.trim()),
        body,
    })
}
