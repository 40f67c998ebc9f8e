//! Tutor errors
//!
//! The `Display` text of each variant is what the user sees.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TutorError {
    #[error("API Key is missing. Please add it in Settings.")]
    MissingApiKey,

    /// Nothing typed, drawn or attached
    #[error("Nothing to solve.")]
    EmptyInput,

    /// Error object returned by the API
    #[error("{0}")]
    Api(String),

    #[error("No response from AI.")]
    NoResponse,

    /// Body was not the JSON shape the API documents
    #[error("Invalid response from AI: {0}")]
    InvalidResponse(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),

    /// Attached image was not a base64 data URL
    #[error("Unsupported image data")]
    InvalidImage,
}

pub type TutorResult<T> = Result<T, TutorError>;
