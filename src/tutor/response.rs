//! Tutor response parsing

use serde::Deserialize;

use super::errors::{TutorError, TutorResult};

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct GenerateContentResponse {
    error: Option<ApiError>,
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct ApiError {
    message: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct CandidatePart {
    text: Option<String>,
}

/// Extract the answer text from a `generateContent` response body
///
/// An `error` object wins over any candidates. Only the first part of the
/// first candidate is read.
pub fn parse_response(body: &str) -> TutorResult<String> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| TutorError::InvalidResponse(e.to_string()))?;

    if let Some(error) = response.error {
        return Err(TutorError::Api(error.message));
    }

    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .filter(|text| !text.is_empty())
        .ok_or(TutorError::NoResponse)
}
