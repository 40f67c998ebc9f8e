//! Tutor session state
//!
//! One request at a time from the user's point of view: `begin` moves to
//! `Loading`, and whichever completion arrives last decides the final state.

use serde::{Deserialize, Serialize};

use super::errors::{TutorError, TutorResult};
use super::request::{build_request, TutorInput, TutorRequest};
use super::response::parse_response;
use crate::models::Settings;
use crate::renderers::{segment_response, Block};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TutorState {
    #[default]
    Idle,
    Loading,
    Success { text: String },
    Failure { message: String },
}

#[derive(Debug, Clone, Default)]
pub struct TutorSession {
    state: TutorState,
}

impl TutorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TutorState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == TutorState::Loading
    }

    /// Start a solve; returns the request for JavaScript to send
    ///
    /// Empty input leaves the state untouched. Any other failure becomes
    /// the session's failure message.
    pub fn begin(&mut self, settings: &Settings, input: &TutorInput) -> TutorResult<TutorRequest> {
        match build_request(settings, input) {
            Ok(request) => {
                log::info!("tutor request started ({})", settings.model);
                self.state = TutorState::Loading;
                Ok(request)
            }
            Err(TutorError::EmptyInput) => Err(TutorError::EmptyInput),
            Err(err) => {
                self.fail(&err.to_string());
                Err(err)
            }
        }
    }

    /// Feed the HTTP response body
    pub fn complete(&mut self, body: &str) -> &TutorState {
        match parse_response(body) {
            Ok(text) => {
                log::info!("tutor response received ({} chars)", text.len());
                self.state = TutorState::Success { text };
            }
            Err(err) => self.fail(&err.to_string()),
        }
        &self.state
    }

    /// Record a transport failure (network error, non-JSON body)
    pub fn fail(&mut self, message: &str) {
        log::warn!("tutor request failed: {}", message);
        self.state = TutorState::Failure { message: message.to_string() };
    }

    pub fn reset(&mut self) {
        self.state = TutorState::Idle;
    }

    /// Answer split into renderable blocks (empty unless the last solve succeeded)
    pub fn blocks(&self) -> Vec<Block> {
        match &self.state {
            TutorState::Success { text } => segment_response(text),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed() -> Settings {
        Settings { api_key: "key".to_string(), ..Settings::default() }
    }

    fn text(expression: &str) -> TutorInput {
        TutorInput::Text { expression: expression.to_string() }
    }

    #[test]
    fn test_success_flow() {
        let mut session = TutorSession::new();
        assert!(session.begin(&keyed(), &text("1+1")).is_ok());
        assert!(session.is_loading());

        session.complete(r##"{"candidates":[{"content":{"parts":[{"text":"# Answer\n$2$"}]}}]}"##);
        assert_eq!(session.state(), &TutorState::Success { text: "# Answer\n$2$".to_string() });
        assert_eq!(session.blocks().len(), 2);
    }

    #[test]
    fn test_missing_key_fails_immediately() {
        let mut session = TutorSession::new();
        assert_eq!(session.begin(&Settings::default(), &text("1+1")), Err(TutorError::MissingApiKey));
        assert_eq!(
            session.state(),
            &TutorState::Failure { message: "API Key is missing. Please add it in Settings.".to_string() }
        );
    }

    #[test]
    fn test_empty_input_is_ignored() {
        let mut session = TutorSession::new();
        assert_eq!(session.begin(&keyed(), &text("")), Err(TutorError::EmptyInput));
        assert_eq!(session.state(), &TutorState::Idle);
    }

    #[test]
    fn test_last_completion_wins() {
        let mut session = TutorSession::new();
        session.begin(&keyed(), &text("1+1")).unwrap();
        session.begin(&keyed(), &text("2+2")).unwrap();

        session.complete(r#"{"candidates":[{"content":{"parts":[{"text":"first"}]}}]}"#);
        session.complete(r#"{"error":{"message":"quota exceeded"}}"#);
        assert_eq!(session.state(), &TutorState::Failure { message: "quota exceeded".to_string() });
        assert!(session.blocks().is_empty());
    }
}
