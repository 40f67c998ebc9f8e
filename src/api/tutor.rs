//! AI tutor exports
//!
//! Rust builds the request and interprets the response; JavaScript performs
//! the `fetch` in between.

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, js_error, serialize};
use super::settings::current_settings;
use crate::renderers::segment_response;
use crate::tutor::{build_request, parse_response, TutorError, TutorInput, TutorSession};
use crate::wasm_info;

#[wasm_bindgen(js_name = TutorSession)]
pub struct TutorSessionHandle {
    session: TutorSession,
}

#[wasm_bindgen(js_class = TutorSession)]
impl TutorSessionHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> TutorSessionHandle {
        TutorSessionHandle { session: TutorSession::new() }
    }

    /// Start a solve with the session settings
    ///
    /// Returns `{ url, body }` to POST, or `null` when there is nothing to
    /// send. Other failures are thrown and recorded in the state.
    pub fn begin(&mut self, input: JsValue) -> Result<JsValue, JsValue> {
        let input: TutorInput = deserialize(input, "Invalid tutor input")?;
        let settings = current_settings()?;

        match self.session.begin(&settings, &input) {
            Ok(request) => serialize(&request, "Failed to serialize tutor request"),
            Err(TutorError::EmptyInput) => Ok(JsValue::NULL),
            Err(err) => Err(js_error(err)),
        }
    }

    /// Feed the response body text
    pub fn complete(&mut self, body: &str) -> Result<JsValue, JsValue> {
        let state = self.session.complete(body);
        serialize(state, "Failed to serialize tutor state")
    }

    /// Record a network failure
    pub fn fail(&mut self, message: &str) -> Result<JsValue, JsValue> {
        self.session.fail(message);
        self.state()
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    #[wasm_bindgen(js_name = isLoading)]
    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        serialize(self.session.state(), "Failed to serialize tutor state")
    }

    /// Answer blocks for rendering
    pub fn blocks(&self) -> Result<JsValue, JsValue> {
        serialize(&self.session.blocks(), "Failed to serialize answer blocks")
    }
}

impl Default for TutorSessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Build `{ url, body }` for `input` without touching any session
#[wasm_bindgen(js_name = buildTutorRequest)]
pub fn build_tutor_request(input: JsValue) -> Result<JsValue, JsValue> {
    let input: TutorInput = deserialize(input, "Invalid tutor input")?;
    let request = build_request(&current_settings()?, &input).map_err(js_error)?;
    wasm_info!("buildTutorRequest: {} byte body", request.body.len());
    serialize(&request, "Failed to serialize tutor request")
}

/// Answer text of a response body; throws the user-facing error message
#[wasm_bindgen(js_name = parseTutorResponse)]
pub fn parse_tutor_response(body: &str) -> Result<String, JsValue> {
    parse_response(body).map_err(js_error)
}

#[wasm_bindgen(js_name = segmentTutorResponse)]
pub fn segment_tutor_response(text: &str) -> Result<JsValue, JsValue> {
    serialize(&segment_response(text), "Failed to serialize answer blocks")
}

/// Image input from an uploaded file's data URL
#[wasm_bindgen(js_name = imageInputFromDataUrl)]
pub fn image_input_from_data_url(url: &str) -> Result<JsValue, JsValue> {
    let input = TutorInput::from_data_url(url).map_err(js_error)?;
    serialize(&input, "Failed to serialize tutor input")
}
