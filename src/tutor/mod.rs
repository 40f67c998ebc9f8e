//! Tutor boundary
//!
//! Everything about the remote tutor except the HTTP call: input shapes,
//! request construction, response parsing and the session state machine.

pub mod errors;
pub mod request;
pub mod response;
pub mod session;

pub use errors::{TutorError, TutorResult};
pub use request::{build_request, TutorInput, TutorRequest};
pub use response::parse_response;
pub use session::{TutorSession, TutorState};
