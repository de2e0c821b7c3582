//! Greeting logic shared by both services.
//!
//! A service is nothing more than its fixed message: the processing step
//! pairs that message with the untouched event and the response step wraps
//! the pair in a 200 JSON envelope.

use tracing::info;

use crate::core::models::{InvocationEvent, ProcessedResult};
use crate::errors::ServiceError;
use crate::response::Response;

#[must_use]
pub fn process_event(message: &str, event: InvocationEvent) -> ProcessedResult {
    ProcessedResult {
        message: message.to_string(),
        event_data: event,
    }
}

/// Logs `message` and answers with the processed result as the JSON body.
///
/// # Errors
///
/// Returns `ServiceError::Serialization` if the event cannot be re-encoded.
pub fn respond(message: &str, event: InvocationEvent) -> Result<Response, ServiceError> {
    info!("{}", message);
    Response::ok_json(&process_event(message, event))
}
