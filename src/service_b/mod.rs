//! Service B: answers every invocation with its greeting and the echoed event.

pub mod handler;

use crate::core::models::{InvocationEvent, ProcessedResult};
use crate::errors::ServiceError;
use crate::greeting;
use crate::response::Response;

pub use handler::handler;

pub const MESSAGE: &str = "Hello from Service B (v11-B)";

#[must_use]
pub fn process_service_b_event(event: InvocationEvent) -> ProcessedResult {
    greeting::process_event(MESSAGE, event)
}

/// Builds the Service B response without a Lambda context.
///
/// # Errors
///
/// Returns `ServiceError::Serialization` if the event cannot be re-encoded.
pub fn respond(event: InvocationEvent) -> Result<Response, ServiceError> {
    greeting::respond(MESSAGE, event)
}
