//! Service A: answers every invocation with its greeting and the echoed event.

pub mod handler;

use crate::core::models::{InvocationEvent, ProcessedResult};
use crate::errors::ServiceError;
use crate::greeting;
use crate::response::Response;

pub use handler::handler;

pub const MESSAGE: &str = "Hello from Service A (v11-A)";

#[must_use]
pub fn process_service_a_event(event: InvocationEvent) -> ProcessedResult {
    greeting::process_event(MESSAGE, event)
}

/// Builds the Service A response without a Lambda context.
///
/// # Errors
///
/// Returns `ServiceError::Serialization` if the event cannot be re-encoded.
pub fn respond(event: InvocationEvent) -> Result<Response, ServiceError> {
    greeting::respond(MESSAGE, event)
}
