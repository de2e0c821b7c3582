//! Lambda adapter for Service A.

use lambda_runtime::{Error, LambdaEvent};

use crate::core::models::InvocationEvent;
use crate::response::Response;

pub use self::function_handler as handler;

/// Lambda handler for Service A.
///
/// # Errors
///
/// Propagates a serialization failure to the runtime; there is no other
/// failure path.
#[tracing::instrument(
    level = "info",
    skip(event),
    fields(service = "service-a", request_id = %event.context.request_id)
)]
pub async fn function_handler(event: LambdaEvent<InvocationEvent>) -> Result<Response, Error> {
    Ok(super::respond(event.payload)?)
}
