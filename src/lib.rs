//! Hello services - two greeting functions served from AWS Lambda.
//!
//! Each service answers an API Gateway invocation with a fixed greeting and
//! the event it received, wrapped in a `statusCode`/`headers`/`body`
//! envelope:
//!
//! 1. Service A (`service-a` binary) greets with [`service_a::MESSAGE`]
//! 2. Service B (`service-b` binary) greets with [`service_b::MESSAGE`]
//!
//! # Example
//!
//! ```
//! use hello_services::core::models::InvocationEvent;
//!
//! let event = InvocationEvent::from(serde_json::json!({}));
//! let response = hello_services::service_a::respond(event).unwrap();
//!
//! assert_eq!(response.status_code, 200);
//! assert_eq!(
//!     response.body,
//!     r#"{"message":"Hello from Service A (v11-A)","eventData":{}}"#
//! );
//! ```
pub mod core;
pub mod errors;
pub mod greeting;
pub mod response;
pub mod service_a;
pub mod service_b;

use crate::core::config::{LogConfig, LogFormat};

/// Configure structured logging for AWS Lambda environments.
///
/// Reads `LOG_FORMAT` and `LOG_LEVEL` from the environment; an invalid
/// value falls back to JSON at `info` and is reported once the subscriber
/// is installed. Safe to call more than once.
///
/// # Example
///
/// ```
/// hello_services::setup_logging();
/// ```
pub fn setup_logging() {
    match LogConfig::from_env() {
        Ok(config) => setup_logging_with(&config),
        Err(e) => {
            setup_logging_with(&LogConfig::default());
            tracing::warn!("Falling back to default logging: {}", e);
        }
    }
}

/// Installs the global subscriber described by `config`.
///
/// Does nothing if a subscriber is already installed.
pub fn setup_logging_with(config: &LogConfig) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match config.format {
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
        }
        LogFormat::Text => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
        }
    };

    if result.is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}
