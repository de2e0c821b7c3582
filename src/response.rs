//! API Gateway style response envelope.
//!
//! Every handler answers with `statusCode`, `headers` and a string `body`,
//! the shape a proxy integration expects back from a function.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl Response {
    /// Serializes `payload` into the body and marks it as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Serialization` if `payload` cannot be encoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use hello_services::response::Response;
    ///
    /// let response = Response::json(200, &serde_json::json!({ "ok": true })).unwrap();
    /// assert_eq!(response.body, r#"{"ok":true}"#);
    /// ```
    pub fn json<T: Serialize>(status_code: u16, payload: &T) -> Result<Self, ServiceError> {
        let body = serde_json::to_string(payload)?;
        Ok(Self {
            status_code,
            headers: BTreeMap::from([(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())]),
            body,
        })
    }

    /// # Errors
    ///
    /// Returns `ServiceError::Serialization` if `payload` cannot be encoded.
    pub fn ok_json<T: Serialize>(payload: &T) -> Result<Self, ServiceError> {
        Self::json(200, payload)
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
