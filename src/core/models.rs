use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw payload handed to a function by the invoking platform.
///
/// The handlers never look inside it; it is carried through and echoed back
/// exactly as it arrived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvocationEvent(pub Value);

impl InvocationEvent {
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for InvocationEvent {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedResult {
    pub message: String,
    pub event_data: InvocationEvent,
}
