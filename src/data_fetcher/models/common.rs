use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope shared by every API-Football endpoint.
///
/// `results` is the API-reported item count. A count of zero comes with an
/// empty `response`, which callers treat as "nothing found" rather than a
/// parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub results: i32,
    #[serde(default = "Vec::new")]
    pub response: Vec<T>,
    /// `[]` on success, an object or array of messages on failure
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub errors: Value,
}

impl<T> ApiResponse<T> {
    /// True when the payload carries no items, whatever `results` claims
    pub fn is_empty(&self) -> bool {
        self.results == 0 || self.response.is_empty()
    }

    /// Flattens the `errors` field into one message, or `None` when it is empty.
    ///
    /// The API sends `{"token": "Error/Missing application key."}` for auth
    /// problems and `["..."]` in some older responses.
    pub fn reported_error(&self) -> Option<String> {
        let messages: Vec<String> = match &self.errors {
            Value::Object(map) => map
                .iter()
                .map(|(field, message)| format!("{field}: {}", value_text(message)))
                .collect(),
            Value::Array(items) => items.iter().map(value_text).collect(),
            Value::String(message) if !message.is_empty() => vec![message.clone()],
            _ => Vec::new(),
        };

        if messages.is_empty() {
            None
        } else {
            Some(messages.join("; "))
        }
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
