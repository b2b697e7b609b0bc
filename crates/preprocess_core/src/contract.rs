use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Decoded form of the request body: `{"text": "<string>"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreprocessRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Decodes an already-parsed request payload. A missing `text` field or
/// a `text` value of any non-string type fails validation.
pub fn decode_request(payload: Value) -> Result<PreprocessRequest, ValidationError> {
    serde_json::from_value(payload)
        .map_err(|error| ValidationError::new(format!("Malformed request: {error}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_text_field() {
        let request = decode_request(json!({"text": "Hello"})).expect("request should decode");
        assert_eq!(request.text, "Hello");
    }

    #[test]
    fn rejects_missing_text_field() {
        let error = decode_request(json!({"message": "Hello"})).expect_err("request should fail");
        assert!(error.message().contains("Malformed request"));
    }

    #[test]
    fn rejects_non_string_text() {
        let error = decode_request(json!({"text": 42})).expect_err("request should fail");
        assert!(error.message().contains("Malformed request"));
    }
}
