use preprocess_core::contract::decode_request;
use preprocess_core::normalize::normalize;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// Handles one preprocessing invocation: unwrap the event body, decode
/// the request, normalize its text, and wrap the result in a 200
/// response whose body is the JSON-encoded normalized string.
///
/// Every malformed input (missing body, non-JSON body, missing or
/// non-string `text`) becomes a structured 400 response rather than a
/// fault surfaced to the runtime.
pub fn handle_preprocess_event(event: Value) -> ApiGatewayResponse {
    let payload = match unwrap_apigw_event(event) {
        Ok(value) => value,
        Err(message) => return validation_error_response(&message),
    };

    let request = match decode_request(payload) {
        Ok(value) => value,
        Err(error) => return validation_error_response(error.message()),
    };

    success_response(200, normalize(&request.text))
}

fn unwrap_apigw_event(event: Value) -> Result<Value, String> {
    let Some(object) = event.as_object() else {
        return Err("Request payload must be a JSON object".to_string());
    };

    let Some(body) = object.get("body") else {
        return Err("Request payload must include a body".to_string());
    };

    match body {
        Value::Object(_) => Ok(body.clone()),
        Value::String(text) => {
            serde_json::from_str(text).map_err(|error| format!("Malformed JSON body: {error}"))
        }
        _ => Err("Request body must be a JSON object or a JSON-encoded string".to_string()),
    }
}

fn validation_error_response(message: &str) -> ApiGatewayResponse {
    error_response(
        400,
        json!({
            "error": "validation_error",
            "message": message,
        }),
    )
}

fn success_response(status_code: u16, payload: impl Serialize) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: serde_json::to_string(&payload).expect("response payload should serialize"),
    }
}

fn error_response(status_code: u16, payload: Value) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: payload.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_text_from_json_string_body() {
        let response = handle_preprocess_event(json!({
            "body": "{\"text\": \"  Hello, World!  \\n\"}"
        }));

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "\"hello world\"");
    }

    #[test]
    fn accepts_object_body_from_direct_invocation() {
        let response = handle_preprocess_event(json!({
            "body": {"text": "Multi\nLine. Text"}
        }));

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "\"multi line text\"");
    }

    #[test]
    fn empty_text_round_trips_as_empty_json_string() {
        let response = handle_preprocess_event(json!({"body": "{\"text\": \"\"}"}));

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "\"\"");
    }

    #[test]
    fn serializes_status_code_in_api_gateway_casing() {
        let response = handle_preprocess_event(json!({"body": "{\"text\": \"ok\"}"}));

        let serialized = serde_json::to_value(&response).expect("response should serialize");
        assert_eq!(serialized["statusCode"], 200);
        assert_eq!(serialized["headers"]["Content-Type"], "application/json");
    }

    #[test]
    fn rejects_event_without_body() {
        let response = handle_preprocess_event(json!({"text": "Hello"}));

        assert_eq!(response.status_code, 400);
        assert!(response.body.contains("validation_error"));
        assert!(response.body.contains("must include a body"));
    }

    #[test]
    fn rejects_body_that_is_not_json() {
        let response = handle_preprocess_event(json!({"body": "not json"}));

        assert_eq!(response.status_code, 400);
        assert!(response.body.contains("Malformed JSON body"));
    }

    #[test]
    fn rejects_non_object_non_string_body() {
        let response = handle_preprocess_event(json!({"body": 7}));

        assert_eq!(response.status_code, 400);
        assert!(response.body.contains("validation_error"));
    }

    #[test]
    fn rejects_missing_text_field() {
        let response = handle_preprocess_event(json!({"body": "{\"message\": \"Hello\"}"}));

        assert_eq!(response.status_code, 400);
        assert!(response.body.contains("Malformed request"));
    }

    #[test]
    fn rejects_non_string_text_field() {
        let response = handle_preprocess_event(json!({"body": "{\"text\": 42}"}));

        assert_eq!(response.status_code, 400);
        assert!(response.body.contains("Malformed request"));
    }

    #[test]
    fn rejects_non_object_event() {
        let response = handle_preprocess_event(json!("just a string"));

        assert_eq!(response.status_code, 400);
        assert!(response.body.contains("must be a JSON object"));
    }
}
