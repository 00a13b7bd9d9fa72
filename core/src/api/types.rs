//! Wire types for the classification service.
//!
//! Success: `{"class": "...", "confidence": 0.87}`. Failures carry
//! `{"error": "..."}`, on any status code.

use serde::{Deserialize, Serialize};

use crate::error::{ClassifyError, ClassifyResult};
use crate::models::ClassificationResult;

/// Body returned by `POST /predict`.
///
/// Every field is optional so one shape covers success and error bodies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Predicted class label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// Confidence in [0, 1]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    /// Server-side failure message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body returned by `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

/// Turn a raw status code and body into a classification outcome.
///
/// - non-2xx: [`ClassifyError::Http`], with the body's `error` if it parses
/// - 2xx with `error`: [`ClassifyError::Logical`]
/// - 2xx with `class` and `confidence`: the result
/// - anything else: [`ClassifyError::Malformed`]
pub fn interpret_response(status: u16, body: &str) -> ClassifyResult<ClassificationResult> {
    let parsed = serde_json::from_str::<PredictResponse>(body);

    if !(200..300).contains(&status) {
        let message = parsed.ok().and_then(|r| r.error);
        return Err(ClassifyError::Http { status, message });
    }

    let response = parsed.map_err(|e| ClassifyError::Malformed(format!("invalid JSON: {}", e)))?;

    if let Some(error) = response.error {
        return Err(ClassifyError::Logical(error));
    }

    match (response.class, response.confidence) {
        (Some(class), Some(confidence)) => Ok(ClassificationResult::new(class, confidence)),
        (None, _) => Err(ClassifyError::Malformed("missing 'class' field".into())),
        (_, None) => Err(ClassifyError::Malformed("missing 'confidence' field".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_body() {
        let body = json!({"class": "NonDemented", "confidence": 0.8734}).to_string();
        let result = interpret_response(200, &body).unwrap();
        assert_eq!(result, ClassificationResult::new("NonDemented", 0.8734));
    }

    #[test]
    fn test_error_field_on_success_status_is_logical_failure() {
        let body = json!({"error": "Failed to process image."}).to_string();
        assert_eq!(
            interpret_response(200, &body),
            Err(ClassifyError::Logical("Failed to process image.".into()))
        );
    }

    #[test]
    fn test_error_field_wins_over_result_fields() {
        let body = json!({"class": "NonDemented", "confidence": 0.9, "error": "stale model"}).to_string();
        assert!(matches!(
            interpret_response(200, &body),
            Err(ClassifyError::Logical(msg)) if msg == "stale model"
        ));
    }

    #[test]
    fn test_http_failure_with_server_message() {
        let body = json!({"error": "model unavailable"}).to_string();
        assert_eq!(
            interpret_response(500, &body),
            Err(ClassifyError::Http {
                status: 500,
                message: Some("model unavailable".into())
            })
        );
    }

    #[test]
    fn test_http_failure_without_json_body() {
        let err = interpret_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 502");

        let err = interpret_response(400, "{}").unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 400");
    }

    #[test]
    fn test_malformed_success_bodies() {
        assert!(matches!(interpret_response(200, "not json"), Err(ClassifyError::Malformed(_))));
        assert!(matches!(
            interpret_response(200, r#"{"confidence": 0.5}"#),
            Err(ClassifyError::Malformed(_))
        ));
        assert!(matches!(
            interpret_response(204, r#"{"class": "MildDemented"}"#),
            Err(ClassifyError::Malformed(_))
        ));
    }

    #[test]
    fn test_health_response_deserialization() {
        let health: HealthResponse =
            serde_json::from_str(r#"{"message": "Alzheimer's API is running!"}"#).unwrap();
        assert!(health.message.contains("running"));
    }
}
