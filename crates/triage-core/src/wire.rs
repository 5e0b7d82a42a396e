//! Serve-time request/response shapes shared with the HTTP layer.

use serde::{Deserialize, Serialize};

/// Free-text symptom description submitted by a patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomRequest {
    pub text: String,
}

/// Gated classification returned to the caller.
///
/// `normalized_symptom` is either a canonical label or the rejection message;
/// `confidence` is always the raw maximum class probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomResponse {
    pub normalized_symptom: String,
    pub confidence: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_from_json() {
        let req: SymptomRequest = serde_json::from_str(r#"{"text": "my head hurts"}"#).unwrap();
        assert_eq!(req.text, "my head hurts");
    }

    #[test]
    fn response_field_names() {
        let resp = SymptomResponse {
            normalized_symptom: "Headache".into(),
            confidence: 0.85,
        };
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["normalized_symptom"], "Headache");
        assert!((value["confidence"].as_f64().unwrap() - 0.85).abs() < 1e-6);
    }

    #[test]
    fn request_missing_text_rejected() {
        assert!(serde_json::from_str::<SymptomRequest>("{}").is_err());
    }
}
