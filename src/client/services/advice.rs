use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::client::services::prompt::AdviceKind;

/// Fallback shown when the backend reports a failure without an error text.
pub const GENERIC_BACKEND_ERROR: &str = "Failed to generate advice";

/// Body of the one outbound call.
#[derive(Debug, Clone, Serialize)]
pub struct AdviceRequest {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: AdviceKind,
}

/// Backend response envelope: `status == "success"` carries the advice text,
/// anything else is a server-reported failure with an optional error text.
#[derive(Debug, Clone, Deserialize)]
pub struct AdviceResponse {
    pub status: String,
    #[serde(default)]
    pub advice: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// What can go wrong with an advice request, in the order the checks run.
/// Display output is shown to the user as-is.
#[derive(Debug, Clone, Error)]
pub enum AdviceError {
    #[error("Connection error: {0}. Make sure the advice backend is running on the configured endpoint.")]
    Network(String),
    #[error("The advice backend answered with HTTP status {0}")]
    Http(u16),
    #[error("{}", .0.as_deref().unwrap_or(GENERIC_BACKEND_ERROR))]
    Backend(Option<String>),
}

/// HTTP client for the advice-generation endpoint. Shared behind an `Arc`;
/// the underlying reqwest client pools connections internally.
pub struct AdviceService {
    client: Client,
    endpoint: String,
}

impl AdviceService {
    pub fn new(endpoint: String) -> Self {
        // No client-side timeout: the call waits for the backend to answer or
        // for the transport to fail.
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends the formatted prompt and returns the advice text, or the
    /// user-presentable error. Non-2xx statuses fail regardless of the body.
    pub async fn request_advice(
        &self,
        text: String,
        kind: AdviceKind,
    ) -> Result<String, AdviceError> {
        let body = AdviceRequest { text, kind };
        log::info!("POST {} ({})", self.endpoint, kind.key());

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| AdviceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdviceError::Http(status.as_u16()));
        }

        let parsed: AdviceResponse = response
            .json()
            .await
            .map_err(|e| AdviceError::Backend(Some(format!("Unreadable backend response: {}", e))))?;
        interpret_response(parsed)
    }
}

/// Decides success or failure for a decoded 2xx response.
pub fn interpret_response(response: AdviceResponse) -> Result<String, AdviceError> {
    if response.status == "success" {
        match response.advice {
            Some(advice) => Ok(advice),
            // Success without advice text is treated as a server fault.
            None => Err(AdviceError::Backend(response.error)),
        }
    } else {
        Err(AdviceError::Backend(response.error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_yields_advice() {
        let response = AdviceResponse {
            status: "success".to_string(),
            advice: Some("Try X".to_string()),
            error: None,
        };
        assert_eq!(interpret_response(response).unwrap(), "Try X");
    }

    #[test]
    fn failure_body_uses_server_error_text() {
        let response = AdviceResponse {
            status: "error".to_string(),
            advice: None,
            error: Some("quota exceeded".to_string()),
        };
        let err = interpret_response(response).unwrap_err();
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[test]
    fn failure_body_without_error_falls_back_to_generic_message() {
        let response = AdviceResponse {
            status: "failure".to_string(),
            advice: None,
            error: None,
        };
        let err = interpret_response(response).unwrap_err();
        assert_eq!(err.to_string(), GENERIC_BACKEND_ERROR);
    }

    #[test]
    fn http_error_message_names_the_status_code() {
        assert!(AdviceError::Http(500).to_string().contains("500"));
    }

    #[test]
    fn network_error_message_hints_at_unreachable_backend() {
        let msg = AdviceError::Network("connection refused".to_string()).to_string();
        assert!(msg.contains("connection refused"));
        assert!(msg.contains("backend"));
    }

    #[test]
    fn request_body_matches_wire_format() {
        let body = AdviceRequest {
            text: "hello".to_string(),
            kind: AdviceKind::EmailDraft,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "text": "hello", "type": "email_draft" })
        );
    }

    #[test]
    fn response_decodes_with_missing_optional_fields() {
        let parsed: AdviceResponse =
            serde_json::from_str(r#"{"status":"failure"}"#).unwrap();
        assert_eq!(parsed.status, "failure");
        assert!(parsed.advice.is_none());
        assert!(parsed.error.is_none());
    }
}
