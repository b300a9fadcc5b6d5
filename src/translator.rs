//! Client for the backend's translation endpoint.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct TranslationRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslationReply {
    success: bool,
    #[serde(default)]
    translation: Option<String>,
}

/// Wraps `POST /api/translate`: Persian text in, English text out.
#[derive(Debug, Clone)]
pub struct Translator {
    http: reqwest::Client,
    base_url: String,
}

impl Translator {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Translate Persian text to English.
    ///
    /// Empty or whitespace-only input returns `Ok("")` without a remote
    /// call. Any transport error, non-2xx status, malformed body, or
    /// `success: false` reply is an error the caller treats as "could not
    /// translate" and recovers from locally.
    pub async fn translate(&self, text: &str) -> Result<String, ApiError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let response = self
            .http
            .post(format!("{}/api/translate", self.base_url))
            .json(&TranslationRequest { text: trimmed })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::RemoteFailure(format!(
                "translate endpoint returned {}",
                response.status()
            )));
        }

        let reply: TranslationReply = response
            .json()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;

        if !reply.success {
            return Err(ApiError::RemoteFailure(
                "translate endpoint reported failure".to_string(),
            ));
        }

        reply.translation.ok_or_else(|| {
            ApiError::MalformedResponse("success reply without a translation".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn translator(base_url: &str) -> Translator {
        Translator::new(reqwest::Client::new(), base_url)
    }

    #[tokio::test]
    async fn test_translate_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/translate"))
            .and(body_json(serde_json::json!({ "text": "سلام" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "translation": "Hello"
            })))
            .mount(&mock_server)
            .await;

        let result = translator(&mock_server.uri()).translate("سلام").await;
        assert_eq!(result.expect("Should succeed"), "Hello");
    }

    #[tokio::test]
    async fn test_translate_trims_before_sending() {
        let mock_server = MockServer::start().await;

        // The matcher only accepts the trimmed text
        Mock::given(method("POST"))
            .and(path("/api/translate"))
            .and(body_json(serde_json::json!({ "text": "سلام" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "translation": "Hello"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = translator(&mock_server.uri()).translate("  سلام  ").await;
        assert_eq!(result.expect("Should succeed"), "Hello");
    }

    #[tokio::test]
    async fn test_translate_empty_text_skips_remote_call() {
        // Unroutable base URL: any request would fail loudly
        let translator = translator("http://invalid-url-should-not-be-called.test");

        assert_eq!(translator.translate("").await.expect("no-op"), "");
        assert_eq!(translator.translate("   \n\t").await.expect("no-op"), "");
    }

    #[tokio::test]
    async fn test_translate_remote_reports_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/translate"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "success": false, "error": "no key" })),
            )
            .mount(&mock_server)
            .await;

        let result = translator(&mock_server.uri()).translate("سلام").await;
        assert!(matches!(result, Err(ApiError::RemoteFailure(_))));
    }

    #[tokio::test]
    async fn test_translate_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/translate"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let result = translator(&mock_server.uri()).translate("سلام").await;
        match result {
            Err(ApiError::RemoteFailure(msg)) => assert!(msg.contains("500")),
            other => panic!("Expected RemoteFailure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_translate_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/translate"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let result = translator(&mock_server.uri()).translate("سلام").await;
        assert!(matches!(result, Err(ApiError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_translate_success_without_translation_field() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/translate"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
            )
            .mount(&mock_server)
            .await;

        let result = translator(&mock_server.uri()).translate("سلام").await;
        assert!(matches!(result, Err(ApiError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_translate_transport_error() {
        // Nothing listening on this port
        let translator = translator("http://127.0.0.1:9");
        let result = translator.translate("سلام").await;
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }
}
