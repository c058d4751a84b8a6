//! Translation service client
//!
//! [`Translate`] is the seam between the view and the network. The real
//! implementation, [`MyMemoryClient`], issues one `GET` per request against
//! the MyMemory public API and never retries.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult, TranslateError};
use crate::state::TranslationRequest;

/// Something that can translate a request into text.
#[async_trait]
pub trait Translate: Send + Sync {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError>;
}

/// Client for `GET {endpoint}?q=..&langpair=src|tgt`.
pub struct MyMemoryClient {
    http: reqwest::Client,
    endpoint: String,
    contact_email: Option<String>,
}

impl MyMemoryClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tradutor/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Client(e.to_string()))?;

        Ok(Self::with_http_client(http, endpoint))
    }

    /// Use an already configured reqwest client.
    pub fn with_http_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            contact_email: None,
        }
    }

    pub fn with_contact_email(mut self, email: Option<String>) -> Self {
        self.contact_email = email.filter(|e| !e.trim().is_empty());
        self
    }

    pub fn request_url(&self, request: &TranslationRequest) -> String {
        build_url(&self.endpoint, request, self.contact_email.as_deref())
    }
}

#[async_trait]
impl Translate for MyMemoryClient {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        let url = self.request_url(request);
        debug!(seq = request.seq, langpair = %request.langpair(), "sending translation request");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(seq = request.seq, status = status.as_u16(), "translation request failed");
            return Err(TranslateError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}

/// Build the request URL. The text is percent-encoded; the langpair keeps its
/// literal `|`.
pub fn build_url(endpoint: &str, request: &TranslationRequest, contact_email: Option<&str>) -> String {
    let mut url = format!(
        "{}?q={}&langpair={}",
        endpoint,
        urlencoding::encode(&request.text),
        request.langpair()
    );
    if let Some(email) = contact_email {
        url.push_str("&de=");
        url.push_str(&urlencoding::encode(email));
    }
    url
}

#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<ResponseData>,
    #[serde(rename = "responseStatus", default)]
    response_status: Option<serde_json::Value>,
    #[serde(rename = "responseDetails", default)]
    response_details: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// `responseStatus` arrives as a number or as a numeric string.
fn status_code(value: &serde_json::Value) -> Option<u16> {
    match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Extract `responseData.translatedText` from a response body.
pub fn parse_response(body: &str) -> Result<String, TranslateError> {
    let parsed: MyMemoryResponse =
        serde_json::from_str(body).map_err(|e| TranslateError::MalformedResponse(e.to_string()))?;

    if let Some(status) = parsed.response_status.as_ref().and_then(status_code) {
        if status != 200 {
            let details = match parsed.response_details {
                Some(serde_json::Value::String(s)) if !s.is_empty() => s,
                _ => parsed
                    .response_data
                    .map(|d| d.translated_text)
                    .unwrap_or_default(),
            };
            return Err(TranslateError::Api { status, details });
        }
    }

    parsed
        .response_data
        .map(|d| d.translated_text)
        .ok_or_else(|| {
            TranslateError::MalformedResponse("missing responseData.translatedText".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str, source: &str, target: &str) -> TranslationRequest {
        TranslationRequest {
            seq: 1,
            text: text.to_string(),
            source_lang: source.to_string(),
            target_lang: target.to_string(),
        }
    }

    #[test]
    fn test_build_url_encodes_text() {
        let url = build_url(
            "https://api.mymemory.translated.net/get",
            &request("Olá mundo", "pt-br", "en"),
            None,
        );
        assert_eq!(
            url,
            "https://api.mymemory.translated.net/get?q=Ol%C3%A1%20mundo&langpair=pt-br|en"
        );
    }

    #[test]
    fn test_build_url_escapes_query_delimiters() {
        let url = build_url("http://x/get", &request("a&b=c?", "en", "fr"), None);
        assert_eq!(url, "http://x/get?q=a%26b%3Dc%3F&langpair=en|fr");
    }

    #[test]
    fn test_build_url_with_contact() {
        let url = build_url("http://x/get", &request("hi", "en", "de"), Some("me@example.com"));
        assert_eq!(url, "http://x/get?q=hi&langpair=en|de&de=me%40example.com");
    }

    #[test]
    fn test_parse_success() {
        let body = r#"{"responseData":{"translatedText":"Hello world","match":1},"responseStatus":200}"#;
        assert_eq!(parse_response(body), Ok("Hello world".to_string()));
    }

    #[test]
    fn test_parse_without_status() {
        let body = r#"{"responseData":{"translatedText":"Hello"}}"#;
        assert_eq!(parse_response(body), Ok("Hello".to_string()));
    }

    #[test]
    fn test_parse_missing_field() {
        let body = r#"{"matches":[]}"#;
        assert!(matches!(
            parse_response(body),
            Err(TranslateError::MalformedResponse(_))
        ));

        let body = r#"{"responseData":{"match":1}}"#;
        assert!(matches!(
            parse_response(body),
            Err(TranslateError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_not_json() {
        assert!(matches!(
            parse_response("<html>oops</html>"),
            Err(TranslateError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_body_level_failure() {
        let body = r#"{"responseData":{"translatedText":"'XX' IS AN INVALID TARGET LANGUAGE"},"responseStatus":"403","responseDetails":"'XX' IS AN INVALID TARGET LANGUAGE"}"#;
        assert_eq!(
            parse_response(body),
            Err(TranslateError::Api {
                status: 403,
                details: "'XX' IS AN INVALID TARGET LANGUAGE".to_string()
            })
        );
    }
}
