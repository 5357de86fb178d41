//! Gemini translation client implementation using reqwest.

use std::sync::OnceLock;
use std::time::Duration;

use minijinja::{Environment, UndefinedBehavior, context};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, GEMINI_API_KEY_ENV, GeminiApiConfig};
use crate::ports::Translator;

const X_GOOG_API_KEY: &str = "x-goog-api-key";
const DEFAULT_STATUS_MESSAGE: &str = "Gemini API request failed";

/// Instruction wrapped around the prompt before it is sent for translation.
const TRANSLATION_TEMPLATE: &str = "\
Translate the following Vietnamese text to English. This is a prompt for a music generation AI. Keep the structure, tags, and musical terms as accurate as possible.
---
Vietnamese Prompt:
{{ vietnamese_prompt }}
---
English Prompt:";

/// HTTP transport for the Gemini `generateContent` endpoint.
///
/// Performs a single stateless request per call: no retries, no batching.
#[derive(Clone)]
pub struct HttpGeminiTranslator {
    api_key: String,
    endpoint: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiTranslator")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiTranslator {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GeminiApiConfig) -> Result<Self, AppError> {
        let endpoint = config.endpoint().map_err(|e| AppError::TranslationError {
            message: format!("Invalid API endpoint: {}", e),
            status: None,
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::TranslationError {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { api_key, endpoint, client })
    }

    /// Create from the `GEMINI_API_KEY` environment variable with default
    /// configuration.
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = std::env::var(GEMINI_API_KEY_ENV)
            .map_err(|_| AppError::EnvironmentVariableMissing(GEMINI_API_KEY_ENV.into()))?;

        Self::new(api_key, &GeminiApiConfig::default())
    }

    fn send_request(&self, request: &ApiRequest) -> Result<String, AppError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::TranslationError {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if !status.is_success() {
            let message = extract_error_message(&body_text).unwrap_or_else(|| {
                if !body_text.trim().is_empty() {
                    body_text.clone()
                } else if status.as_u16() == 429 {
                    "Rate limited".to_string()
                } else if status.is_server_error() {
                    "Server error".to_string()
                } else {
                    DEFAULT_STATUS_MESSAGE.to_string()
                }
            });
            return Err(AppError::TranslationError { message, status: Some(status.as_u16()) });
        }

        let api_response: ApiResponse =
            serde_json::from_str(&body_text).map_err(|e| AppError::TranslationError {
                message: format!("Failed to parse response: {}", e),
                status: Some(status.as_u16()),
            })?;

        api_response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| AppError::TranslationError {
                message: "No translation candidate in response".into(),
                status: Some(status.as_u16()),
            })
    }
}

impl Translator for HttpGeminiTranslator {
    fn translate(&self, vietnamese: &str) -> Result<String, AppError> {
        let instruction = render_translation_prompt(vietnamese)?;
        let request =
            ApiRequest { contents: vec![Content { parts: vec![Part { text: instruction }] }] };
        self.send_request(&request)
    }
}

/// Render the translation instruction with the prompt embedded.
pub fn render_translation_prompt(vietnamese: &str) -> Result<String, AppError> {
    static ENV: OnceLock<Environment<'static>> = OnceLock::new();
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    });

    env.render_str(TRANSLATION_TEMPLATE, context! { vietnamese_prompt => vietnamese })
        .map_err(|e| AppError::TemplateError(e.to_string()))
}

#[derive(Debug, Serialize)]
struct ApiRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(server: &mockito::ServerGuard) -> GeminiApiConfig {
        GeminiApiConfig { api_url: server.url(), model: "gemini-2.5-flash".into(), timeout_secs: 1 }
    }

    #[test]
    fn translation_prompt_embeds_the_vietnamese_text() {
        let rendered = render_translation_prompt("Không lời, Rock").unwrap();
        assert!(rendered.starts_with("Translate the following Vietnamese text to English."));
        assert!(rendered.contains("Vietnamese Prompt:\nKhông lời, Rock"));
        assert!(rendered.ends_with("English Prompt:"));
    }

    #[test]
    fn translate_success_returns_first_candidate_text() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .match_header(X_GOOG_API_KEY, "fake-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"candidates":[{"content":{"parts":[{"text":" An upbeat rock song. "}]}}]}"#,
            )
            .create();

        let translator =
            HttpGeminiTranslator::new("fake-key".to_string(), &config_for(&server)).unwrap();
        let result = translator.translate("Một bài hát rock sôi động.").unwrap();
        assert_eq!(result, "An upbeat rock song.");
        mock.assert();
    }

    #[test]
    fn translate_surfaces_api_error_message_and_status() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .with_status(400)
            .with_body(r#"{"error":{"message":"API key not valid"}}"#)
            .create();

        let translator =
            HttpGeminiTranslator::new("fake-key".to_string(), &config_for(&server)).unwrap();
        let err = translator.translate("xin chào").unwrap_err();
        match err {
            AppError::TranslationError { message, status } => {
                assert_eq!(message, "API key not valid");
                assert_eq!(status, Some(400));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn translate_fails_on_empty_candidate_list() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .with_status(200)
            .with_body(r#"{"candidates":[]}"#)
            .create();

        let translator =
            HttpGeminiTranslator::new("fake-key".to_string(), &config_for(&server)).unwrap();
        let err = translator.translate("xin chào").unwrap_err();
        assert!(matches!(err, AppError::TranslationError { status: Some(200), .. }));
    }

    #[test]
    fn translate_fails_on_bare_server_error() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .with_status(500)
            .create();

        let translator =
            HttpGeminiTranslator::new("fake-key".to_string(), &config_for(&server)).unwrap();
        let err = translator.translate("xin chào").unwrap_err();
        match err {
            AppError::TranslationError { message, status } => {
                assert_eq!(message, "Server error");
                assert_eq!(status, Some(500));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn debug_output_redacts_the_api_key() {
        let translator =
            HttpGeminiTranslator::new("secret".to_string(), &GeminiApiConfig::default()).unwrap();
        let debug = format!("{translator:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret"));
    }
}
