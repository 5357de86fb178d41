use url::Url;

/// Environment variable holding the Gemini API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Connection settings for the Gemini generative-language endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiApiConfig {
    /// API base, up to and excluding `/models/...`.
    pub api_url: String,
    /// Model invoked for translation.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl GeminiApiConfig {
    /// Full `generateContent` endpoint for the configured model.
    pub fn endpoint(&self) -> Result<Url, url::ParseError> {
        let base = self.api_url.trim_end_matches('/');
        Url::parse(&format!("{}/models/{}:generateContent", base, self.model))
    }
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_targets_generate_content() {
        let endpoint = GeminiApiConfig::default().endpoint().unwrap();
        assert_eq!(
            endpoint.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash_in_base() {
        let config = GeminiApiConfig {
            api_url: "http://127.0.0.1:9000/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "http://127.0.0.1:9000/models/gemini-2.5-flash:generateContent"
        );
    }
}
