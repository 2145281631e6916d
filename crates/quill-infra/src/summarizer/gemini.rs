//! Gemini `generateContent` client.

use async_trait::async_trait;
use serde_json::{Value, json};

use quill_core::ports::{Summarizer, SummaryError};

const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";
const MAX_OUTPUT_TOKENS: u32 = 100;

/// Gemini API configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    /// Endpoint override, mainly for tests and proxies.
    pub endpoint: String,
    pub max_output_tokens: u32,
}

impl GeminiConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }

    /// Load configuration from environment variables. Returns `None` when
    /// no API key is configured.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").ok()?;
        let mut config = Self::new(api_key);
        if let Ok(endpoint) = std::env::var("GEMINI_API_URL") {
            config.endpoint = endpoint;
        }
        Some(config)
    }
}

/// Summarizer backed by the Gemini generateContent API.
pub struct GeminiSummarizer {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiSummarizer {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn request_body(&self, text: &str) -> Value {
        json!({
            "contents": [
                { "parts": [ { "text": format!("Summarize this: {text}") } ] }
            ],
            "generationConfig": { "maxOutputTokens": self.config.max_output_tokens }
        })
    }
}

/// Pull the summary text out of a generateContent response:
/// `candidates[0].content.parts[0].text`.
fn extract_summary(body: &Value) -> Result<String, SummaryError> {
    let text = body
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            SummaryError::MalformedResponse("missing candidates[0].content.parts[0].text".into())
        })?;

    if text.trim().is_empty() {
        return Err(SummaryError::MalformedResponse("empty summary text".into()));
    }

    Ok(text.to_string())
}

#[async_trait]
impl Summarizer for GeminiSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, SummaryError> {
        let url = format!("{}?key={}", self.config.endpoint, self.config.api_key);

        let response = self
            .client
            .post(&url)
            .json(&self.request_body(text))
            .send()
            .await
            .map_err(|e| SummaryError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SummaryError::Upstream(format!(
                "unexpected status {status}"
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SummaryError::MalformedResponse(e.to_string()))?;

        extract_summary(&body)
    }
}
