use async_trait::async_trait;

/// Text summarization provider (external AI service).
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Produce a short summary of `text`.
    async fn summarize(&self, text: &str) -> Result<String, SummaryError>;
}

/// Summarizer failures. All of these surface to clients as a single
/// "summary unavailable" condition.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error("Could not extract summary from response: {0}")]
    MalformedResponse(String),
}
