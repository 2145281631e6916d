//! AI summarization - Gemini client behind the `Summarizer` port.

mod gemini;

pub use gemini::{GeminiConfig, GeminiSummarizer};
