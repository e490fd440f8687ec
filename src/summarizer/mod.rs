//! Transcript summarization.

mod openai;

pub use openai::OpenAISummarizer;

use crate::error::Result;
use async_trait::async_trait;

/// Trait for summary generation.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Condense `transcript` following the operator's free-form `instructions`.
    async fn summarize(&self, transcript: &str, instructions: &str) -> Result<String>;

    /// Model name, for logging.
    fn model(&self) -> &str;
}
