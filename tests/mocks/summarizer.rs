use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tubenote::error::{Result, TubenoteError};
use tubenote::summarizer::Summarizer;

/// Records `(transcript, instructions)` for every call.
#[derive(Clone, Default)]
pub struct MockSummarizer {
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    pub fail_on: HashSet<String>,
}

impl MockSummarizer {
    /// Fail whenever the transcript mentions one of `needles`.
    pub fn failing_on(needles: &[&str]) -> Self {
        Self {
            fail_on: needles.iter().map(|v| v.to_string()).collect(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, transcript: &str, instructions: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((transcript.to_string(), instructions.to_string()));
        if self.fail_on.iter().any(|n| transcript.contains(n.as_str())) {
            return Err(TubenoteError::remote("OpenAI", "rate limited"));
        }
        Ok(format!("summary: {transcript}"))
    }

    fn model(&self) -> &str {
        "mock-gpt"
    }
}
