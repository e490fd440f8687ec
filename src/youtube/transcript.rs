//! Caption transcript retrieval.

use super::{CaptionSegment, Transcript, TranscriptSource};
use crate::error::{Result, TubenoteError};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};
use yt_transcript_rs::api::YouTubeTranscriptApi;

/// Transcript source backed by YouTube's public caption tracks.
pub struct CaptionTranscriptSource {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
}

impl CaptionTranscriptSource {
    /// Create a source that tries `languages` in order of preference.
    pub fn new(languages: Vec<String>) -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None).map_err(|e| {
            TubenoteError::Config(format!("Failed to initialise transcript client: {}", e))
        })?;

        let languages = if languages.is_empty() {
            vec!["en".to_string()]
        } else {
            languages
        };

        Ok(Self { api, languages })
    }
}

#[async_trait]
impl TranscriptSource for CaptionTranscriptSource {
    async fn transcript(&self, video_id: &str) -> Result<Transcript> {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        let fetched = self
            .api
            .fetch_transcript(video_id, &languages, false)
            .await
            .map_err(|e| TubenoteError::TranscriptUnavailable {
                video_id: video_id.to_string(),
                reason: e.to_string(),
            })?;

        let segments = fetched
            .snippets
            .into_iter()
            .map(|s| CaptionSegment {
                text: s.text,
                start: s.start,
                duration: s.duration,
            })
            .collect();

        Ok(Transcript::new(video_id, segments))
    }
}

/// Fetch a transcript, turning every failure into `None`.
///
/// Missing captions only affect the one video, so the cause is logged and the
/// caller moves on.
#[instrument(skip(source))]
pub async fn fetch_transcript(source: &dyn TranscriptSource, video_id: &str) -> Option<Transcript> {
    match source.transcript(video_id).await {
        Ok(transcript) if transcript.is_blank() => {
            warn!(video_id, "Transcript is empty, skipping");
            None
        }
        Ok(transcript) => {
            debug!(video_id, segments = transcript.segments.len(), "Fetched transcript");
            Some(transcript)
        }
        Err(e) => {
            warn!(video_id, error = %e, "Could not fetch transcript");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource(Result<Transcript>);

    #[async_trait]
    impl TranscriptSource for FixedSource {
        async fn transcript(&self, video_id: &str) -> Result<Transcript> {
            match &self.0 {
                Ok(t) => Ok(t.clone()),
                Err(_) => Err(TubenoteError::TranscriptUnavailable {
                    video_id: video_id.to_string(),
                    reason: "captions disabled".to_string(),
                }),
            }
        }
    }

    fn segment(text: &str) -> CaptionSegment {
        CaptionSegment {
            text: text.to_string(),
            start: 0.0,
            duration: 1.0,
        }
    }

    #[tokio::test]
    async fn test_failure_becomes_none() {
        let source = FixedSource(Err(TubenoteError::InvalidInput(String::new())));
        assert!(fetch_transcript(&source, "abc123").await.is_none());
    }

    #[tokio::test]
    async fn test_blank_transcript_becomes_none() {
        let source = FixedSource(Ok(Transcript::new("abc123", vec![segment(" ")])));
        assert!(fetch_transcript(&source, "abc123").await.is_none());
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let source = FixedSource(Ok(Transcript::new(
            "abc123",
            vec![segment("one"), segment("two")],
        )));
        let transcript = fetch_transcript(&source, "abc123").await.unwrap();
        assert_eq!(transcript.text(), "one two");
    }
}
