use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tubenote::error::{Result, TubenoteError};
use tubenote::youtube::{CaptionSegment, Transcript, TranscriptSource};

#[derive(Clone, Default)]
pub struct MockTranscriptSource {
    pub unavailable: HashSet<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockTranscriptSource {
    pub fn without(ids: &[&str]) -> Self {
        Self {
            unavailable: ids.iter().map(|v| v.to_string()).collect(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl TranscriptSource for MockTranscriptSource {
    async fn transcript(&self, video_id: &str) -> Result<Transcript> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if self.unavailable.contains(video_id) {
            return Err(TubenoteError::TranscriptUnavailable {
                video_id: video_id.to_string(),
                reason: "Subtitles are disabled for this video".to_string(),
            });
        }
        let segments = ["transcript", "of", video_id]
            .iter()
            .enumerate()
            .map(|(i, text)| CaptionSegment {
                text: text.to_string(),
                start: i as f64 * 2.0,
                duration: 2.0,
            })
            .collect();
        Ok(Transcript::new(video_id, segments))
    }
}
