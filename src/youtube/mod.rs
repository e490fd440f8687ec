//! YouTube access for tubenote.
//!
//! Resolves input URLs, expands playlists through the Data API and fetches caption transcripts.

mod playlist;
mod resolve;
mod transcript;

pub use playlist::YoutubeDataClient;
pub use resolve::{resolve_url, watch_url};
pub use transcript::{fetch_transcript, CaptionTranscriptSource};

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// What an input URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Video,
    Playlist,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Video => write!(f, "video"),
            SourceKind::Playlist => write!(f, "playlist"),
        }
    }
}

/// An identifier extracted from an input URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSource {
    pub id: String,
    pub kind: SourceKind,
}

impl ResolvedSource {
    pub fn video(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: SourceKind::Video,
        }
    }

    pub fn playlist(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: SourceKind::Playlist,
        }
    }
}

/// A single timed caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionSegment {
    pub text: String,
    /// Start time in seconds.
    pub start: f64,
    /// Duration in seconds.
    pub duration: f64,
}

/// Caption transcript of one video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub video_id: String,
    pub segments: Vec<CaptionSegment>,
}

impl Transcript {
    pub fn new(video_id: impl Into<String>, segments: Vec<CaptionSegment>) -> Self {
        Self {
            video_id: video_id.into(),
            segments,
        }
    }

    /// Plain text: segment texts joined by single spaces, in caption order.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// True when there is nothing worth summarizing.
    pub fn is_blank(&self) -> bool {
        self.segments.iter().all(|s| s.text.trim().is_empty())
    }
}

/// Expands a playlist into the ids of the videos it contains.
#[async_trait]
pub trait PlaylistSource: Send + Sync {
    /// Video ids in playlist order.
    async fn playlist_videos(&self, playlist_id: &str) -> Result<Vec<String>>;
}

/// Retrieves caption transcripts.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the transcript of a video.
    ///
    /// Any failure (no captions, region lock, network) is reported as an error;
    /// callers that want a recoverable outcome go through [`fetch_transcript`].
    async fn transcript(&self, video_id: &str) -> Result<Transcript>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(text: &str, start: f64) -> CaptionSegment {
        CaptionSegment {
            text: text.to_string(),
            start,
            duration: 1.5,
        }
    }

    #[test]
    fn test_transcript_text_joins_with_single_spaces() {
        let transcript = Transcript::new(
            "abc123",
            vec![seg("hello", 0.0), seg("there,", 1.5), seg("world", 3.0)],
        );
        assert_eq!(transcript.text(), "hello there, world");
    }

    #[test]
    fn test_blank_transcript() {
        assert!(Transcript::new("x", vec![]).is_blank());
        assert!(Transcript::new("x", vec![seg("  ", 0.0)]).is_blank());
        assert!(!Transcript::new("x", vec![seg("hi", 0.0)]).is_blank());
    }

    #[test]
    fn test_source_kind_display() {
        assert_eq!(SourceKind::Video.to_string(), "video");
        assert_eq!(SourceKind::Playlist.to_string(), "playlist");
    }
}
