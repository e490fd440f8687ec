//! Error types for tubenote.

use thiserror::Error;

/// Library-level error type for tubenote operations.
#[derive(Error, Debug)]
pub enum TubenoteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing configuration: {}", .0.join(", "))]
    MissingConfiguration(Vec<String>),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("{service} API error ({status}): {message}")]
    RemoteApi {
        service: &'static str,
        status: u16,
        message: String,
    },

    #[error("Transcript unavailable for {video_id}: {reason}")]
    TranscriptUnavailable { video_id: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl TubenoteError {
    /// Build a remote API error for a failure that has no HTTP status (e.g. a malformed body).
    pub fn remote(service: &'static str, message: impl Into<String>) -> Self {
        TubenoteError::RemoteApi {
            service,
            status: 0,
            message: message.into(),
        }
    }

    /// Whether this error belongs to a single video and should not end a run.
    pub fn is_per_video(&self) -> bool {
        matches!(
            self,
            TubenoteError::RemoteApi { .. }
                | TubenoteError::Http(_)
                | TubenoteError::TranscriptUnavailable { .. }
        )
    }
}

/// Result type alias for tubenote operations.
pub type Result<T> = std::result::Result<T, TubenoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_configuration_lists_names() {
        let err = TubenoteError::MissingConfiguration(vec![
            "OPENAI_API_KEY".to_string(),
            "NOTION_PARENT_ID".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Missing configuration: OPENAI_API_KEY, NOTION_PARENT_ID"
        );
    }

    #[test]
    fn test_per_video_classification() {
        assert!(TubenoteError::remote("Notion", "boom").is_per_video());
        assert!(!TubenoteError::InvalidUrl("x".into()).is_per_video());
        assert!(!TubenoteError::Io(std::io::Error::other("disk")).is_per_video());
    }
}
