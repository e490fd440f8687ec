use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tubenote::error::{Result, TubenoteError};
use tubenote::youtube::PlaylistSource;

#[derive(Clone, Default)]
pub struct MockPlaylistSource {
    pub videos: Vec<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockPlaylistSource {
    pub fn new(videos: &[&str]) -> Self {
        Self {
            videos: videos.iter().map(|v| v.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

#[async_trait]
impl PlaylistSource for MockPlaylistSource {
    async fn playlist_videos(&self, playlist_id: &str) -> Result<Vec<String>> {
        self.calls.lock().unwrap().push(playlist_id.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(TubenoteError::RemoteApi {
                service: "YouTube",
                status: 403,
                message: msg.clone(),
            });
        }
        Ok(self.videos.clone())
    }
}
