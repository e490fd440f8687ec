//! Playlist expansion through the YouTube Data API v3.

use super::PlaylistSource;
use crate::error::{Result, TubenoteError};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, instrument};

const SERVICE: &str = "YouTube";

/// Client for the `playlistItems` endpoint.
pub struct YoutubeDataClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    page_size: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemsPage {
    #[serde(default)]
    items: Vec<PlaylistItem>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItem {
    content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentDetails {
    video_id: String,
}

impl YoutubeDataClient {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: "https://www.googleapis.com/youtube/v3".to_string(),
            page_size: 50,
        })
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    async fn fetch_page(
        &self,
        playlist_id: &str,
        token: Option<&str>,
    ) -> Result<PlaylistItemsPage> {
        let page_size = self.page_size.to_string();
        let mut query = vec![
            ("part", "contentDetails"),
            ("playlistId", playlist_id),
            ("maxResults", page_size.as_str()),
            ("key", self.api_key.as_str()),
        ];
        if let Some(token) = token {
            query.push(("pageToken", token));
        }

        let resp = self
            .client
            .get(format!("{}/playlistItems", self.base_url))
            .query(&query)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(TubenoteError::RemoteApi {
                service: SERVICE,
                status: status.as_u16(),
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            TubenoteError::remote(SERVICE, format!("Malformed playlist page: {}", e))
        })
    }
}

#[async_trait]
impl PlaylistSource for YoutubeDataClient {
    #[instrument(skip(self))]
    async fn playlist_videos(&self, playlist_id: &str) -> Result<Vec<String>> {
        let mut videos = Vec::new();
        let mut token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self.fetch_page(playlist_id, token.as_deref()).await?;
            pages += 1;
            debug!(page = pages, items = page.items.len(), "Fetched playlist page");

            videos.extend(page.items.into_iter().map(|i| i.content_details.video_id));

            match page.next_page_token {
                Some(next) if !next.is_empty() => token = Some(next),
                _ => break,
            }
        }

        info!(count = videos.len(), pages, "Expanded playlist");
        Ok(videos)
    }
}
