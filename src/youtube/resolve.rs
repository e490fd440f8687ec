//! Input URL classification.

use super::ResolvedSource;
use crate::error::{Result, TubenoteError};
use url::Url;

const WATCH_BASE_URL: &str = "https://www.youtube.com/watch";

/// Classify a URL as a single video or a playlist and extract its id.
///
/// Rules, first match wins:
/// 1. `list` on a playlist page → playlist
/// 2. `list` on a watch page without `v` → playlist
/// 3. `v` on a watch page → video
///
/// When a parameter is repeated, its first value is used.
pub fn resolve_url(input: &str) -> Result<ResolvedSource> {
    let parsed = Url::parse(input.trim())
        .map_err(|e| TubenoteError::InvalidUrl(format!("{}: {}", input.trim(), e)))?;

    let path = parsed.path();
    let list = query_param(&parsed, "list");
    let video = query_param(&parsed, "v");

    let is_playlist_page = path.contains("playlist");
    let is_watch_page = path.contains("watch");

    if let Some(list) = &list {
        if is_playlist_page {
            return Ok(ResolvedSource::playlist(list.clone()));
        }
        if is_watch_page && video.is_none() {
            return Ok(ResolvedSource::playlist(list.clone()));
        }
    }

    if let (true, Some(v)) = (is_watch_page, video) {
        return Ok(ResolvedSource::video(v));
    }

    Err(TubenoteError::InvalidUrl(
        "Could not determine if URL is video or playlist".to_string(),
    ))
}

/// Canonical watch URL for a video id.
pub fn watch_url(video_id: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(video_id.as_bytes()).collect();
    format!("{WATCH_BASE_URL}?v={encoded}")
}

// Blank values are treated as absent, matching how form-style query parsers drop them.
fn query_param(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, v)| k == key && !v.is_empty())
        .map(|(_, v)| v.into_owned())
}
