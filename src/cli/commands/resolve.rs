//! Resolve command implementation.

use crate::cli::Output;
use crate::youtube::{resolve_url, watch_url, SourceKind};
use anyhow::Result;

/// Print what a URL resolves to.
pub fn run_resolve(url: &str) -> Result<()> {
    match resolve_url(url) {
        Ok(source) => {
            Output::kv("Kind", &source.kind.to_string());
            Output::kv("Id", &source.id);
            if source.kind == SourceKind::Video {
                Output::kv("Page title", &watch_url(&source.id));
            }
            Ok(())
        }
        Err(e) => {
            Output::error(&e.to_string());
            Err(e.into())
        }
    }
}
