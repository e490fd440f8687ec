//! Publishing summaries as Notion pages.

mod client;

pub use client::{page_body, NotionClient, RICH_TEXT_LIMIT};

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A page created by the note service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedPage {
    /// Service-assigned page id.
    pub id: String,
    /// Public URL of the page (if returned).
    #[serde(default)]
    pub url: Option<String>,
}

/// Trait for page publishers.
#[async_trait]
pub trait PagePublisher: Send + Sync {
    /// Create a new page titled `title` whose body is a single paragraph holding `summary`.
    async fn create_page(&self, title: &str, summary: &str) -> Result<CreatedPage>;
}
