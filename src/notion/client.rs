//! Notion REST client.

use super::{CreatedPage, PagePublisher};
use crate::error::{Result, TubenoteError};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, instrument};

const SERVICE: &str = "Notion";

/// Maximum characters Notion accepts in one rich-text object.
pub const RICH_TEXT_LIMIT: usize = 2000;

/// Client for `POST /pages`, creating children of one parent page.
pub struct NotionClient {
    client: reqwest::Client,
    token: String,
    parent_id: String,
    base_url: String,
    version: String,
}

impl NotionClient {
    pub fn new(
        token: impl Into<String>,
        parent_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            token: token.into(),
            parent_id: parent_id.into(),
            base_url: "https://api.notion.com/v1".to_string(),
            version: "2022-06-28".to_string(),
        })
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

/// Split `text` into pieces of at most [`RICH_TEXT_LIMIT`] characters.
fn split_rich_text(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(RICH_TEXT_LIMIT)
        .map(|c| c.iter().collect())
        .collect()
}

/// Request body for a page under `parent_id` with one paragraph block.
pub fn page_body(parent_id: &str, title: &str, summary: &str) -> Value {
    let rich_text: Vec<Value> = split_rich_text(summary)
        .into_iter()
        .map(|content| json!({ "type": "text", "text": { "content": content } }))
        .collect();

    json!({
        "parent": { "page_id": parent_id },
        "properties": {
            "title": {
                "title": [{ "text": { "content": title } }]
            }
        },
        "children": [{
            "object": "block",
            "type": "paragraph",
            "paragraph": { "rich_text": rich_text }
        }]
    })
}

#[async_trait]
impl PagePublisher for NotionClient {
    #[instrument(skip(self, summary), fields(parent = %self.parent_id))]
    async fn create_page(&self, title: &str, summary: &str) -> Result<CreatedPage> {
        let body = page_body(&self.parent_id, title, summary);

        let resp = self
            .client
            .post(format!("{}/pages", self.base_url))
            .bearer_auth(&self.token)
            .header("Notion-Version", self.version.as_str())
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(TubenoteError::RemoteApi {
                service: SERVICE,
                status: status.as_u16(),
                message: text,
            });
        }

        let page: CreatedPage = serde_json::from_str(&text).map_err(|e| {
            TubenoteError::remote(SERVICE, format!("Malformed page response: {}", e))
        })?;

        debug!(page_id = %page.id, "Created page");
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> NotionClient {
        NotionClient::new("secret_abc", "parent-1", Duration::from_secs(5))
            .unwrap()
            .with_base_url(server.uri())
    }

    #[test]
    fn test_page_body_shape() {
        let body = page_body("parent-1", "https://www.youtube.com/watch?v=abc123", "Summary.");
        assert_eq!(body["parent"]["page_id"], "parent-1");
        assert_eq!(
            body["properties"]["title"]["title"][0]["text"]["content"],
            "https://www.youtube.com/watch?v=abc123"
        );
        let children = body["children"].as_array().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0]["type"], "paragraph");
        assert_eq!(
            children[0]["paragraph"]["rich_text"][0]["text"]["content"],
            "Summary."
        );
    }

    #[test]
    fn test_long_summary_stays_in_one_paragraph() {
        let summary = "é".repeat(RICH_TEXT_LIMIT * 2 + 5);
        let body = page_body("p", "t", &summary);

        let children = body["children"].as_array().unwrap();
        assert_eq!(children.len(), 1);

        let parts = children[0]["paragraph"]["rich_text"].as_array().unwrap();
        assert_eq!(parts.len(), 3);
        let rebuilt: String = parts
            .iter()
            .map(|p| p["text"]["content"].as_str().unwrap())
            .collect();
        assert_eq!(rebuilt, summary);
        assert_eq!(parts[2]["text"]["content"].as_str().unwrap().chars().count(), 5);
    }

    #[tokio::test]
    async fn test_create_page_sends_auth_and_version() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/pages"))
            .and(header("authorization", "Bearer secret_abc"))
            .and(header("notion-version", "2022-06-28"))
            .and(body_json(page_body("parent-1", "Title", "Body text")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "object": "page",
                "id": "page-42",
                "url": "https://www.notion.so/page-42"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let page = client(&server).create_page("Title", "Body text").await.unwrap();
        assert_eq!(page.id, "page-42");
        assert_eq!(page.url.as_deref(), Some("https://www.notion.so/page-42"));
    }

    #[tokio::test]
    async fn test_rejected_page_is_remote_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/pages"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&server)
            .await;

        let err = client(&server).create_page("Title", "Body").await.unwrap_err();
        match err {
            TubenoteError::RemoteApi { service, status, .. } => {
                assert_eq!(service, "Notion");
                assert_eq!(status, 401);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
