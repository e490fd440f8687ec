use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tubenote::error::{Result, TubenoteError};
use tubenote::notion::{CreatedPage, PagePublisher};

/// Records `(title, summary)` for every call.
#[derive(Clone, Default)]
pub struct MockPublisher {
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    pub fail_on: HashSet<String>,
}

impl MockPublisher {
    /// Fail whenever the title contains one of `needles`.
    pub fn failing_on(needles: &[&str]) -> Self {
        Self {
            fail_on: needles.iter().map(|v| v.to_string()).collect(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl PagePublisher for MockPublisher {
    async fn create_page(&self, title: &str, summary: &str) -> Result<CreatedPage> {
        let mut calls = self.calls.lock().unwrap();
        calls.push((title.to_string(), summary.to_string()));
        if self.fail_on.iter().any(|n| title.contains(n.as_str())) {
            return Err(TubenoteError::RemoteApi {
                service: "Notion",
                status: 502,
                message: "bad gateway".to_string(),
            });
        }
        Ok(CreatedPage {
            id: format!("page-{}", calls.len()),
            url: None,
        })
    }
}
