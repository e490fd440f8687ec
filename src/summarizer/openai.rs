//! OpenAI chat-completion summarizer.

use super::Summarizer;
use crate::config::Prompts;
use crate::error::{Result, TubenoteError};
use async_openai::config::OpenAIConfig;
use async_openai::types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs};
use async_openai::Client;
use async_trait::async_trait;
use tracing::{debug, instrument};

const SERVICE: &str = "OpenAI";

/// Summarizer that sends one user message per transcript and takes the single completion.
pub struct OpenAISummarizer {
    client: Client<OpenAIConfig>,
    model: String,
    prompts: Prompts,
}

impl OpenAISummarizer {
    pub fn new(client: Client<OpenAIConfig>, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
            prompts: Prompts::default(),
        }
    }

    /// Set custom prompts.
    pub fn with_prompts(mut self, prompts: Prompts) -> Self {
        self.prompts = prompts;
        self
    }
}

#[async_trait]
impl Summarizer for OpenAISummarizer {
    #[instrument(
        skip(self, transcript, instructions),
        fields(model = %self.model, chars = transcript.len())
    )]
    async fn summarize(&self, transcript: &str, instructions: &str) -> Result<String> {
        let prompt = self.prompts.summary_prompt(instructions, transcript);

        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| {
                TubenoteError::remote(SERVICE, format!("Failed to build message: {}", e))
            })?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![message.into()])
            .n(1)
            .build()
            .map_err(|e| {
                TubenoteError::remote(SERVICE, format!("Failed to build request: {}", e))
            })?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            TubenoteError::remote(SERVICE, format!("Failed to generate summary: {}", e))
        })?;

        let summary = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| TubenoteError::remote(SERVICE, "Empty response from model"))?
            .to_string();

        debug!(chars = summary.len(), "Generated summary");
        Ok(summary)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openai::create_client;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn summarizer(server: &MockServer) -> OpenAISummarizer {
        let client = create_client("sk-test", Some(&server.uri()), Duration::from_secs(5)).unwrap();
        OpenAISummarizer::new(client, "gpt-3.5-turbo")
    }

    fn completion(content: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1700000000,
            "model": "gpt-3.5-turbo",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        }))
    }

    #[tokio::test]
    async fn test_single_user_message_and_trimmed_reply() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "gpt-3.5-turbo",
                "n": 1,
                "messages": [{
                    "role": "user",
                    "content": "Be brief\n\nTranscript:\nhello world"
                }]
            })))
            .respond_with(completion(json!("  A short summary.\n")))
            .expect(1)
            .mount(&server)
            .await;

        let summary = summarizer(&server)
            .summarize("hello world", "Be brief")
            .await
            .unwrap();
        assert_eq!(summary, "A short summary.");
    }

    #[tokio::test]
    async fn test_missing_content_is_remote_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(completion(json!(null)))
            .mount(&server)
            .await;

        let err = summarizer(&server).summarize("text", "x").await.unwrap_err();
        assert!(matches!(err, TubenoteError::RemoteApi { service: "OpenAI", .. }));
    }

    #[tokio::test]
    async fn test_api_error_is_remote_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "message": "context length exceeded",
                    "type": "invalid_request_error",
                    "param": null,
                    "code": null
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = summarizer(&server).summarize("text", "x").await.unwrap_err();
        assert!(err.to_string().contains("context length exceeded"));
    }
}
