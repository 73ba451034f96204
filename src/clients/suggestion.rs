use anyhow::Context;
use axum::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::config::OpenAiConfig;

/// One role-tagged message in a chat-completion conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

#[async_trait]
pub trait SuggestionClient: Send + Sync {
    /// Sends the conversation and returns the generated reply text.
    async fn generate(&self, messages: &[ChatMessage]) -> anyhow::Result<String>;
}

#[derive(Clone)]
pub struct OpenAiClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(config: &OpenAiConfig) -> Self {
        Self {
            http: Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl SuggestionClient for OpenAiClient {
    async fn generate(&self, messages: &[ChatMessage]) -> anyhow::Result<String> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("suggestion api request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(%status, "suggestion api returned an error");
            anyhow::bail!("suggestion api returned {status}: {body}");
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .context("decode suggestion api response")?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            anyhow::bail!("suggestion api returned no content");
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_carries_role_tagged_messages() {
        let messages = vec![
            ChatMessage::system("advise on diet"),
            ChatMessage::user("log for today"),
        ];
        let request = ChatCompletionRequest {
            model: "gpt-4o-mini",
            messages: &messages,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "log for today");
    }

    #[test]
    fn test_response_yields_first_choice_content() {
        let body = serde_json::json!({
            "choices": [
                { "message": { "role": "assistant", "content": "Eat more fiber." } }
            ]
        });

        let parsed: ChatCompletionResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Eat more fiber.");
    }
}
