//! LLM (`OpenAI`) API client module
//!
//! Encapsulates the chat-completion call that turns candidate lines into a summary.

use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::core::config::AppConfig;
use crate::errors::BriefError;
use crate::prompt::{SUMMARY_MAX_TOKENS, SUMMARY_TEMPERATURE, SYSTEM_PROMPT, build_summary_prompt};

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

fn role_name(role: &MessageRole) -> &'static str {
    match role {
        MessageRole::system => "system",
        MessageRole::user => "user",
        MessageRole::assistant => "assistant",
        MessageRole::function => "function",
        MessageRole::tool => "tool",
    }
}

fn message_to_json(msg: &ChatCompletionMessage) -> Value {
    let content = match &msg.content {
        Content::Text(text) => json!(text),
        Content::ImageUrl(urls) => {
            let parts: Vec<Value> = urls
                .iter()
                .filter_map(|u| u.image_url.as_ref())
                .map(|img_url| {
                    json!({
                        "type": "image_url",
                        "image_url": { "url": img_url.url }
                    })
                })
                .collect();
            json!(parts)
        }
    };

    json!({
        "role": role_name(&msg.role),
        "content": content,
    })
}

fn text_message(role: MessageRole, text: String) -> ChatCompletionMessage {
    ChatCompletionMessage {
        role,
        content: Content::Text(text),
        name: None,
        tool_calls: None,
        tool_call_id: None,
    }
}

/// LLM API client for generating candidate summaries
pub struct LlmClient {
    http: Client,
    api_key: String,
    org_id: Option<String>,
    model_name: String,
    api_url: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(
        http: Client,
        api_key: String,
        org_id: Option<String>,
        model_name: String,
        api_url: String,
    ) -> Self {
        Self {
            http,
            api_key,
            org_id,
            model_name,
            api_url,
        }
    }

    #[must_use]
    pub fn from_config(http: Client, config: &AppConfig) -> Self {
        Self::new(
            http,
            config.openai_api_key.clone(),
            config.openai_org_id.clone(),
            config.openai_model.clone(),
            config.openai_api_url.clone(),
        )
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.api_url.trim_end_matches('/'))
    }

    /// System persona followed by the categorization request.
    #[must_use]
    pub fn build_prompt(&self, candidate_text: &str) -> Vec<ChatCompletionMessage> {
        vec![
            text_message(MessageRole::system, SYSTEM_PROMPT.to_string()),
            text_message(MessageRole::user, build_summary_prompt(candidate_text)),
        ]
    }

    /// Request body for `/v1/chat/completions`.
    #[must_use]
    pub fn build_request_body(&self, prompt: &[ChatCompletionMessage]) -> Value {
        let messages: Vec<Value> = prompt.iter().map(message_to_json).collect();

        json!({
            "model": self.model_name,
            "messages": messages,
            "max_tokens": SUMMARY_MAX_TOKENS,
            "temperature": SUMMARY_TEMPERATURE,
        })
    }

    /// Send the prompt and return the model's text verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status (quota, auth, ...),
    /// or a response without message content. Nothing is retried.
    pub async fn generate_summary(
        &self,
        prompt: Vec<ChatCompletionMessage>,
    ) -> Result<String, BriefError> {
        #[cfg(feature = "debug-logs")]
        info!("Using ChatGPT prompt:\n{:?}", prompt);

        let estimated_input_tokens = prompt
            .iter()
            .map(|msg| match &msg.content {
                Content::Text(text) => estimate_tokens(text),
                Content::ImageUrl(_) => 0,
            })
            .sum::<usize>();

        info!(
            "Requesting summary from {} ({} messages, ~{} input tokens)",
            self.model_name,
            prompt.len(),
            estimated_input_tokens
        );

        let request_body = self.build_request_body(&prompt);

        let mut request = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request_body);

        if let Some(org) = &self.org_id {
            request = request.header("OpenAI-Organization", org);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BriefError::HttpError(format!("OpenAI API request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(BriefError::OpenAIError(format!(
                "HTTP {status}: {error_text}"
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            BriefError::OpenAIError(format!("Failed to parse OpenAI response: {e}"))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| BriefError::OpenAIError("No text in response".to_string()))
    }
}
