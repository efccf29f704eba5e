//! Slack API client module
//!
//! Posts the finished summary to a channel via `chat.postMessage`.

use reqwest::Client;
use serde::Deserialize;
use slack_morphism::prelude::SlackApiChatPostMessageRequest;
use slack_morphism::{SlackApiToken, SlackApiTokenValue, SlackChannelId, SlackMessageContent};
use tracing::{error, info};

use crate::core::config::AppConfig;
use crate::errors::BriefError;

#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    error: Option<String>,
}

/// Result of handing a message to Slack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    Sent,
    /// Slack refused the post; carries Slack's error code.
    Rejected(String),
}

/// Slack API client
pub struct SlackClient {
    http: Client,
    token: SlackApiToken,
    api_url: String,
}

impl SlackClient {
    #[must_use]
    pub fn new(http: Client, token: String, api_url: String) -> Self {
        Self {
            http,
            token: SlackApiToken::new(SlackApiTokenValue::new(token)),
            api_url,
        }
    }

    #[must_use]
    pub fn from_config(http: Client, config: &AppConfig) -> Self {
        Self::new(
            http,
            config.slack_bot_token.clone(),
            config.slack_api_url.clone(),
        )
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{method}", self.api_url.trim_end_matches('/'))
    }

    /// # Errors
    ///
    /// Returns `BriefError::SlackApiError` when Slack rejects the message and
    /// `BriefError::HttpError` when Slack could not be reached.
    pub async fn post_message(&self, channel_id: &str, message: &str) -> Result<(), BriefError> {
        let post_req = SlackApiChatPostMessageRequest::new(
            SlackChannelId::new(channel_id.to_string()),
            SlackMessageContent::new().with_text(message.to_string()),
        );

        let resp = self
            .http
            .post(self.method_url("chat.postMessage"))
            .bearer_auth(&self.token.token_value.0)
            .json(&post_req)
            .send()
            .await
            .map_err(|e| BriefError::HttpError(format!("Failed to post message: {e}")))?;

        let status = resp.status();
        let body = resp.text().await?;
        let parsed = serde_json::from_str::<PostMessageResponse>(&body).ok();

        match parsed {
            Some(PostMessageResponse { ok: true, .. }) if status.is_success() => Ok(()),
            Some(PostMessageResponse { error, .. }) => Err(BriefError::SlackApiError {
                error: error.unwrap_or_else(|| format!("HTTP {status}")),
            }),
            None => Err(BriefError::SlackApiError {
                error: format!("HTTP {status}"),
            }),
        }
    }

    /// Post the summary, reporting a Slack refusal instead of failing.
    ///
    /// # Errors
    ///
    /// Only transport-level failures are returned; Slack API errors become
    /// `NotifyOutcome::Rejected`.
    pub async fn post_summary(
        &self,
        channel_id: &str,
        message: &str,
    ) -> Result<NotifyOutcome, BriefError> {
        match self.post_message(channel_id, message).await {
            Ok(()) => {
                info!("Posted summary to channel {}", channel_id);
                println!("✅ Sent to Slack!");
                Ok(NotifyOutcome::Sent)
            }
            Err(BriefError::SlackApiError { error }) => {
                error!("Slack rejected summary for channel {}: {}", channel_id, error);
                println!("❌ Slack Error: {error}");
                Ok(NotifyOutcome::Rejected(error))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_message_response_error_parsing() {
        let json_str = r#"{"ok": false, "error": "channel_not_found"}"#;
        let resp: PostMessageResponse = serde_json::from_str(json_str).unwrap();

        assert!(!resp.ok);
        assert_eq!(resp.error, Some("channel_not_found".to_string()));
    }

    #[test]
    fn test_post_message_response_success_parsing() {
        let json_str = r#"{"ok": true, "channel": "C123ABC456", "ts": "1503435956.000247"}"#;
        let resp: PostMessageResponse = serde_json::from_str(json_str).unwrap();

        assert!(resp.ok);
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_method_url() {
        let client = SlackClient::new(
            Client::new(),
            "xoxb-test".to_string(),
            "https://slack.com/api/".to_string(),
        );
        assert_eq!(
            client.method_url("chat.postMessage"),
            "https://slack.com/api/chat.postMessage"
        );
    }

    #[test]
    fn test_post_request_serializes_channel_and_text() {
        let post_req = SlackApiChatPostMessageRequest::new(
            SlackChannelId::new("C0123".to_string()),
            SlackMessageContent::new().with_text("hello".to_string()),
        );
        let value = serde_json::to_value(&post_req).unwrap();

        assert_eq!(value["channel"], "C0123");
        assert_eq!(value["text"], "hello");
    }
}
