use thiserror::Error;

#[derive(Debug, Error)]
pub enum BriefError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to access Airtable API: {0}")]
    AirtableError(String),

    #[error("Failed to access OpenAI API: {0}")]
    OpenAIError(String),

    /// Slack answered the request but refused it (`ok: false` or a non-2xx status).
    #[error("Slack API error: {error}")]
    SlackApiError { error: String },

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl BriefError {
    /// Whether this error is one the notifier reports and swallows.
    #[must_use]
    pub fn is_slack_api_error(&self) -> bool {
        matches!(self, BriefError::SlackApiError { .. })
    }
}

impl From<reqwest::Error> for BriefError {
    fn from(error: reqwest::Error) -> Self {
        BriefError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for BriefError {
    fn from(error: serde_json::Error) -> Self {
        BriefError::ParseError(error.to_string())
    }
}

impl From<url::ParseError> for BriefError {
    fn from(error: url::ParseError) -> Self {
        BriefError::ConfigError(format!("invalid URL: {error}"))
    }
}
