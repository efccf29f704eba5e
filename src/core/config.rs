use std::env;

use tracing::{debug, warn};
use url::Url;

use crate::errors::BriefError;

pub const DEFAULT_AIRTABLE_VIEW: &str = "Grid view";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_AIRTABLE_API_URL: &str = "https://api.airtable.com";
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com";
pub const DEFAULT_SLACK_API_URL: &str = "https://slack.com/api";

/// Everything a run needs, read once at startup and handed to each stage.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub airtable_api_key: String,
    pub airtable_base_id: String,
    pub airtable_table_name: String,
    pub airtable_view: String,
    pub airtable_api_url: String,
    pub openai_api_key: String,
    pub openai_org_id: Option<String>,
    pub openai_model: String,
    pub openai_api_url: String,
    pub slack_bot_token: String,
    pub slack_channel: String,
    pub slack_api_url: String,
}

impl AppConfig {
    /// Load configuration from the process environment, after merging in a
    /// `.env` file from the working directory when one exists.
    ///
    /// # Errors
    ///
    /// Returns `BriefError::ConfigError` naming the first missing variable.
    pub fn from_env() -> Result<Self, BriefError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => warn!("Ignoring unreadable .env file: {}", e),
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as missing.
    ///
    /// # Errors
    ///
    /// Returns `BriefError::ConfigError` naming the first missing variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BriefError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &str| {
            optional(key)
                .ok_or_else(|| BriefError::ConfigError(format!("{key}: environment variable not set")))
        };

        Ok(Self {
            airtable_api_key: required("AIRTABLE_API_KEY")?,
            airtable_base_id: required("AIRTABLE_BASE_ID")?,
            airtable_table_name: required("AIRTABLE_TABLE_NAME")?,
            airtable_view: optional("AIRTABLE_VIEW")
                .unwrap_or_else(|| DEFAULT_AIRTABLE_VIEW.to_string()),
            airtable_api_url: optional("AIRTABLE_API_URL")
                .unwrap_or_else(|| DEFAULT_AIRTABLE_API_URL.to_string()),
            openai_api_key: required("OPENAI_API_KEY")?,
            openai_org_id: optional("OPENAI_ORG_ID"),
            openai_model: optional("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            openai_api_url: optional("OPENAI_API_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string()),
            slack_bot_token: required("SLACK_BOT_TOKEN")?,
            slack_channel: required("SLACK_CHANNEL")?,
            slack_api_url: optional("SLACK_API_URL")
                .unwrap_or_else(|| DEFAULT_SLACK_API_URL.to_string()),
        })
    }

    /// `{airtable_api_url}/v0/{base_id}/{table}` with each segment percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns `BriefError::ConfigError` if the base URL cannot carry a path.
    pub fn airtable_table_url(&self) -> Result<Url, BriefError> {
        let mut url = Url::parse(&self.airtable_api_url)?;
        url.path_segments_mut()
            .map_err(|()| {
                BriefError::ConfigError(format!(
                    "AIRTABLE_API_URL cannot be a base URL: {}",
                    self.airtable_api_url
                ))
            })?
            .pop_if_empty()
            .extend([
                "v0",
                self.airtable_base_id.as_str(),
                self.airtable_table_name.as_str(),
            ]);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(extra: &[(&str, &str)]) -> HashMap<String, String> {
        let mut map: HashMap<String, String> = [
            ("AIRTABLE_API_KEY", "key"),
            ("AIRTABLE_BASE_ID", "app123"),
            ("AIRTABLE_TABLE_NAME", "Candidates"),
            ("OPENAI_API_KEY", "sk-test"),
            ("SLACK_BOT_TOKEN", "xoxb-test"),
            ("SLACK_CHANNEL", "C0123"),
        ]
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
        for (k, v) in extra {
            map.insert((*k).to_string(), (*v).to_string());
        }
        map
    }

    #[test]
    fn test_table_url_encodes_table_name() {
        let map = vars(&[("AIRTABLE_TABLE_NAME", "Candidate Pipeline")]);
        let config = AppConfig::from_lookup(|k| map.get(k).cloned()).unwrap();

        let url = config.airtable_table_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.airtable.com/v0/app123/Candidate%20Pipeline"
        );
    }

    #[test]
    fn test_table_url_with_trailing_slash_base() {
        let map = vars(&[("AIRTABLE_API_URL", "http://127.0.0.1:9000/")]);
        let config = AppConfig::from_lookup(|k| map.get(k).cloned()).unwrap();

        let url = config.airtable_table_url().unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/v0/app123/Candidates");
    }

    #[test]
    fn test_table_url_rejects_opaque_base() {
        let map = vars(&[("AIRTABLE_API_URL", "mailto:someone@example.com")]);
        let config = AppConfig::from_lookup(|k| map.get(k).cloned()).unwrap();

        assert!(matches!(
            config.airtable_table_url(),
            Err(BriefError::ConfigError(_))
        ));
    }
}
