//! Airtable API client module
//!
//! Reads the first page of the candidate table.

use reqwest::Client;
use tracing::info;
use url::Url;

use crate::core::config::AppConfig;
use crate::core::models::{CandidateBatch, MAX_BATCH_SIZE, RecordPage};
use crate::errors::BriefError;

pub struct AirtableClient {
    http: Client,
    api_key: String,
    table_url: Url,
    view: String,
}

impl AirtableClient {
    #[must_use]
    pub fn new(http: Client, api_key: String, table_url: Url, view: String) -> Self {
        Self {
            http,
            api_key,
            table_url,
            view,
        }
    }

    /// # Errors
    ///
    /// Returns an error if the configured Airtable URL is unusable.
    pub fn from_config(http: Client, config: &AppConfig) -> Result<Self, BriefError> {
        Ok(Self::new(
            http,
            config.airtable_api_key.clone(),
            config.airtable_table_url()?,
            config.airtable_view.clone(),
        ))
    }

    /// Fetch up to 100 candidate rows from the configured view.
    ///
    /// Only the first page is read; the `offset` cursor is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or an
    /// unparseable body. Nothing is retried.
    pub async fn fetch_candidates(&self) -> Result<CandidateBatch, BriefError> {
        let page_size = MAX_BATCH_SIZE.to_string();

        let response = self
            .http
            .get(self.table_url.clone())
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .query(&[("pageSize", page_size.as_str()), ("view", self.view.as_str())])
            .send()
            .await
            .map_err(|e| BriefError::HttpError(format!("Airtable request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(BriefError::AirtableError(format!("HTTP {status}: {body}")));
        }

        let body = response.text().await?;
        let page: RecordPage = serde_json::from_str(&body)?;

        if page.offset.is_some() {
            info!("Airtable reported more rows; only the first page is used");
        }

        let batch = CandidateBatch::from(page);
        info!("Fetched {} candidate records", batch.len());
        Ok(batch)
    }
}
