//! The fetch → format → summarize → post run.

use chrono::{Local, NaiveDate};
use reqwest::Client;
use tracing::info;

use crate::clients::{AirtableClient, LlmClient, NotifyOutcome, SlackClient};
use crate::core::config::AppConfig;
use crate::errors::BriefError;
use crate::formatting::{compose_summary_message, format_candidates};

pub const NO_RECORDS_MESSAGE: &str = "No records found.";

/// How a run ended when no stage returned an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The fetch came back empty; nothing was summarized or posted.
    NoRecords,
    /// The summary was posted; carries the exact text sent.
    Posted(String),
    /// Slack refused the post with the given error code.
    Rejected(String),
}

/// Composes the three service clients for one run.
pub struct BriefBot {
    airtable_client: AirtableClient,
    llm_client: LlmClient,
    slack_client: SlackClient,
    slack_channel: String,
}

impl BriefBot {
    /// # Errors
    ///
    /// Returns an error if the configuration cannot produce a valid Airtable URL.
    pub fn new(config: &AppConfig) -> Result<Self, BriefError> {
        let http = Client::new();

        Ok(Self {
            airtable_client: AirtableClient::from_config(http.clone(), config)?,
            llm_client: LlmClient::from_config(http.clone(), config),
            slack_client: SlackClient::from_config(http, config),
            slack_channel: config.slack_channel.clone(),
        })
    }

    #[must_use]
    pub fn slack_client(&self) -> &SlackClient {
        &self.slack_client
    }

    /// Run once, dating the header with today's local date.
    ///
    /// # Errors
    ///
    /// See [`BriefBot::run_on`].
    pub async fn run(&self) -> Result<RunOutcome, BriefError> {
        self.run_on(Local::now().date_naive()).await
    }

    /// Run every stage in order, each awaited before the next starts.
    ///
    /// # Errors
    ///
    /// Fetch and summarize failures are returned unchanged. A Slack refusal is
    /// not an error; it yields `RunOutcome::Rejected`.
    pub async fn run_on(&self, date: NaiveDate) -> Result<RunOutcome, BriefError> {
        let batch = self.airtable_client.fetch_candidates().await?;
        if batch.is_empty() {
            info!("Empty candidate batch, skipping summary");
            println!("{NO_RECORDS_MESSAGE}");
            return Ok(RunOutcome::NoRecords);
        }

        let candidate_text = format_candidates(&batch);
        let prompt = self.llm_client.build_prompt(&candidate_text);
        let summary = self.llm_client.generate_summary(prompt).await?;

        let message = compose_summary_message(date, &summary);
        match self
            .slack_client
            .post_summary(&self.slack_channel, &message)
            .await?
        {
            NotifyOutcome::Sent => Ok(RunOutcome::Posted(message)),
            NotifyOutcome::Rejected(error) => Ok(RunOutcome::Rejected(error)),
        }
    }
}
