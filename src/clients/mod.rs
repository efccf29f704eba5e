//! Client modules for external API interactions

pub mod airtable_client;
pub mod llm_client;
pub mod slack_client;

pub use airtable_client::AirtableClient;
pub use llm_client::LlmClient;
pub use slack_client::{NotifyOutcome, SlackClient};
