//! BriefBot - a scheduled recruiting digest.
//!
//! Each run pulls candidate rows from Airtable, renders them as text, asks
//! `OpenAI` to sort them into a few fixed categories, and posts the result to
//! a Slack channel.
//!
//! # Architecture
//!
//! The system uses:
//! - reqwest for the Airtable, `OpenAI`, and Slack HTTP calls
//! - slack-morphism for Slack request and token types
//! - openai-api-rs for chat message types
//! - Tokio for the async runtime
//!
//! # Example
//!
//! ```no_run
//! use briefbot::core::config::AppConfig;
//! use briefbot::pipeline::{BriefBot, RunOutcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     briefbot::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let bot = BriefBot::new(&config)?;
//!
//!     match bot.run().await? {
//!         RunOutcome::Posted(message) => println!("Posted:\n{}", message),
//!         RunOutcome::Rejected(error) => println!("Slack refused the post: {}", error),
//!         RunOutcome::NoRecords => println!("Nothing to summarize"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod clients;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod pipeline;
pub mod prompt;

pub use clients::llm_client::estimate_tokens;
pub use errors::BriefError;
pub use pipeline::{BriefBot, RunOutcome};

/// Configure structured logging for a run.
///
/// Honors `RUST_LOG`, defaulting to `briefbot=info`. Calling it again after a
/// subscriber is installed is a no-op.
///
/// # Example
///
/// ```
/// briefbot::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::{EnvFilter, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("briefbot=info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
