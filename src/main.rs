use anyhow::{Context, Result};
use briefbot::core::config::AppConfig;
use briefbot::pipeline::{BriefBot, RunOutcome};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    briefbot::setup_logging();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let bot = BriefBot::new(&config).context("Failed to initialize BriefBot")?;

    // Fetch and summarize errors end the process with a non-zero status.
    match bot.run().await? {
        RunOutcome::Posted(_) => info!("BriefBot run complete"),
        RunOutcome::NoRecords => info!("BriefBot run complete, no candidates"),
        RunOutcome::Rejected(error) => warn!("BriefBot run complete, Slack refused post: {}", error),
    }

    Ok(())
}
