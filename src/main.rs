//! Assistant Bot - Main entry point
//!
//! Reads commands from stdin and writes replies to stdout. Logs go to
//! stderr so they never mix with the conversation.

use anyhow::Result;
use assistant_bot::{run_session, Config, Session, SystemClock};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins; otherwise fall back to the configured level
    let fallback_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting assistant bot (upcoming birthday window: {} days)",
        config.upcoming_birthday_days
    );

    let mut session = Session::with_upcoming_days(SystemClock, config.upcoming_birthday_days);
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    run_session(&mut session, stdin, stdout, &config.prompt).await?;

    info!("Assistant bot shutdown complete");
    Ok(())
}
