//! Main entry point for the homework status bot.

use anyhow::Context;
use hwbot::HomeworkBot;
use hwbot_common::{init_logging, redact, LoggingConfig};
use hwbot_config::ConfigLoader;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(e) => {
            // Logging settings come from the same environment, so fall back to defaults
            init_logging(&LoggingConfig::default())?;
            error!(error = %e, "Configuration is incomplete, not starting");
            return Err(e).context("failed to load configuration");
        }
    };

    init_logging(&config.logging)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        practicum_token = %redact(&config.practicum.token),
        telegram_token = %redact(&config.telegram.token),
        chat = %config.chat_target(),
        retry_period_secs = config.polling.retry_period_secs,
        "Starting homework bot"
    );

    let bot = HomeworkBot::from_config(&config).context("failed to start bot")?;
    bot.run().await;

    Ok(())
}
