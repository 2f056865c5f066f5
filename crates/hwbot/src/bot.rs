//! Wiring of the production components.

use crate::api::PracticumClient;
use crate::error::BotResult;
use crate::notifier::{Notifier, TelegramSender};
use crate::poller::Poller;
use hwbot_config::Config;
use hwbot_i18n::catalog;
use tracing::info;

/// The homework status bot backed by the Practicum API and Telegram.
pub struct HomeworkBot {
    poller: Poller<PracticumClient, TelegramSender>,
}

impl HomeworkBot {
    /// Builds the bot from a validated configuration.
    pub fn from_config(config: &Config) -> BotResult<Self> {
        let api = PracticumClient::new(&config.practicum)?;
        let sender = TelegramSender::new(config.telegram.token.clone());
        let notifier = Notifier::new(sender, config.chat_target());
        let catalog = catalog()?;

        info!(endpoint = %config.practicum.endpoint, "Bot components ready");

        Ok(Self {
            poller: Poller::new(api, notifier, catalog, config.retry_period()),
        })
    }

    /// Polls until the process is stopped.
    pub async fn run(&self) {
        self.poller.run().await;
    }
}
