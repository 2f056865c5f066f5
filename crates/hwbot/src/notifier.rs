//! Delivery of notifications to the chat.

use async_trait::async_trait;
use hwbot_common::{ChatTarget, HwbotError, Result};
use teloxide::requests::Requester;
use teloxide::types::{ChatId, Recipient};
use teloxide::Bot;
use tracing::{debug, instrument};

/// Anything that can post a text message to a chat.
#[async_trait]
pub trait ChatSender: Send + Sync {
    /// Sends `text` to `chat`.
    async fn send_message(&self, chat: &ChatTarget, text: &str) -> Result<()>;
}

/// Telegram Bot API sender.
#[derive(Debug, Clone)]
pub struct TelegramSender {
    bot: Bot,
}

impl TelegramSender {
    /// Creates a sender authenticated with a bot token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            bot: Bot::new(token),
        }
    }
}

fn recipient(chat: &ChatTarget) -> Recipient {
    match chat {
        ChatTarget::Id(id) => Recipient::Id(ChatId(*id)),
        ChatTarget::Username(name) => Recipient::ChannelUsername(name.clone()),
    }
}

#[async_trait]
impl ChatSender for TelegramSender {
    async fn send_message(&self, chat: &ChatTarget, text: &str) -> Result<()> {
        self.bot
            .send_message(recipient(chat), text)
            .await
            .map_err(|e| HwbotError::delivery_with_source("Telegram rejected the message", e))?;
        Ok(())
    }
}

/// Sends notifications to the one configured chat.
#[derive(Debug)]
pub struct Notifier<S> {
    sender: S,
    chat: ChatTarget,
}

impl<S: ChatSender> Notifier<S> {
    /// Creates a notifier bound to `chat`.
    pub const fn new(sender: S, chat: ChatTarget) -> Self {
        Self { sender, chat }
    }

    /// Destination chat.
    pub const fn chat(&self) -> &ChatTarget {
        &self.chat
    }

    /// Sends `text`, reporting any failure as a delivery error.
    #[instrument(skip_all, fields(chat = %self.chat))]
    pub async fn notify(&self, text: &str) -> Result<()> {
        self.sender
            .send_message(&self.chat, text)
            .await
            .map_err(|e| match e {
                HwbotError::Delivery { .. } => e,
                other => HwbotError::delivery_with_source("failed to send message", other),
            })?;

        debug!("Message sent");
        Ok(())
    }
}
