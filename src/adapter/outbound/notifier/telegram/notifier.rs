//! Telegram sink.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::{debug, info};

use crate::domain::Announcement;
use crate::error::SinkError;
use crate::port::AlertSink;

use super::format::format_batch;

/// Credentials for the Telegram sink.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Target chat ID for alerts.
    pub chat_id: i64,
}

/// Sends alert batches to one chat.
pub struct TelegramSink {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramSink {
    #[must_use]
    pub fn new(config: &TelegramConfig) -> Self {
        info!(chat_id = config.chat_id, "Telegram sink configured");
        Self {
            bot: Bot::new(&config.bot_token),
            chat_id: ChatId(config.chat_id),
        }
    }
}

#[async_trait]
impl AlertSink for TelegramSink {
    async fn deliver(&self, alerts: &[Announcement]) -> Result<(), SinkError> {
        for text in format_batch(alerts) {
            self.bot
                .send_message(self.chat_id, text)
                .parse_mode(ParseMode::MarkdownV2)
                .await
                .map_err(|e| SinkError::Backend {
                    sink: "telegram",
                    reason: e.to_string(),
                })?;
            debug!(chat_id = self.chat_id.0, "Telegram message sent");
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "telegram"
    }
}
