//! Telegram alert delivery.
//!
//! Sends each batch of new announcements as MarkdownV2 messages to a configured chat.
//! Requires the `telegram` feature.

mod format;
mod notifier;

pub use format::{escape_markdown, format_alert, format_batch, truncate};
pub use notifier::{TelegramConfig, TelegramSink};
