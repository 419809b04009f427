//! Alert sink adapters.
//!
//! Implements the [`AlertSink`](crate::port::AlertSink) port for the
//! terminal, the system bell, desktop notifications and Telegram.

mod console;
mod desktop;
mod log;
mod sound;

#[cfg(feature = "telegram")]
pub mod telegram;

pub use console::ConsoleSink;
pub use desktop::{DesktopSink, Toast, ToastBackend};
pub use log::LogSink;
pub use sound::SoundSink;
