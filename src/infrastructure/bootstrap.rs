//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::bse::BseClient;
#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::telegram::{TelegramConfig, TelegramSink};
use crate::adapter::outbound::notifier::{ConsoleSink, DesktopSink, LogSink, SoundSink};
use crate::adapter::outbound::nse::NseClient;
use crate::application::{ConsolidationEngine, FeedSet, PollLoop, PollSettings};
use crate::domain::SourceSelector;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::SinkRegistry;

/// Build both exchange clients. Unselected clients are cheap and never polled.
///
/// # Errors
///
/// Returns an error if a configured base URL cannot be parsed.
pub fn build_feeds(config: &Config) -> Result<FeedSet> {
    let nse = NseClient::from_config(&config.exchanges.nse)?;
    let bse = BseClient::from_config(&config.exchanges.bse)?;
    Ok(FeedSet::new(Arc::new(nse), Arc::new(bse)))
}

/// Build the sink registry from the `[notifications]` section.
pub fn build_sink_registry(config: &Config, selector: SourceSelector) -> SinkRegistry {
    let notifications = &config.notifications;
    let mut registry = SinkRegistry::new();

    if notifications.console {
        registry.register(Box::new(ConsoleSink::new(selector)));
    }
    if notifications.log {
        registry.register(Box::new(LogSink));
    }
    if !notifications.mute_sound {
        registry.register(Box::new(SoundSink::new(
            notifications.loop_sound,
            notifications.sound_repeats,
        )));
    }
    if notifications.desktop {
        registry.register(Box::new(DesktopSink::new(notifications.desktop_limit)));
    }
    register_telegram(config, &mut registry);

    if registry.is_empty() {
        warn!("No alert sinks enabled; new announcements will only be counted");
    }
    registry
}

#[cfg(feature = "telegram")]
fn register_telegram(config: &Config, registry: &mut SinkRegistry) {
    let telegram = &config.notifications.telegram;
    if !telegram.enabled {
        return;
    }
    match (&telegram.bot_token, telegram.chat_id) {
        (Some(token), Some(chat_id)) => {
            registry.register(Box::new(TelegramSink::new(&TelegramConfig {
                bot_token: token.clone(),
                chat_id,
            })));
            info!("Telegram sink enabled");
        }
        _ => warn!("Telegram enabled but bot token or chat id missing"),
    }
}

#[cfg(not(feature = "telegram"))]
fn register_telegram(config: &Config, _registry: &mut SinkRegistry) {
    if config.notifications.telegram.enabled {
        warn!("Telegram enabled in config but the binary was built without the telegram feature");
    }
}

/// Wire a ready-to-run poll loop.
///
/// # Errors
///
/// Returns an error if the exchange clients cannot be built.
pub fn build_poll_loop(config: &Config, selector: SourceSelector) -> Result<PollLoop> {
    let settings = PollSettings {
        interval: config.poll.interval(),
        selector,
    };
    let feeds = build_feeds(config)?;
    let engine = ConsolidationEngine::new(config.watchlist());
    let sinks = build_sink_registry(config, selector);
    Ok(PollLoop::new(settings, feeds, engine, sinks))
}
