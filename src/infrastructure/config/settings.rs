//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for the Telegram credentials.
//!
//! # Example
//!
//! ```no_run
//! use corpwatch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use url::Url;

use super::exchange::ExchangesConfig;
use super::logging::LoggingConfig;
use super::notification::NotificationConfig;
use super::poll::PollConfig;
use super::watchlist::WatchlistConfig;
use crate::domain::WatchList;
use crate::error::{ConfigError, Result};

/// Environment variable holding the Telegram bot token.
pub const TELEGRAM_TOKEN_ENV: &str = "CORPWATCH_TELEGRAM_TOKEN";
/// Environment variable holding the Telegram chat id.
pub const TELEGRAM_CHAT_ID_ENV: &str = "CORPWATCH_TELEGRAM_CHAT_ID";

/// Main application configuration.
///
/// Every section is optional; an empty file yields the defaults except for
/// the watch list, which must end up non-empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub poll: PollConfig,

    /// Exchange client settings.
    #[serde(default)]
    pub exchanges: ExchangesConfig,

    /// Tracked instruments and the market-cap threshold.
    #[serde(default)]
    pub watchlist: WatchlistConfig,

    /// Alert sink selection.
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// A relative watch-list file is resolved against the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed, the watch-list file cannot
    /// be loaded, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_in(content, None)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml_in(&content, path.parent())
    }

    fn parse_toml_in(content: &str, base_dir: Option<&Path>) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.watchlist.load_file(base_dir)?;
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Telegram credentials from the environment win over the file.
    fn apply_env(&mut self) -> Result<()> {
        let telegram = &mut self.notifications.telegram;
        if let Ok(token) = std::env::var(TELEGRAM_TOKEN_ENV) {
            if !token.trim().is_empty() {
                telegram.bot_token = Some(token.trim().to_string());
            }
        }
        if let Ok(chat_id) = std::env::var(TELEGRAM_CHAT_ID_ENV) {
            let parsed = chat_id
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    field: TELEGRAM_CHAT_ID_ENV,
                    reason: format!("'{chat_id}' is not an integer chat id"),
                })?;
            telegram.chat_id = Some(parsed);
        }
        Ok(())
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.poll.interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "interval_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        validate_url("exchanges.nse.base_url", &self.exchanges.nse.base_url)?;
        validate_url("exchanges.bse.base_url", &self.exchanges.bse.base_url)?;
        validate_url("exchanges.bse.site_url", &self.exchanges.bse.site_url)?;
        if self.exchanges.nse.http.retry_max_attempts == 0
            || self.exchanges.bse.http.retry_max_attempts == 0
        {
            return Err(ConfigError::InvalidValue {
                field: "retry_max_attempts",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        if self.watchlist.min_market_cap < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "min_market_cap",
                reason: "must be 0 or greater".to_string(),
            }
            .into());
        }
        if self.watchlist.entries.is_empty() {
            return Err(ConfigError::MissingField {
                field: "watchlist.entries",
            }
            .into());
        }
        if let Some(entry) = self
            .watchlist
            .entries
            .iter()
            .find(|e| e.code.trim().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "watchlist.entries",
                reason: format!("entry with market cap {} has an empty code", entry.market_cap),
            }
            .into());
        }

        let notifications = &self.notifications;
        if notifications.desktop && notifications.desktop_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "desktop_limit",
                reason: "must be greater than 0 when desktop alerts are enabled".to_string(),
            }
            .into());
        }
        if notifications.telegram.enabled {
            if notifications.telegram.bot_token.is_none() {
                return Err(ConfigError::MissingField {
                    field: TELEGRAM_TOKEN_ENV,
                }
                .into());
            }
            if notifications.telegram.chat_id.is_none() {
                return Err(ConfigError::MissingField {
                    field: TELEGRAM_CHAT_ID_ENV,
                }
                .into());
            }
        }
        Ok(())
    }

    /// Build the immutable watch list.
    #[must_use]
    pub fn watchlist(&self) -> WatchList {
        WatchList::new(
            self.watchlist.entries.clone(),
            self.watchlist.min_market_cap,
        )
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

fn validate_url(field: &'static str, value: &str) -> Result<()> {
    Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })?;
    Ok(())
}
