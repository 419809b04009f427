//! Path utilities for corpwatch.
//!
//! All data lives under `~/.corpwatch/`:
//! - `~/.corpwatch/config.toml` - main configuration
//! - `~/.corpwatch/stocks.json` - conventional watch-list lookup file

use std::path::PathBuf;

/// Returns the corpwatch home directory (`~/.corpwatch/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".corpwatch")
}

/// Returns the default config file path (`~/.corpwatch/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
