//! Polling cadence and exchange selection.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::SourceSelector;

/// `[poll]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct PollConfig {
    /// Delay between cycles in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Exchanges to poll. When unset, the CLI prompts or falls back to NSE.
    #[serde(default)]
    pub source: Option<SourceSelector>,
}

const fn default_interval_ms() -> u64 {
    5000
}

impl PollConfig {
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            source: None,
        }
    }
}
