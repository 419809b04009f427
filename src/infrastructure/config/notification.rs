//! Alert sink configuration.

use serde::Deserialize;

const fn default_true() -> bool {
    true
}

const fn default_sound_repeats() -> u32 {
    3
}

const fn default_desktop_limit() -> usize {
    5
}

/// `[notifications]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    /// Print the alert banner to stdout.
    #[serde(default = "default_true")]
    pub console: bool,
    #[serde(default)]
    pub mute_sound: bool,
    /// Ring `sound_repeats` times instead of once.
    #[serde(default)]
    pub loop_sound: bool,
    #[serde(default = "default_sound_repeats")]
    pub sound_repeats: u32,
    /// Show desktop toasts.
    #[serde(default)]
    pub desktop: bool,
    /// Maximum toasts per batch (the most recent alerts win).
    #[serde(default = "default_desktop_limit")]
    pub desktop_limit: usize,
    /// Emit one tracing line per alert.
    #[serde(default)]
    pub log: bool,
    #[serde(default)]
    pub telegram: TelegramAppConfig,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            console: default_true(),
            mute_sound: false,
            loop_sound: false,
            sound_repeats: default_sound_repeats(),
            desktop: false,
            desktop_limit: default_desktop_limit(),
            log: false,
            telegram: TelegramAppConfig::default(),
        }
    }
}

/// `[notifications.telegram]` section.
///
/// Credentials are usually supplied through `CORPWATCH_TELEGRAM_TOKEN` and
/// `CORPWATCH_TELEGRAM_CHAT_ID` rather than the file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramAppConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub bot_token: Option<String>,
    #[serde(default)]
    pub chat_id: Option<i64>,
}
