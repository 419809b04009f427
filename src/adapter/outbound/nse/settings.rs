//! NSE feed configuration.

use serde::Deserialize;

use crate::adapter::outbound::http::HttpConfig;

/// NSE announcements API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct NseConfig {
    /// Site root, used both for the cookie warm-up and the API path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Announcement index to query (`equities`, `sme`, `debt`, ...).
    #[serde(default = "default_index")]
    pub index: String,
    /// Restrict the query to one symbol.
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub http: HttpConfig,
}

fn default_base_url() -> String {
    "https://www.nseindia.com".into()
}

fn default_index() -> String {
    "equities".into()
}

impl Default for NseConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            index: default_index(),
            symbol: None,
            http: HttpConfig::default(),
        }
    }
}
