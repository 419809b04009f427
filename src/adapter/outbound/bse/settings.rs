//! BSE feed configuration.

use serde::Deserialize;

use crate::adapter::outbound::http::HttpConfig;

/// BSE announcements API settings.
///
/// `category`, `subcategory`, `search` and `kind` map onto the API's
/// `strCat`, `subcategory`, `strSearch` and `strType` query parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct BseConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Public site, sent as `Referer`/`Origin`.
    #[serde(default = "default_site_url")]
    pub site_url: String,
    /// Prefix joined with the attachment name to form document links.
    #[serde(default = "default_document_base_url")]
    pub document_base_url: String,
    #[serde(default = "default_any")]
    pub category: String,
    #[serde(default = "default_any")]
    pub subcategory: String,
    #[serde(default = "default_search")]
    pub search: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    /// Restrict the query to one scrip code.
    #[serde(default)]
    pub scrip: Option<String>,
    #[serde(default)]
    pub http: HttpConfig,
}

fn default_base_url() -> String {
    "https://api.bseindia.com".into()
}

fn default_site_url() -> String {
    "https://www.bseindia.com".into()
}

fn default_document_base_url() -> String {
    "https://www.bseindia.com/xml-data/corpfiling/AttachLive".into()
}

fn default_any() -> String {
    "-1".into()
}

fn default_search() -> String {
    "P".into()
}

fn default_kind() -> String {
    "C".into()
}

impl Default for BseConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            site_url: default_site_url(),
            document_base_url: default_document_base_url(),
            category: default_any(),
            subcategory: default_any(),
            search: default_search(),
            kind: default_kind(),
            scrip: None,
            http: HttpConfig::default(),
        }
    }
}
