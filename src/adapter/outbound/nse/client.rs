//! NSE announcements HTTP client.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, REFERER};
use tracing::{debug, warn};
use url::Url;

use super::dto::NseAnnouncement;
use super::settings::NseConfig;
use crate::adapter::outbound::http::HttpFetcher;
use crate::domain::{Announcement, Source};
use crate::error::{FetchError, Result};
use crate::port::AnnouncementFeed;

/// Client for `GET /api/corporate-announcements`.
///
/// NSE rejects API calls without session cookies, so the first fetch (and
/// any fetch after a rejected one) visits the home page first.
pub struct NseClient {
    fetcher: HttpFetcher,
    home_url: String,
    api_url: Url,
    warmed: tokio::sync::Mutex<bool>,
}

impl NseClient {
    pub fn from_config(config: &NseConfig) -> Result<Self> {
        let home = Url::parse(&config.base_url)?;
        let api_url = announcements_url(&home, config)?;

        let mut headers = HeaderMap::new();
        if let Ok(referer) = HeaderValue::from_str(home.as_str()) {
            headers.insert(REFERER, referer);
        }

        Ok(Self {
            fetcher: HttpFetcher::new(Source::Nse, &config.http, headers),
            home_url: home.to_string(),
            api_url,
            warmed: tokio::sync::Mutex::new(false),
        })
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    async fn ensure_session(&self) -> std::result::Result<(), FetchError> {
        let mut warmed = self.warmed.lock().await;
        if !*warmed {
            self.fetcher.warm_up(&self.home_url).await?;
            *warmed = true;
        }
        Ok(())
    }

    async fn forget_session(&self) {
        *self.warmed.lock().await = false;
    }
}

/// Build the announcements endpoint for `config`.
pub(crate) fn announcements_url(home: &Url, config: &NseConfig) -> Result<Url> {
    let mut url = home.join("/api/corporate-announcements")?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("index", &config.index);
        if let Some(symbol) = config.symbol.as_deref() {
            query.append_pair("symbol", symbol);
        }
    }
    Ok(url)
}

#[async_trait]
impl AnnouncementFeed for NseClient {
    async fn fetch(&self) -> std::result::Result<Vec<Announcement>, FetchError> {
        self.ensure_session().await?;

        let rows: Vec<NseAnnouncement> = match self.fetcher.get_json(self.api_url.as_str()).await {
            Ok(rows) => rows,
            Err(err) => {
                if matches!(err, FetchError::Status { .. }) {
                    self.forget_session().await;
                }
                return Err(err);
            }
        };

        let total = rows.len();
        let announcements: Vec<Announcement> = rows
            .into_iter()
            .filter_map(|row| {
                row.into_announcement()
                    .map_err(|e| warn!(error = %e, "Skipping malformed NSE announcement"))
                    .ok()
            })
            .collect();

        debug!(total, mapped = announcements.len(), "Fetched NSE announcements");
        Ok(announcements)
    }

    fn source(&self) -> Source {
        Source::Nse
    }
}
