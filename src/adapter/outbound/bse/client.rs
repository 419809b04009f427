//! BSE announcements HTTP client.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, ORIGIN, REFERER};
use tracing::{debug, warn};
use url::Url;

use super::dto::BseAnnouncementPage;
use super::settings::BseConfig;
use crate::adapter::outbound::http::HttpFetcher;
use crate::domain::time::exchange_now;
use crate::domain::{Announcement, Source};
use crate::error::{FetchError, Result};
use crate::port::AnnouncementFeed;

const ENDPOINT: &str = "/BseIndiaAPI/api/AnnSubCategoryGetData/w";

/// Client for BSE's `AnnSubCategoryGetData` endpoint.
///
/// Each fetch asks for the first page of today's announcements (exchange
/// local date).
pub struct BseClient {
    fetcher: HttpFetcher,
    config: BseConfig,
    endpoint: Url,
}

impl BseClient {
    pub fn from_config(config: &BseConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.base_url)?.join(ENDPOINT)?;
        let site = Url::parse(&config.site_url)?;

        let mut headers = HeaderMap::new();
        if let Ok(referer) = HeaderValue::from_str(site.as_str()) {
            headers.insert(REFERER, referer);
        }
        if let Ok(origin) = HeaderValue::from_str(site.origin().ascii_serialization().as_str()) {
            headers.insert(ORIGIN, origin);
        }

        Ok(Self {
            fetcher: HttpFetcher::new(Source::Bse, &config.http, headers),
            config: config.clone(),
            endpoint,
        })
    }

    /// Query URL for announcements published on `day`.
    #[must_use]
    pub fn url_for(&self, day: NaiveDate) -> Url {
        let date = day.format("%Y%m%d").to_string();
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("pageno", "1")
            .append_pair("strCat", &self.config.category)
            .append_pair("strPrevDate", &date)
            .append_pair("strScrip", self.config.scrip.as_deref().unwrap_or(""))
            .append_pair("strSearch", &self.config.search)
            .append_pair("strToDate", &date)
            .append_pair("strType", &self.config.kind)
            .append_pair("subcategory", &self.config.subcategory);
        url
    }
}

#[async_trait]
impl AnnouncementFeed for BseClient {
    async fn fetch(&self) -> std::result::Result<Vec<Announcement>, FetchError> {
        let url = self.url_for(exchange_now().date_naive());
        let page: BseAnnouncementPage = self.fetcher.get_json(url.as_str()).await?;

        let total = page.table.len();
        let announcements: Vec<Announcement> = page
            .table
            .into_iter()
            .filter_map(|row| {
                row.into_announcement(&self.config.document_base_url)
                    .map_err(|e| warn!(error = %e, "Skipping malformed BSE announcement"))
                    .ok()
            })
            .collect();

        debug!(total, mapped = announcements.len(), "Fetched BSE announcements");
        Ok(announcements)
    }

    fn source(&self) -> Source {
        Source::Bse
    }
}
