//! BSE announcement payloads.

use serde::Deserialize;

use crate::adapter::outbound::http::{code_from_json, non_blank};
use crate::domain::time::parse_exchange_time;
use crate::domain::{Announcement, Source};
use crate::error::FetchError;

const TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%d/%m/%Y %H:%M:%S"];

/// Response envelope of `AnnSubCategoryGetData`.
#[derive(Debug, Clone, Deserialize)]
pub struct BseAnnouncementPage {
    #[serde(rename = "Table", default)]
    pub table: Vec<BseAnnouncement>,
}

/// One row of the `Table` array.
#[derive(Debug, Clone, Deserialize)]
pub struct BseAnnouncement {
    #[serde(rename = "NEWSID", default)]
    pub news_id: Option<String>,
    #[serde(rename = "SCRIP_CD", default, deserialize_with = "code_from_json")]
    pub scrip_code: String,
    #[serde(rename = "SLONGNAME", default)]
    pub long_name: Option<String>,
    #[serde(rename = "NEWSSUB", default)]
    pub news_subject: Option<String>,
    #[serde(rename = "HEADLINE", default)]
    pub headline: Option<String>,
    #[serde(rename = "CATEGORYNAME", default)]
    pub category: Option<String>,
    #[serde(rename = "SUBCATNAME", default)]
    pub subcategory: Option<String>,
    #[serde(rename = "ATTACHMENTNAME", default)]
    pub attachment: Option<String>,
    #[serde(rename = "NEWS_DT", default)]
    pub news_date: Option<String>,
    #[serde(rename = "DissemDT", default)]
    pub disseminated: Option<String>,
}

impl BseAnnouncement {
    /// Map to a domain announcement, linking attachments under `document_base_url`.
    pub fn into_announcement(self, document_base_url: &str) -> Result<Announcement, FetchError> {
        let raw_time = non_blank(self.news_date).unwrap_or_default();
        let source_time =
            parse_exchange_time(&raw_time, TIME_FORMATS).ok_or_else(|| FetchError::Timestamp {
                source_name: Source::Bse,
                value: raw_time.clone(),
            })?;
        let disseminated_at = match non_blank(self.disseminated) {
            Some(raw) => parse_exchange_time(&raw, TIME_FORMATS).ok_or(FetchError::Timestamp {
                source_name: Source::Bse,
                value: raw,
            })?,
            None => source_time,
        };

        let subject = non_blank(self.news_subject)
            .or_else(|| non_blank(self.headline))
            .unwrap_or_default();
        let document_url = non_blank(self.attachment)
            .map(|name| format!("{}/{}", document_base_url.trim_end_matches('/'), name))
            .unwrap_or_default();

        Announcement::builder()
            .source(Source::Bse)
            .instrument_code(self.scrip_code)
            .secondary_code(non_blank(self.news_id).unwrap_or_default())
            .instrument_name(non_blank(self.long_name).unwrap_or_default())
            .category(non_blank(self.category).unwrap_or_default())
            .subcategory(non_blank(self.subcategory))
            .subject(subject)
            .document_url(document_url)
            .source_time(source_time)
            .disseminated_at(disseminated_at)
            .build()
            .map_err(|e| FetchError::Decode {
                source_name: Source::Bse,
                reason: e.to_string(),
            })
    }
}
