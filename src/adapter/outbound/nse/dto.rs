//! NSE announcement payloads.

use serde::Deserialize;

use crate::adapter::outbound::http::{code_from_json, non_blank};
use crate::domain::time::parse_exchange_time;
use crate::domain::{Announcement, Source};
use crate::error::FetchError;

const TIME_FORMATS: &[&str] = &["%d-%b-%Y %H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// One element of `/api/corporate-announcements`.
#[derive(Debug, Clone, Deserialize)]
pub struct NseAnnouncement {
    #[serde(default, deserialize_with = "code_from_json")]
    pub symbol: String,
    /// Short announcement type, e.g. "Outcome of Board Meeting".
    #[serde(default)]
    pub desc: Option<String>,
    /// Free-text details.
    #[serde(default, rename = "attchmntText")]
    pub attachment_text: Option<String>,
    #[serde(default, rename = "attchmntFile")]
    pub attachment_file: Option<String>,
    #[serde(default)]
    pub sm_name: Option<String>,
    #[serde(default)]
    pub sm_isin: Option<String>,
    #[serde(default, rename = "smIndustry")]
    pub industry: Option<String>,
    #[serde(default)]
    pub an_dt: Option<String>,
    #[serde(default)]
    pub exchdisstime: Option<String>,
}

impl NseAnnouncement {
    /// Map to a domain announcement.
    ///
    /// The subject is the attachment text, falling back to `desc` when the
    /// text is blank.
    pub fn into_announcement(self) -> Result<Announcement, FetchError> {
        let raw_time = non_blank(self.an_dt).unwrap_or_default();
        let source_time =
            parse_exchange_time(&raw_time, TIME_FORMATS).ok_or_else(|| FetchError::Timestamp {
                source_name: Source::Nse,
                value: raw_time.clone(),
            })?;
        let disseminated_at = match non_blank(self.exchdisstime) {
            Some(raw) => parse_exchange_time(&raw, TIME_FORMATS).ok_or(FetchError::Timestamp {
                source_name: Source::Nse,
                value: raw,
            })?,
            None => source_time,
        };

        let category = non_blank(self.desc);
        let subject = non_blank(self.attachment_text)
            .or_else(|| category.clone())
            .unwrap_or_default();

        Announcement::builder()
            .source(Source::Nse)
            .instrument_code(self.symbol)
            .secondary_code(non_blank(self.sm_isin).unwrap_or_default())
            .instrument_name(non_blank(self.sm_name).unwrap_or_default())
            .category(category.unwrap_or_default())
            .subcategory(non_blank(self.industry))
            .subject(subject)
            .document_url(
                non_blank(self.attachment_file)
                    .filter(|url| url.starts_with("http"))
                    .unwrap_or_default(),
            )
            .source_time(source_time)
            .disseminated_at(disseminated_at)
            .build()
            .map_err(|e| FetchError::Decode {
                source_name: Source::Nse,
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    const SAMPLE: &str = r#"[
      {
        "symbol": "INFY",
        "desc": "Outcome of Board Meeting",
        "dt": "19102026143210",
        "attchmntFile": "https://nsearchives.nseindia.com/corporate/INFY_19102026143210.pdf",
        "sm_name": "Infosys Limited",
        "sm_isin": "INE009A01021",
        "an_dt": "19-Oct-2026 14:32:10",
        "sort_date": "2026-10-19 14:32:10",
        "seq_id": "104729013",
        "smIndustry": "Computers - Software & Consulting",
        "orgid": "1",
        "attchmntText": "Infosys Limited has informed the Exchange about  the outcome of board meeting",
        "bflag": null,
        "old_new": null,
        "csvName": null,
        "exchdisstime": "19-Oct-2026 14:32:15",
        "difference": "00:00:05",
        "hasXbrl": false
      },
      {
        "symbol": "TCS",
        "desc": "Updates",
        "attchmntText": "",
        "attchmntFile": "-",
        "an_dt": "19-Oct-2026 14:30:00"
      }
    ]"#;

    #[test]
    fn maps_full_record() {
        let rows: Vec<NseAnnouncement> = serde_json::from_str(SAMPLE).expect("parses");
        let ann = rows[0].clone().into_announcement().expect("maps");

        assert_eq!(ann.source(), Source::Nse);
        assert_eq!(ann.instrument_code(), "INFY");
        assert_eq!(ann.secondary_code(), "INE009A01021");
        assert_eq!(ann.category(), "Outcome of Board Meeting");
        assert_eq!(ann.subcategory(), Some("Computers - Software & Consulting"));
        assert!(ann.subject().starts_with("Infosys Limited has informed"));
        assert!(ann.document_url().ends_with(".pdf"));
        assert_eq!(ann.source_time().second(), 10);
        assert_eq!(ann.disseminated_at().second(), 15);
    }

    #[test]
    fn blank_text_falls_back_to_desc() {
        let rows: Vec<NseAnnouncement> = serde_json::from_str(SAMPLE).expect("parses");
        let ann = rows[1].clone().into_announcement().expect("maps");

        assert_eq!(ann.subject(), "Updates");
        assert_eq!(ann.document_url(), "");
        assert_eq!(ann.disseminated_at(), ann.source_time());
    }

    #[test]
    fn bad_timestamp_is_reported() {
        let row: NseAnnouncement =
            serde_json::from_str(r#"{"symbol":"X","desc":"d","an_dt":"soon"}"#).expect("parses");
        assert!(matches!(
            row.into_announcement(),
            Err(FetchError::Timestamp { value, .. }) if value == "soon"
        ));
    }

    #[test]
    fn incomplete_rows_parse_and_are_rejected_individually() {
        let rows: Vec<NseAnnouncement> = serde_json::from_str(
            r#"[
              {"symbol": "INFY", "desc": "Updates", "an_dt": "19-Oct-2026 14:30:00"},
              {"symbol": "TCS", "desc": "Updates"},
              {"symbol": null, "desc": "Updates", "an_dt": "19-Oct-2026 14:31:00"}
            ]"#,
        )
        .expect("array still parses");

        let mut rows = rows.into_iter().map(NseAnnouncement::into_announcement);
        assert!(rows.next().is_some_and(|r| r.is_ok()));
        assert!(matches!(
            rows.next(),
            Some(Err(FetchError::Timestamp { value, .. })) if value.is_empty()
        ));
        assert!(matches!(rows.next(), Some(Err(FetchError::Decode { .. }))));
    }
}
