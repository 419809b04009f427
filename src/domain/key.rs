//! Identity key for novelty tracking.
//!
//! Two fetches of the same real-world announcement must produce equal keys.
//! The key is built from the fields an exchange does not rewrite between
//! fetches: the source, the instrument code, the subject line and the time
//! the exchange recorded the event. Document URLs, dissemination times and
//! category labels are left out because exchanges revise them after
//! publication.
//!
//! Canonical form:
//! - instrument code trimmed and upper-cased
//! - subject trimmed with internal whitespace runs collapsed to one space
//!   (case preserved)
//! - source time converted to UTC and truncated to whole seconds

use std::fmt;

use chrono::{DateTime, DurationRound, TimeDelta, Utc};

use super::announcement::Announcement;
use super::source::Source;

/// Canonical identity of an announcement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnouncementKey {
    source: Source,
    instrument_code: String,
    subject: String,
    source_time: DateTime<Utc>,
}

impl AnnouncementKey {
    pub fn source(&self) -> Source {
        self.source
    }

    pub fn instrument_code(&self) -> &str {
        &self.instrument_code
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn source_time(&self) -> DateTime<Utc> {
        self.source_time
    }
}

impl From<&Announcement> for AnnouncementKey {
    fn from(ann: &Announcement) -> Self {
        let utc = ann.source_time().with_timezone(&Utc);
        Self {
            source: ann.source(),
            instrument_code: ann.instrument_code().trim().to_uppercase(),
            subject: collapse_whitespace(ann.subject()),
            source_time: utc.duration_trunc(TimeDelta::seconds(1)).unwrap_or(utc),
        }
    }
}

impl fmt::Display for AnnouncementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}@{}",
            self.source,
            self.instrument_code,
            self.source_time.format("%Y-%m-%dT%H:%M:%SZ")
        )
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::time::exchange_offset;
    use chrono::{FixedOffset, TimeZone};

    fn at(secs: u32, millis: u32) -> DateTime<FixedOffset> {
        exchange_offset()
            .with_ymd_and_hms(2026, 10, 19, 11, 0, secs)
            .single()
            .expect("valid time")
            + TimeDelta::milliseconds(i64::from(millis))
    }

    fn ann(code: &str, subject: &str, time: DateTime<FixedOffset>) -> Announcement {
        Announcement::builder()
            .source(Source::Nse)
            .instrument_code(code)
            .subject(subject)
            .source_time(time)
            .build()
            .expect("valid announcement")
    }

    #[test]
    fn formatting_noise_does_not_change_the_key() {
        let a = ann("infy", "Q1  results\n declared", at(5, 0));
        let b = ann(" INFY ", "Q1 results declared", at(5, 0));
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn sub_second_precision_is_ignored() {
        let a = ann("INFY", "Q1 results", at(5, 100));
        let b = ann("INFY", "Q1 results", at(5, 900));
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn revised_url_and_dissemination_keep_the_key() {
        let base = Announcement::builder()
            .source(Source::Nse)
            .instrument_code("INFY")
            .subject("Q1 results")
            .source_time(at(5, 0));
        let a = base
            .document_url("https://example.com/a.pdf")
            .build()
            .expect("valid");
        let b = Announcement::builder()
            .source(Source::Nse)
            .instrument_code("INFY")
            .subject("Q1 results")
            .source_time(at(5, 0))
            .disseminated_at(at(40, 0))
            .document_url("https://example.com/b.pdf")
            .build()
            .expect("valid");
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn distinct_events_get_distinct_keys() {
        let base = ann("INFY", "Q1 results", at(5, 0));
        assert_ne!(base.key(), ann("INFY", "Q2 results", at(5, 0)).key());
        assert_ne!(base.key(), ann("INFY", "Q1 results", at(6, 0)).key());
        assert_ne!(base.key(), ann("TCS", "Q1 results", at(5, 0)).key());
        assert_ne!(base.key(), ann("INFY", "q1 results", at(5, 0)).key());
    }

    #[test]
    fn same_event_on_other_exchange_is_distinct() {
        let nse = ann("INFY", "Q1 results", at(5, 0));
        let bse = Announcement::builder()
            .source(Source::Bse)
            .instrument_code("INFY")
            .subject("Q1 results")
            .source_time(at(5, 0))
            .build()
            .expect("valid");
        assert_ne!(nse.key(), bse.key());
    }

    #[test]
    fn display_is_compact() {
        let key = ann("INFY", "Q1 results", at(5, 0)).key();
        assert_eq!(key.to_string(), "NSE:INFY@2026-10-19T05:30:05Z");
    }
}
