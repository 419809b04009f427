//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`Announcement`] and [`WatchList`]
//! so tests focus on assertions rather than construction boilerplate.

use chrono::{DateTime, FixedOffset, TimeZone};
use rust_decimal::Decimal;

use crate::domain::time::exchange_offset;
use crate::domain::{Announcement, Source, WatchList, WatchListEntry, DEFAULT_MIN_MARKET_CAP};

/// Exchange-local time on a fixed test day.
pub fn exchange_time(hour: u32, minute: u32, second: u32) -> DateTime<FixedOffset> {
    exchange_offset()
        .with_ymd_and_hms(2026, 10, 19, hour, minute, second)
        .single()
        .expect("valid exchange time")
}

/// An NSE announcement recorded at 10:00:00.
pub fn announcement(code: &str, subject: &str) -> Announcement {
    announcement_from(Source::Nse, code, subject, exchange_time(10, 0, 0))
}

/// An announcement with explicit source and time.
pub fn announcement_from(
    source: Source,
    code: &str,
    subject: &str,
    at: DateTime<FixedOffset>,
) -> Announcement {
    Announcement::builder()
        .source(source)
        .instrument_code(code)
        .secondary_code(format!("{code}-REF"))
        .instrument_name(format!("{code} Ltd"))
        .category("Updates")
        .subject(subject)
        .document_url(format!("https://example.com/{code}.pdf"))
        .source_time(at)
        .build()
        .expect("valid announcement")
}

/// A watch list from `(code, market_cap)` pairs with the default threshold.
pub fn watchlist(entries: &[(&str, i64)]) -> WatchList {
    WatchList::new(
        entries
            .iter()
            .map(|(code, cap)| WatchListEntry::new(*code, Decimal::from(*cap)))
            .collect(),
        DEFAULT_MIN_MARKET_CAP,
    )
}
