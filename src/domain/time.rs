//! Exchange-local timestamps.
//!
//! Both exchanges publish wall-clock times in Indian Standard Time without an
//! offset, so every parsed value is pinned to +05:30.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};

const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// The fixed offset exchange timestamps are expressed in.
#[must_use]
pub fn exchange_offset() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Current time in the exchange offset.
#[must_use]
pub fn exchange_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&exchange_offset())
}

/// Parse an exchange wall-clock string against the given `strftime` formats.
///
/// The first format that matches wins. Returns `None` when none match.
#[must_use]
pub fn parse_exchange_time(value: &str, formats: &[&str]) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .and_then(|naive| exchange_offset().from_local_datetime(&naive).single())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_first_matching_format() {
        let parsed = parse_exchange_time(
            "19-Oct-2026 14:32:10",
            &["%Y-%m-%dT%H:%M:%S%.f", "%d-%b-%Y %H:%M:%S"],
        )
        .expect("parses");
        assert_eq!(parsed.hour(), 14);
        assert_eq!(parsed.offset().local_minus_utc(), IST_OFFSET_SECS);
    }

    #[test]
    fn parses_fractional_seconds() {
        let parsed = parse_exchange_time("2026-10-19T14:32:10.427", &["%Y-%m-%dT%H:%M:%S%.f"])
            .expect("parses");
        assert_eq!(parsed.nanosecond(), 427_000_000);
    }

    #[test]
    fn rejects_unknown_layout() {
        assert!(parse_exchange_time("yesterday", &["%d-%b-%Y %H:%M:%S"]).is_none());
    }
}
