//! Terminal rendering of alert batches.

use std::fmt::Write as _;
use std::io::Write as _;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use owo_colors::{OwoColorize, Stream};

use crate::domain::time::exchange_now;
use crate::domain::{Announcement, SourceSelector};
use crate::error::SinkError;
use crate::port::AlertSink;

const RULE: &str = "********************************************************************************";
const SEPARATOR: &str = "--------------------------------------------------------------------------------";

/// Prints each batch as a banner-delimited block with running alert numbers.
pub struct ConsoleSink {
    selector: SourceSelector,
    next_number: AtomicU64,
}

impl ConsoleSink {
    #[must_use]
    pub fn new(selector: SourceSelector) -> Self {
        Self {
            selector,
            next_number: AtomicU64::new(1),
        }
    }

    /// Render a batch. Numbers continue from `first_number`.
    #[must_use]
    pub fn render(
        &self,
        alerts: &[Announcement],
        first_number: u64,
        now: DateTime<FixedOffset>,
    ) -> String {
        let clock = now.format("%H:%M:%S");
        let mut out = String::new();

        let _ = writeln!(out);
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "{:*^80}", format!(" NEW ALERTS START {clock} "));
        let _ = writeln!(out, "{RULE}");

        for (offset, alert) in alerts.iter().enumerate() {
            let heading = format!(
                "{} {} {}",
                alert.instrument_code(),
                alert.secondary_code(),
                alert.instrument_name()
            );
            let _ = writeln!(out, "{SEPARATOR}");
            let _ = writeln!(
                out,
                "{}) alert time:{}, source time:{}, ex dis time:{}",
                first_number + offset as u64,
                clock,
                alert.source_time().format("%H:%M:%S"),
                alert.disseminated_at().format("%H:%M:%S"),
            );
            let _ = writeln!(
                out,
                "{} | {}",
                heading.if_supports_color(Stream::Stdout, |t| t.yellow()),
                alert.kind_label()
            );
            let _ = writeln!(out, "{}", alert.subject());
            if !alert.document_url().is_empty() {
                let _ = writeln!(out, "{}", alert.document_url());
            }
        }

        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "{:*^80}", " NEW ALERTS END ");
        let _ = writeln!(out, "{RULE}");

        let footer = format!("{} ALERT!!!!!! {}", self.selector, now.format("%I:%M:%S %p"));
        let _ = writeln!(
            out,
            "{}",
            footer.if_supports_color(Stream::Stdout, |t| t.on_red())
        );
        out
    }
}

#[async_trait]
impl AlertSink for ConsoleSink {
    async fn deliver(&self, alerts: &[Announcement]) -> Result<(), SinkError> {
        let first = self
            .next_number
            .fetch_add(alerts.len() as u64, Ordering::SeqCst);
        let block = self.render(alerts, first, exchange_now());

        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(block.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| SinkError::Backend {
                sink: "console",
                reason: e.to_string(),
            })
    }

    fn name(&self) -> &'static str {
        "console"
    }
}
