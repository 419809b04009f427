//! Tracing-backed sink.

use async_trait::async_trait;
use tracing::info;

use crate::domain::Announcement;
use crate::error::SinkError;
use crate::port::AlertSink;

/// Logs one structured line per new announcement.
pub struct LogSink;

#[async_trait]
impl AlertSink for LogSink {
    async fn deliver(&self, alerts: &[Announcement]) -> Result<(), SinkError> {
        for alert in alerts {
            info!(
                source = %alert.source(),
                code = alert.instrument_code(),
                name = alert.instrument_name(),
                kind = %alert.kind_label(),
                subject = alert.subject(),
                url = alert.document_url(),
                source_time = %alert.source_time(),
                "New announcement"
            );
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
