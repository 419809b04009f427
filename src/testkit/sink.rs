//! Recording alert sink.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::Announcement;
use crate::error::SinkError;
use crate::port::AlertSink;

/// Thread-safe batch collector for alert assertions in tests.
///
/// Batches are recorded even when the sink is set to fail, so tests can
/// observe at-most-once delivery.
#[derive(Clone, Default)]
pub struct RecordingSink {
    batches: Arc<Mutex<Vec<Vec<Announcement>>>>,
    failing: Arc<AtomicBool>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent deliveries return an error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn batches(&self) -> Vec<Vec<Announcement>> {
        self.batches.lock().expect("lock sink batches").clone()
    }

    /// Total announcements received across all batches.
    pub fn alert_count(&self) -> usize {
        self.batches
            .lock()
            .expect("lock sink batches")
            .iter()
            .map(Vec::len)
            .sum()
    }
}

#[async_trait]
impl AlertSink for RecordingSink {
    async fn deliver(&self, alerts: &[Announcement]) -> Result<(), SinkError> {
        self.batches
            .lock()
            .expect("lock sink batches")
            .push(alerts.to_vec());
        if self.failing.load(Ordering::SeqCst) {
            return Err(SinkError::Backend {
                sink: "recording",
                reason: "scripted failure".into(),
            });
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
