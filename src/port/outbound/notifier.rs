//! Alert sink port.

use async_trait::async_trait;
use tracing::warn;

use crate::domain::Announcement;
use crate::error::SinkError;

/// Consumer of newly seen announcements.
///
/// `deliver` is only called with a non-empty batch, in the order the
/// announcements were first seen. Sinks must tolerate seeing the same
/// announcement again after a process restart.
#[async_trait]
pub trait AlertSink: Send + Sync {
    /// Deliver one batch of new announcements.
    async fn deliver(&self, alerts: &[Announcement]) -> Result<(), SinkError>;

    /// Short name for logging.
    fn name(&self) -> &'static str;
}

/// Outcome of broadcasting one batch to every registered sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Sinks that accepted the batch.
    pub delivered: usize,
    /// Sinks that returned an error.
    pub failed: usize,
}

impl DeliveryReport {
    #[must_use]
    pub fn all_delivered(&self) -> bool {
        self.failed == 0
    }
}

/// Registry of sinks (composite pattern).
///
/// Broadcasts a batch to every registered sink in registration order. A
/// failing sink is logged and does not stop delivery to the rest.
pub struct SinkRegistry {
    sinks: Vec<Box<dyn AlertSink>>,
}

impl SinkRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { sinks: vec![] }
    }

    /// Register a sink.
    pub fn register(&mut self, sink: Box<dyn AlertSink>) {
        self.sinks.push(sink);
    }

    /// Deliver a batch to all registered sinks.
    pub async fn deliver_all(&self, alerts: &[Announcement]) -> DeliveryReport {
        let mut report = DeliveryReport::default();
        if alerts.is_empty() {
            return report;
        }

        for sink in &self.sinks {
            match sink.deliver(alerts).await {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    report.failed += 1;
                    warn!(sink = sink.name(), error = %e, "Alert delivery failed");
                }
            }
        }

        report
    }

    /// Names of registered sinks, in delivery order.
    pub fn names(&self) -> Vec<&'static str> {
        self.sinks.iter().map(|s| s.name()).collect()
    }

    /// Number of registered sinks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl Default for SinkRegistry {
    fn default() -> Self {
        Self::new()
    }
}
