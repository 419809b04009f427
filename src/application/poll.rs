//! The polling loop.
//!
//! Each cycle sleeps for the configured interval, gathers and consolidates
//! the selected exchange snapshots, filters them for novelty and hands any
//! new announcements to the sinks. Cycles never overlap. An error in one
//! cycle is logged and the loop moves on to the next sleep.

use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, error, info};

use super::consolidation::{ConsolidationEngine, FeedSet};
use super::novelty::NoveltyTracker;
use crate::domain::SourceSelector;
use crate::error::Result;
use crate::port::{DeliveryReport, SinkRegistry};

/// What the loop is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    /// Sleeping between cycles.
    Idle,
    /// Running one fetch → filter → alert cycle.
    Fetching,
}

/// Fixed parameters for one run of the loop.
#[derive(Debug, Clone, Copy)]
pub struct PollSettings {
    pub interval: Duration,
    pub selector: SourceSelector,
}

/// Result of one successful cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Announcements left after watch-list filtering.
    pub consolidated: usize,
    /// Announcements seen for the first time.
    pub new_alerts: usize,
    /// Present only when there was something to deliver.
    pub delivery: Option<DeliveryReport>,
}

/// Counters over the life of the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollStats {
    pub cycles: u64,
    pub failed_cycles: u64,
    pub alerts: u64,
}

/// Drives feeds → consolidation → novelty → sinks.
pub struct PollLoop {
    settings: PollSettings,
    feeds: FeedSet,
    engine: ConsolidationEngine,
    tracker: NoveltyTracker,
    sinks: SinkRegistry,
    state: PollState,
    stats: PollStats,
}

impl PollLoop {
    pub fn new(
        settings: PollSettings,
        feeds: FeedSet,
        engine: ConsolidationEngine,
        sinks: SinkRegistry,
    ) -> Self {
        Self::with_tracker(settings, feeds, engine, sinks, NoveltyTracker::new())
    }

    /// Build a loop around an existing tracker.
    pub fn with_tracker(
        settings: PollSettings,
        feeds: FeedSet,
        engine: ConsolidationEngine,
        sinks: SinkRegistry,
        tracker: NoveltyTracker,
    ) -> Self {
        Self {
            settings,
            feeds,
            engine,
            tracker,
            sinks,
            state: PollState::Idle,
            stats: PollStats::default(),
        }
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    pub fn stats(&self) -> PollStats {
        self.stats
    }

    pub fn tracker(&self) -> &NoveltyTracker {
        &self.tracker
    }

    pub fn settings(&self) -> PollSettings {
        self.settings
    }

    /// Run one fetch → filter → alert cycle without the leading sleep.
    ///
    /// A fetch error returns before the tracker is touched. Sink failures
    /// are counted in the report, never returned: the announcements are
    /// already marked seen when the sinks run.
    pub async fn run_cycle(&mut self) -> Result<CycleReport> {
        self.state = PollState::Fetching;
        let result = self.cycle().await;
        self.state = PollState::Idle;

        self.stats.cycles += 1;
        match &result {
            Ok(report) => self.stats.alerts += report.new_alerts as u64,
            Err(_) => self.stats.failed_cycles += 1,
        }
        result
    }

    async fn cycle(&mut self) -> Result<CycleReport> {
        let consolidated = self
            .engine
            .gather(self.settings.selector, &self.feeds)
            .await?;
        let total = consolidated.len();

        let novelty = self.tracker.filter(consolidated);
        if !novelty.has_new {
            debug!(consolidated = total, "No new announcements");
            return Ok(CycleReport {
                consolidated: total,
                ..CycleReport::default()
            });
        }

        info!(
            new = novelty.items.len(),
            consolidated = total,
            source = %self.settings.selector,
            "New announcements"
        );
        let delivery = self.sinks.deliver_all(&novelty.items).await;

        Ok(CycleReport {
            consolidated: total,
            new_alerts: novelty.items.len(),
            delivery: Some(delivery),
        })
    }

    /// Run until `shutdown` flips to `true` or its sender is dropped.
    ///
    /// Returns the final counters.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> PollStats {
        info!(
            interval_ms = self.settings.interval.as_millis() as u64,
            source = %self.settings.selector,
            sinks = ?self.sinks.names(),
            tracked = self.engine.watchlist().tracked().count(),
            "Polling started"
        );

        loop {
            if *shutdown.borrow() {
                break;
            }

            self.state = PollState::Idle;
            tokio::select! {
                () = tokio::time::sleep(self.settings.interval) => {}
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                    continue;
                }
            }

            if let Err(e) = self.run_cycle().await {
                error!(error = %e, cycle = self.stats.cycles, "Polling cycle failed");
            }
        }

        info!(
            cycles = self.stats.cycles,
            failed = self.stats.failed_cycles,
            alerts = self.stats.alerts,
            "Polling stopped"
        );
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::Source;
    use crate::testkit::domain::{announcement, watchlist};
    use crate::testkit::feed::ScriptedFeed;
    use crate::testkit::sink::RecordingSink;

    struct Harness {
        nse: ScriptedFeed,
        sink: RecordingSink,
        poll: PollLoop,
    }

    fn harness(interval: Duration) -> Harness {
        let nse = ScriptedFeed::new(Source::Nse);
        let bse = ScriptedFeed::new(Source::Bse);
        let sink = RecordingSink::new();
        let mut sinks = SinkRegistry::new();
        sinks.register(Box::new(sink.clone()));

        let poll = PollLoop::new(
            PollSettings {
                interval,
                selector: SourceSelector::Nse,
            },
            FeedSet::new(Arc::new(nse.clone()), Arc::new(bse)),
            ConsolidationEngine::new(watchlist(&[("X", 5000)])),
            sinks,
        );
        Harness { nse, sink, poll }
    }

    #[tokio::test]
    async fn repeated_snapshot_alerts_once() {
        let mut h = harness(Duration::from_millis(1));
        let snapshot = vec![announcement("X", "Q1 results")];
        h.nse.push_snapshot(snapshot.clone());
        h.nse.push_snapshot(snapshot.clone());

        let first = h.poll.run_cycle().await.expect("cycle 1");
        let second = h.poll.run_cycle().await.expect("cycle 2");

        assert_eq!(first.new_alerts, 1);
        assert_eq!(second.new_alerts, 0);
        assert_eq!(second.delivery, None);
        assert_eq!(h.sink.batches(), vec![snapshot]);
        assert_eq!(h.poll.state(), PollState::Idle);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_seen_set_untouched() {
        let mut h = harness(Duration::from_millis(1));
        h.nse.push_snapshot(vec![announcement("X", "first")]);
        h.nse.push_failure("truncated body");
        h.nse.push_snapshot(vec![announcement("X", "second")]);

        h.poll.run_cycle().await.expect("cycle 1");
        let seen_before = h.poll.tracker().seen().len();
        assert!(h.poll.run_cycle().await.is_err());
        assert_eq!(h.poll.tracker().seen().len(), seen_before);

        let third = h.poll.run_cycle().await.expect("cycle 3");
        assert_eq!(third.new_alerts, 1);
        assert_eq!(
            h.poll.stats(),
            PollStats {
                cycles: 3,
                failed_cycles: 1,
                alerts: 2
            }
        );
    }

    #[tokio::test]
    async fn sink_failure_is_at_most_once() {
        let mut h = harness(Duration::from_millis(1));
        let snapshot = vec![announcement("X", "Q1 results")];
        h.nse.push_snapshot(snapshot.clone());
        h.nse.push_snapshot(snapshot);
        h.sink.set_failing(true);

        let first = h.poll.run_cycle().await.expect("sink errors are not cycle errors");
        assert_eq!(
            first.delivery,
            Some(DeliveryReport {
                delivered: 0,
                failed: 1
            })
        );

        h.sink.set_failing(false);
        let second = h.poll.run_cycle().await.expect("cycle 2");
        assert_eq!(second.new_alerts, 0);
        assert_eq!(h.sink.batches().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn run_survives_failures_and_stops_on_shutdown() {
        let h = harness(Duration::from_secs(5));
        h.nse.push_failure("rate limited");
        h.nse.push_snapshot(vec![announcement("X", "after failure")]);
        let (tx, rx) = watch::channel(false);
        let nse = h.nse.clone();
        let sink = h.sink.clone();

        let handle = tokio::spawn(h.poll.run(rx));
        while nse.calls() < 3 {
            tokio::time::sleep(Duration::from_secs(5)).await;
        }
        tx.send(true).expect("loop is listening");
        let stats = handle.await.expect("loop task");

        assert!(stats.cycles >= 3);
        assert_eq!(stats.failed_cycles, 1);
        assert_eq!(sink.alert_count(), 1);
    }

    #[tokio::test]
    async fn shutdown_interrupts_sleep() {
        let h = harness(Duration::from_secs(3600));
        let (tx, rx) = watch::channel(false);
        let handle = tokio::spawn(h.poll.run(rx));

        tx.send(true).expect("loop is listening");
        let stats = handle.await.expect("loop task");

        assert_eq!(stats.cycles, 0);
    }
}
