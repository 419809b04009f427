//! Poll loop wired to scripted feeds and a recording sink.

use std::sync::Arc;
use std::time::Duration;

use corpwatch::application::{ConsolidationEngine, FeedSet, PollLoop, PollSettings};
use corpwatch::domain::{Source, SourceSelector, WatchList};
use corpwatch::port::SinkRegistry;
use corpwatch::testkit::feed::ScriptedFeed;
use corpwatch::testkit::sink::RecordingSink;

pub const INTERVAL: Duration = Duration::from_millis(1000);

pub struct Pipeline {
    pub nse: ScriptedFeed,
    pub bse: ScriptedFeed,
    pub sink: RecordingSink,
    pub poll: PollLoop,
}

impl Pipeline {
    pub fn new(selector: SourceSelector, watchlist: WatchList) -> Self {
        Self::with_feeds(
            selector,
            watchlist,
            ScriptedFeed::new(Source::Nse),
            ScriptedFeed::new(Source::Bse),
        )
    }

    pub fn with_feeds(
        selector: SourceSelector,
        watchlist: WatchList,
        nse: ScriptedFeed,
        bse: ScriptedFeed,
    ) -> Self {
        let sink = RecordingSink::new();
        let mut sinks = SinkRegistry::new();
        sinks.register(Box::new(sink.clone()));

        let poll = PollLoop::new(
            PollSettings {
                interval: INTERVAL,
                selector,
            },
            FeedSet::new(Arc::new(nse.clone()), Arc::new(bse.clone())),
            ConsolidationEngine::new(watchlist),
            sinks,
        );

        Self {
            nse,
            bse,
            sink,
            poll,
        }
    }
}
