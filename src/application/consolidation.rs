//! Consolidation of exchange snapshots into one ordered stream.
//!
//! The engine is a pure transform over already-fetched snapshots plus the
//! static watch list. [`ConsolidationEngine::gather`] adds the fetch step:
//! it queries the selected feeds, joins them, then consolidates.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{Announcement, Source, SourceSelector, WatchList};
use crate::error::FetchError;
use crate::port::AnnouncementFeed;

/// The two exchange feeds a run can draw from.
#[derive(Clone)]
pub struct FeedSet {
    nse: Arc<dyn AnnouncementFeed>,
    bse: Arc<dyn AnnouncementFeed>,
}

impl FeedSet {
    pub fn new(nse: Arc<dyn AnnouncementFeed>, bse: Arc<dyn AnnouncementFeed>) -> Self {
        Self { nse, bse }
    }

    pub fn get(&self, source: Source) -> &Arc<dyn AnnouncementFeed> {
        match source {
            Source::Nse => &self.nse,
            Source::Bse => &self.bse,
        }
    }
}

/// Merges and filters exchange snapshots against the watch list.
#[derive(Debug, Clone)]
pub struct ConsolidationEngine {
    watchlist: WatchList,
}

impl ConsolidationEngine {
    #[must_use]
    pub fn new(watchlist: WatchList) -> Self {
        Self { watchlist }
    }

    pub fn watchlist(&self) -> &WatchList {
        &self.watchlist
    }

    /// Merge the two snapshots for `selector`.
    ///
    /// Only sources the selector includes contribute. NSE records precede BSE
    /// records and each snapshot keeps its native order. A record is kept
    /// when it carries the snapshot's source tag and its instrument code is
    /// tracked by the watch list.
    #[must_use]
    pub fn consolidate(
        &self,
        selector: SourceSelector,
        nse: Vec<Announcement>,
        bse: Vec<Announcement>,
    ) -> Vec<Announcement> {
        let mut merged = Vec::new();
        for (source, snapshot) in [(Source::Nse, nse), (Source::Bse, bse)] {
            if !selector.includes(source) {
                continue;
            }
            let before = snapshot.len();
            merged.extend(snapshot.into_iter().filter(|ann| self.keeps(source, ann)));
            debug!(
                source = %source,
                fetched = before,
                total_kept = merged.len(),
                "Snapshot consolidated"
            );
        }
        merged
    }

    /// Fetch the selected feeds and consolidate their snapshots.
    ///
    /// With [`SourceSelector::Both`] both fetches run concurrently and both
    /// finish before anything is consolidated. Any failed fetch fails the
    /// whole gather.
    pub async fn gather(
        &self,
        selector: SourceSelector,
        feeds: &FeedSet,
    ) -> Result<Vec<Announcement>, FetchError> {
        let (nse, bse) = match selector {
            SourceSelector::Nse => (feeds.get(Source::Nse).fetch().await?, Vec::new()),
            SourceSelector::Bse => (Vec::new(), feeds.get(Source::Bse).fetch().await?),
            SourceSelector::Both => {
                let (nse, bse) = tokio::join!(
                    feeds.get(Source::Nse).fetch(),
                    feeds.get(Source::Bse).fetch()
                );
                match (nse, bse) {
                    (Ok(nse), Ok(bse)) => (nse, bse),
                    (Err(e), Ok(_)) | (Ok(_), Err(e)) => return Err(e),
                    (Err(first), Err(second)) => {
                        warn!(error = %second, "Second exchange fetch also failed");
                        return Err(first);
                    }
                }
            }
        };

        Ok(self.consolidate(selector, nse, bse))
    }

    fn keeps(&self, source: Source, ann: &Announcement) -> bool {
        if ann.source() != source {
            warn!(
                expected = %source,
                actual = %ann.source(),
                code = ann.instrument_code(),
                "Dropping announcement with mismatched source tag"
            );
            return false;
        }
        self.watchlist.tracks(ann.instrument_code())
    }
}
