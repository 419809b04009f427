//! Exchange feed port.

use async_trait::async_trait;

use crate::domain::{Announcement, Source};
use crate::error::FetchError;

/// Producer of announcement snapshots for one exchange.
///
/// Each call returns the exchange's current list in its native order. Calls
/// are independent of each other; any retry policy lives inside the adapter.
#[async_trait]
pub trait AnnouncementFeed: Send + Sync {
    /// Fetch the current snapshot.
    async fn fetch(&self) -> Result<Vec<Announcement>, FetchError>;

    /// The exchange this feed reads from.
    fn source(&self) -> Source;
}
