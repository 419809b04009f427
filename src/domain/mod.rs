//! Exchange-agnostic domain types.

mod announcement;
mod key;
mod source;
mod watchlist;

pub mod time;

pub use announcement::{Announcement, AnnouncementBuildError, AnnouncementBuilder};
pub use key::AnnouncementKey;
pub use source::{Source, SourceSelector};
pub use watchlist::{WatchList, WatchListEntry, DEFAULT_MIN_MARKET_CAP};
