//! Application services: the consolidation-and-novelty pipeline.

pub mod consolidation;
pub mod novelty;
pub mod poll;

pub use consolidation::{ConsolidationEngine, FeedSet};
pub use novelty::{Novelty, NoveltyTracker, SeenSet};
pub use poll::{CycleReport, PollLoop, PollSettings, PollState, PollStats};
