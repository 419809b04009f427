//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for announcements and watch lists.
//! - [`feed`] - `ScriptedFeed`, a deterministic [`AnnouncementFeed`](crate::port::AnnouncementFeed).
//! - [`sink`] - `RecordingSink`, an [`AlertSink`](crate::port::AlertSink) that keeps every batch.

pub mod domain;
pub mod feed;
pub mod sink;
