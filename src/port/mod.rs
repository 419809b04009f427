//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   ┌──────────────┐      ┌───────────────────────────┐      ┌────────────┐
//!   │ NSE / BSE    │ ───▶ │ consolidate → novelty     │ ───▶ │ AlertSink  │
//!   │ feed adapter │      │ (application::poll)       │      │ adapters   │
//!   └──────────────┘      └───────────────────────────┘      └────────────┘
//! ```
//!
//! - [`AnnouncementFeed`] - snapshot producer for one exchange
//! - [`AlertSink`] - consumer of newly seen announcements

pub mod outbound;

pub use outbound::exchange::AnnouncementFeed;
pub use outbound::notifier::{AlertSink, DeliveryReport, SinkRegistry};
