//! NSE corporate announcements feed.

mod client;
mod dto;
mod settings;

pub use client::NseClient;
pub use dto::NseAnnouncement;
pub use settings::NseConfig;
