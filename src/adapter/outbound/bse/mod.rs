//! BSE corporate announcements feed.

mod client;
mod dto;
mod settings;

pub use client::BseClient;
pub use dto::{BseAnnouncement, BseAnnouncementPage};
pub use settings::BseConfig;
