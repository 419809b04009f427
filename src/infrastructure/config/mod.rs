//! Infrastructure configuration modules.

pub mod exchange;
pub mod logging;
pub mod notification;
pub mod poll;
pub mod settings;
pub mod watchlist;
