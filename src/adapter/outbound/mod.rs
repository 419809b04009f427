//! Outbound adapters (driven side).

pub mod bse;
pub mod http;
pub mod notifier;
pub mod nse;
