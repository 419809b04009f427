//! corpwatch - NSE/BSE corporate announcement watcher.
//!
//! Polls the National Stock Exchange and/or the Bombay Stock Exchange for
//! corporate announcements, keeps those concerning instruments on a
//! market-cap-filtered watch list, and alerts once per announcement.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Announcements, identity keys, the watch list
//! - [`port`] - Traits at the I/O seams: [`port::AnnouncementFeed`] and
//!   [`port::AlertSink`]
//! - [`application`] - Consolidation, novelty filtering and the poll loop
//! - [`adapter`] - Exchange HTTP clients, alert sinks and the CLI
//! - [`infrastructure`] - Configuration, wiring and process runtime
//!
//! # Features
//!
//! - `telegram` (default) - Telegram alert sink via teloxide
//! - `testkit` - Test doubles and builders for integration tests
//!
//! # Example
//!
//! ```no_run
//! use corpwatch::domain::SourceSelector;
//! use corpwatch::infrastructure::bootstrap::build_poll_loop;
//! use corpwatch::infrastructure::config::settings::Config;
//!
//! # async fn run() -> corpwatch::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let mut poll = build_poll_loop(&config, SourceSelector::Both)?;
//! let report = poll.run_cycle().await?;
//! println!("{} new announcements", report.new_alerts);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
