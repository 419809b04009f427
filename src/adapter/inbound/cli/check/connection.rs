use std::path::Path;

use crate::adapter::inbound::cli::{config, output};
use crate::domain::SourceSelector;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::port::AnnouncementFeed;

/// Fetch one snapshot from each selected exchange and report record counts.
///
/// Defaults to both exchanges. Fails if any exchange could not be fetched.
pub async fn execute_connection<P: AsRef<Path>>(
    config_path: P,
    selector: Option<SourceSelector>,
) -> Result<()> {
    let config = config::load(config_path.as_ref())?;
    let selector = selector.unwrap_or(SourceSelector::Both);
    let feeds = bootstrap::build_feeds(&config)?;
    let watchlist = config.watchlist();

    output::section("Connection Check");
    let mut first_failure = None;
    for &source in selector.sources() {
        match feeds.get(source).fetch().await {
            Ok(records) => {
                let tracked = records
                    .iter()
                    .filter(|a| watchlist.tracks(a.instrument_code()))
                    .count();
                output::success(&format!(
                    "{source}: {} announcements ({tracked} on the watch list)",
                    records.len()
                ));
            }
            Err(e) => {
                output::error(&format!("{source}: {e}"));
                if first_failure.is_none() {
                    first_failure = Some(e);
                }
            }
        }
    }

    match first_failure {
        Some(e) => Err(e.into()),
        None => {
            output::success("Connection checks passed");
            Ok(())
        }
    }
}
