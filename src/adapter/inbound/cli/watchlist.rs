//! Handler for the `watchlist` command.

use std::path::Path;

use crate::adapter::inbound::cli::{config, output};
use crate::error::Result;

const COLUMNS: &[(&str, usize)] = &[("CODE", 12), ("BSE", 8), ("MARKET CAP", 14), ("NAME", 30)];

/// Print the instruments that pass the market-cap threshold.
pub fn execute<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = config::load(config_path.as_ref())?;
    let watchlist = config.watchlist();
    let widths: Vec<usize> = COLUMNS.iter().map(|(_, w)| *w).collect();

    output::section("Watch list");
    output::table_header(COLUMNS);
    for entry in watchlist.tracked() {
        output::table_row(
            &[
                entry.code.clone(),
                entry.bse_code.clone().unwrap_or_default(),
                entry.market_cap.to_string(),
                entry.name.clone().unwrap_or_default(),
            ],
            &widths,
        );
    }
    output::field(
        "Tracked",
        format!(
            "{} of {} (market cap > {})",
            watchlist.tracked().count(),
            watchlist.len(),
            watchlist.min_market_cap()
        ),
    );
    Ok(())
}
