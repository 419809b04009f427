use std::path::Path;

use miette::IntoDiagnostic;

use crate::adapter::inbound::cli::diagnostic::ConfigDiagnostic;
use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Error};
use crate::infrastructure::config::settings::Config;

/// Validate the configuration file without starting the poller.
///
/// TOML syntax errors are reported with a labeled span into the file.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> miette::Result<()> {
    let path = config_path.as_ref();
    let config = match Config::load(path) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::Parse(err))) => {
            let src = std::fs::read_to_string(path).into_diagnostic()?;
            return Err(ConfigDiagnostic::from_toml(&err, path.display().to_string(), &src).into());
        }
        Err(err) => return Err::<(), _>(err).into_diagnostic(),
    };
    let watchlist = config.watchlist();

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field(
        "Source",
        config
            .poll
            .source
            .map_or_else(|| "prompt".to_string(), |s| s.to_string()),
    );
    output::field("Interval", format!("{} ms", config.poll.interval_ms));
    output::field("NSE index", &config.exchanges.nse.index);
    output::field("Watch list", watchlist.len());
    output::field("Tracked", watchlist.tracked().count());
    output::field("Threshold", watchlist.min_market_cap());

    let notifications = &config.notifications;
    let mut sinks = Vec::new();
    if notifications.console {
        sinks.push("console");
    }
    if !notifications.mute_sound {
        sinks.push("sound");
    }
    if notifications.desktop {
        sinks.push("desktop");
    }
    if notifications.log {
        sinks.push("log");
    }
    if notifications.telegram.enabled {
        sinks.push("telegram");
    }
    output::field("Sinks", sinks.join(", "));

    if watchlist.tracked().next().is_none() {
        output::warning("No watch-list entry passes the market-cap threshold; nothing will alert");
    }
    #[cfg(not(feature = "telegram"))]
    if notifications.telegram.enabled {
        output::warning("Telegram is enabled but this build lacks the telegram feature");
    }

    output::success("Configuration check complete");
    Ok(())
}
