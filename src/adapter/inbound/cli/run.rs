//! Handler for the `run` command.

use std::io::IsTerminal;

use dialoguer::{theme::ColorfulTheme, Select};
use tracing::info;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::{config, output};
use crate::domain::SourceSelector;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::runtime;

const SOURCE_MENU: &[&str] = &["NSE (default)", "BSE", "Both"];

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = config::load(&args.config)?;
    apply_overrides(&mut config, args);

    let selector = match args.source.or(config.poll.source) {
        Some(selector) => selector,
        None => prompt_selector()?,
    };

    config.init_logging();
    print_startup(&config, selector);

    let poll = bootstrap::build_poll_loop(&config, selector)?;
    let stats = runtime::run_until_ctrl_c(poll).await?;

    info!(
        cycles = stats.cycles,
        failed = stats.failed_cycles,
        alerts = stats.alerts,
        "corpwatch stopped"
    );
    output::section("Summary");
    output::field("Cycles", stats.cycles);
    output::field("Failed cycles", stats.failed_cycles);
    output::field("Alerts", stats.alerts);
    Ok(())
}

fn apply_overrides(config: &mut Config, args: &RunArgs) {
    if let Some(interval_ms) = args.interval_ms {
        config.poll.interval_ms = interval_ms;
    }
    if args.mute {
        config.notifications.mute_sound = true;
    }
    config
        .logging
        .apply_overrides(args.log_level.as_deref(), args.json_logs || output::is_json());
}

/// Ask which exchanges to poll, or fall back to NSE when not interactive.
fn prompt_selector() -> Result<SourceSelector> {
    if output::is_json() || !std::io::stdin().is_terminal() {
        return Ok(SourceSelector::default());
    }
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select exchange")
        .items(SOURCE_MENU)
        .default(0)
        .interact()?;
    Ok(selector_for_choice(choice))
}

fn selector_for_choice(choice: usize) -> SourceSelector {
    match choice {
        1 => SourceSelector::Bse,
        2 => SourceSelector::Both,
        _ => SourceSelector::Nse,
    }
}

fn print_startup(config: &Config, selector: SourceSelector) {
    let watchlist = config.watchlist();
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Source", output::highlight(selector));
    output::field("Interval", format!("{} ms", config.poll.interval_ms));
    output::field(
        "Tracked",
        format!(
            "{} of {} (market cap > {})",
            watchlist.tracked().count(),
            watchlist.len(),
            watchlist.min_market_cap()
        ),
    );
    if output::verbosity() > 0 {
        output::field("NSE", &config.exchanges.nse.base_url);
        output::field("BSE", &config.exchanges.bse.base_url);
    }
    output::note("Press Ctrl+C to stop");
}
