//! Command-line interface definitions.
//!
//! Defines the CLI structure for corpwatch using `clap`: the polling
//! `run` command plus configuration and connectivity checks.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;
use crate::domain::SourceSelector;

/// NSE/BSE corporate announcement watcher
#[derive(Parser, Debug)]
#[command(name = "corpwatch")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the corpwatch CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll the exchanges and alert on new announcements
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// List the instruments that pass the market-cap threshold
    Watchlist(ConfigPathArg),

    /// Write a starter configuration file
    Init(InitArgs),
}

/// Subcommands for `corpwatch check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file syntax and semantics.
    Config(ConfigPathArg),
    /// Fetch one snapshot from each selected exchange.
    Connection(ConnectionArgs),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for `check connection`.
#[derive(Parser, Debug)]
pub struct ConnectionArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Exchanges to contact (nse, bse, both). Defaults to both.
    #[arg(long)]
    pub source: Option<SourceSelector>,
}

/// Arguments for the `init` subcommand.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,

    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `run` subcommand.
///
/// All optional fields override the corresponding configuration file values.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Exchanges to poll (nse, bse, both). Prompts when omitted on a terminal.
    #[arg(long)]
    pub source: Option<SourceSelector>,

    /// Override the delay between polling cycles, in milliseconds.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: Option<u64>,

    /// Override log level (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty-printed logs.
    #[arg(long)]
    pub json_logs: bool,

    /// Silence the terminal bell.
    #[arg(long)]
    pub mute: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_command() {
        let cli = Cli::try_parse_from(["corpwatch", "run"]).unwrap();
        assert!(matches!(cli.command, Commands::Run(_)));
        assert!(!cli.json);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["corpwatch", "--json", "-q", "-vv", "run"]).unwrap();
        assert!(cli.json);
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_run_args_defaults() {
        let cli = Cli::try_parse_from(["corpwatch", "run"]).unwrap();
        if let Commands::Run(args) = cli.command {
            assert_eq!(args.source, None);
            assert_eq!(args.interval_ms, None);
            assert!(!args.json_logs);
            assert!(!args.mute);
            assert!(args.config.ends_with("config.toml"));
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_run_args_overrides() {
        let cli = Cli::try_parse_from([
            "corpwatch",
            "run",
            "--config",
            "custom.toml",
            "--source",
            "both",
            "--interval-ms",
            "2500",
            "--log-level",
            "debug",
            "--json-logs",
        ])
        .unwrap();
        if let Commands::Run(args) = cli.command {
            assert_eq!(args.config, PathBuf::from("custom.toml"));
            assert_eq!(args.source, Some(SourceSelector::Both));
            assert_eq!(args.interval_ms, Some(2500));
            assert_eq!(args.log_level.as_deref(), Some("debug"));
            assert!(args.json_logs);
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_run_rejects_zero_interval() {
        assert!(Cli::try_parse_from(["corpwatch", "run", "--interval-ms", "0"]).is_err());
    }

    #[test]
    fn test_run_rejects_unknown_source() {
        assert!(Cli::try_parse_from(["corpwatch", "run", "--source", "lse"]).is_err());
    }

    #[test]
    fn test_parse_check_subcommands() {
        let cli = Cli::try_parse_from(["corpwatch", "check", "config"]).unwrap();
        assert!(matches!(cli.command, Commands::Check(CheckCommand::Config(_))));

        let cli =
            Cli::try_parse_from(["corpwatch", "check", "connection", "--source", "bse"]).unwrap();
        match cli.command {
            Commands::Check(CheckCommand::Connection(args)) => {
                assert_eq!(args.source, Some(SourceSelector::Bse));
            }
            other => panic!("Expected check connection, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_watchlist_and_init() {
        let cli = Cli::try_parse_from(["corpwatch", "watchlist", "-c", "w.toml"]).unwrap();
        match cli.command {
            Commands::Watchlist(args) => assert_eq!(args.config, PathBuf::from("w.toml")),
            other => panic!("Expected watchlist, got {other:?}"),
        }

        let cli = Cli::try_parse_from(["corpwatch", "init", "out.toml", "--force"]).unwrap();
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.path, PathBuf::from("out.toml"));
                assert!(args.force);
            }
            other => panic!("Expected init, got {other:?}"),
        }
    }
}
