//! CLI module graph and command dispatch.

pub mod check;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod init;
pub mod output;
pub mod paths;
pub mod run;
pub mod watchlist;

use miette::IntoDiagnostic;

use command::{CheckCommand, Cli, Commands};

/// Run the parsed command line.
pub async fn execute(cli: Cli) -> miette::Result<()> {
    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    match cli.command {
        Commands::Run(args) => run::execute(&args).await.into_diagnostic(),
        Commands::Check(CheckCommand::Config(args)) => check::config::execute_config(&args.config),
        Commands::Check(CheckCommand::Connection(args)) => {
            check::connection::execute_connection(&args.config, args.source)
                .await
                .into_diagnostic()
        }
        Commands::Watchlist(args) => watchlist::execute(&args.config).into_diagnostic(),
        Commands::Init(args) => init::execute(&args.path, args.force).into_diagnostic(),
    }
}
