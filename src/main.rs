use clap::Parser;

use corpwatch::adapter::inbound::cli::command::Cli;
use corpwatch::adapter::inbound::cli::{self, output};

#[tokio::main]
async fn main() -> miette::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let json = cli.json;

    match cli::execute(cli).await {
        Ok(()) => Ok(()),
        Err(report) if json => {
            output::error(&report.to_string());
            std::process::exit(1);
        }
        Err(report) => Err(report),
    }
}
