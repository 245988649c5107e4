use anyhow::Result;
use clap::Parser;

use kkmctl::cli::args::Cli;
use kkmctl::cli::commands::execute_command;
use kkmctl::utils::logging::init_cli_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_cli_logging(cli.verbose, cli.quiet)?;

    execute_command(cli.command.clone(), &cli).await
}
