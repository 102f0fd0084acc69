//! CERTEUS CLI entry point.

use clap::Parser;

use certeus::cli::{commands, connect, handle_error, Cli, Commands};
use certeus::infrastructure::logging::init_logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        handle_error(err, json);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    init_logging(&config.logging)?;
    let client = connect(&config)?;

    match cli.command {
        Commands::Pfs(args) => commands::pfs::execute(args, &client, cli.json).await,
        Commands::Publish(args) => commands::publish::execute(args, &client, cli.json).await,
        Commands::P2p(args) => commands::p2p::execute(args, &client, cli.json).await,
    }
}
