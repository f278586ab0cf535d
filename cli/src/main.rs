mod cli;
mod commands;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{area, locate};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::States => locate::states(&cli),
        Commands::Children(args) => locate::children(&cli, args).await,
        Commands::Path(args) => locate::path(&cli, args).await,
        Commands::Area(args) => area::run(&cli, args),
    }
}
