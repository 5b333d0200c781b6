//! Entry point for the furrow CLI

use clap::Parser;
use furrow_cli::commands::Commands;

/// Incremental, resumable CSV reader
#[derive(Debug, Parser)]
#[command(name = "furrow", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.command.execute() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
