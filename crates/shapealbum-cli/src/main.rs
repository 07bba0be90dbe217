//! Shape Album CLI
//!
//! Command-line host for running shape album command files

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "shapealbum")]
#[command(about = "Snapshot 2D shapes from command files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a command file and print the snapshot history
    Run(commands::run::RunArgs),
    /// Parse a command file without applying it
    Check(commands::check::CheckArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => commands::run::execute(args),
        Commands::Check(args) => commands::check::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
