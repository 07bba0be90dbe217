//! Run command
//!
//! Usage: shapealbum run <FILE> [--format text|ids|json] [--log-profile <PROFILE>]

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use shapealbum_core::logging_facility::{self, Profile};
use shapealbum_core::{Album, CommandInterpreter};

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Command file to execute
    pub file: PathBuf,

    /// What to print once the batch completes
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Emit logs on stderr (development or production)
    #[arg(long)]
    pub log_profile: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Canonical snapshot dump
    Text,
    /// Snapshot id list
    Ids,
    /// JSON export of the history
    Json,
}

/// Execute run command
pub fn execute(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(profile) = &args.log_profile {
        logging_facility::init(profile.parse::<Profile>()?);
    }

    let script = std::fs::read_to_string(&args.file)?;

    let mut album = Album::new();
    CommandInterpreter::run_str(&mut album, &script).into_result()?;

    let output = match args.format {
        OutputFormat::Text => album.print_snapshots(),
        OutputFormat::Ids => album.get_snapshot_ids(),
        OutputFormat::Json => album.export_json()?,
    };
    println!("{}", output);

    Ok(())
}
