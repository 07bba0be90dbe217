//! Check command
//!
//! Usage: shapealbum check <FILE>

use clap::Args;
use std::path::PathBuf;

use shapealbum_core::CommandInterpreter;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Command file to validate
    pub file: PathBuf,
}

/// Execute check command
pub fn execute(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let script = std::fs::read_to_string(&args.file)?;
    let commands = CommandInterpreter::check(script.lines())?;

    println!("✓ {}: {} commands", args.file.display(), commands);
    Ok(())
}
