//! Batch execution of command text
//!
//! A batch runs line by line and stops at the first failure. Lines applied
//! before the failure stay applied; there is no rollback and no retry.

use std::time::Instant;

use shapealbum_core_types::BatchId;

use crate::album::Album;
use crate::apply::apply;
use crate::commands::{parse_line, Command};
use crate::errors::{AlbumError, Result};
use crate::{log_op_end, log_op_error, log_op_start};

/// Final state of a batch run
#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    /// Every line was applied or skipped
    Completed { applied: usize },

    /// The batch stopped at `line_number` (1-based over the raw input,
    /// skipped lines included); `line` is the trimmed offending text
    Halted {
        line_number: usize,
        line: String,
        error: AlbumError,
        applied: usize,
    },
}

impl BatchOutcome {
    /// Number of commands applied before the batch ended
    pub fn applied(&self) -> usize {
        match self {
            BatchOutcome::Completed { applied } | BatchOutcome::Halted { applied, .. } => *applied,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, BatchOutcome::Completed { .. })
    }

    /// Collapse into a result carrying the applied count
    ///
    /// # Errors
    ///
    /// A halted batch becomes `BatchHalted` naming the failing line.
    pub fn into_result(self) -> Result<usize> {
        match self {
            BatchOutcome::Completed { applied } => Ok(applied),
            BatchOutcome::Halted {
                line_number,
                line,
                error,
                ..
            } => Err(halted(line_number, &line, error)),
        }
    }
}

/// Runs command text against an album
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandInterpreter;

impl CommandInterpreter {
    /// Parse and apply each line in order, stopping at the first failure
    pub fn run<I, S>(album: &mut Album, lines: I) -> BatchOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let batch_id = BatchId::new();
        log_op_start!("run_batch", batch_id = %batch_id);
        let start = Instant::now();

        let mut applied = 0;
        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let line_number = idx + 1;

            let step = parse_line(line).and_then(|cmd| match cmd {
                Some(cmd) => apply_logged(album, cmd, line_number).map(|_| true),
                None => Ok(false),
            });

            match step {
                Ok(true) => applied += 1,
                Ok(false) => {}
                Err(error) => {
                    log_op_error!(
                        "run_batch",
                        halted(line_number, line, error.clone()),
                        duration_ms = start.elapsed().as_millis() as u64,
                        batch_id = %batch_id,
                        line_number = line_number,
                        applied = applied
                    );
                    return BatchOutcome::Halted {
                        line_number,
                        line: line.trim().to_string(),
                        error,
                        applied,
                    };
                }
            }
        }

        log_op_end!(
            "run_batch",
            duration_ms = start.elapsed().as_millis() as u64,
            batch_id = %batch_id,
            applied = applied
        );
        BatchOutcome::Completed { applied }
    }

    /// Run a newline-separated block of commands
    pub fn run_str(album: &mut Album, input: &str) -> BatchOutcome {
        Self::run(album, input.lines())
    }

    /// Parse every line without applying anything
    ///
    /// Returns the number of commands found.
    ///
    /// # Errors
    ///
    /// `BatchHalted` wrapping the first `Format` error.
    pub fn check<I, S>(lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut commands = 0;
        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            match parse_line(line) {
                Ok(Some(_)) => commands += 1,
                Ok(None) => {}
                Err(error) => return Err(halted(idx + 1, line, error)),
            }
        }
        Ok(commands)
    }
}

fn apply_logged(album: &mut Album, cmd: Command, line_number: usize) -> Result<()> {
    let keyword = cmd.keyword();
    apply(album, cmd)?;
    tracing::debug!(line_number, command = keyword, "command applied");
    Ok(())
}

fn halted(line_number: usize, line: &str, cause: AlbumError) -> AlbumError {
    AlbumError::BatchHalted {
        line_number,
        line: line.trim().to_string(),
        cause: Box::new(cause),
    }
}
