//! Shape Album Core - in-memory shape registry with snapshot history
//!
//! This crate provides:
//! - Rectangle and oval shape models with a canonical text form
//! - A name-keyed shape registry that keeps insertion order
//! - Immutable snapshots of the registry with a printable history
//! - A line-oriented command language with abort-on-first-error batches
//! - Structured logging and error facilities shared by hosts

pub mod album;
pub mod apply;
pub mod commands;
pub mod errors;
pub mod interpreter;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod snapshot;

// Re-export commonly used types
pub use album::{Album, AlbumReader};
pub use apply::apply;
pub use commands::{parse_line, Command};
pub use errors::{AlbumError, Result, SaError, SaErrorKind};
pub use interpreter::{BatchOutcome, CommandInterpreter};
pub use model::{Color, Shape, ShapeKind, ShapeSpec, ShapeType, Snapshot, SnapshotId};
pub use ops::AlbumStore;
pub use snapshot::{Clock, FixedClock, SnapshotEngine, SystemClock};
