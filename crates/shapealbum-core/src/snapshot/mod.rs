//! Snapshot history.
//!
//! ## Responsibilities
//!
//! - Capture deep copies of every live shape on demand
//! - Assign unique, never-reused snapshot ids
//! - Render the canonical multi-section text dump and the JSON export
//!
//! ## Non-Responsibilities
//!
//! - Persistence (history lives only in memory)
//! - Boundary logging (handled by [`crate::album::Album`])

pub mod clock;
pub mod digest;
pub mod engine;

pub use clock::{Clock, FixedClock, SystemClock};
pub use digest::compute_content_digest;
pub use engine::SnapshotEngine;
