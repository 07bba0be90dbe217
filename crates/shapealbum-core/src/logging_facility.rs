//! Structured logging facility for shapealbum
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use shapealbum_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! Boundary operations on [`crate::Album`] and the command interpreter own
//! lifecycle logging. The store and snapshot engine only emit
//! `tracing::debug!` for internal details.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
