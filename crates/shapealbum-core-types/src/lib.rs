//! Core types shared across shapealbum crates
//!
//! This crate provides foundational types used by the logging facility and
//! the command interpreter:
//!
//! - **Correlation types**: BatchId
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::BatchId;
