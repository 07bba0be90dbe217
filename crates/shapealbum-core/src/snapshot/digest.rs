//! Content digest for captured shapes.
//!
//! The digest covers only the shapes' canonical text, so two snapshots of
//! the same registry state share a digest regardless of id or timestamp.
//! Order-sensitive: the same shapes in a different order hash differently.

use sha2::{Digest, Sha256};

use crate::model::Shape;

/// Hex-encoded SHA-256 of the shapes' canonical text joined by blank lines
pub fn compute_content_digest(shapes: &[Shape]) -> String {
    let canonical = shapes
        .iter()
        .map(Shape::canonical_text)
        .collect::<Vec<_>>()
        .join("\n\n");
    hash_string(&canonical)
}

fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
