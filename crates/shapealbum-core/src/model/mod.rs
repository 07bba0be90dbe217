pub mod color;
pub mod decimal;
pub mod shape;
pub mod snapshot;

pub use color::Color;
pub use shape::{Shape, ShapeKind, ShapeSpec, ShapeType};
pub use snapshot::{Snapshot, SnapshotId};
