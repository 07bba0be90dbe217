use serde::Serialize;

use super::shape::Shape;

/// Unique snapshot identifier
///
/// Built from the capture instant plus the engine's sequence counter, so
/// snapshots taken within the same clock tick still get distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SnapshotId(String);

impl SnapshotId {
    pub(crate) fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SnapshotId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Immutable capture of every live shape at one point in time
///
/// Fields are private and there are no mutating methods: once the engine
/// builds a snapshot its shapes never change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    id: SnapshotId,
    timestamp: String,
    description: String,
    content_digest: String,
    shapes: Vec<Shape>,
}

impl Snapshot {
    pub(crate) fn new(
        id: SnapshotId,
        timestamp: String,
        description: String,
        content_digest: String,
        shapes: Vec<Shape>,
    ) -> Self {
        Self {
            id,
            timestamp,
            description,
            content_digest,
            shapes,
        }
    }

    pub fn id(&self) -> &SnapshotId {
        &self.id
    }

    /// Capture time formatted as `dd-MM-yyyy HH:mm:ss`
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Free-text description, empty when none was given
    pub fn description(&self) -> &str {
        &self.description
    }

    /// SHA-256 over the captured shapes' canonical text
    pub fn content_digest(&self) -> &str {
        &self.content_digest
    }

    /// Captured shapes in registry insertion order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Captured copy of one shape, if it was live at capture time
    pub fn shape(&self, name: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.name() == name)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Canonical snapshot section
///
/// ```text
/// Snapshot ID: <id>
/// Timestamp: <dd-MM-yyyy HH:mm:ss>
/// Description: <description>
/// Shape Information:
/// <shape text>
///
/// <shape text>
/// ```
impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Snapshot ID: {}", self.id)?;
        writeln!(f, "Timestamp: {}", self.timestamp)?;
        writeln!(f, "Description: {}", self.description)?;
        write!(f, "Shape Information:")?;
        for (idx, shape) in self.shapes.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "\n{}", shape)?;
        }
        Ok(())
    }
}
