use super::clock::{Clock, SystemClock};
use super::digest::compute_content_digest;
use crate::errors::{AlbumError, Result};
use crate::model::{Snapshot, SnapshotId};
use crate::ops::AlbumStore;

const ID_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const DISPLAY_TIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Ordered, append-only history of snapshots
///
/// Ids are `<capture instant>-<sequence>`. The sequence counter survives
/// [`SnapshotEngine::clear`], so an id is never handed out twice by the
/// same engine.
#[derive(Debug)]
pub struct SnapshotEngine {
    history: Vec<Snapshot>,
    next_seq: u64,
    clock: Box<dyn Clock>,
}

impl Default for SnapshotEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotEngine {
    /// Engine stamping snapshots with the host's local time
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            history: Vec::new(),
            next_seq: 1,
            clock,
        }
    }

    /// Capture every live shape and append the snapshot to the history
    ///
    /// Never fails; an empty store yields a zero-shape snapshot.
    pub fn take_snapshot(&mut self, store: &AlbumStore, description: &str) -> SnapshotId {
        let now = self.clock.now();
        let stamp = now.format(ID_TIME_FORMAT);
        let id = SnapshotId::new(format!("{}-{}", stamp, self.next_seq));
        self.next_seq += 1;

        let shapes = store.copy_shapes();
        let digest = compute_content_digest(&shapes);
        tracing::debug!(
            snapshot_id = %id,
            shape_count = shapes.len(),
            "snapshot captured"
        );

        self.history.push(Snapshot::new(
            id.clone(),
            now.format(DISPLAY_TIME_FORMAT).to_string(),
            description.to_string(),
            digest,
            shapes,
        ));
        id
    }

    /// Look up a snapshot by id
    ///
    /// # Errors
    ///
    /// Returns `UnknownSnapshot` if no snapshot in the history has this id.
    pub fn get_snapshot(&self, id: &str) -> Result<&Snapshot> {
        self.history
            .iter()
            .find(|s| s.id().as_str() == id)
            .ok_or_else(|| AlbumError::UnknownSnapshot {
                snapshot_id: id.to_string(),
            })
    }

    /// Owned copy of the history; changes to it do not reach the engine
    pub fn snapshots(&self) -> Vec<Snapshot> {
        self.history.clone()
    }

    /// Borrowed view of the history in capture order
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    pub fn snapshot_ids(&self) -> Vec<SnapshotId> {
        self.history.iter().map(|s| s.id().clone()).collect()
    }

    /// Ids rendered as `[id1, id2]`, or `[]` for an empty history
    pub fn format_snapshot_ids(&self) -> String {
        let ids: Vec<&str> = self.history.iter().map(|s| s.id().as_str()).collect();
        format!("[{}]", ids.join(", "))
    }

    /// Every snapshot's canonical section, separated by one blank line
    pub fn print_snapshots(&self) -> String {
        self.history
            .iter()
            .map(Snapshot::to_string)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Pretty JSON array of the history
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.history)?)
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Drop the whole history; the id sequence keeps counting
    pub fn clear(&mut self) {
        self.history.clear();
    }
}
