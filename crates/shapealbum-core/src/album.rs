//! Album facade: the shape registry plus its snapshot history.
//!
//! This is the logging boundary. Every mutating operation emits `start`
//! then `end` or `end_error`; the store and engine below only emit
//! `debug` events. Reads are not logged.

use std::time::Instant;

use crate::errors::Result;
use crate::model::{Shape, ShapeSpec, Snapshot, SnapshotId};
use crate::ops::{shape_ops, AlbumStore};
use crate::snapshot::{Clock, SnapshotEngine};
use crate::{log_op_end, log_op_error, log_op_start};

/// Read-only view handed to renderers
///
/// Renderers consume shapes and snapshots; they never get write access.
pub trait AlbumReader {
    /// Live shapes in insertion order
    fn shapes(&self) -> Vec<&Shape>;

    /// A live shape by name
    ///
    /// # Errors
    ///
    /// Returns `UnknownShape` if no live shape has this name.
    fn shape(&self, name: &str) -> Result<&Shape>;

    /// Snapshot history in capture order
    fn snapshots(&self) -> &[Snapshot];

    /// A snapshot by id
    ///
    /// # Errors
    ///
    /// Returns `UnknownSnapshot` if the id is not in the history.
    fn snapshot(&self, id: &str) -> Result<&Snapshot>;
}

/// Live shapes plus the history of snapshots taken of them
#[derive(Debug, Default)]
pub struct Album {
    store: AlbumStore,
    engine: SnapshotEngine,
}

impl Album {
    pub fn new() -> Self {
        Self::default()
    }

    /// Album whose snapshots are stamped by `clock`
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            store: AlbumStore::new(),
            engine: SnapshotEngine::with_clock(clock),
        }
    }

    /// Add a shape with its type's defaults
    ///
    /// # Errors
    ///
    /// `DuplicateName` if the name is live, else `UnknownShapeType` for an
    /// unsupported type label.
    pub fn add_shape(&mut self, name: &str, shape_type: &str) -> Result<()> {
        log_op_start!("add_shape", shape_name = name, shape_type = shape_type);
        let start = Instant::now();

        let result = shape_ops::add_shape(&mut self.store, name, shape_type);
        finish("add_shape", name, start, result)
    }

    /// Add a fully specified shape, validated before it is inserted
    ///
    /// # Errors
    ///
    /// `DuplicateName`, `UnknownShapeType`, `InvalidColor` or
    /// `InvalidDimension`, checked in that order.
    pub fn create_shape(&mut self, spec: &ShapeSpec) -> Result<()> {
        log_op_start!(
            "create_shape",
            shape_name = %spec.name,
            shape_type = %spec.shape_type
        );
        let start = Instant::now();

        let result = shape_ops::create_shape(&mut self.store, spec);
        finish("create_shape", &spec.name, start, result)
    }

    /// # Errors
    ///
    /// Returns `UnknownShape` if no live shape has this name.
    pub fn get_shape(&self, name: &str) -> Result<&Shape> {
        self.store.get_shape(name)
    }

    /// Live handle to a shape; edits through it are the album's state
    ///
    /// # Errors
    ///
    /// Returns `UnknownShape` if no live shape has this name.
    pub fn shape_mut(&mut self, name: &str) -> Result<&mut Shape> {
        self.store.get_shape_mut(name)
    }

    /// # Errors
    ///
    /// Returns `UnknownShape` if no live shape has this name.
    pub fn move_shape(&mut self, name: &str, x: f64, y: f64) -> Result<()> {
        log_op_start!("move_shape", shape_name = name);
        let start = Instant::now();

        let result = shape_ops::move_shape(&mut self.store, name, x, y);
        finish("move_shape", name, start, result)
    }

    /// # Errors
    ///
    /// `UnknownShape` for a name that is not live, `InvalidColor` when a
    /// component is outside `[0, 1]`.
    pub fn set_color(&mut self, name: &str, r: f64, g: f64, b: f64) -> Result<()> {
        log_op_start!("set_color", shape_name = name);
        let start = Instant::now();

        let result = shape_ops::recolor_shape(&mut self.store, name, r, g, b);
        finish("set_color", name, start, result)
    }

    /// # Errors
    ///
    /// `UnknownShape` for a name that is not live, `InvalidDimension` when
    /// either value is not positive.
    pub fn resize_shape(&mut self, name: &str, first: f64, second: f64) -> Result<()> {
        log_op_start!("resize_shape", shape_name = name);
        let start = Instant::now();

        let result = shape_ops::resize_shape(&mut self.store, name, first, second);
        finish("resize_shape", name, start, result)
    }

    /// Remove a live shape; existing snapshots keep their copies
    ///
    /// # Errors
    ///
    /// Returns `UnknownShape` if no live shape has this name.
    pub fn remove_shape(&mut self, name: &str) -> Result<Shape> {
        log_op_start!("remove_shape", shape_name = name);
        let start = Instant::now();

        let result = shape_ops::remove_shape(&mut self.store, name);
        finish("remove_shape", name, start, result)
    }

    /// Capture every live shape
    pub fn take_snapshot(&mut self, description: &str) -> SnapshotId {
        log_op_start!("take_snapshot", shape_count = self.store.len());
        let start = Instant::now();

        let id = self.engine.take_snapshot(&self.store, description);

        log_op_end!(
            "take_snapshot",
            duration_ms = start.elapsed().as_millis() as u64,
            snapshot_id = %id
        );
        id
    }

    /// # Errors
    ///
    /// Returns `UnknownSnapshot` if the id is not in the history.
    pub fn get_snapshot(&self, id: &str) -> Result<&Snapshot> {
        self.engine.get_snapshot(id)
    }

    /// Owned copy of the history
    pub fn get_snapshots(&self) -> Vec<Snapshot> {
        self.engine.snapshots()
    }

    pub fn snapshot_ids(&self) -> Vec<SnapshotId> {
        self.engine.snapshot_ids()
    }

    /// Snapshot ids as `[id1, id2]`
    pub fn get_snapshot_ids(&self) -> String {
        self.engine.format_snapshot_ids()
    }

    pub fn print_snapshots(&self) -> String {
        self.engine.print_snapshots()
    }

    /// # Errors
    ///
    /// Returns `Serialization` if encoding fails.
    pub fn export_json(&self) -> Result<String> {
        self.engine.to_json()
    }

    /// Drop every live shape and every snapshot
    pub fn reset(&mut self) {
        log_op_start!(
            "reset",
            shape_count = self.store.len(),
            snapshot_count = self.engine.len()
        );
        let start = Instant::now();

        self.store.clear();
        self.engine.clear();

        log_op_end!("reset", duration_ms = start.elapsed().as_millis() as u64);
    }

    pub fn store(&self) -> &AlbumStore {
        &self.store
    }

    pub fn engine(&self) -> &SnapshotEngine {
        &self.engine
    }
}

impl AlbumReader for Album {
    fn shapes(&self) -> Vec<&Shape> {
        self.store.list_shapes()
    }

    fn shape(&self, name: &str) -> Result<&Shape> {
        self.store.get_shape(name)
    }

    fn snapshots(&self) -> &[Snapshot] {
        self.engine.history()
    }

    fn snapshot(&self, id: &str) -> Result<&Snapshot> {
        self.engine.get_snapshot(id)
    }
}

/// Emit `end` or `end_error` for a finished shape operation and pass the
/// result on. Both events carry `shape_name` so they pair with the `start`.
fn finish<T>(
    op: &'static str,
    shape_name: &str,
    start: Instant,
    result: Result<T>,
) -> Result<T> {
    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            log_op_end!(op, duration_ms = duration_ms, shape_name = shape_name);
        }
        Err(e) => {
            log_op_error!(
                op,
                e.clone(),
                duration_ms = duration_ms,
                shape_name = shape_name
            );
        }
    }
    result
}
