use std::collections::HashMap;

use crate::errors::{AlbumError, Result};
use crate::model::Shape;

/// In-memory registry of live shapes keyed by unique name
///
/// Not thread-safe (no Arc/RwLock); designed for single-threaded use. Hosts
/// that share an album across threads wrap it in their own lock.
/// Insertion order is retained so snapshots list shapes reproducibly.
#[derive(Debug, Clone, Default)]
pub struct AlbumStore {
    /// Map of shape name to live shape
    shapes: HashMap<String, Shape>,
    /// Live names in the order they were added
    order: Vec<String>,
}

impl AlbumStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            shapes: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Get a live shape by name
    ///
    /// # Errors
    ///
    /// Returns `UnknownShape` if no live shape has this name.
    pub fn get_shape(&self, name: &str) -> Result<&Shape> {
        self.shapes.get(name).ok_or_else(|| AlbumError::UnknownShape {
            name: name.to_string(),
        })
    }

    /// Get a mutable reference to a live shape
    ///
    /// Mutations through the returned reference are the store's state; there
    /// is no copy-on-read.
    ///
    /// # Errors
    ///
    /// Returns `UnknownShape` if no live shape has this name.
    pub fn get_shape_mut(&mut self, name: &str) -> Result<&mut Shape> {
        self.shapes
            .get_mut(name)
            .ok_or_else(|| AlbumError::UnknownShape {
                name: name.to_string(),
            })
    }

    /// Insert a new shape
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` if a live shape already has this name; the
    /// store is left unchanged.
    pub fn insert_shape(&mut self, shape: Shape) -> Result<()> {
        if self.contains(shape.name()) {
            return Err(AlbumError::DuplicateName {
                name: shape.name().to_string(),
            });
        }
        self.order.push(shape.name().to_string());
        self.shapes.insert(shape.name().to_string(), shape);
        Ok(())
    }

    /// Remove a live shape and return it
    ///
    /// # Errors
    ///
    /// Returns `UnknownShape` if no live shape has this name.
    pub fn remove_shape(&mut self, name: &str) -> Result<Shape> {
        let shape = self
            .shapes
            .remove(name)
            .ok_or_else(|| AlbumError::UnknownShape {
                name: name.to_string(),
            })?;
        self.order.retain(|n| n != name);
        Ok(shape)
    }

    /// List live shapes in insertion order
    pub fn list_shapes(&self) -> Vec<&Shape> {
        self.order
            .iter()
            .filter_map(|name| self.shapes.get(name))
            .collect()
    }

    /// Deep copies of all live shapes in insertion order
    pub fn copy_shapes(&self) -> Vec<Shape> {
        self.list_shapes().into_iter().cloned().collect()
    }

    /// Check if a live shape has this name
    pub fn contains(&self, name: &str) -> bool {
        self.shapes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Drop every live shape
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.order.clear();
    }
}
