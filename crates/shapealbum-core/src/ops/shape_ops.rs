//! Shape lifecycle operations on an [`AlbumStore`]
//!
//! Every operation validates before it writes, so a failed call leaves the
//! store exactly as it was.

use super::store::AlbumStore;
use crate::errors::{AlbumError, Result};
use crate::model::{Shape, ShapeSpec, ShapeType};

/// Add a shape with the fixed defaults for its type
///
/// # Errors
/// * `DuplicateName` - A live shape already uses `name`
/// * `UnknownShapeType` - `shape_type` is not `rectangle` or `oval`
pub fn add_shape(store: &mut AlbumStore, name: &str, shape_type: &str) -> Result<()> {
    ensure_name_free(store, name)?;
    let shape_type: ShapeType = shape_type.parse()?;

    store.insert_shape(Shape::new(name, shape_type))?;
    tracing::debug!(shape_name = name, shape_type = %shape_type, "shape added");
    Ok(())
}

/// Add a fully specified shape in one step
///
/// Checks run in the order name, type, color, dimensions.
///
/// # Errors
/// * `DuplicateName` - A live shape already uses the name
/// * `UnknownShapeType` - Type label is not supported
/// * `InvalidColor` - A color component is outside `[0, 1]`
/// * `InvalidDimension` - A dimension is not positive
pub fn create_shape(store: &mut AlbumStore, spec: &ShapeSpec) -> Result<()> {
    ensure_name_free(store, &spec.name)?;
    let shape = Shape::from_spec(spec)?;

    store.insert_shape(shape)?;
    tracing::debug!(
        shape_name = %spec.name,
        shape_type = %spec.shape_type,
        "shape created"
    );
    Ok(())
}

/// Move a live shape's anchor point
///
/// # Errors
/// * `UnknownShape` - No live shape has this name
pub fn move_shape(store: &mut AlbumStore, name: &str, x: f64, y: f64) -> Result<()> {
    store.get_shape_mut(name)?.move_to(x, y);
    tracing::debug!(shape_name = name, x, y, "shape moved");
    Ok(())
}

/// Replace a live shape's color
///
/// # Errors
/// * `UnknownShape` - No live shape has this name
/// * `InvalidColor` - A component is outside `[0, 1]`
pub fn recolor_shape(store: &mut AlbumStore, name: &str, r: f64, g: f64, b: f64) -> Result<()> {
    store.get_shape_mut(name)?.set_color(r, g, b)?;
    tracing::debug!(shape_name = name, r, g, b, "shape recolored");
    Ok(())
}

/// Resize a live shape
///
/// # Errors
/// * `UnknownShape` - No live shape has this name
/// * `InvalidDimension` - A dimension is not positive
pub fn resize_shape(store: &mut AlbumStore, name: &str, first: f64, second: f64) -> Result<()> {
    store.get_shape_mut(name)?.resize(first, second)?;
    tracing::debug!(shape_name = name, first, second, "shape resized");
    Ok(())
}

/// Remove a live shape; snapshots already taken keep their copies
///
/// # Errors
/// * `UnknownShape` - No live shape has this name
pub fn remove_shape(store: &mut AlbumStore, name: &str) -> Result<Shape> {
    let removed = store.remove_shape(name)?;
    tracing::debug!(shape_name = name, "shape removed");
    Ok(removed)
}

fn ensure_name_free(store: &AlbumStore, name: &str) -> Result<()> {
    if store.contains(name) {
        return Err(AlbumError::DuplicateName {
            name: name.to_string(),
        });
    }
    Ok(())
}
