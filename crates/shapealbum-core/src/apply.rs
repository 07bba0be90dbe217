//! Execute a parsed [`Command`] against an [`Album`]
//!
//! Each command either fully succeeds or leaves the album unchanged. The
//! `shape` command validates its color and dimensions before the shape is
//! inserted.

use crate::album::Album;
use crate::commands::Command;
use crate::errors::Result;
use crate::model::{Color, ShapeSpec};

/// Apply one command to the album
///
/// # Errors
///
/// Propagates the album's domain errors: `DuplicateName`,
/// `UnknownShapeType`, `UnknownShape`, `InvalidColor`, `InvalidDimension`.
pub fn apply(album: &mut Album, cmd: Command) -> Result<()> {
    match cmd {
        Command::Shape {
            name,
            shape_type,
            x,
            y,
            first,
            second,
            r,
            g,
            b,
        } => album.create_shape(&ShapeSpec {
            name,
            shape_type,
            position: (x, y),
            dimensions: (first, second),
            color: scale_color(r, g, b),
        }),
        Command::Move { name, x, y } => album.move_shape(&name, x, y),
        Command::Color { name, r, g, b } => {
            let (r, g, b) = scale_color(r, g, b);
            album.set_color(&name, r, g, b)
        }
        Command::Resize {
            name,
            first,
            second,
        } => album.resize_shape(&name, first, second),
        Command::Remove { name } => album.remove_shape(&name).map(|_| ()),
        Command::Snapshot { description } => {
            album.take_snapshot(&description);
            Ok(())
        }
    }
}

/// Byte channels to unit range, unvalidated so the shape lookup fails first
fn scale_color(r: i64, g: i64, b: i64) -> (f64, f64, f64) {
    (
        r as f64 / Color::CHANNEL_MAX,
        g as f64 / Color::CHANNEL_MAX,
        b as f64 / Color::CHANNEL_MAX,
    )
}
