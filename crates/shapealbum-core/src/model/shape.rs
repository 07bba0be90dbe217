use std::str::FromStr;

use serde::Serialize;

use super::color::Color;
use super::decimal::one_decimal;
use crate::errors::{AlbumError, Result};

/// Supported shape families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Rectangle,
    Oval,
}

impl ShapeType {
    /// Canonical lowercase label (`rectangle` / `oval`)
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeType::Rectangle => "rectangle",
            ShapeType::Oval => "oval",
        }
    }
}

impl FromStr for ShapeType {
    type Err = AlbumError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rectangle" => Ok(ShapeType::Rectangle),
            "oval" => Ok(ShapeType::Oval),
            other => Err(AlbumError::UnknownShapeType {
                shape_type: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-specific geometry of a shape
///
/// Rectangles are anchored at their top-left corner, ovals at their center.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Oval {
        cx: f64,
        cy: f64,
        x_radius: f64,
        y_radius: f64,
    },
}

/// A named 2D primitive with position, dimensions and color
///
/// `Clone` is the deep copy: a shape owns all of its data, so a clone shares
/// no mutable state with the original. Snapshots store clones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    name: String,
    color: Color,
    #[serde(flatten)]
    kind: ShapeKind,
}

/// Full description of a shape to create in one step
///
/// Used by the `shape` command so that a shape is validated completely
/// before it enters the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSpec {
    pub name: String,
    pub shape_type: String,
    pub position: (f64, f64),
    pub dimensions: (f64, f64),
    pub color: (f64, f64, f64),
}

impl Shape {
    /// Default rectangle width and height
    pub const DEFAULT_RECT_SIZE: f64 = 50.0;
    /// Default oval x and y radius
    pub const DEFAULT_OVAL_RADIUS: f64 = 25.0;

    /// Create a shape with the fixed defaults for its type
    ///
    /// Rectangle at (0,0) sized 50x50, oval centered at (0,0) with radii
    /// 25,25; both red.
    pub fn new(name: impl Into<String>, shape_type: ShapeType) -> Self {
        let kind = match shape_type {
            ShapeType::Rectangle => ShapeKind::Rectangle {
                x: 0.0,
                y: 0.0,
                width: Self::DEFAULT_RECT_SIZE,
                height: Self::DEFAULT_RECT_SIZE,
            },
            ShapeType::Oval => ShapeKind::Oval {
                cx: 0.0,
                cy: 0.0,
                x_radius: Self::DEFAULT_OVAL_RADIUS,
                y_radius: Self::DEFAULT_OVAL_RADIUS,
            },
        };
        Self {
            name: name.into(),
            color: Color::RED,
            kind,
        }
    }

    /// Build a shape from a [`ShapeSpec`], validating every field
    ///
    /// # Errors
    ///
    /// * `UnknownShapeType` - type label is not `rectangle` or `oval`
    /// * `InvalidColor` - a color component is outside `[0, 1]`
    /// * `InvalidDimension` - a dimension is not positive
    pub fn from_spec(spec: &ShapeSpec) -> Result<Self> {
        let shape_type: ShapeType = spec.shape_type.parse()?;
        let (r, g, b) = spec.color;
        let color = Color::new(r, g, b)?;
        let (first, second) = spec.dimensions;
        validate_dimensions(first, second)?;

        let mut shape = Self::new(spec.name.clone(), shape_type);
        shape.color = color;
        shape.set_dimensions(first, second);
        shape.move_to(spec.position.0, spec.position.1);
        Ok(shape)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape_type(&self) -> ShapeType {
        match self.kind {
            ShapeKind::Rectangle { .. } => ShapeType::Rectangle,
            ShapeKind::Oval { .. } => ShapeType::Oval,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Structured geometry view
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Anchor point: top-left corner for rectangles, center for ovals
    pub fn position(&self) -> (f64, f64) {
        match self.kind {
            ShapeKind::Rectangle { x, y, .. } => (x, y),
            ShapeKind::Oval { cx, cy, .. } => (cx, cy),
        }
    }

    /// Width/height for rectangles, x/y radius for ovals
    pub fn dimensions(&self) -> (f64, f64) {
        match self.kind {
            ShapeKind::Rectangle { width, height, .. } => (width, height),
            ShapeKind::Oval {
                x_radius, y_radius, ..
            } => (x_radius, y_radius),
        }
    }

    /// Reposition the anchor point. Any values are accepted.
    pub fn move_to(&mut self, new_x: f64, new_y: f64) {
        match &mut self.kind {
            ShapeKind::Rectangle { x, y, .. } => {
                *x = new_x;
                *y = new_y;
            }
            ShapeKind::Oval { cx, cy, .. } => {
                *cx = new_x;
                *cy = new_y;
            }
        }
    }

    /// Replace all three color components at once
    ///
    /// # Errors
    ///
    /// Returns `InvalidColor` if any component is outside `[0, 1]`; the
    /// current color is kept.
    pub fn set_color(&mut self, r: f64, g: f64, b: f64) -> Result<()> {
        self.color = Color::new(r, g, b)?;
        Ok(())
    }

    /// Resize: width/height for rectangles, x/y radius for ovals
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either value is not positive; the
    /// current dimensions are kept.
    pub fn resize(&mut self, first: f64, second: f64) -> Result<()> {
        validate_dimensions(first, second)?;
        self.set_dimensions(first, second);
        Ok(())
    }

    fn set_dimensions(&mut self, first: f64, second: f64) {
        match &mut self.kind {
            ShapeKind::Rectangle { width, height, .. } => {
                *width = first;
                *height = second;
            }
            ShapeKind::Oval {
                x_radius, y_radius, ..
            } => {
                *x_radius = first;
                *y_radius = second;
            }
        }
    }

    /// Canonical three-line text form consumed by renderers
    ///
    /// ```text
    /// Name: R
    /// Type: rectangle
    /// Min corner: (200.0,200.0), Width: 50.0, Height: 100.0, Color: (1.0,0.0,0.0)
    /// ```
    pub fn canonical_text(&self) -> String {
        let geometry = match self.kind {
            ShapeKind::Rectangle {
                x,
                y,
                width,
                height,
            } => format!(
                "Min corner: ({},{}), Width: {}, Height: {}",
                one_decimal(x),
                one_decimal(y),
                one_decimal(width),
                one_decimal(height)
            ),
            ShapeKind::Oval {
                cx,
                cy,
                x_radius,
                y_radius,
            } => format!(
                "Center: ({},{}), X radius: {}, Y radius: {}",
                one_decimal(cx),
                one_decimal(cy),
                one_decimal(x_radius),
                one_decimal(y_radius)
            ),
        };

        format!(
            "Name: {}\nType: {}\n{}, Color: {}",
            self.name,
            self.shape_type(),
            geometry,
            self.color
        )
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical_text())
    }
}

fn validate_dimensions(first: f64, second: f64) -> Result<()> {
    if first > 0.0 && second > 0.0 {
        Ok(())
    } else {
        Err(AlbumError::InvalidDimension { first, second })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_defaults() {
        let rect = Shape::new("R", ShapeType::Rectangle);
        assert_eq!(rect.position(), (0.0, 0.0));
        assert_eq!(rect.dimensions(), (50.0, 50.0));
        assert_eq!(rect.color(), Color::RED);
        assert_eq!(
            rect.canonical_text(),
            "Name: R\nType: rectangle\n\
             Min corner: (0.0,0.0), Width: 50.0, Height: 50.0, Color: (1.0,0.0,0.0)"
        );
    }

    #[test]
    fn test_oval_defaults() {
        let oval = Shape::new("O", ShapeType::Oval);
        assert_eq!(oval.dimensions(), (25.0, 25.0));
        assert_eq!(
            oval.canonical_text(),
            "Name: O\nType: oval\n\
             Center: (0.0,0.0), X radius: 25.0, Y radius: 25.0, Color: (1.0,0.0,0.0)"
        );
    }

    #[test]
    fn test_shape_type_parse() {
        assert_eq!("oval".parse::<ShapeType>(), Ok(ShapeType::Oval));
        assert!(matches!(
            "triangle".parse::<ShapeType>(),
            Err(AlbumError::UnknownShapeType { .. })
        ));
    }

    #[test]
    fn test_failed_resize_keeps_dimensions() {
        let mut rect = Shape::new("R", ShapeType::Rectangle);
        assert!(rect.resize(0.0, 10.0).is_err());
        assert!(rect.resize(10.0, -1.0).is_err());
        assert_eq!(rect.dimensions(), (50.0, 50.0));
    }

    #[test]
    fn test_failed_set_color_keeps_color() {
        let mut oval = Shape::new("O", ShapeType::Oval);
        assert!(oval.set_color(0.0, 2.0, 0.0).is_err());
        assert_eq!(oval.color(), Color::RED);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Shape::new("R", ShapeType::Rectangle);
        let copy = original.clone();
        original.move_to(10.0, 10.0);
        assert_eq!(copy.position(), (0.0, 0.0));
        assert_eq!(copy.name(), "R");
    }

    #[test]
    fn test_from_spec_applies_everything() {
        let spec = ShapeSpec {
            name: "disk".to_string(),
            shape_type: "oval".to_string(),
            position: (500.0, 100.0),
            dimensions: (60.0, 30.0),
            color: (0.0, 0.0, 1.0),
        };
        let text = Shape::from_spec(&spec).unwrap().canonical_text();
        let expected =
            "Center: (500.0,100.0), X radius: 60.0, Y radius: 30.0, Color: (0.0,0.0,1.0)";
        assert!(text.ends_with(expected));
    }

    #[test]
    fn test_serialize_structured_view() {
        let rect = Shape::new("R", ShapeType::Rectangle);
        let json = serde_json::to_value(&rect).unwrap();
        assert_eq!(json["type"], "rectangle");
        assert_eq!(json["width"], 50.0);
        assert_eq!(json["color"]["r"], 1.0);
    }
}
