use serde::Serialize;

use super::decimal::one_decimal;
use crate::errors::{AlbumError, Result};

/// RGB color with each component in `[0.0, 1.0]`
///
/// Only constructible through validating constructors, so a `Color` value
/// always satisfies the range invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Color {
    /// Default color of newly added shapes
    pub const RED: Color = Color {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };

    /// Largest byte channel value; byte channels are divided by this
    pub const CHANNEL_MAX: f64 = 255.0;

    /// Create a color from unit-range components
    ///
    /// # Errors
    ///
    /// Returns `InvalidColor` if any component is outside `[0, 1]` or NaN.
    pub fn new(r: f64, g: f64, b: f64) -> Result<Self> {
        let in_range = |c: f64| (0.0..=1.0).contains(&c);
        if !(in_range(r) && in_range(g) && in_range(b)) {
            return Err(AlbumError::InvalidColor { r, g, b });
        }
        Ok(Self { r, g, b })
    }

    /// Create a color from 0-255 integer channels (each divided by 255)
    ///
    /// # Errors
    ///
    /// Returns `InvalidColor` if any channel is outside `0..=255`.
    pub fn from_rgb255(r: i64, g: i64, b: i64) -> Result<Self> {
        Self::new(
            r as f64 / Self::CHANNEL_MAX,
            g as f64 / Self::CHANNEL_MAX,
            b as f64 / Self::CHANNEL_MAX,
        )
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    /// Components as an `(r, g, b)` tuple
    pub fn components(&self) -> (f64, f64, f64) {
        (self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::RED
    }
}

/// Canonical `(r.r,g.g,b.b)` form used in the shape text
impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{},{})",
            one_decimal(self.r),
            one_decimal(self.g),
            one_decimal(self.b)
        )
    }
}
