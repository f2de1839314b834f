// File: crates/marquee-core/src/point.rs
// Summary: Immutable 2D point/vector value with arithmetic and degree conversion.

use std::fmt;

/// A 2D coordinate value. Plain data, copied freely; every operation
/// returns a new value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2d {
    pub x: f64,
    pub y: f64,
}

impl Point2d {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Component-wise sum.
    #[inline]
    pub fn add(&self, that: Point2d) -> Point2d {
        Point2d::new(self.x + that.x, self.y + that.y)
    }

    /// Uniform scaling by `t`.
    #[inline]
    pub fn scale(&self, t: f64) -> Point2d {
        Point2d::new(self.x * t, self.y * t)
    }

    /// Build a geographic coordinate from degrees, longitude first.
    /// The conversion is a pure linear map; inputs outside the usual
    /// [-180, 180] / [-90, 90] ranges are not rejected.
    pub fn from_degrees(lon: f64, lat: f64) -> Point2d {
        Point2d::new(lon.to_radians(), lat.to_radians())
    }
}

impl fmt::Display for Point2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
