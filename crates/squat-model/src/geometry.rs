//! Planar points and degree-based trigonometry.

use serde::{Deserialize, Serialize};

/// Sine of an angle given in degrees.
#[inline]
pub fn sind(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cosd(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

/// A point in the sagittal plane. `x` points forward (heel to toe), `y` up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// The origin, where the heel sits.
    pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

    /// Creates a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Moves `distance` along the direction `angle_deg`, measured
    /// counter-clockwise from the positive x-axis.
    pub fn offset_polar(self, distance: f64, angle_deg: f64) -> Self {
        Self {
            x: self.x + distance * cosd(angle_deg),
            y: self.y + distance * sind(angle_deg),
        }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns true if both coordinates are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point2> for [f64; 2] {
    fn from(p: Point2) -> Self {
        [p.x, p.y]
    }
}

impl std::fmt::Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_trig() {
        assert!((sind(90.0) - 1.0).abs() < 1e-12);
        assert!((cosd(60.0) - 0.5).abs() < 1e-12);
        assert!(cosd(90.0).abs() < 1e-12);
        assert!((sind(-30.0) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_offset_polar_preserves_distance() {
        let start = Point2::new(3.0, -2.0);
        for angle in [0.0, 33.0, 90.0, 147.5, 180.0, 271.0] {
            let end = start.offset_polar(12.5, angle);
            assert!((start.distance_to(end) - 12.5).abs() < 1e-9, "angle {}", angle);
        }
    }

    #[test]
    fn test_offset_polar_axis_directions() {
        let p = Point2::ORIGIN.offset_polar(2.0, 180.0);
        assert!((p.x + 2.0).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        assert_eq!(Point2::new(1.0, 2.5).to_string(), "(1.000, 2.500)");
    }

    #[test]
    fn test_serializes_as_xy_object() {
        let json = serde_json::to_string(&Point2::new(1.5, -2.0)).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);
    }
}
