//! Little helpers for the geometry both the physics and the culling need.

use euclid::default::Point2D;

/// Straight-line distance between two points.
pub fn distance(a: Point2D<f64>, b: Point2D<f64>) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Angle in radians of the line going from `from` to `to`, measured like `atan2` does.
pub fn angle(from: Point2D<f64>, to: Point2D<f64>) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}
