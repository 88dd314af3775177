//! Geometric primitives for hive plot layout.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in plot space
//! - [`Polar`] - A position given as an angle and a radius around the origin
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box
//! - [`Insets`] - Padding values for four sides
//!
//! # Coordinate System
//!
//! Plot space is centered on the shared origin of all axes and follows SVG
//! conventions, so Y increases downward:
//!
//! ```text
//!            θ = 0
//!              ▲
//!              │
//!   θ = 3π/2 ──●──► θ = π/2, +X
//!              │
//!              ▼
//!             +Y
//! ```
//!
//! Angles are measured in radians, clockwise from "12 o'clock". A polar
//! position `(θ, r)` maps to `x = r·sin θ`, `y = −r·cos θ`.

use std::f32::consts::{PI, TAU};

/// A 2D point in plot coordinate space.
///
/// # Examples
///
/// ```
/// # use hive_core::geometry::Point;
/// let origin = Point::default();
/// let p = Point::new(3.0, -4.0);
///
/// assert_eq!(p.hypot(), 5.0);
/// assert_eq!(origin.distance(p), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Euclidean distance from the origin
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        self.sub_point(other).hypot()
    }
}

/// A position around the plot origin, as an angle and a radius.
///
/// # Examples
///
/// ```
/// # use hive_core::geometry::Polar;
/// # use std::f32::consts::FRAC_PI_2;
/// // θ = 0 points straight up (negative Y in SVG space)
/// let up = Polar::new(0.0, 10.0).to_point();
/// assert!(up.x().abs() < 1e-5);
/// assert!((up.y() + 10.0).abs() < 1e-5);
///
/// // θ = π/2 points right
/// let right = Polar::new(FRAC_PI_2, 10.0).to_point();
/// assert!((right.x() - 10.0).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Polar {
    angle: f32,
    radius: f32,
}

impl Polar {
    /// Creates a polar position from an angle (radians) and a radius.
    pub fn new(angle: f32, radius: f32) -> Self {
        Self { angle, radius }
    }

    /// Returns the angle in radians.
    pub fn angle(self) -> f32 {
        self.angle
    }

    /// Returns the distance from the origin.
    pub fn radius(self) -> f32 {
        self.radius
    }

    /// Returns a copy with a different angle.
    pub fn with_angle(self, angle: f32) -> Self {
        Self { angle, ..self }
    }

    /// Converts to Cartesian plot coordinates.
    pub fn to_point(self) -> Point {
        Point::new(
            self.radius * self.angle.sin(),
            -self.radius * self.angle.cos(),
        )
    }
}

/// Normalizes an angle into `[0, 2π)`.
///
/// ```
/// # use hive_core::geometry::normalize_angle;
/// # use std::f32::consts::PI;
/// assert!((normalize_angle(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-5);
/// assert!(normalize_angle(0.0).abs() < 1e-6);
/// ```
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Signed angular difference `to − from`, unwrapped into `(−π, π]`.
///
/// This is the shorter way round the circle from `from` to `to`.
pub fn angle_delta(from: f32, to: f32) -> f32 {
    let delta = normalize_angle(to - from);
    if delta > PI { delta - TAU } else { delta }
}

/// Unsigned angular distance between two angles, in `[0, π]`.
pub fn angular_distance(a: f32, b: f32) -> f32 {
    angle_delta(a, b).abs()
}

/// Converts degrees to radians.
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns a square size
    pub fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns true if `point` lies inside or on the edge of the bounds
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Expands the bounds by adding insets.
    pub fn add_padding(&self, insets: Insets) -> Self {
        Self {
            min_x: self.min_x - insets.left(),
            min_y: self.min_y - insets.top(),
            max_x: self.max_x + insets.right(),
            max_y: self.max_y + insets.bottom(),
        }
    }
}

/// Represents spacing around an element with potentially different values for each side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn angle_strategy() -> impl Strategy<Value = f32> {
        -20.0f32..20.0
    }

    fn radius_strategy() -> impl Strategy<Value = f32> {
        0.0f32..1000.0
    }

    /// Converting to Cartesian preserves the distance from the origin.
    fn check_polar_preserves_radius(angle: f32, radius: f32) -> Result<(), TestCaseError> {
        let point = Polar::new(angle, radius).to_point();
        prop_assert!(approx_eq!(f32, point.hypot(), radius, epsilon = 0.01));
        Ok(())
    }

    /// Normalized angles always land in [0, 2π).
    fn check_normalize_in_range(angle: f32) -> Result<(), TestCaseError> {
        let normalized = normalize_angle(angle);
        prop_assert!((0.0..TAU).contains(&normalized));
        Ok(())
    }

    /// The short-way delta never exceeds half a turn.
    fn check_delta_at_most_half_turn(a: f32, b: f32) -> Result<(), TestCaseError> {
        let delta = angle_delta(a, b);
        prop_assert!(delta > -PI - 1e-4 && delta <= PI + 1e-4);
        Ok(())
    }

    proptest! {
        #[test]
        fn polar_preserves_radius(angle in angle_strategy(), radius in radius_strategy()) {
            check_polar_preserves_radius(angle, radius)?;
        }

        #[test]
        fn normalize_in_range(angle in angle_strategy()) {
            check_normalize_in_range(angle)?;
        }

        #[test]
        fn delta_at_most_half_turn(a in angle_strategy(), b in angle_strategy()) {
            check_delta_at_most_half_turn(a, b)?;
        }
    }
}
