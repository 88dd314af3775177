//! Radial layout: axis angles, node placement and edge routing.
//!
//! Every group gets one axis. Axis `i` of `n` sits at
//! `start_angle + i × 2π/n`, so the angles are a pure function of the group
//! count: three groups always form the same Y-shape, two groups always face
//! each other.

mod placement;
mod routing;

pub use placement::{Axis, NodePlacement, Placement, place_nodes};
pub use routing::{Curve, CurveKind, route_edge};

use std::f32::consts::TAU;

use hive_core::geometry::normalize_angle;

/// Angle between neighbouring axes: `2π / group_count`.
///
/// A group count of zero is treated as one.
pub fn major_angle(group_count: usize) -> f32 {
    TAU / group_count.max(1) as f32
}

/// Default half-separation of a duplicated axis: `2π / (6 × group_count)`.
pub fn default_minor_angle(group_count: usize) -> f32 {
    TAU / (6 * group_count.max(1)) as f32
}

/// Angles of all axes, in group order, normalized into `[0, 2π)`.
///
/// # Examples
///
/// ```
/// use hive::layout::axis_angles;
///
/// let angles = axis_angles(3, 0.0);
/// let degrees: Vec<i32> = angles.iter().map(|a| a.to_degrees().round() as i32).collect();
/// assert_eq!(degrees, [0, 120, 240]);
/// ```
pub fn axis_angles(group_count: usize, start_angle: f32) -> Vec<f32> {
    let major = major_angle(group_count);
    (0..group_count)
        .map(|i| normalize_angle(start_angle + i as f32 * major))
        .collect()
}
