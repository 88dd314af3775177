//! Cubic Bezier curves used for edge paths.

use crate::geometry::Point;

/// A cubic Bezier curve from `start` to `end` shaped by two control points.
///
/// # Examples
///
/// ```
/// use hive_core::draw::CubicBezier;
/// use hive_core::geometry::Point;
///
/// let curve = CubicBezier::new(
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 10.0),
///     Point::new(10.0, 10.0),
///     Point::new(10.0, 0.0),
/// );
///
/// let points = curve.sample(4);
/// assert_eq!(points.len(), 5);
/// assert_eq!(points[0], curve.start());
/// assert_eq!(points[4], curve.end());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    start: Point,
    control1: Point,
    control2: Point,
    end: Point,
}

impl CubicBezier {
    pub fn new(start: Point, control1: Point, control2: Point, end: Point) -> Self {
        Self {
            start,
            control1,
            control2,
            end,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn control1(&self) -> Point {
        self.control1
    }

    pub fn control2(&self) -> Point {
        self.control2
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Evaluates the curve at parameter `t` (clamped to `[0, 1]`).
    pub fn point_at(&self, t: f32) -> Point {
        let t = t.clamp(0.0, 1.0);
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;

        Point::new(
            a * self.start.x() + b * self.control1.x() + c * self.control2.x() + d * self.end.x(),
            a * self.start.y() + b * self.control1.y() + c * self.control2.y() + d * self.end.y(),
        )
    }

    /// Interpolates `segments + 1` evenly spaced (in `t`) points along the curve.
    ///
    /// The first point is always `start` and the last is always `end`. A
    /// `segments` value of zero is treated as one.
    pub fn sample(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| match i {
                0 => self.start,
                i if i == segments => self.end,
                i => self.point_at(i as f32 / segments as f32),
            })
            .collect()
    }

    /// Largest perpendicular distance of the control points from the chord.
    ///
    /// Zero means the curve degenerates into the straight `start → end`
    /// segment.
    pub fn bow(&self) -> f32 {
        let chord = self.end.sub_point(self.start);
        let length = chord.hypot();
        if length == 0.0 {
            return self
                .control1
                .distance(self.start)
                .max(self.control2.distance(self.start));
        }

        let perpendicular = |p: Point| {
            let offset = p.sub_point(self.start);
            (chord.x() * offset.y() - chord.y() * offset.x()).abs() / length
        };
        perpendicular(self.control1).max(perpendicular(self.control2))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn arch() -> CubicBezier {
        CubicBezier::new(
            Point::new(0.0, 0.0),
            Point::new(0.0, -10.0),
            Point::new(10.0, -10.0),
            Point::new(10.0, 0.0),
        )
    }

    #[test]
    fn test_point_at_endpoints() {
        let curve = arch();
        assert_eq!(curve.point_at(0.0), curve.start());
        assert_eq!(curve.point_at(1.0), curve.end());
    }

    #[test]
    fn test_point_at_midpoint_of_symmetric_arch() {
        let mid = arch().point_at(0.5);
        assert_approx_eq!(f32, mid.x(), 5.0);
        assert_approx_eq!(f32, mid.y(), -7.5);
    }

    #[test]
    fn test_sample_zero_segments_still_spans_curve() {
        let points = arch().sample(0);
        assert_eq!(points, vec![arch().start(), arch().end()]);
    }

    #[test]
    fn test_bow_of_straight_curve_is_zero() {
        let straight = CubicBezier::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(3.0, 3.0),
        );
        assert_approx_eq!(f32, straight.bow(), 0.0, epsilon = 1e-5);
        assert_approx_eq!(f32, arch().bow(), 10.0);
    }
}
