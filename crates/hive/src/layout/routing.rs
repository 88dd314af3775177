//! Edge routing between placed nodes.
//!
//! Cross-axis edges are cubic Beziers whose control points sit on the
//! bisector of the two endpoint angles, at the endpoint radii. That pulls the
//! curve away from the origin compared to the straight chord.
//!
//! Same-axis edges run between the two copies of a duplicated axis, bowing
//! outward along the central angle. Without duplication they bow sideways off
//! the single axis. Either way the bow grows with the rank distance.

use std::f32::consts::FRAC_PI_2;

use log::trace;

use hive_core::{
    draw::CubicBezier,
    geometry::{Point, Polar, angle_delta, angular_distance},
};

use crate::config::LayoutParams;

use super::NodePlacement;

/// Endpoint angles closer than this are treated as the same ray.
const COLLINEAR_EPSILON: f32 = 1e-4;

/// How an edge was routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    /// Between two different axes.
    CrossAxis,
    /// Between the two copies of a duplicated axis.
    SameAxis,
    /// Alongside a single, non-duplicated axis.
    SameAxisSide,
}

/// A routed edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curve {
    bezier: CubicBezier,
    kind: CurveKind,
    samples: usize,
}

impl Curve {
    pub fn bezier(&self) -> &CubicBezier {
        &self.bezier
    }

    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    pub fn start(&self) -> Point {
        self.bezier.start()
    }

    pub fn end(&self) -> Point {
        self.bezier.end()
    }

    /// Interpolated points from source to target, using the configured
    /// number of segments.
    pub fn points(&self) -> Vec<Point> {
        self.bezier.sample(self.samples)
    }

    /// Interpolated points with an explicit segment count.
    pub fn sample(&self, segments: usize) -> Vec<Point> {
        self.bezier.sample(segments)
    }
}

/// Routes an edge from `source` to `target`.
///
/// `same_group` selects same-axis routing; it only takes effect when both
/// placements are on the same axis. Returns `None` for zero-length edges.
///
/// # Examples
///
/// ```
/// use hive::config::LayoutConfig;
/// use hive::layout::{CurveKind, place_nodes, route_edge};
/// use hive::model::HiveData;
///
/// let data = HiveData::new()
///     .with_group("A", ["n1", "n2"])
///     .with_group("B", ["n3"]);
/// let params = LayoutConfig::default().resolve(2).unwrap();
/// let placement = place_nodes(data.groups(), &params).unwrap();
///
/// let n1 = placement.get("n1").unwrap();
/// let n3 = placement.get("n3").unwrap();
/// let curve = route_edge(n1, n3, false, &params).unwrap();
/// assert_eq!(curve.kind(), CurveKind::CrossAxis);
/// assert!(curve.bezier().bow() > 0.0);
///
/// assert!(route_edge(n1, n1, true, &params).is_none());
/// ```
pub fn route_edge(
    source: &NodePlacement,
    target: &NodePlacement,
    same_group: bool,
    params: &LayoutParams,
) -> Option<Curve> {
    if source.node() == target.node() {
        trace!(node = source.node().as_str(); "Skipping zero-length edge");
        return None;
    }

    let (bezier, kind) = if same_group && source.axis_index() == target.axis_index() {
        if source.is_duplicated() && target.is_duplicated() {
            (between_copies(source, target, params), CurveKind::SameAxis)
        } else {
            let (s, t) = (source.polar(), target.polar());
            (beside_axis(s, t, params), CurveKind::SameAxisSide)
        }
    } else {
        let (s, t) = facing_copies(source, target);
        if angular_distance(s.angle(), t.angle()) < COLLINEAR_EPSILON {
            (beside_axis(s, t, params), CurveKind::SameAxisSide)
        } else {
            (across_axes(s, t), CurveKind::CrossAxis)
        }
    };

    if bezier.start().distance(bezier.end()) == 0.0 {
        trace!(from = source.node().as_str(), to = target.node().as_str(); "Skipping coincident endpoints");
        return None;
    }

    Some(Curve {
        bezier,
        kind,
        samples: params.curve_samples,
    })
}

/// Picks the pair of axis copies with the smallest angular distance.
fn facing_copies(source: &NodePlacement, target: &NodePlacement) -> (Polar, Polar) {
    let mut best = (source.polar(), target.polar());
    let mut best_distance = f32::INFINITY;
    for &s in source.copies() {
        for &t in target.copies() {
            let distance = angular_distance(s.angle(), t.angle());
            if distance < best_distance {
                best = (s, t);
                best_distance = distance;
            }
        }
    }
    best
}

fn across_axes(source: Polar, target: Polar) -> CubicBezier {
    let mid = source.angle() + angle_delta(source.angle(), target.angle()) / 2.0;
    CubicBezier::new(
        source.to_point(),
        Polar::new(mid, source.radius()).to_point(),
        Polar::new(mid, target.radius()).to_point(),
        target.to_point(),
    )
}

fn bow_for(source: Polar, target: Polar, params: &LayoutParams) -> f32 {
    params.same_axis_bow * (target.radius() - source.radius()).abs().max(params.scale)
}

fn between_copies(source: &NodePlacement, target: &NodePlacement, params: &LayoutParams) -> CubicBezier {
    let center = source.polar().angle();
    let s = source.polar().with_angle(center - params.minor_angle);
    let t = target.polar().with_angle(center + params.minor_angle);
    let bow = bow_for(s, t, params);

    CubicBezier::new(
        s.to_point(),
        Polar::new(center, s.radius() + bow).to_point(),
        Polar::new(center, t.radius() + bow).to_point(),
        t.to_point(),
    )
}

fn beside_axis(source: Polar, target: Polar, params: &LayoutParams) -> CubicBezier {
    let bow = bow_for(source, target, params);
    let offset = Polar::new(source.angle() + FRAC_PI_2, bow).to_point();
    let (s, t) = (source.to_point(), target.to_point());

    CubicBezier::new(s, s.add_point(offset), t.add_point(offset), t)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::{
        config::LayoutConfig,
        layout::{Placement, place_nodes},
        model::HiveData,
    };

    fn layout(data: &HiveData, config: LayoutConfig, duplicate: &[&str]) -> (Placement, LayoutParams) {
        let params = config.resolve(data.groups().len()).unwrap();
        let mut placement = place_nodes(data.groups(), &params).unwrap();
        for group in duplicate {
            placement.duplicate_axis(group, params.minor_angle);
        }
        (placement, params)
    }

    fn scenario() -> HiveData {
        HiveData::new()
            .with_group("A", ["n1", "n2"])
            .with_group("B", ["n3"])
    }

    /// Distance from the origin to the straight line through `a` and `b`.
    fn chord_distance_from_origin(a: Point, b: Point) -> f32 {
        let d = b.sub_point(a);
        (a.x() * d.y() - a.y() * d.x()).abs() / d.hypot()
    }

    #[test]
    fn test_cross_axis_controls_on_bisector() {
        let data = HiveData::new()
            .with_group("A", ["a"])
            .with_group("B", ["b"])
            .with_group("C", ["c"]);
        let (placement, params) = layout(&data, LayoutConfig::default(), &[]);
        let curve = route_edge(
            placement.get("a").unwrap(),
            placement.get("b").unwrap(),
            false,
            &params,
        )
        .unwrap();

        let expected = Polar::new(60f32.to_radians(), 100.0).to_point();
        assert_approx_eq!(f32, curve.bezier().control1().x(), expected.x(), epsilon = 1e-3);
        assert_approx_eq!(f32, curve.bezier().control1().y(), expected.y(), epsilon = 1e-3);
    }

    #[test]
    fn test_cross_axis_takes_short_arc() {
        let data = HiveData::new()
            .with_group("A", ["a"])
            .with_group("B", ["b"])
            .with_group("C", ["c"]);
        let (placement, params) = layout(&data, LayoutConfig::default(), &[]);
        // 0° to 240° is shorter the other way round, via 300°
        let curve = route_edge(
            placement.get("a").unwrap(),
            placement.get("c").unwrap(),
            false,
            &params,
        )
        .unwrap();
        let control = curve.bezier().control1();
        let expected = Polar::new(300f32.to_radians(), 100.0).to_point();
        assert_approx_eq!(f32, control.x(), expected.x(), epsilon = 1e-3);
        assert_approx_eq!(f32, control.y(), expected.y(), epsilon = 1e-3);
    }

    #[test]
    fn test_cross_axis_uses_facing_copy() {
        let data = scenario().with_group("C", ["n4"]);
        let (placement, params) = layout(&data, LayoutConfig::default(), &["A"]);
        let n1 = placement.get("n1").unwrap();
        let n3 = placement.get("n3").unwrap();
        let curve = route_edge(n1, n3, false, &params).unwrap();

        // A's copies sit at 340° and 20°; B at 120° faces the 20° copy
        let expected = n1.copies()[1].to_point();
        assert_approx_eq!(f32, curve.start().x(), expected.x(), epsilon = 1e-3);
        assert_approx_eq!(f32, curve.start().y(), expected.y(), epsilon = 1e-3);
        assert_eq!(curve.end(), n3.point());
    }

    #[test]
    fn test_same_axis_between_copies() {
        let (placement, params) = layout(&scenario(), LayoutConfig::default(), &["A"]);
        let n1 = placement.get("n1").unwrap();
        let n2 = placement.get("n2").unwrap();
        let curve = route_edge(n1, n2, true, &params).unwrap();

        assert_eq!(curve.kind(), CurveKind::SameAxis);
        assert_approx_eq!(f32, curve.start().x(), n1.copies()[0].to_point().x(), epsilon = 1e-3);
        assert_approx_eq!(f32, curve.end().x(), n2.copies()[1].to_point().x(), epsilon = 1e-3);

        // Controls lie on the central axis (x = 0), pushed out by 0.25 × 10
        let control = curve.bezier().control1();
        assert_approx_eq!(f32, control.x(), 0.0, epsilon = 1e-3);
        assert_approx_eq!(f32, control.y(), -102.5, epsilon = 1e-3);
    }

    #[test]
    fn test_same_axis_side_bow_without_duplication() {
        let config = LayoutConfig::default().with_duplicate_axes(false);
        let (placement, params) = layout(&scenario(), config, &[]);
        let n1 = placement.get("n1").unwrap();
        let n2 = placement.get("n2").unwrap();
        let curve = route_edge(n1, n2, true, &params).unwrap();

        assert_eq!(curve.kind(), CurveKind::SameAxisSide);
        assert_approx_eq!(f32, curve.bezier().bow(), 2.5, epsilon = 1e-3);
    }

    #[test]
    fn test_closer_ranks_bow_less() {
        let data = HiveData::new().with_group("A", ["a", "b", "c", "d"]);
        let config = LayoutConfig::default().with_duplicate_axes(false);
        let (placement, params) = layout(&data, config, &[]);
        let a = placement.get("a").unwrap();
        let near = route_edge(a, placement.get("b").unwrap(), true, &params).unwrap();
        let far = route_edge(a, placement.get("d").unwrap(), true, &params).unwrap();
        assert!(near.bezier().bow() < far.bezier().bow());
    }

    #[test]
    fn test_zero_length_edge_skipped() {
        let (placement, params) = layout(&scenario(), LayoutConfig::default(), &["A"]);
        let n1 = placement.get("n1").unwrap();
        assert!(route_edge(n1, n1, true, &params).is_none());
        assert!(route_edge(n1, n1, false, &params).is_none());
    }

    #[test]
    fn test_points_follow_curve_samples() {
        let config = LayoutConfig::default().with_curve_samples(8);
        let (placement, params) = layout(&scenario(), config, &[]);
        let curve = route_edge(
            placement.get("n1").unwrap(),
            placement.get("n3").unwrap(),
            false,
            &params,
        )
        .unwrap();
        let points = curve.points();
        assert_eq!(points.len(), 9);
        assert_eq!(points[0], curve.start());
        assert_eq!(points[8], curve.end());
    }

    fn check_cross_axis_bows_outward(groups: usize, i: usize, j: usize) -> Result<(), TestCaseError> {
        let mut data = HiveData::new();
        for g in 0..groups {
            data.add_group(format!("g{g}"), [format!("n{g}a"), format!("n{g}b")]);
        }
        let (placement, params) = layout(&data, LayoutConfig::default(), &[]);
        let source = placement.get(&format!("n{i}a")).unwrap();
        let target = placement.get(&format!("n{j}b")).unwrap();
        let curve = route_edge(source, target, false, &params).unwrap();

        prop_assert_eq!(curve.kind(), CurveKind::CrossAxis);
        prop_assert!(curve.bezier().bow() > 1e-3);

        let chord = chord_distance_from_origin(curve.start(), curve.end());
        let mid = curve.bezier().point_at(0.5);
        prop_assert!(mid.hypot() >= chord - 1e-3);
        Ok(())
    }

    fn check_same_axis_avoids_origin(
        ranks: usize,
        i: usize,
        j: usize,
        duplicate: bool,
    ) -> Result<(), TestCaseError> {
        let nodes: Vec<String> = (0..ranks).map(|r| format!("n{r}")).collect();
        let data = HiveData::new().with_group("A", nodes.clone()).with_group("B", ["b"]);
        let config = LayoutConfig::default().with_duplicate_axes(duplicate);
        let dup: &[&str] = if duplicate { &["A"] } else { &[] };
        let (placement, params) = layout(&data, config, dup);

        let curve = route_edge(
            placement.get(&nodes[i]).unwrap(),
            placement.get(&nodes[j]).unwrap(),
            true,
            &params,
        )
        .unwrap();

        prop_assert!(curve.bezier().bow() > 1e-3);
        for point in curve.points() {
            prop_assert!(point.hypot() > params.internal_radius * 0.5);
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn prop_cross_axis_bows_outward(
            (groups, i, j) in (2usize..7).prop_flat_map(|n| (Just(n), 0..n, 0..n))
                .prop_filter("distinct axes", |(_, i, j)| i != j)
        ) {
            check_cross_axis_bows_outward(groups, i, j)?;
        }

        #[test]
        fn prop_same_axis_avoids_origin(
            (ranks, i, j) in (2usize..10).prop_flat_map(|n| (Just(n), 0..n, 0..n))
                .prop_filter("distinct nodes", |(_, i, j)| i != j),
            duplicate in any::<bool>(),
        ) {
            check_same_axis_avoids_origin(ranks, i, j, duplicate)?;
        }
    }
}
