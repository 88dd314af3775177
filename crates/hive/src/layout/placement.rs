//! Node placement along group axes.

use indexmap::{IndexMap, IndexSet, map::Entry};
use log::{debug, warn};

use hive_core::geometry::{Point, Polar, normalize_angle};

use crate::{
    config::LayoutParams,
    error::InputError,
    model::{Edge, NodeId},
};

use super::axis_angles;

/// Group counts above this still lay out, but the plot gets crowded.
const READABLE_GROUP_LIMIT: usize = 3;

/// One group's axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    group: String,
    index: usize,
    angle: f32,
    len: usize,
    copies: Vec<f32>,
}

impl Axis {
    /// Label of the group this axis carries.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Position of the group in input order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Central angle of the axis in radians.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Number of nodes on the axis.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_duplicated(&self) -> bool {
        self.copies.len() > 1
    }

    /// Angles at which the axis is drawn: the central angle, or the two
    /// copies of a duplicated axis.
    pub fn copy_angles(&self) -> &[f32] {
        &self.copies
    }
}

/// Where a single node ends up.
#[derive(Debug, Clone, PartialEq)]
pub struct NodePlacement {
    node: NodeId,
    group: String,
    axis: usize,
    rank: usize,
    polar: Polar,
    copies: Vec<Polar>,
}

impl NodePlacement {
    pub fn node(&self) -> &NodeId {
        &self.node
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// Index of the axis (and group) the node sits on.
    pub fn axis_index(&self) -> usize {
        self.axis
    }

    /// Zero-based position along the axis; rank 0 is nearest the origin.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Position on the central axis angle.
    pub fn polar(&self) -> Polar {
        self.polar
    }

    /// Cartesian position on the central axis angle.
    pub fn point(&self) -> Point {
        self.polar.to_point()
    }

    /// Every position the node is drawn at, one per axis copy.
    pub fn copies(&self) -> &[Polar] {
        &self.copies
    }

    pub fn is_duplicated(&self) -> bool {
        self.copies.len() > 1
    }
}

/// Result of [`place_nodes`]: every node exactly once, in input order, plus
/// one [`Axis`] per group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Placement {
    nodes: IndexMap<NodeId, NodePlacement>,
    axes: Vec<Axis>,
}

impl Placement {
    pub fn get(&self, node: &str) -> Option<&NodePlacement> {
        self.nodes.get(node)
    }

    pub fn contains(&self, node: &str) -> bool {
        self.nodes.contains_key(node)
    }

    /// Placements in group order, then rank order.
    pub fn iter(&self) -> impl Iterator<Item = &NodePlacement> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Axes in group order.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn axis(&self, group: &str) -> Option<&Axis> {
        self.axes.iter().find(|axis| axis.group == group)
    }

    /// Node count of the longest axis.
    pub fn longest_axis(&self) -> usize {
        self.axes.iter().map(Axis::len).max().unwrap_or(0)
    }

    /// Labels of the groups that have at least one edge with both endpoints
    /// inside the group. Self-loops and edges to unplaced nodes don't count.
    pub fn groups_with_internal_edges(&self, edges: &[Edge]) -> IndexSet<String> {
        edges
            .iter()
            .filter(|edge| !edge.is_self_loop())
            .filter_map(|edge| {
                let source = self.get(edge.source().as_str())?;
                let target = self.get(edge.target().as_str())?;
                (source.axis == target.axis).then(|| source.group.clone())
            })
            .collect()
    }

    /// Splits the axis of `group` into two copies at `angle ± minor_angle`.
    ///
    /// Returns false if no such group was placed.
    pub fn duplicate_axis(&mut self, group: &str, minor_angle: f32) -> bool {
        let Some(axis) = self.axes.iter_mut().find(|axis| axis.group == group) else {
            return false;
        };
        let copies = vec![
            normalize_angle(axis.angle - minor_angle),
            normalize_angle(axis.angle + minor_angle),
        ];
        debug!(group, minor_angle; "Duplicating axis");
        axis.copies = copies.clone();

        let index = axis.index;
        for placement in self.nodes.values_mut().filter(|p| p.axis == index) {
            placement.copies = copies
                .iter()
                .map(|&angle| placement.polar.with_angle(angle))
                .collect();
        }
        true
    }
}

/// Places every node on its group's axis.
///
/// Groups are assigned axes in iteration order. The node at rank `k` sits at
/// radius `internal_radius + k × scale`.
///
/// # Errors
///
/// - [`InputError::NoGroups`] if `groups` is empty.
/// - [`InputError::EmptyGroupLabel`] if a group label is empty.
/// - [`InputError::DuplicateNode`] if a node is listed more than once.
///
/// # Examples
///
/// ```
/// use hive::config::LayoutConfig;
/// use hive::layout::place_nodes;
/// use hive::model::HiveData;
///
/// let data = HiveData::new()
///     .with_group("A", ["n1", "n2"])
///     .with_group("B", ["n3"]);
/// let params = LayoutConfig::default().resolve(data.groups().len()).unwrap();
///
/// let placement = place_nodes(data.groups(), &params).unwrap();
/// assert_eq!(placement.len(), 3);
/// assert_eq!(placement.get("n2").unwrap().rank(), 1);
/// assert_eq!(placement.get("n3").unwrap().group(), "B");
/// ```
pub fn place_nodes(
    groups: &IndexMap<String, Vec<NodeId>>,
    params: &LayoutParams,
) -> Result<Placement, InputError> {
    if groups.is_empty() {
        return Err(InputError::NoGroups);
    }
    if groups.len() > READABLE_GROUP_LIMIT {
        warn!(
            groups = groups.len();
            "More than {READABLE_GROUP_LIMIT} groups; the plot may be hard to read"
        );
    }

    let angles = axis_angles(groups.len(), params.start_angle);
    let mut placement = Placement::default();

    for (index, ((group, nodes), &angle)) in groups.iter().zip(&angles).enumerate() {
        if group.is_empty() {
            return Err(InputError::EmptyGroupLabel);
        }

        for (rank, node) in nodes.iter().enumerate() {
            let polar = Polar::new(angle, params.rank_radius(rank));
            match placement.nodes.entry(node.clone()) {
                Entry::Occupied(existing) => {
                    return Err(InputError::DuplicateNode {
                        node: node.clone(),
                        first: existing.get().group.clone(),
                        second: group.clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(NodePlacement {
                        node: node.clone(),
                        group: group.clone(),
                        axis: index,
                        rank,
                        polar,
                        copies: vec![polar],
                    });
                }
            }
        }

        debug!(group, index, angle, nodes = nodes.len(); "Placed axis");
        placement.axes.push(Axis {
            group: group.clone(),
            index,
            angle,
            len: nodes.len(),
            copies: vec![angle],
        });
    }

    Ok(placement)
}
