//! Input model: node identifiers, edges and grouped node lists.
//!
//! [`HiveData`] is what a caller hands to [`HivePlot`](crate::HivePlot): an
//! ordered mapping from group label to the group's nodes in rank order, plus
//! the edges to draw. Group insertion order decides which axis each group is
//! placed on, so building the same `HiveData` twice always yields the same
//! picture.

use std::{borrow::Borrow, fmt};

use indexmap::IndexMap;

use crate::rank::{Ranking, rank_nodes};

/// Identifier of a node in the caller's graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for NodeId {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A connection between two nodes.
///
/// The edge group selects the edge color. Attributes are opaque key/value
/// pairs handed through to the rendering backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    group: String,
    attributes: IndexMap<String, String>,
}

impl Edge {
    /// Creates an edge from `source` to `target` belonging to `group`.
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>, group: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            group: group.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Attaches an attribute, replacing any previous value for `key`.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// Returns true if the edge starts and ends at the same node.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Grouped, rank-ordered nodes and the edges between them.
///
/// # Examples
///
/// ```
/// use hive::model::{Edge, HiveData};
///
/// let data = HiveData::new()
///     .with_group("A", ["n1", "n2"])
///     .with_group("B", ["n3"])
///     .with_edge(Edge::new("n1", "n3", "A"))
///     .with_edge(Edge::new("n1", "n2", "A"));
///
/// assert_eq!(data.groups().len(), 2);
/// assert_eq!(data.node_count(), 3);
/// assert_eq!(data.edges().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HiveData {
    groups: IndexMap<String, Vec<NodeId>>,
    edges: Vec<Edge>,
}

impl HiveData {
    /// Creates empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `nodes`, already in rank order, to `group`.
    ///
    /// A group seen for the first time is placed after every existing group;
    /// adding to an existing group appends behind its current nodes.
    pub fn add_group<I, N>(&mut self, group: impl Into<String>, nodes: I)
    where
        I: IntoIterator<Item = N>,
        N: Into<NodeId>,
    {
        self.groups
            .entry(group.into())
            .or_default()
            .extend(nodes.into_iter().map(Into::into));
    }

    /// Builder-style variant of [`HiveData::add_group`].
    pub fn with_group<I, N>(mut self, group: impl Into<String>, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<NodeId>,
    {
        self.add_group(group, nodes);
        self
    }

    /// Adds `group` with its nodes ordered by `ranking` (stable sort).
    ///
    /// # Examples
    ///
    /// ```
    /// use hive::model::{HiveData, NodeId};
    /// use hive::rank::{ByKey, Descending};
    ///
    /// let degree = |id: &NodeId| match id.as_str() {
    ///     "hub" => 9,
    ///     "leaf" => 1,
    ///     _ => 4,
    /// };
    ///
    /// let data = HiveData::new().with_ranked_group(
    ///     "A",
    ///     ["leaf", "hub", "mid"],
    ///     &Descending(ByKey(degree)),
    /// );
    /// let order: Vec<_> = data.groups()["A"].iter().map(NodeId::as_str).collect();
    /// assert_eq!(order, ["hub", "mid", "leaf"]);
    /// ```
    pub fn with_ranked_group<I, N, R>(mut self, group: impl Into<String>, nodes: I, ranking: &R) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<NodeId>,
        R: Ranking<NodeId> + ?Sized,
    {
        let mut nodes: Vec<NodeId> = nodes.into_iter().map(Into::into).collect();
        rank_nodes(&mut nodes, ranking);
        self.add_group(group, nodes);
        self
    }

    /// Adds an edge.
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Builder-style variant of [`HiveData::add_edge`].
    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.add_edge(edge);
        self
    }

    /// Groups in axis order, each with its nodes in rank order.
    pub fn groups(&self) -> &IndexMap<String, Vec<NodeId>> {
        &self.groups
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Total number of node entries across all groups.
    pub fn node_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
