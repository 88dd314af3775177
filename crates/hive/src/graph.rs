//! Building [`HiveData`] from a `petgraph` graph.
//!
//! Enabled with the `petgraph` feature.

use indexmap::IndexMap;
use log::debug;
use petgraph::{
    EdgeType,
    graph::{Graph, IndexType, NodeIndex},
    visit::EdgeRef,
};

use crate::{
    model::{Edge, HiveData, NodeId},
    rank::{Ranking, rank_nodes},
};

/// Converts `graph` into grouped, ranked hive plot input.
///
/// `node_info` names each node and picks its group. Groups are ordered by
/// first appearance in node index order, and each group's nodes are sorted
/// by `ranking`, which sees node indices so it can consult the graph.
/// `edge_group` picks an edge's group; `None` uses the source node's group.
///
/// # Examples
///
/// ```
/// use hive::graph::from_graph;
/// use hive::rank::{ByKey, Descending};
/// use petgraph::graph::{NodeIndex, UnGraph};
///
/// let mut graph = UnGraph::<(&str, &str), ()>::new_undirected();
/// let hub = graph.add_node(("hub", "core"));
/// let leaf = graph.add_node(("leaf", "core"));
/// let out = graph.add_node(("out", "edge"));
/// graph.add_edge(hub, leaf, ());
/// graph.add_edge(hub, out, ());
///
/// let degree = |i: &NodeIndex| graph.neighbors(*i).count();
/// let data = from_graph(
///     &graph,
///     |(name, group)| ((*name).into(), group.to_string()),
///     |_| None,
///     &Descending(ByKey(degree)),
/// );
///
/// assert_eq!(data.groups()["core"][0].as_str(), "hub");
/// assert_eq!(data.edges().len(), 2);
/// assert_eq!(data.edges()[1].group(), "core");
/// ```
pub fn from_graph<N, E, Ty, Ix, FN, FE, R>(
    graph: &Graph<N, E, Ty, Ix>,
    node_info: FN,
    edge_group: FE,
    ranking: &R,
) -> HiveData
where
    Ty: EdgeType,
    Ix: IndexType,
    FN: Fn(&N) -> (NodeId, String),
    FE: Fn(&E) -> Option<String>,
    R: Ranking<NodeIndex<Ix>> + ?Sized,
{
    let mut members: IndexMap<String, Vec<NodeIndex<Ix>>> = IndexMap::new();
    let mut nodes = Vec::with_capacity(graph.node_count());
    for index in graph.node_indices() {
        let (id, group) = node_info(&graph[index]);
        members.entry(group.clone()).or_default().push(index);
        nodes.push((id, group));
    }

    let mut data = HiveData::new();
    for (group, mut indices) in members {
        rank_nodes(&mut indices, ranking);
        data.add_group(group, indices.iter().map(|i| nodes[i.index()].0.clone()));
    }

    for edge in graph.edge_references() {
        let (source, source_group) = &nodes[edge.source().index()];
        let target = &nodes[edge.target().index()].0;
        let group = edge_group(edge.weight()).unwrap_or_else(|| source_group.clone());
        data.add_edge(Edge::new(source.clone(), target.clone(), group));
    }

    debug!(
        groups = data.groups().len(),
        nodes = data.node_count(),
        edges = data.edges().len();
        "Converted petgraph graph"
    );
    data
}
