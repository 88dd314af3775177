//! Graph description files.
//!
//! A graph file lists groups with explicitly ordered nodes, scored nodes that
//! are ranked here, the edges, and optional edge colors:
//!
//! ```toml
//! [[groups]]
//! name = "A"
//! color = "#1f77b4"
//! nodes = ["n1", "n2"]
//!
//! [[nodes]]
//! id = "n3"
//! group = "B"
//! score = 4.0
//!
//! [[edges]]
//! source = "n1"
//! target = "n3"
//! group = "A"
//! attributes = { weight = 2 }
//!
//! [edge_colors]
//! A = "crimson"
//! ```
//!
//! Scored nodes go after a group's listed nodes, highest score first.

use std::collections::HashMap;

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

use hive::{
    color::ColorMap,
    model::{Edge, HiveData},
    rank::{ByKey, Descending, rank_nodes},
};

use crate::error::{CliError, SyntaxError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GraphFile {
    #[serde(default)]
    groups: Vec<GroupEntry>,
    #[serde(default)]
    nodes: Vec<NodeEntry>,
    #[serde(default)]
    edges: Vec<EdgeEntry>,
    edge_colors: Option<IndexMap<String, String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GroupEntry {
    name: String,
    color: Option<String>,
    #[serde(default)]
    nodes: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeEntry {
    id: String,
    group: String,
    #[serde(default)]
    score: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeEntry {
    source: String,
    target: String,
    group: Option<String>,
    #[serde(default)]
    attributes: IndexMap<String, toml::Value>,
}

/// Everything needed to build a [`HivePlot`](hive::HivePlot).
#[derive(Debug)]
pub struct GraphInput {
    pub data: HiveData,
    pub node_colors: ColorMap,
    pub edge_colors: Option<ColorMap>,
}

/// Parses a graph file.
///
/// An edge without a group takes the group of its source node.
///
/// # Errors
///
/// - [`CliError::Syntax`] if the file is not valid TOML for this format.
/// - [`CliError::InvalidScore`] if a node score is NaN or infinite.
/// - [`CliError::Color`] if a group or edge color cannot be parsed.
pub fn parse_graph(src: &str, path: &str) -> Result<GraphInput, CliError> {
    let file: GraphFile =
        toml::from_str(src).map_err(|err| SyntaxError::from_toml(&err, path, src))?;

    let mut data = HiveData::new();
    let mut node_colors = ColorMap::new();

    for group in &file.groups {
        data.add_group(group.name.as_str(), &group.nodes);
        if let Some(color) = &group.color {
            let color = color.parse().map_err(|source| CliError::Color {
                context: format!("group `{}`", group.name),
                source,
            })?;
            node_colors.insert(group.name.as_str(), color);
        }
    }

    let mut scored: IndexMap<&str, Vec<&NodeEntry>> = IndexMap::new();
    for node in &file.nodes {
        if !node.score.is_finite() {
            return Err(CliError::InvalidScore {
                node: node.id.clone(),
                score: node.score,
            });
        }
        scored.entry(node.group.as_str()).or_default().push(node);
    }
    for (group, mut nodes) in scored {
        rank_nodes(&mut nodes, &Descending(ByKey(|n: &&NodeEntry| n.score)));
        data.add_group(group, nodes.iter().map(|n| n.id.as_str()));
    }

    let group_of: HashMap<&str, &str> = data
        .groups()
        .iter()
        .flat_map(|(group, nodes)| nodes.iter().map(move |n| (n.as_str(), group.as_str())))
        .collect();
    let mut edges = Vec::with_capacity(file.edges.len());
    for entry in &file.edges {
        let group = entry
            .group
            .clone()
            .or_else(|| group_of.get(entry.source.as_str()).map(|g| g.to_string()))
            .unwrap_or_default();
        let edge = entry.attributes.iter().fold(
            Edge::new(entry.source.as_str(), entry.target.as_str(), group),
            |edge, (key, value)| edge.with_attribute(key.as_str(), attribute_text(value)),
        );
        edges.push(edge);
    }
    for edge in edges {
        data.add_edge(edge);
    }

    let edge_colors = file
        .edge_colors
        .map(|colors| {
            ColorMap::from_strings(colors).map_err(|source| CliError::Color {
                context: "edge_colors".to_string(),
                source,
            })
        })
        .transpose()?;

    debug!(
        groups = data.groups().len(),
        nodes = data.node_count(),
        edges = data.edges().len();
        "Graph file parsed"
    );

    Ok(GraphInput {
        data,
        node_colors,
        edge_colors,
    })
}

/// Strings are taken verbatim; other values use their TOML spelling.
fn attribute_text(value: &toml::Value) -> String {
    match value {
        toml::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(data: &HiveData, group: &str) -> Vec<String> {
        data.groups()[group].iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_groups_and_scored_nodes() {
        let src = r#"
            [[groups]]
            name = "A"
            color = "steelblue"
            nodes = ["n1", "n2"]

            [[nodes]]
            id = "low"
            group = "A"
            score = 1.0

            [[nodes]]
            id = "b2"
            group = "B"
            score = 2.0

            [[nodes]]
            id = "b9"
            group = "B"
            score = 9.0

            [[nodes]]
            id = "high"
            group = "A"
            score = 5.0
        "#;

        let input = parse_graph(src, "test.toml").unwrap();
        assert_eq!(ids(&input.data, "A"), ["n1", "n2", "high", "low"]);
        assert_eq!(ids(&input.data, "B"), ["b9", "b2"]);
        assert!(input.node_colors.get("A").is_some());
        assert!(input.edge_colors.is_none());
    }

    #[test]
    fn test_edges_with_attributes_and_default_group() {
        let src = r#"
            [[groups]]
            name = "A"
            nodes = ["n1", "n2"]

            [[groups]]
            name = "B"
            nodes = ["n3"]

            [[edges]]
            source = "n3"
            target = "n1"

            [[edges]]
            source = "n1"
            target = "n2"
            group = "X"
            attributes = { weight = 2, kind = "friend" }

            [edge_colors]
            X = "crimson"
        "#;

        let input = parse_graph(src, "test.toml").unwrap();
        let edges = input.data.edges();
        assert_eq!(edges[0].group(), "B");
        assert_eq!(edges[1].group(), "X");
        assert_eq!(edges[1].attributes()["weight"], "2");
        assert_eq!(edges[1].attributes()["kind"], "friend");
        assert_eq!(input.edge_colors.unwrap().len(), 1);
    }

    #[test]
    fn test_syntax_error_has_span() {
        let src = "[[groups]]\nname = \"A\"\nnodez = []\n";
        match parse_graph(src, "bad.toml").unwrap_err() {
            CliError::Syntax(err) => {
                assert_eq!(err.path, "bad.toml");
                assert!(err.span.is_some());
            }
            other => panic!("Expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_score_rejected() {
        let src = r#"
            [[nodes]]
            id = "a"
            group = "A"
            score = 2.0

            [[nodes]]
            id = "b"
            group = "A"
            score = nan
        "#;
        let err = parse_graph(src, "test.toml").unwrap_err();
        assert!(matches!(err, CliError::InvalidScore { ref node, .. } if node == "b"));

        let src = "[[nodes]]\nid = \"c\"\ngroup = \"A\"\nscore = -inf\n";
        assert!(matches!(
            parse_graph(src, "test.toml").unwrap_err(),
            CliError::InvalidScore { .. }
        ));
    }

    #[test]
    fn test_bad_group_color() {
        let src = "[[groups]]\nname = \"A\"\ncolor = \"blurple\"\n";
        let err = parse_graph(src, "bad.toml").unwrap_err();
        assert!(matches!(err, CliError::Color { ref context, .. } if context == "group `A`"));
    }
}
