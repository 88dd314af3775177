//! Layer-based z-ordering for SVG output.
//!
//! Hive plots are drawn bottom to top as axes, edges, nodes, then labels, so
//! that node markers sit on top of the edge curves ending at them regardless
//! of the order in which a backend receives draw calls.
//!
//! # Example
//!
//! ```
//! # use hive_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Circle, Path};
//! let mut output = LayeredOutput::new();
//!
//! output.add_to_layer(RenderLayer::Node, Box::new(Circle::new()));
//! output.add_to_layer(RenderLayer::Edge, Box::new(Path::new()));
//!
//! // Edge group first, then the node group
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use std::collections::BTreeMap;

use log::trace;
use svg::node::element as svg_element;

/// A boxed SVG node of any element type.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Background fill
    Background,
    /// Axis lines
    Axis,
    /// Edge curves
    Edge,
    /// Node markers
    Node,
    /// Group labels
    Label,
}

impl RenderLayer {
    /// Value of the `data-layer` attribute on the layer's group.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Axis => "axis",
            Self::Edge => "edge",
            Self::Node => "node",
            Self::Label => "label",
        }
    }
}

/// SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    layers: BTreeMap<RenderLayer, Vec<SvgNode>>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node on top of everything already in `layer`.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.layers.entry(layer).or_default().push(node);
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Number of nodes collected for `layer`.
    pub fn layer_len(&self, layer: RenderLayer) -> usize {
        self.layers.get(&layer).map_or(0, Vec::len)
    }

    /// One `<g data-layer="...">` per non-empty layer, bottom layer first.
    /// Nodes keep their insertion order within a layer.
    pub fn render(self) -> Vec<SvgNode> {
        self.layers
            .into_iter()
            .map(|(layer, nodes)| {
                trace!(layer = layer.name(), nodes = nodes.len(); "Rendering layer");
                let group = nodes.into_iter().fold(
                    svg_element::Group::new().set("data-layer", layer.name()),
                    |group, node| group.add(node),
                );
                Box::new(group) as SvgNode
            })
            .collect()
    }
}
