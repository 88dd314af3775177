//! SVG backend built on the `svg` crate.
//!
//! Draw calls are collected into a [`LayeredOutput`] so the document always
//! stacks axes below edges, edges below node markers, and labels on top. The
//! viewBox is the viewport handed to [`Canvas::begin`], which for a hive plot
//! is a square centered on the origin.

use std::path::Path;

use indexmap::IndexMap;
use log::{debug, info, warn};
use svg::node::element as svg_element;

use hive_core::{
    apply_stroke,
    color::Color,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Bounds, Point},
};

use crate::{
    canvas::Canvas,
    export::Error,
    layout::Curve,
    model::{Edge, NodeId},
};

/// `data-*` names already written for every edge path.
const RESERVED_EDGE_ATTRIBUTES: [&str; 3] = ["source", "target", "group"];

/// Font size of group labels relative to the viewport width.
const LABEL_FONT_RATIO: f32 = 0.03;

/// A [`Canvas`] producing an SVG document.
///
/// # Examples
///
/// ```
/// use hive::{HivePlot, export::svg::SvgCanvas, model::HiveData};
///
/// let data = HiveData::new().with_group("A", ["n1"]).with_group("B", ["n2"]);
/// let plot = HivePlot::new(data, Default::default(), None, Default::default()).unwrap();
///
/// let mut canvas = SvgCanvas::new();
/// plot.draw(&mut canvas);
/// let svg = canvas.into_string().unwrap();
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct SvgCanvas {
    viewport: Option<Bounds>,
    background: Option<Color>,
    output: LayeredOutput,
    arrows: IndexMap<String, Color>,
}

impl SvgCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles the SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if [`Canvas::begin`] was never called.
    pub fn into_document(self) -> Result<svg::Document, Error> {
        let viewport = self
            .viewport
            .ok_or_else(|| Error::Render("canvas has no viewport; nothing was drawn".to_string()))?;

        let mut doc = svg::Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    viewport.min_x(),
                    viewport.min_y(),
                    viewport.width(),
                    viewport.height()
                ),
            )
            .set("width", viewport.width())
            .set("height", viewport.height());

        if !self.arrows.is_empty() {
            doc = doc.add(arrow_marker_definitions(&self.arrows));
        }

        let mut output = self.output;
        if let Some(background) = self.background {
            let rect = svg_element::Rectangle::new()
                .set("x", viewport.min_x())
                .set("y", viewport.min_y())
                .set("width", viewport.width())
                .set("height", viewport.height())
                .set("fill", background.to_string())
                .set("fill-opacity", background.alpha());
            output.add_to_layer(RenderLayer::Background, Box::new(rect));
        }

        for node in output.render() {
            doc = doc.add(node);
        }
        Ok(doc)
    }

    /// Renders the SVG document to a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if [`Canvas::begin`] was never called.
    pub fn into_string(self) -> Result<String, Error> {
        self.into_document().map(|doc| doc.to_string())
    }
}

impl Canvas for SvgCanvas {
    fn begin(&mut self, viewport: Bounds, background: Option<Color>) {
        debug!(width = viewport.width(), height = viewport.height(); "Starting SVG canvas");
        self.viewport = Some(viewport);
        self.background = background;
    }

    fn draw_axis(&mut self, start: Point, end: Point, stroke: &StrokeDefinition, group: &str) {
        let line = svg_element::Line::new()
            .set("x1", start.x())
            .set("y1", start.y())
            .set("x2", end.x())
            .set("y2", end.y())
            .set("data-group", group);
        let line = apply_stroke!(line, stroke);
        self.output.add_to_layer(RenderLayer::Axis, Box::new(line));
    }

    fn draw_marker(&mut self, center: Point, radius: f32, fill: Color, node: &NodeId) {
        let circle = svg_element::Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", radius)
            .set("fill", fill.to_string())
            .set("fill-opacity", fill.alpha())
            .set("data-node", node.as_str());
        self.output.add_to_layer(RenderLayer::Node, Box::new(circle));
    }

    fn draw_curve(&mut self, curve: &Curve, stroke: &StrokeDefinition, edge: &Edge, arrow: bool) {
        let mut path = svg_element::Path::new()
            .set("d", path_data(&curve.points()))
            .set("fill", "none")
            .set("data-source", edge.source().as_str())
            .set("data-target", edge.target().as_str())
            .set("data-group", edge.group());
        path = apply_stroke!(path, stroke);

        for (key, value) in edge.attributes() {
            let name = data_attribute_name(key);
            if RESERVED_EDGE_ATTRIBUTES.contains(&name.as_str()) {
                warn!(key = key.as_str(); "Edge attribute collides with built-in edge data; skipped");
                continue;
            }
            path = path.set(format!("data-{name}"), value.as_str());
        }

        if arrow {
            let color = stroke.color();
            let id = arrow_marker_id(color);
            path = path.set("marker-end", format!("url(#{id})"));
            self.arrows.entry(id).or_insert(color);
        }

        self.output.add_to_layer(RenderLayer::Edge, Box::new(path));
    }

    fn draw_label(&mut self, position: Point, text: &str, color: Color) {
        let font_size = self
            .viewport
            .map(|viewport| viewport.width() * LABEL_FONT_RATIO)
            .unwrap_or(12.0);
        let label = svg_element::Text::new(text)
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("font-size", font_size)
            .set("fill", color.to_string());
        self.output.add_to_layer(RenderLayer::Label, Box::new(label));
    }

    fn save(self, path: &Path) -> Result<(), Error> {
        let doc = self.into_document()?;
        svg::save(path, &doc)?;
        info!(path:? = path; "SVG written");
        Ok(())
    }
}

/// `M x y L x y ...` through every point.
fn path_data(points: &[Point]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let command = if i == 0 { 'M' } else { 'L' };
            format!("{command} {} {}", point.x(), point.y())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercases `key` and replaces anything outside `[a-z0-9_-]` with `-`.
fn data_attribute_name(key: &str) -> String {
    key.chars()
        .map(|c| match c.to_ascii_lowercase() {
            c @ ('a'..='z' | '0'..='9' | '_' | '-') => c,
            _ => '-',
        })
        .collect()
}

fn arrow_marker_id(color: Color) -> String {
    format!("arrow-{}", color.to_id_safe_string())
}

fn arrow_marker_definitions(arrows: &IndexMap<String, Color>) -> svg_element::Definitions {
    let mut defs = svg_element::Definitions::new();
    for (id, color) in arrows {
        let marker = svg_element::Marker::new()
            .set("id", id.as_str())
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                svg_element::Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", color.to_string())
                    .set("fill-opacity", color.alpha()),
            );
        defs = defs.add(marker);
    }
    defs
}

#[cfg(test)]
mod tests {
    use hive_core::geometry::Size;

    use super::*;
    use crate::{config::LayoutConfig, layout::place_nodes, layout::route_edge, model::HiveData};

    fn viewport() -> Bounds {
        Bounds::new_from_center(Point::default(), Size::square(200.0))
    }

    #[test]
    fn test_document_without_begin_fails() {
        let err = SvgCanvas::new().into_string().unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }

    #[test]
    fn test_viewbox_centered_on_origin() {
        let mut canvas = SvgCanvas::new();
        canvas.begin(viewport(), None);
        let svg = canvas.into_string().unwrap();
        assert!(svg.contains(r#"viewBox="-100 -100 200 200""#));
        assert!(!svg.contains("<rect"));
    }

    #[test]
    fn test_background_drawn_first() {
        let mut canvas = SvgCanvas::new();
        canvas.begin(viewport(), Some(Color::new("white").unwrap()));
        canvas.draw_marker(Point::new(1.0, 2.0), 2.5, Color::default(), &NodeId::from("n1"));
        let svg = canvas.into_string().unwrap();

        let rect = svg.find("<rect").unwrap();
        let circle = svg.find("<circle").unwrap();
        assert!(rect < circle);
        assert!(svg.contains(r#"data-node="n1""#));
    }

    #[test]
    fn test_curve_attributes_and_arrow() {
        let data = HiveData::new().with_group("A", ["a"]).with_group("B", ["b"]);
        let params = LayoutConfig::default().resolve(2).unwrap();
        let placement = place_nodes(data.groups(), &params).unwrap();
        let curve = route_edge(
            placement.get("a").unwrap(),
            placement.get("b").unwrap(),
            false,
            &params,
        )
        .unwrap();
        let edge = Edge::new("a", "b", "A").with_attribute("Weight Kg", "3");
        let stroke = StrokeDefinition::new(Color::new("red").unwrap(), 0.5);

        let mut canvas = SvgCanvas::new();
        canvas.begin(viewport(), None);
        canvas.draw_curve(&curve, &stroke, &edge, true);
        canvas.draw_curve(&curve, &stroke, &edge, true);
        let svg = canvas.into_string().unwrap();

        assert!(svg.contains(r#"data-weight-kg="3""#));
        assert!(svg.contains(r#"data-source="a""#));
        assert!(svg.contains("marker-end=\"url(#arrow-"));
        assert_eq!(svg.matches("<marker").count(), 1);
    }

    #[test]
    fn test_edge_attributes_cannot_replace_endpoints() {
        let data = HiveData::new().with_group("A", ["a"]).with_group("B", ["b"]);
        let params = LayoutConfig::default().resolve(2).unwrap();
        let placement = place_nodes(data.groups(), &params).unwrap();
        let curve = route_edge(
            placement.get("a").unwrap(),
            placement.get("b").unwrap(),
            false,
            &params,
        )
        .unwrap();
        let edge = Edge::new("a", "b", "A")
            .with_attribute("group", "spoofed")
            .with_attribute("Source", "x")
            .with_attribute("target", "y")
            .with_attribute("kind", "call");

        let mut canvas = SvgCanvas::new();
        canvas.begin(viewport(), None);
        canvas.draw_curve(&curve, &StrokeDefinition::default(), &edge, false);
        let svg = canvas.into_string().unwrap();

        assert!(svg.contains(r#"data-group="A""#));
        assert!(svg.contains(r#"data-source="a""#));
        assert!(svg.contains(r#"data-target="b""#));
        assert!(!svg.contains("spoofed"));
        assert!(svg.contains(r#"data-kind="call""#));
    }

    #[test]
    fn test_layers_stack_axes_below_nodes() {
        let mut canvas = SvgCanvas::new();
        canvas.begin(viewport(), None);
        canvas.draw_label(Point::new(0.0, -90.0), "A", Color::default());
        canvas.draw_marker(Point::new(0.0, -50.0), 2.0, Color::default(), &NodeId::from("n"));
        canvas.draw_axis(
            Point::new(0.0, -40.0),
            Point::new(0.0, -80.0),
            &StrokeDefinition::default(),
            "A",
        );
        let svg = canvas.into_string().unwrap();

        let axis = svg.find(r#"data-layer="axis""#).unwrap();
        let node = svg.find(r#"data-layer="node""#).unwrap();
        let label = svg.find(r#"data-layer="label""#).unwrap();
        assert!(axis < node && node < label);
    }

    #[test]
    fn test_path_data() {
        let data = path_data(&[Point::new(0.0, 0.0), Point::new(1.5, -2.0)]);
        assert_eq!(data, "M 0 0 L 1.5 -2");
    }
}
