//! Integration tests for the HivePlot API
//!
//! A recording canvas captures every draw call so the layout can be checked
//! without parsing SVG.

use std::path::Path;

use float_cmp::assert_approx_eq;

use hive::{
    Canvas, HiveError, HivePlot, InputError,
    color::{Color, ColorMap},
    config::{AppConfig, LayoutConfig, StyleConfig},
    draw::StrokeDefinition,
    export,
    geometry::{Bounds, Point},
    layout::{Curve, CurveKind},
    model::{Edge, HiveData, NodeId},
};

#[derive(Debug, Default)]
struct RecordingCanvas {
    viewport: Option<Bounds>,
    axes: Vec<(Point, Point, String)>,
    markers: Vec<(Point, Color, String)>,
    curves: Vec<(Curve, Color, String, bool)>,
    labels: Vec<String>,
}

impl Canvas for RecordingCanvas {
    fn begin(&mut self, viewport: Bounds, _background: Option<Color>) {
        self.viewport = Some(viewport);
    }

    fn draw_axis(&mut self, start: Point, end: Point, _stroke: &StrokeDefinition, group: &str) {
        self.axes.push((start, end, group.to_string()));
    }

    fn draw_marker(&mut self, center: Point, _radius: f32, fill: Color, node: &NodeId) {
        self.markers.push((center, fill, node.to_string()));
    }

    fn draw_curve(&mut self, curve: &Curve, stroke: &StrokeDefinition, edge: &Edge, arrow: bool) {
        self.curves.push((*curve, stroke.color(), edge.group().to_string(), arrow));
    }

    fn draw_label(&mut self, _position: Point, text: &str, _color: Color) {
        self.labels.push(text.to_string());
    }

    fn save(self, _path: &Path) -> Result<(), export::Error> {
        Ok(())
    }
}

fn scenario() -> HiveData {
    HiveData::new()
        .with_group("A", ["n1", "n2"])
        .with_group("B", ["n3"])
        .with_edge(Edge::new("n1", "n3", "A"))
        .with_edge(Edge::new("n1", "n2", "A"))
}

fn red() -> Color {
    Color::new("red").unwrap()
}

#[test]
fn test_two_group_scenario() {
    let plot = HivePlot::new(scenario(), ColorMap::new(), None, AppConfig::default())
        .expect("Scenario input should be valid");

    let placement = plot.placement();
    assert_eq!(placement.axes().len(), 2);
    assert_eq!(placement.get("n1").unwrap().rank(), 0);
    assert_eq!(placement.get("n2").unwrap().rank(), 1);
    assert_eq!(placement.get("n3").unwrap().rank(), 0);
    assert!(placement.axis("A").unwrap().is_duplicated());
    assert!(!placement.axis("B").unwrap().is_duplicated());

    let mut canvas = RecordingCanvas::default();
    let summary = plot.draw(&mut canvas);

    assert_eq!(summary.curves, 2);
    let kinds: Vec<_> = canvas.curves.iter().map(|(curve, ..)| curve.kind()).collect();
    assert_eq!(kinds, [CurveKind::CrossAxis, CurveKind::SameAxis]);

    // n1 and n2 are drawn on both copies of axis A, n3 once
    assert_eq!(summary.markers, 5);
    // A's two copies; B has a single node and gets no line
    assert_eq!(summary.axes, 2);
    assert!(canvas.axes.iter().all(|(.., group)| group == "A"));
}

#[test]
fn test_unmapped_edge_group_falls_back_to_default() {
    let data = scenario().with_edge(Edge::new("n2", "n3", "C"));
    let edge_colors = ColorMap::new().with("A", red());

    let plot = HivePlot::new(data, ColorMap::new(), Some(edge_colors), AppConfig::default())
        .expect("Unmapped colors are not an input error");
    let mut canvas = RecordingCanvas::default();
    let summary = plot.draw(&mut canvas);

    assert_eq!(summary.curves, 3);
    let (_, color, group, _) = &canvas.curves[2];
    assert_eq!(group, "C");
    assert_eq!(*color, Color::default().with_alpha(0.3));
    assert_eq!(canvas.curves[0].1, red().with_alpha(0.3));
    assert!(summary.color_fallbacks.contains(&"C".to_string()));
}

#[test]
fn test_three_single_node_groups_without_edges() {
    let data = HiveData::new()
        .with_group("A", ["a"])
        .with_group("B", ["b"])
        .with_group("C", ["c"]);
    let plot = HivePlot::new(data, ColorMap::new(), None, AppConfig::default()).unwrap();

    let mut canvas = RecordingCanvas::default();
    let summary = plot.draw(&mut canvas);

    assert_eq!(canvas.markers.len(), 3);
    assert!(canvas.curves.is_empty());
    assert_eq!(summary.skipped_edges, 0);

    let svg = plot.render_svg().expect("Rendering should succeed");
    assert_eq!(svg.matches("<circle").count(), 3);
    assert!(!svg.contains("<path"));
}

#[test]
fn test_axis_angles_consistent_across_runs() {
    let angles = |plot: &HivePlot| -> Vec<f32> {
        plot.placement().axes().iter().map(|axis| axis.angle()).collect()
    };
    let first = HivePlot::new(scenario(), ColorMap::new(), None, AppConfig::default()).unwrap();
    let second = HivePlot::new(scenario(), ColorMap::new(), None, AppConfig::default()).unwrap();
    assert_eq!(angles(&first), angles(&second));
}

#[test]
fn test_self_loop_is_skipped() {
    let data = scenario().with_edge(Edge::new("n3", "n3", "B"));
    let plot = HivePlot::new(data, ColorMap::new(), None, AppConfig::default()).unwrap();

    let summary = plot.draw(&mut RecordingCanvas::default());
    assert_eq!(summary.curves, 2);
    assert_eq!(summary.skipped_edges, 1);
}

#[test]
fn test_node_colors_and_fallback() {
    let node_colors = ColorMap::new().with("A", red());
    let plot = HivePlot::new(scenario(), node_colors, None, AppConfig::default()).unwrap();

    let mut canvas = RecordingCanvas::default();
    let summary = plot.draw(&mut canvas);

    for (_, color, node) in &canvas.markers {
        match node.as_str() {
            "n3" => assert_eq!(*color, Color::default()),
            _ => assert_eq!(*color, red()),
        }
    }
    assert_eq!(summary.color_fallbacks, ["B"]);
}

#[test]
fn test_without_duplication_same_axis_bows_sideways() {
    let config = AppConfig::new(
        LayoutConfig::default().with_duplicate_axes(false),
        StyleConfig::default(),
    );
    let plot = HivePlot::new(scenario(), ColorMap::new(), None, config).unwrap();
    assert!(!plot.placement().axis("A").unwrap().is_duplicated());

    let mut canvas = RecordingCanvas::default();
    plot.draw(&mut canvas);
    assert_eq!(canvas.curves[1].0.kind(), CurveKind::SameAxisSide);
    assert_eq!(canvas.markers.len(), 3);
}

#[test]
fn test_directed_edges_and_labels() {
    let style = StyleConfig::default()
        .with_directed_edges(true)
        .with_show_labels(true);
    let plot = HivePlot::new(
        scenario(),
        ColorMap::new(),
        None,
        AppConfig::new(LayoutConfig::default(), style),
    )
    .unwrap();

    let mut canvas = RecordingCanvas::default();
    let summary = plot.draw(&mut canvas);
    assert!(canvas.curves.iter().all(|(.., arrow)| *arrow));
    assert_eq!(canvas.labels, ["A", "B"]);
    assert_eq!(summary.labels, 2);

    let svg = plot.render_svg().unwrap();
    assert!(svg.contains("<marker"));
    assert_eq!(svg.matches("<text").count(), 2);
}

#[test]
fn test_viewport_is_square_around_origin() {
    let plot = HivePlot::new(scenario(), ColorMap::new(), None, AppConfig::default()).unwrap();
    let mut canvas = RecordingCanvas::default();
    plot.draw(&mut canvas);

    let viewport = canvas.viewport.expect("begin must be called");
    assert_approx_eq!(f32, viewport.width(), viewport.height());
    assert_approx_eq!(f32, viewport.center().x(), 0.0);
    assert_approx_eq!(f32, viewport.center().y(), 0.0);
    for (center, ..) in &canvas.markers {
        assert!(viewport.contains(*center));
    }
}

#[test]
fn test_duplicate_node_across_groups_is_input_error() {
    let data = HiveData::new()
        .with_group("A", ["n1"])
        .with_group("B", ["n1"]);
    let result = HivePlot::new(data, ColorMap::new(), None, AppConfig::default());
    assert!(matches!(
        result,
        Err(HiveError::Input(InputError::DuplicateNode { .. }))
    ));
}

#[test]
fn test_negative_padding_is_config_error() {
    let config: AppConfig = toml::from_str("[style]\npadding = -500.0").unwrap();
    let result = HivePlot::new(scenario(), ColorMap::new(), None, config);
    assert!(matches!(result, Err(HiveError::Config(ref msg)) if msg.contains("padding")));
}

#[test]
fn test_save_svg_writes_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("plot.svg");

    let plot = HivePlot::new(scenario(), ColorMap::new(), None, AppConfig::default()).unwrap();
    plot.save_svg(&path).expect("Saving should succeed");

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("<svg"));
}

#[test]
fn test_plot_can_be_drawn_repeatedly() {
    let plot = HivePlot::new(scenario(), ColorMap::new(), None, AppConfig::default()).unwrap();
    let first = plot.render_svg().unwrap();
    let second = plot.render_svg().unwrap();
    assert_eq!(first, second);
}
