//! The hive plot itself: validated input plus the draw routine.

use std::path::Path;

use indexmap::IndexSet;
use log::{debug, info, trace, warn};

use hive_core::{
    color::{Color, ColorMap},
    draw::StrokeDefinition,
    geometry::{Bounds, Insets, Point, Polar, Size},
};

use crate::{
    HiveError,
    canvas::Canvas,
    config::{AppConfig, LayoutParams},
    error::InputError,
    export::svg::SvgCanvas,
    layout::{Placement, place_nodes, route_edge},
    model::HiveData,
};

/// What a call to [`HivePlot::draw`] produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawSummary {
    /// Axis lines drawn, counting both copies of a duplicated axis.
    pub axes: usize,
    /// Node markers drawn, counting every axis copy.
    pub markers: usize,
    /// Edge curves drawn.
    pub curves: usize,
    /// Edges skipped because they had zero length.
    pub skipped_edges: usize,
    /// Group labels drawn.
    pub labels: usize,
    /// Groups that were drawn in the default color for lack of a mapping.
    pub color_fallbacks: Vec<String>,
}

/// Style settings resolved once at construction.
#[derive(Debug, Clone)]
struct ResolvedStyle {
    background: Option<Color>,
    default_color: Color,
    axis_stroke: StrokeDefinition,
    node_radius: f32,
}

/// A validated hive plot, ready to be drawn any number of times.
///
/// # Examples
///
/// ```
/// use hive::{HivePlot, color::{Color, ColorMap}, config::AppConfig};
/// use hive::model::{Edge, HiveData};
///
/// let data = HiveData::new()
///     .with_group("A", ["n1", "n2"])
///     .with_group("B", ["n3"])
///     .with_edge(Edge::new("n1", "n3", "A"))
///     .with_edge(Edge::new("n1", "n2", "A"));
/// let colors = ColorMap::new().with("A", Color::new("steelblue").unwrap());
///
/// let plot = HivePlot::new(data, colors, None, AppConfig::default()).unwrap();
/// assert!(plot.placement().axis("A").unwrap().is_duplicated());
///
/// let svg = plot.render_svg().unwrap();
/// assert!(svg.contains("<path"));
/// ```
#[derive(Debug, Clone)]
pub struct HivePlot {
    data: HiveData,
    node_colors: ColorMap,
    edge_colors: Option<ColorMap>,
    config: AppConfig,
    params: LayoutParams,
    placement: Placement,
    style: ResolvedStyle,
}

impl HivePlot {
    /// Validates the input and lays out every node.
    ///
    /// Without an edge color map every edge uses the default color.
    ///
    /// # Errors
    ///
    /// - [`HiveError::Input`] for no groups, an empty group label, a node
    ///   listed twice or an edge naming an unknown node.
    /// - [`HiveError::Config`] for invalid layout values or color strings.
    pub fn new(
        data: HiveData,
        node_colors: ColorMap,
        edge_colors: Option<ColorMap>,
        config: AppConfig,
    ) -> Result<Self, HiveError> {
        info!(groups = data.groups().len(), nodes = data.node_count(), edges = data.edges().len(); "Building hive plot");

        let params = config.layout().resolve(data.groups().len())?;
        let mut placement = place_nodes(data.groups(), &params)?;

        for edge in data.edges() {
            for endpoint in [edge.source(), edge.target()] {
                if !placement.contains(endpoint.as_str()) {
                    return Err(InputError::UnknownNode {
                        from: edge.source().clone(),
                        to: edge.target().clone(),
                        group: edge.group().to_string(),
                        missing: endpoint.clone(),
                    }
                    .into());
                }
            }
        }

        if params.duplicate_axes {
            for group in placement.groups_with_internal_edges(data.edges()) {
                placement.duplicate_axis(&group, params.minor_angle);
            }
        }

        let style = config.style();
        style.validate().map_err(HiveError::Config)?;
        let style = ResolvedStyle {
            background: style.background_color().map_err(HiveError::Config)?,
            default_color: style.default_color().map_err(HiveError::Config)?,
            axis_stroke: style.axis_stroke().map_err(HiveError::Config)?,
            node_radius: style.node_radius(params.scale),
        };

        debug!(
            major_angle = params.major_angle,
            minor_angle = params.minor_angle,
            longest_axis = placement.longest_axis();
            "Layout resolved"
        );

        Ok(Self {
            data,
            node_colors,
            edge_colors,
            config,
            params,
            placement,
            style,
        })
    }

    pub fn data(&self) -> &HiveData {
        &self.data
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Layout settings resolved for this plot's group count.
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Where every node was placed.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Square viewport centered on the origin that fits every axis, the
    /// padding and, if enabled, the group labels.
    pub fn viewport(&self) -> Bounds {
        let radius = self.params.plot_radius(self.placement.longest_axis());
        let mut padding = self.config.style().padding();
        if self.config.style().show_labels() {
            padding += 2.0 * self.label_offset();
        }
        Bounds::new_from_center(Point::default(), Size::square(2.0 * radius))
            .add_padding(Insets::uniform(padding))
    }

    /// Draws the plot onto `canvas`: axes, then edges, then node markers,
    /// then labels.
    pub fn draw<C>(&self, canvas: &mut C) -> DrawSummary
    where
        C: Canvas + ?Sized,
    {
        let mut summary = DrawSummary::default();
        let mut fallbacks = IndexSet::new();

        canvas.begin(self.viewport(), self.style.background);
        self.draw_axes(canvas, &mut summary);
        self.draw_edges(canvas, &mut summary, &mut fallbacks);
        self.draw_nodes(canvas, &mut summary, &mut fallbacks);
        if self.config.style().show_labels() {
            self.draw_labels(canvas, &mut summary);
        }

        summary.color_fallbacks = fallbacks.into_iter().collect();
        info!(
            axes = summary.axes,
            markers = summary.markers,
            curves = summary.curves,
            skipped = summary.skipped_edges;
            "Hive plot drawn"
        );
        summary
    }

    /// Draws the plot into an in-memory SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`HiveError::Export`] if the document cannot be assembled.
    pub fn render_svg(&self) -> Result<String, HiveError> {
        let mut canvas = SvgCanvas::new();
        self.draw(&mut canvas);
        Ok(canvas.into_string()?)
    }

    /// Draws the plot as SVG and writes it to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`HiveError::Export`] if the file cannot be written.
    pub fn save_svg(&self, path: &Path) -> Result<(), HiveError> {
        let mut canvas = SvgCanvas::new();
        self.draw(&mut canvas);
        canvas.save(path)?;
        Ok(())
    }

    fn label_offset(&self) -> f32 {
        self.params.scale
    }

    fn draw_axes<C: Canvas + ?Sized>(&self, canvas: &mut C, summary: &mut DrawSummary) {
        for axis in self.placement.axes() {
            if axis.len() < 2 {
                trace!(group = axis.group(); "Skipping axis line with fewer than two nodes");
                continue;
            }
            let inner = self.params.rank_radius(0);
            let outer = self.params.rank_radius(axis.len() - 1);
            for &angle in axis.copy_angles() {
                canvas.draw_axis(
                    Polar::new(angle, inner).to_point(),
                    Polar::new(angle, outer).to_point(),
                    &self.style.axis_stroke,
                    axis.group(),
                );
                summary.axes += 1;
            }
        }
    }

    fn draw_edges<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        summary: &mut DrawSummary,
        fallbacks: &mut IndexSet<String>,
    ) {
        let style = self.config.style();
        for edge in self.data.edges() {
            let (Some(source), Some(target)) = (
                self.placement.get(edge.source().as_str()),
                self.placement.get(edge.target().as_str()),
            ) else {
                continue;
            };

            let same_group = source.group() == target.group();
            let Some(curve) = route_edge(source, target, same_group, &self.params) else {
                debug!(source = edge.source().as_str(), target = edge.target().as_str(); "Skipping zero-length edge");
                summary.skipped_edges += 1;
                continue;
            };

            let color = match &self.edge_colors {
                Some(colors) => self.group_color(colors, edge.group(), fallbacks),
                None => self.style.default_color,
            };
            canvas.draw_curve(&curve, &style.edge_stroke(color), edge, style.directed_edges());
            summary.curves += 1;
        }
    }

    fn draw_nodes<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        summary: &mut DrawSummary,
        fallbacks: &mut IndexSet<String>,
    ) {
        for placement in self.placement.iter() {
            let color = self.group_color(&self.node_colors, placement.group(), fallbacks);
            for copy in placement.copies() {
                canvas.draw_marker(copy.to_point(), self.style.node_radius, color, placement.node());
                summary.markers += 1;
            }
        }
    }

    fn draw_labels<C: Canvas + ?Sized>(&self, canvas: &mut C, summary: &mut DrawSummary) {
        let radius = self.params.plot_radius(self.placement.longest_axis()) + self.label_offset();
        for axis in self.placement.axes() {
            let color = self
                .node_colors
                .resolve(axis.group(), self.style.default_color);
            canvas.draw_label(Polar::new(axis.angle(), radius).to_point(), axis.group(), color);
            summary.labels += 1;
        }
    }

    /// Looks up `group` in `colors`, warning once per group on a miss.
    fn group_color(&self, colors: &ColorMap, group: &str, fallbacks: &mut IndexSet<String>) -> Color {
        colors.get(group).unwrap_or_else(|| {
            if fallbacks.insert(group.to_string()) {
                warn!(group; "No color mapped for group; using the default color");
            }
            self.style.default_color
        })
    }
}
