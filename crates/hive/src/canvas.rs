//! The rendering backend seam.
//!
//! [`HivePlot::draw`](crate::HivePlot::draw) computes all geometry itself and
//! only calls primitive drawing operations on a [`Canvas`]. Tests drive the
//! engine with a recording canvas; [`SvgCanvas`](crate::export::svg::SvgCanvas)
//! is the shipping implementation.

use std::path::Path;

use hive_core::{
    color::Color,
    draw::StrokeDefinition,
    geometry::{Bounds, Point},
};

use crate::{export, layout::Curve, model::{Edge, NodeId}};

/// Primitive drawing operations a hive plot is expressed in.
///
/// Calls arrive in a fixed order: one [`begin`](Canvas::begin), then all
/// axes, then edges, then node markers, then labels.
pub trait Canvas {
    /// Starts a figure covering `viewport`, optionally filled with `background`.
    fn begin(&mut self, viewport: Bounds, background: Option<Color>);

    /// Draws the axis line of `group` from `start` to `end`.
    fn draw_axis(&mut self, start: Point, end: Point, stroke: &StrokeDefinition, group: &str);

    /// Draws a filled circular node marker.
    fn draw_marker(&mut self, center: Point, radius: f32, fill: Color, node: &NodeId);

    /// Draws a routed edge. `arrow` requests an arrowhead at the target end.
    fn draw_curve(&mut self, curve: &Curve, stroke: &StrokeDefinition, edge: &Edge, arrow: bool);

    /// Draws a text label anchored at `position`.
    fn draw_label(&mut self, position: Point, text: &str, color: Color);

    /// Finishes the figure and writes it to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error`] if the figure cannot be written.
    fn save(self, path: &Path) -> Result<(), export::Error>
    where
        Self: Sized;
}
