//! Drawing primitives shared by the layout engine and its backends.
//!
//! - [`StrokeDefinition`] describes how axes and edges are stroked
//! - [`CubicBezier`] is the parametric curve every edge is routed along
//! - [`LayeredOutput`] collects SVG nodes per [`RenderLayer`] for z-ordering

mod curve;
mod layer;
mod stroke;

pub use curve::CubicBezier;
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeStyle};
