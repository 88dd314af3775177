//! Hive - layout and rendering of hive plots.
//!
//! A hive plot places the nodes of a network on a few radial axes, one per
//! node group, ordered along each axis by a caller-supplied rank. Edges are
//! drawn as curves between axis positions.
//!
//! The pipeline is:
//!
//! ```text
//! HiveData (groups → ranked nodes, edges)
//!     ↓ place_nodes
//! Placement (axis angle + radius per node)
//!     ↓ route_edge
//! Curves
//!     ↓ Canvas
//! Figure (SVG by default)
//! ```
//!
//! # Example
//!
//! ```
//! use hive::{HivePlot, color::ColorMap, config::AppConfig};
//! use hive::model::{Edge, HiveData};
//!
//! let data = HiveData::new()
//!     .with_group("A", ["n1", "n2"])
//!     .with_group("B", ["n3"])
//!     .with_edge(Edge::new("n1", "n3", "A"));
//!
//! let plot = HivePlot::new(data, ColorMap::new(), None, AppConfig::default()).unwrap();
//! let svg = plot.render_svg().unwrap();
//! assert!(svg.contains("</svg>"));
//! ```

pub mod canvas;
pub mod config;
pub mod export;
#[cfg(feature = "petgraph")]
pub mod graph;
pub mod layout;
pub mod model;
pub mod rank;

mod error;
mod plot;

pub use hive_core::{color, draw, geometry};

pub use canvas::Canvas;
pub use error::{HiveError, InputError};
pub use plot::{DrawSummary, HivePlot};
