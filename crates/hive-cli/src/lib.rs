//! Hive CLI library
//!
//! Reads a TOML graph description, lays it out as a hive plot and writes the
//! SVG.

pub mod error_adapter;
pub mod input;

mod args;
mod config;
mod error;

pub use args::Args;
pub use error::{CliError, SyntaxError};

use std::{fs, path::Path};

use log::info;

use hive::HivePlot;

/// Run the hive CLI application
///
/// # Errors
///
/// Returns [`CliError`] for:
/// - File I/O errors
/// - Configuration loading errors
/// - Graph file syntax or color errors
/// - Invalid graphs (unknown or duplicated nodes)
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing graph"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = config::apply_overrides(app_config, args);

    let source = fs::read_to_string(&args.input)?;
    let graph = input::parse_graph(&source, &args.input)?;

    let plot = HivePlot::new(graph.data, graph.node_colors, graph.edge_colors, app_config)?;
    plot.save_svg(Path::new(&args.output))?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
