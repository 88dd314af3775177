//! Command-line argument definitions for the hive CLI.
//!
//! Flags given here override the matching style settings from the
//! configuration file.

use clap::Parser;

/// Render a hive plot from a TOML graph description
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input graph file (TOML)
    #[arg(help = "Path to the input graph file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Draw group labels at the end of each axis
    #[arg(long)]
    pub labels: bool,

    /// Draw an arrowhead at the target end of every edge
    #[arg(long)]
    pub directed: bool,
}
