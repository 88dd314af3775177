//! Output backends for hive plots.
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgCanvas`]
//!
//! # Error Handling
//!
//! Backends return [`Error`], covering rendering failures and I/O errors.
//! [`Error`] converts into [`HiveError::Export`] at the crate boundary.
//!
//! [`HiveError::Export`]: crate::HiveError::Export

/// SVG export backend.
pub mod svg;

use thiserror::Error;

/// Errors that can occur while exporting a plot.
#[derive(Debug, Error)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    #[error("Render error: {0}")]
    Render(String),

    /// An I/O error encountered while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
