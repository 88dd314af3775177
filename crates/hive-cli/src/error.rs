//! Errors surfaced by the CLI.

use std::{io, ops::Range, path::PathBuf};

use thiserror::Error;

use hive::{HiveError, color::ParseColorError};

/// A TOML file that failed to deserialize, kept with its source so the
/// error can be shown in context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub path: String,
    pub src: String,
    pub message: String,
    pub span: Option<Range<usize>>,
}

impl SyntaxError {
    pub fn from_toml(err: &toml::de::Error, path: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            src: src.into(),
            message: err.message().to_string(),
            span: err.span(),
        }
    }
}

/// Every way a CLI run can fail.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Hive(#[from] HiveError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Missing configuration file: {0}")]
    MissingConfig(PathBuf),

    #[error("Invalid TOML in `{path}`: {msg}", path = .0.path, msg = .0)]
    Syntax(#[from] SyntaxError),

    #[error("Invalid score for node `{node}`: {score}")]
    InvalidScore { node: String, score: f64 },

    #[error("Invalid color for {context}: {source}")]
    Color {
        context: String,
        source: ParseColorError,
    },
}
