//! Error types for hive plot operations.
//!
//! [`HiveError`] is the error returned by every fallible library operation.
//! Structurally invalid input is reported through [`InputError`], which names
//! the offending node or group so callers can fix their data.

use std::io;

use thiserror::Error;

use crate::{export, model::NodeId};

/// Structural problems with caller-supplied groups and edges.
///
/// None of these are recovered from: a plot is only built from input that
/// passes validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no groups to place; at least one group is required")]
    NoGroups,

    #[error("group labels must not be empty")]
    EmptyGroupLabel,

    #[error("node `{node}` is listed in group `{first}` and again in group `{second}`")]
    DuplicateNode {
        node: NodeId,
        first: String,
        second: String,
    },

    #[error("edge {from} -> {to} (group `{group}`) references unknown node `{missing}`")]
    UnknownNode {
        from: NodeId,
        to: NodeId,
        group: String,
        missing: NodeId,
    },
}

/// The main error type for hive plot operations.
#[derive(Debug, Error)]
pub enum HiveError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] export::Error),
}

impl HiveError {
    /// Create a new `Config` error from any displayable message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
