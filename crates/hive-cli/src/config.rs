//! Locating and loading the `AppConfig` TOML file.
//!
//! `--labels` and `--directed` are applied on top of whatever was loaded.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};

use hive::config::{AppConfig, StyleConfig};

use crate::{
    Args,
    error::{CliError, SyntaxError},
};

/// Loads the first configuration file found, in this order:
///
/// 1. `explicit_path`, when given
/// 2. `hive/config.toml` under the working directory
/// 3. `config.toml` in the platform config directory for `hive`
///
/// Falls back to [`AppConfig::default`] when none exists.
///
/// # Errors
///
/// - [`CliError::MissingConfig`] if `explicit_path` does not exist.
/// - [`CliError::Syntax`] if the chosen file is not a valid configuration.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, CliError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path:? = path; "Loading configuration from --config");
        return load_config_file(path);
    }

    let mut candidates = vec![PathBuf::from("hive/config.toml")];
    match ProjectDirs::from("com", "hive", "hive") {
        Some(dirs) => candidates.push(dirs.config_dir().join("config.toml")),
        None => debug!("No platform configuration directory on this system"),
    }

    for candidate in candidates {
        if candidate.exists() {
            info!(path:? = candidate; "Loading configuration");
            return load_config_file(&candidate);
        }
        debug!(path:? = candidate; "Configuration file not present");
    }

    debug!("Using default configuration");
    Ok(AppConfig::default())
}

/// Applies command-line style flags on top of the loaded configuration.
pub fn apply_overrides(config: AppConfig, args: &Args) -> AppConfig {
    if !args.labels && !args.directed {
        return config;
    }

    let mut style: StyleConfig = config.style().clone();
    if args.labels {
        style = style.with_show_labels(true);
    }
    if args.directed {
        style = style.with_directed_edges(true);
    }
    debug!(labels = args.labels, directed = args.directed; "Applied style overrides");
    AppConfig::new(config.layout().clone(), style)
}

fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, CliError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CliError::MissingConfig(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|err| SyntaxError::from_toml(&err, path.display().to_string(), content).into())
}
