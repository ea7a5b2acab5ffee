use std::env;
use std::fs;
use std::path::Path;

use super::error::ConfigError;
use super::paths::{get_global_config_dir, resolve_config_path_in};
use crate::types::{CopyMode, PathConfig, SharedConfig};

/// Environment variables that override config file values
pub const ENV_OVERRIDES: [&str; 3] = [
    super::paths::SOURCE_DIR_ENV,
    "SHAREDCONF_INTERACTIVE",
    "SHAREDCONF_MODE",
];

pub fn config_exists(config_path: &str) -> bool {
    Path::new(config_path).exists()
}

/// Read and parse a YAML config file. An empty file yields the defaults.
pub fn read_config(config_path: &str) -> Result<SharedConfig, ConfigError> {
    if !config_exists(config_path) {
        return Err(ConfigError::NotFound(config_path.to_string()));
    }

    let content = fs::read_to_string(config_path)?;
    if content.trim().is_empty() {
        return Ok(SharedConfig::default());
    }
    Ok(serde_yaml::from_str(&content)?)
}

/// Read a config file, then layer `SHAREDCONF_*` environment overrides on top.
pub fn read_config_with_env(config_path: &str) -> Result<SharedConfig, ConfigError> {
    let config = read_config(config_path)?;
    apply_env_overrides(config, |key| env::var(key).ok())
}

/// Resolve and load the config for a target directory.
///
/// A missing config file is not an error; defaults plus environment
/// overrides are returned instead.
pub fn load_config(start_dir: &Path) -> Result<(PathConfig, SharedConfig), ConfigError> {
    load_config_with(start_dir, &get_global_config_dir(), |key| env::var(key).ok())
}

/// Load the config with an explicit global config directory and variable lookup.
pub fn load_config_with<F>(
    start_dir: &Path,
    global_config_dir: &Path,
    lookup: F,
) -> Result<(PathConfig, SharedConfig), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let paths = resolve_config_path_in(start_dir, global_config_dir);
    let config = if config_exists(&paths.config_path) {
        read_config(&paths.config_path)?
    } else {
        SharedConfig::default()
    };
    Ok((paths, apply_env_overrides(config, lookup)?))
}

pub fn apply_env_overrides<F>(mut config: SharedConfig, lookup: F) -> Result<SharedConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(source_dir) = lookup(super::paths::SOURCE_DIR_ENV) {
        if !source_dir.trim().is_empty() {
            config.source_dir = Some(source_dir);
        }
    }

    if let Some(value) = lookup("SHAREDCONF_INTERACTIVE") {
        config.interactive = parse_bool(&value).ok_or_else(|| ConfigError::InvalidValue {
            key: "SHAREDCONF_INTERACTIVE".to_string(),
            value: value.clone(),
        })?;
    }

    if let Some(value) = lookup("SHAREDCONF_MODE") {
        config.mode = value
            .parse::<CopyMode>()
            .map_err(|_| ConfigError::InvalidValue {
                key: "SHAREDCONF_MODE".to_string(),
                value: value.clone(),
            })?;
    }

    Ok(config)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
