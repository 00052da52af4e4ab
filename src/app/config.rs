//! Configuration file loading.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, ConfigFile, SyncConfig};

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Read and parse the YAML configuration at `path`.
pub fn load_config(path: &Path) -> Result<SyncConfig, AppError> {
    let content = fs::read_to_string(path)
        .map_err(|source| AppError::ConfigRead { path: path.to_path_buf(), source })?;
    parse_config_content(&content)
        .map_err(|source| AppError::ConfigParse { path: path.to_path_buf(), source })
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<SyncConfig, serde_yaml::Error> {
    let file: ConfigFile = serde_yaml::from_str(content)?;
    Ok(file.config)
}
