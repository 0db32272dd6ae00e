//! Reading filter configuration files

use std::fs;
use std::path::Path;

use super::error::ConfigError;
use super::model::FiltersConfig;
use super::validate::validate;

/// Accepted input suffixes, compared case-insensitively
const YAML_SUFFIXES: &[&str] = &[".yaml", ".yml"];

/// Load, decode and validate a configuration file
pub fn load(path: &Path) -> Result<FiltersConfig, ConfigError> {
    if !has_yaml_suffix(path) {
        return Err(ConfigError::InvalidExtension(path.to_path_buf()));
    }

    // Raw bytes: content that is not UTF-8 is a decode error, not a read error.
    let contents = fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_slice(&contents)
}

/// Decode and validate configuration text
pub fn parse(contents: &str) -> Result<FiltersConfig, ConfigError> {
    parse_slice(contents.as_bytes())
}

fn parse_slice(contents: &[u8]) -> Result<FiltersConfig, ConfigError> {
    let config: FiltersConfig = serde_yaml::from_slice(contents)?;
    validate(&config)?;
    Ok(config)
}

fn has_yaml_suffix(path: &Path) -> bool {
    let lower = path.to_string_lossy().to_lowercase();
    YAML_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}
