//! File-based configuration loading

use crate::{error::ConfigError, loader::ConfigFormat, Config, PartialConfig, Result, Validate};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Load and validate a complete configuration from a file
///
/// Fields the file leaves out take their defaults.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let config = load_partial(path)?.into_config();
    config.validate()?;
    Ok(config)
}

/// Load only the fields a file sets, for layering
pub fn load_partial<P: AsRef<Path>>(path: P) -> Result<PartialConfig> {
    let path = path.as_ref();

    let format = detect_format(path)?;

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let path_str = path.to_str();

    match format {
        ConfigFormat::Yaml => super::formats::yaml::parse_with_path(&content, path_str),
        ConfigFormat::Toml => super::formats::toml::parse_with_path(&content, path_str),
        ConfigFormat::Json => super::formats::json::parse_with_path(&content, path_str),
    }
}

/// Detect configuration format from file extension
fn detect_format(path: &Path) -> Result<ConfigFormat> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("yml") | Some("yaml") => Ok(ConfigFormat::Yaml),
        Some("toml") => Ok(ConfigFormat::Toml),
        Some("json") => Ok(ConfigFormat::Json),
        _ => Err(ConfigError::UnknownFormat {
            path: path.to_path_buf(),
        }),
    }
}
