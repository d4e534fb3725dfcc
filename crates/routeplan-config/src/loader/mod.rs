//! Configuration loading from various sources

pub mod env;
pub mod file;
pub mod formats;

use crate::{Config, PartialConfig, Result, Validate};
use std::path::{Path, PathBuf};

/// Format for configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Configuration source for layered loading
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Load from a file
    File(PathBuf),
    /// Load from environment variables
    Environment,
    /// Explicit overlay (for programmatic use and CLI flags)
    Explicit(PartialConfig),
}

/// Default config file names, searched in order in the working directory
pub const DEFAULT_PATHS: &[&str] = &[
    ".routeplan.toml",
    ".routeplan.yml",
    ".routeplan.yaml",
    ".routeplan.json",
];

/// Builder for loading and merging configurations
///
/// Precedence: defaults < file < environment < explicit overrides
///
/// # Example
///
/// ```no_run
/// use routeplan_config::loader::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .with_file(".routeplan.toml")
///     .with_env()
///     .build()?;
/// # Ok::<(), routeplan_config::ConfigError>(())
/// ```
pub struct ConfigBuilder {
    sources: Vec<ConfigSource>,
}

impl ConfigBuilder {
    /// Create a new config builder starting with defaults
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a file source
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sources
            .push(ConfigSource::File(path.as_ref().to_path_buf()));
        self
    }

    /// Add the first default config file found in `dir`, if any
    pub fn with_default_file_in(self, dir: &Path) -> Self {
        match DEFAULT_PATHS
            .iter()
            .map(|name| dir.join(name))
            .find(|p| p.exists())
        {
            Some(path) => self.with_file(path),
            None => self,
        }
    }

    /// Add environment variable overlay
    pub fn with_env(mut self) -> Self {
        self.sources.push(ConfigSource::Environment);
        self
    }

    /// Add explicit config overlay (for programmatic use)
    ///
    /// Only the fields the overlay sets take part; pass a full `Config`
    /// to replace everything.
    pub fn with_config(mut self, config: impl Into<PartialConfig>) -> Self {
        self.sources.push(ConfigSource::Explicit(config.into()));
        self
    }

    /// Build and validate the final configuration
    ///
    /// Merges all sources in order, with later sources taking precedence.
    /// A field is taken from the last source that sets it, even when the
    /// value equals its default.
    pub fn build(self) -> Result<Config> {
        let mut layered = PartialConfig::default();

        for source in self.sources {
            match source {
                ConfigSource::File(path) => {
                    layered = layered.merge(file::load_partial(&path)?);
                }
                ConfigSource::Environment => {
                    if let Some(env_config) = env::from_env()? {
                        layered = layered.merge(env_config);
                    }
                }
                ConfigSource::Explicit(explicit_config) => {
                    layered = layered.merge(explicit_config);
                }
            }
        }

        let config = layered.into_config();
        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Load configuration from the default locations plus environment overlay
    ///
    /// If no file is found, defaults are used.
    pub fn load() -> Result<Self> {
        ConfigBuilder::new()
            .with_default_file_in(Path::new("."))
            .with_env()
            .build()
    }

    /// Load configuration from a specific file plus environment overlay
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        ConfigBuilder::new().with_file(path).with_env().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutputFormat;
    use std::fs;

    #[test]
    fn test_builder_default() {
        let config = ConfigBuilder::new().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_explicit_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.yml");
        fs::write(&path, "output:\n  format: json\n  path: from_file.json\n").unwrap();

        let mut cli = PartialConfig::default();
        cli.output.path = Some(PathBuf::from("from_cli.json"));

        let config = ConfigBuilder::new()
            .with_file(&path)
            .with_config(cli)
            .build()
            .unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.path, PathBuf::from("from_cli.json"));
    }

    #[test]
    fn test_default_file_discovery() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".routeplan.json"),
            r#"{"engine": {"parallel": true}}"#,
        )
        .unwrap();
        let config = ConfigBuilder::new()
            .with_default_file_in(dir.path())
            .build()
            .unwrap();
        assert!(config.engine.parallel);

        let empty = tempfile::tempdir().unwrap();
        let config = ConfigBuilder::new()
            .with_default_file_in(empty.path())
            .build()
            .unwrap();
        assert!(!config.engine.parallel);
    }

    #[test]
    fn test_cli_default_value_beats_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".routeplan.toml");
        fs::write(&path, "[output]\nformat = \"json\"\nappend = true\n").unwrap();

        let mut cli = PartialConfig::default();
        cli.output.format = Some(OutputFormat::Text);

        let config = ConfigBuilder::new()
            .with_file(&path)
            .with_config(cli)
            .build()
            .unwrap();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.append);
    }

    #[test]
    fn test_env_default_value_beats_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        fs::write(&path, "[engine]\nparallel = true\nthreads = 4\n").unwrap();

        let env_layer = env::from_vars(vec![(
            "ROUTEPLAN_ENGINE_PARALLEL".to_string(),
            "false".to_string(),
        )])
        .unwrap()
        .unwrap();

        let config = ConfigBuilder::new()
            .with_file(&path)
            .with_config(env_layer)
            .build()
            .unwrap();
        assert!(!config.engine.parallel);
        assert_eq!(config.engine.threads, 4);
    }

    #[test]
    fn test_second_file_keeps_first_file_fields() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.yml");
        let second = dir.path().join("b.json");
        fs::write(&first, "input:\n  roads: graph.txt\n").unwrap();
        fs::write(&second, r#"{"input": {"routes": "trips.txt"}}"#).unwrap();

        let config = ConfigBuilder::new()
            .with_file(&first)
            .with_file(&second)
            .build()
            .unwrap();
        assert_eq!(config.input.roads, PathBuf::from("graph.txt"));
        assert_eq!(config.input.routes, PathBuf::from("trips.txt"));
    }

    #[test]
    fn test_invalid_combination_caught_after_layering() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        fs::write(&path, "[engine]\nparallel = true\n").unwrap();

        let mut cli = PartialConfig::default();
        cli.engine.cache_origins = Some(false);

        let err = ConfigBuilder::new()
            .with_file(&path)
            .with_config(cli)
            .build()
            .unwrap_err();
        assert!(matches!(err, crate::ConfigError::ValidationError { .. }));
    }
}
