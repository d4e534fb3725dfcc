//! Sparse configuration layers
//!
//! A `PartialConfig` carries only the fields a source actually set, so a
//! layer can put a field back to its default value over an earlier layer.

use super::{Config, EngineConfig, InputConfig, OutputConfig, OutputFormat};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PartialConfig {
    #[serde(default)]
    pub input: PartialInput,
    #[serde(default)]
    pub output: PartialOutput,
    #[serde(default)]
    pub engine: PartialEngine,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PartialInput {
    pub roads: Option<PathBuf>,
    pub routes: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PartialOutput {
    pub path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub append: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PartialEngine {
    pub cache_origins: Option<bool>,
    pub parallel: Option<bool>,
    pub threads: Option<usize>,
}

impl PartialConfig {
    /// Layers `overlay` on top of `self`; every field `overlay` sets wins.
    pub fn merge(self, overlay: PartialConfig) -> PartialConfig {
        PartialConfig {
            input: PartialInput {
                roads: overlay.input.roads.or(self.input.roads),
                routes: overlay.input.routes.or(self.input.routes),
            },
            output: PartialOutput {
                path: overlay.output.path.or(self.output.path),
                format: overlay.output.format.or(self.output.format),
                append: overlay.output.append.or(self.output.append),
            },
            engine: PartialEngine {
                cache_origins: overlay.engine.cache_origins.or(self.engine.cache_origins),
                parallel: overlay.engine.parallel.or(self.engine.parallel),
                threads: overlay.engine.threads.or(self.engine.threads),
            },
        }
    }

    /// Fills every unset field from the built-in defaults.
    pub fn into_config(self) -> Config {
        let input = InputConfig::default();
        let output = OutputConfig::default();
        let engine = EngineConfig::default();
        Config {
            input: InputConfig {
                roads: self.input.roads.unwrap_or(input.roads),
                routes: self.input.routes.unwrap_or(input.routes),
            },
            output: OutputConfig {
                path: self.output.path.unwrap_or(output.path),
                format: self.output.format.unwrap_or(output.format),
                append: self.output.append.unwrap_or(output.append),
            },
            engine: EngineConfig {
                cache_origins: self.engine.cache_origins.unwrap_or(engine.cache_origins),
                parallel: self.engine.parallel.unwrap_or(engine.parallel),
                threads: self.engine.threads.unwrap_or(engine.threads),
            },
        }
    }
}

/// Every field set, for programmatic overlays built from a full config.
impl From<Config> for PartialConfig {
    fn from(config: Config) -> Self {
        PartialConfig {
            input: PartialInput {
                roads: Some(config.input.roads),
                routes: Some(config.input.routes),
            },
            output: PartialOutput {
                path: Some(config.output.path),
                format: Some(config.output.format),
                append: Some(config.output.append),
            },
            engine: PartialEngine {
                cache_origins: Some(config.engine.cache_origins),
                parallel: Some(config.engine.parallel),
                threads: Some(config.engine.threads),
            },
        }
    }
}
