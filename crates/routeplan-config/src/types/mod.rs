//! Configuration type definitions, one module per section.

pub mod engine;
pub mod input;
pub mod output;
pub mod partial;

pub use engine::EngineConfig;
pub use input::InputConfig;
pub use output::{OutputConfig, OutputFormat};
pub use partial::{PartialConfig, PartialEngine, PartialInput, PartialOutput};

use serde::{Deserialize, Serialize};

/// Main configuration struct aggregating all settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Where edges and queries are read from
    #[serde(default)]
    pub input: InputConfig,

    /// Where and how results are written
    #[serde(default)]
    pub output: OutputConfig,

    /// Shortest-path engine behaviour
    #[serde(default)]
    pub engine: EngineConfig,
}

impl crate::validation::Validate for Config {
    fn validate(&self) -> crate::error::Result<()> {
        self.input.validate()?;
        self.output.validate()?;
        self.engine.validate()?;
        Ok(())
    }
}
