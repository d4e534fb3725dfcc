//! Result output settings

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Result file
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Rendering of the route results
    #[serde(default)]
    pub format: OutputFormat,

    /// Append to an existing result file instead of truncating it
    #[serde(default)]
    pub append: bool,
}

/// Output rendering
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Trasa: A --> B (8 km):` blocks
    #[default]
    Text,
    /// JSON array of route results
    Json,
}

impl OutputFormat {
    pub const VARIANTS: &'static [&'static str] = &["text", "json"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            format: OutputFormat::default(),
            append: false,
        }
    }
}

impl crate::validation::Validate for OutputConfig {
    fn validate(&self) -> crate::error::Result<()> {
        crate::validation::validate_path("output.path", &self.path)
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("result.txt")
}
