//! Input file locations

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputConfig {
    /// Edge list, one `<source> <destination> <weight>` per line
    #[serde(default = "default_roads")]
    pub roads: PathBuf,

    /// Query list, one `<origin> <destination>` per line
    #[serde(default = "default_routes")]
    pub routes: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            roads: default_roads(),
            routes: default_routes(),
        }
    }
}

impl crate::validation::Validate for InputConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::validation::validate_path;

        validate_path("input.roads", &self.roads)?;
        validate_path("input.routes", &self.routes)?;
        Ok(())
    }
}

fn default_roads() -> PathBuf {
    PathBuf::from("roads.txt")
}

fn default_routes() -> PathBuf {
    PathBuf::from("routes.txt")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_default_config_is_valid() {
        let config = InputConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.roads, PathBuf::from("roads.txt"));
    }

    #[test]
    fn test_empty_roads_invalid() {
        let config = InputConfig {
            roads: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = InputConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let deserialized: InputConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config, deserialized);
    }
}
