//! Shortest-path engine settings

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Reuse one shortest-path run for every query sharing an origin
    #[serde(default = "default_cache_origins")]
    pub cache_origins: bool,

    /// Compute the per-origin runs on a rayon pool before resolving
    #[serde(default)]
    pub parallel: bool,

    /// Worker threads for `parallel`; 0 lets rayon decide
    #[serde(default)]
    pub threads: usize,
}

pub const MAX_THREADS: usize = 256;

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_origins: default_cache_origins(),
            parallel: false,
            threads: 0,
        }
    }
}

impl crate::validation::Validate for EngineConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::error::ConfigError;

        crate::validation::validate_max("engine.threads", self.threads, MAX_THREADS)?;

        if self.parallel && !self.cache_origins {
            return Err(ConfigError::ValidationError {
                field: "engine.parallel".to_string(),
                message: "parallel precompute fills the origin cache; enable engine.cache_origins"
                    .to_string(),
            });
        }

        Ok(())
    }
}

fn default_cache_origins() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_default_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.cache_origins);
        assert!(!config.parallel);
    }

    #[test]
    fn test_too_many_threads() {
        let config = EngineConfig {
            threads: 1000,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parallel_requires_cache() {
        let config = EngineConfig {
            parallel: true,
            cache_origins: false,
            threads: 4,
        };
        assert!(config.validate().is_err());
    }
}
