//! Configuration management for routeplan
//!
//! Settings are layered with increasing precedence:
//! - built-in defaults
//! - a config file (YAML, TOML or JSON)
//! - `ROUTEPLAN_<SECTION>_<FIELD>` environment variables
//! - explicit overrides (usually CLI flags)
//!
//! # Example
//!
//! ```no_run
//! use routeplan_config::Config;
//!
//! // Load from default location (.routeplan.{toml,yml,yaml,json})
//! let config = Config::load()?;
//!
//! // Or load from specific file
//! let config = Config::from_file("path/to/config.toml")?;
//!
//! let roads = &config.input.roads;
//! let format = config.output.format;
//! # Ok::<(), routeplan_config::ConfigError>(())
//! ```

pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

pub use error::{ConfigError, ErrorFormatter, Result};
pub use loader::ConfigBuilder;
pub use types::*;

/// Trait for config validation
pub use validation::Validate;
