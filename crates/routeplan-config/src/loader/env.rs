//! Environment variable configuration overlay
//!
//! Supports environment variables in the format:
//! `ROUTEPLAN_<section>_<field>=value`
//!
//! Examples:
//! - `ROUTEPLAN_INPUT_ROADS=data/roads.txt`
//! - `ROUTEPLAN_OUTPUT_FORMAT=json`
//! - `ROUTEPLAN_ENGINE_THREADS=4`

use crate::{error::ConfigError, types::*, Result};
use std::env;
use std::path::PathBuf;
use tracing::warn;

pub const ENV_PREFIX: &str = "ROUTEPLAN_";

/// Parse configuration from the process environment
pub fn from_env() -> Result<Option<PartialConfig>> {
    from_vars(env::vars())
}

/// Parse configuration from `(key, value)` pairs; keys without the prefix are ignored.
///
/// Unparseable variables are logged and skipped so a stray variable never
/// blocks startup.
pub fn from_vars<I>(vars: I) -> Result<Option<PartialConfig>>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut config = PartialConfig::default();
    let mut found_any = false;

    for (key, value) in vars {
        if !key.starts_with(ENV_PREFIX) {
            continue;
        }
        found_any = true;
        if let Err(e) = apply_env_var(&mut config, &key, &value) {
            warn!("Ignoring {}: {}", key, e);
        }
    }

    Ok(found_any.then_some(config))
}

/// Apply a single environment variable to config
fn apply_env_var(config: &mut PartialConfig, key: &str, value: &str) -> Result<()> {
    let stripped = key.strip_prefix(ENV_PREFIX).unwrap_or(key);

    let Some((section, field)) = stripped.split_once('_') else {
        return Err(ConfigError::EnvVarError {
            var: key.to_string(),
            message: "Expected format: ROUTEPLAN_<section>_<field>".to_string(),
        });
    };

    let section = section.to_lowercase();
    let field = field.to_lowercase();

    match section.as_str() {
        "input" => apply_input_var(&mut config.input, key, &field, value),
        "output" => apply_output_var(&mut config.output, key, &field, value),
        "engine" => apply_engine_var(&mut config.engine, key, &field, value),
        _ => Err(ConfigError::EnvVarError {
            var: key.to_string(),
            message: format!("Unknown section: {}", section),
        }),
    }
}

fn apply_input_var(config: &mut PartialInput, key: &str, field: &str, value: &str) -> Result<()> {
    match field {
        "roads" => config.roads = Some(PathBuf::from(value)),
        "routes" => config.routes = Some(PathBuf::from(value)),
        _ => return Err(unknown_field(key, field)),
    }
    Ok(())
}

fn apply_output_var(config: &mut PartialOutput, key: &str, field: &str, value: &str) -> Result<()> {
    match field {
        "path" => config.path = Some(PathBuf::from(value)),
        "format" => {
            let format = OutputFormat::parse(value).ok_or_else(|| {
                ConfigError::invalid_enum("output.format", value, OutputFormat::VARIANTS)
            })?;
            config.format = Some(format);
        }
        "append" => config.append = Some(parse_bool(key, value)?),
        _ => return Err(unknown_field(key, field)),
    }
    Ok(())
}

fn apply_engine_var(config: &mut PartialEngine, key: &str, field: &str, value: &str) -> Result<()> {
    match field {
        "cache_origins" => config.cache_origins = Some(parse_bool(key, value)?),
        "parallel" => config.parallel = Some(parse_bool(key, value)?),
        "threads" => {
            let threads: usize = value.parse().map_err(|_| ConfigError::EnvVarError {
                var: key.to_string(),
                message: format!("Invalid integer: {}", value),
            })?;
            config.threads = Some(threads);
        }
        _ => return Err(unknown_field(key, field)),
    }
    Ok(())
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::EnvVarError {
            var: key.to_string(),
            message: format!("Invalid boolean: {}", value),
        }),
    }
}

fn unknown_field(key: &str, field: &str) -> ConfigError {
    ConfigError::EnvVarError {
        var: key.to_string(),
        message: format!("Unknown field: {}", field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_no_prefixed_vars() {
        let config = from_vars(vars(&[("PATH", "/usr/bin")])).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_applies_known_vars() {
        let config = from_vars(vars(&[
            ("ROUTEPLAN_INPUT_ROADS", "data/roads.txt"),
            ("ROUTEPLAN_OUTPUT_FORMAT", "JSON"),
            ("ROUTEPLAN_ENGINE_CACHE_ORIGINS", "false"),
            ("ROUTEPLAN_ENGINE_THREADS", "3"),
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(config.input.roads, Some(PathBuf::from("data/roads.txt")));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert_eq!(config.engine.cache_origins, Some(false));
        assert_eq!(config.engine.threads, Some(3));
        assert_eq!(config.engine.parallel, None);
    }

    #[test]
    fn test_bad_values_are_skipped() {
        let config = from_vars(vars(&[
            ("ROUTEPLAN_OUTPUT_FORMAT", "xml"),
            ("ROUTEPLAN_ENGINE_THREADS", "lots"),
            ("ROUTEPLAN_NOPE", "1"),
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(config, PartialConfig::default());
    }

    #[test]
    fn test_default_valued_vars_are_kept() {
        let config = from_vars(vars(&[
            ("ROUTEPLAN_ENGINE_PARALLEL", "false"),
            ("ROUTEPLAN_OUTPUT_APPEND", "no"),
            ("ROUTEPLAN_ENGINE_CACHE_ORIGINS", "true"),
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(config.engine.parallel, Some(false));
        assert_eq!(config.output.append, Some(false));
        assert_eq!(config.engine.cache_origins, Some(true));
    }
}
