//! JSON format parser

use crate::{error::ConfigError, Config, Result};
use serde::de::DeserializeOwned;

/// Parse configuration from JSON string
pub fn parse(content: &str) -> Result<Config> {
    parse_with_path(content, None)
}

/// Parse configuration from JSON string with file path for better errors
pub fn parse_with_path<T: DeserializeOwned>(content: &str, path: Option<&str>) -> Result<T> {
    serde_json::from_str(content).map_err(|e| ConfigError::from_json_error(e, content, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_json() {
        let config = parse(r#"{"input": {"roads": "graph.txt"}}"#).unwrap();
        assert_eq!(config.input.roads.to_str(), Some("graph.txt"));
        assert_eq!(config.input.routes.to_str(), Some("routes.txt"));
    }

    #[test]
    fn test_parse_broken_json() {
        assert!(matches!(
            parse("{\"input\": ").unwrap_err(),
            ConfigError::JsonError { .. }
        ));
    }
}
