//! Coordinator configuration from TOML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use navsync_core::CoordinatorConfig;

/// Read a configuration file, or use the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<CoordinatorConfig> {
    let Some(path) = path else {
        return Ok(CoordinatorConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    parse_config(&text).with_context(|| format!("parse config file {}", path.display()))
}

/// Parse TOML such as:
///
/// ```toml
/// base_path = "/History/TableDemo"
/// strategy = "seed-from-url"
/// ```
pub fn parse_config(text: &str) -> Result<CoordinatorConfig> {
    Ok(toml::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use navsync_core::InitStrategy;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = parse_config("strategy = \"seed-from-default\"").unwrap();
        assert_eq!(config.strategy, InitStrategy::SeedFromDefault);
        assert_eq!(config.base_path, CoordinatorConfig::default().base_path);
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(load_config(None).unwrap(), CoordinatorConfig::default());
    }

    #[test]
    fn unknown_strategy_is_an_error() {
        assert!(parse_config("strategy = \"guess\"").is_err());
    }
}
