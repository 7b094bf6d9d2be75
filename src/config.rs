// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::DEFAULT_REQUEUE_INTERVAL_SECS;
use crate::error::{PolicyError, Result};
use std::env;
use std::str::FromStr;

/// Serialization used when publishing profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl FromStr for OutputFormat {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(PolicyError::ConfigError(format!(
                "unknown OUTPUT_FORMAT '{}', expected 'yaml' or 'json'",
                other
            ))),
        }
    }
}

/// Controller configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub output_format: OutputFormat,
    /// Label selector restricting which namespaces get a profile
    pub namespace_selector: Option<String>,
    pub requeue_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_format: OutputFormat::default(),
            namespace_selector: None,
            requeue_interval_secs: DEFAULT_REQUEUE_INTERVAL_SECS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_format = match lookup("OUTPUT_FORMAT") {
            Some(v) => v.parse()?,
            None => OutputFormat::default(),
        };

        let namespace_selector = lookup("NAMESPACE_SELECTOR").filter(|s| !s.trim().is_empty());

        let requeue_interval_secs = match lookup("REQUEUE_INTERVAL_SECS") {
            Some(v) => v.trim().parse().map_err(|e| {
                PolicyError::ConfigError(format!("invalid REQUEUE_INTERVAL_SECS '{}': {}", v, e))
            })?,
            None => DEFAULT_REQUEUE_INTERVAL_SECS,
        };

        Ok(Config {
            output_format,
            namespace_selector,
            requeue_interval_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.output_format, OutputFormat::Yaml);
        assert_eq!(config.namespace_selector, None);
        assert_eq!(config.requeue_interval_secs, DEFAULT_REQUEUE_INTERVAL_SECS);
    }

    #[test]
    fn test_json_output_format() {
        let config = load(&[("OUTPUT_FORMAT", "JSON")]).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_output_format() {
        let err = load(&[("OUTPUT_FORMAT", "toml")]).unwrap_err();
        assert!(matches!(err, PolicyError::ConfigError(_)));
    }

    #[test]
    fn test_blank_selector_is_ignored() {
        let config = load(&[("NAMESPACE_SELECTOR", "  ")]).unwrap();
        assert_eq!(config.namespace_selector, None);
    }

    #[test]
    fn test_selector_and_requeue() {
        let config = load(&[
            ("NAMESPACE_SELECTOR", "team=payments"),
            ("REQUEUE_INTERVAL_SECS", "15"),
        ])
        .unwrap();
        assert_eq!(config.namespace_selector.as_deref(), Some("team=payments"));
        assert_eq!(config.requeue_interval_secs, 15);
    }

    #[test]
    fn test_invalid_requeue_interval() {
        let err = load(&[("REQUEUE_INTERVAL_SECS", "soon")]).unwrap_err();
        assert!(matches!(err, PolicyError::ConfigError(_)));
    }
}
