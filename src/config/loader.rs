//! Configuration resolution: source, parse, merge, deserialize.
//!
//! Runs once per process. The outcome is always a complete [`PoolConfig`]:
//! operator values where supplied, compiled defaults everywhere else. The
//! pipeline logs which location was used (or that it fell back to defaults),
//! the resolved pool name, the theme mode and the configured coin ids.

use super::merge::deep_merge;
use super::source::ConfigSource;
use super::types::PoolConfig;
use crate::error::ConfigResult;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Where the resolved configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Loaded and merged from an operator document at this path.
    File(PathBuf),
    /// No usable document; running on compiled defaults.
    Defaults,
}

impl std::fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigOrigin::File(path) => write!(f, "{}", path.display()),
            ConfigOrigin::Defaults => write!(f, "defaults"),
        }
    }
}

/// A resolved configuration together with its provenance.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub config: PoolConfig,
    pub origin: ConfigOrigin,
}

/// Parse operator YAML into an untyped tree.
///
/// A syntax error is logged with the source location and replaced by an empty
/// mapping so the pipeline proceeds on pure defaults. A malformed document
/// must never take the dashboard down.
pub fn parse_document(text: &str, origin: &str) -> Value {
    match serde_yaml::from_str::<Value>(text) {
        Ok(Value::Null) => {
            // An empty file parses to null; treat it like an empty mapping.
            Value::Object(serde_json::Map::new())
        }
        Ok(value) => value,
        Err(err) => {
            error!("YAML parse error in {origin}, using defaults: {err}");
            Value::Object(serde_json::Map::new())
        }
    }
}

/// Orchestrates source lookup, tolerant parsing and the deep merge.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    source: ConfigSource,
}

impl ConfigResolver {
    pub fn new(source: ConfigSource) -> Self {
        Self { source }
    }

    /// Resolve the configuration exactly once.
    ///
    /// The only error path is failing to encode the compiled defaults for
    /// merging; everything the operator can get wrong degrades to defaults.
    pub fn resolve(&self) -> ConfigResult<Resolution> {
        let defaults = serde_json::to_value(PoolConfig::default())?;

        let (overlay, origin) = match self.source.read() {
            Some(doc) => {
                let origin_label = doc.path.display().to_string();
                let tree = parse_document(&doc.content, &origin_label);
                (tree, ConfigOrigin::File(doc.path))
            }
            None => {
                warn!("no pool.config.yml found at any candidate path, using defaults");
                (Value::Object(serde_json::Map::new()), ConfigOrigin::Defaults)
            }
        };

        let merged = deep_merge(defaults, overlay);
        let config: PoolConfig = match serde_json::from_value(merged) {
            Ok(config) => config,
            Err(err) => {
                // Wrong-typed field in the operator document. Validate here
                // rather than letting it fail at point of use.
                error!("config value has wrong type, using defaults: {err}");
                PoolConfig::default()
            }
        };

        info!("loaded pool config from: {origin}");
        info!("pool name: \"{}\"", config.pool.name);
        info!("theme mode: {}", config.theme.mode);
        let coin_ids = config.coin_ids();
        if coin_ids.is_empty() {
            info!("coins configured: none");
        } else {
            info!("coins configured: {}", coin_ids.join(", "));
        }

        Ok(Resolution { config, origin })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::ThemeMode;
    use tempfile::TempDir;

    fn resolver_for(dir: &TempDir, files: &[(&str, &str)]) -> ConfigResolver {
        let mut candidates = Vec::new();
        for (name, content) in files {
            let path = dir.path().join(name);
            std::fs::write(&path, content).unwrap();
            candidates.push(path);
        }
        // Always append one missing candidate so order matters
        candidates.push(dir.path().join("missing.yml"));
        ConfigResolver::new(ConfigSource::with_candidates(candidates))
    }

    #[test]
    fn test_missing_document_resolves_to_defaults() {
        let temp = TempDir::new().unwrap();
        let resolver = ConfigResolver::new(ConfigSource::with_candidates(vec![
            temp.path().join("a.yml"),
            temp.path().join("b.yml"),
            temp.path().join("c.yml"),
        ]));

        let resolution = resolver.resolve().unwrap();
        assert_eq!(resolution.origin, ConfigOrigin::Defaults);
        assert_eq!(resolution.config, PoolConfig::default());
    }

    #[test]
    fn test_partial_document_overrides_only_supplied_fields() {
        let temp = TempDir::new().unwrap();
        let resolver = resolver_for(
            &temp,
            &[(
                "pool.config.yml",
                "theme:\n  mode: light\n  primary_color: \"#112233\"\n",
            )],
        );

        let resolution = resolver.resolve().unwrap();
        let config = resolution.config;
        assert_eq!(config.theme.mode, ThemeMode::Light);
        assert_eq!(config.theme.primary_color, "#112233");
        // Untouched fields keep compiled defaults
        assert_eq!(config.theme.background, "#0B0B14");
        assert_eq!(config.pool.name, "Community Mining Pool");
    }

    #[test]
    fn test_malformed_document_resolves_to_defaults() {
        let temp = TempDir::new().unwrap();
        let resolver = resolver_for(&temp, &[("pool.config.yml", "theme: [unclosed\n  - ][")]);

        let resolution = resolver.resolve().unwrap();
        assert!(matches!(resolution.origin, ConfigOrigin::File(_)));
        assert_eq!(resolution.config, PoolConfig::default());
    }

    #[test]
    fn test_empty_document_resolves_to_defaults() {
        let temp = TempDir::new().unwrap();
        let resolver = resolver_for(&temp, &[("pool.config.yml", "")]);

        let resolution = resolver.resolve().unwrap();
        assert_eq!(resolution.config, PoolConfig::default());
    }

    #[test]
    fn test_wrong_typed_field_degrades_to_defaults() {
        let temp = TempDir::new().unwrap();
        // stratum_port_cpu must be a number
        let resolver = resolver_for(
            &temp,
            &[("pool.config.yml", "connection:\n  stratum_port_cpu: \"many\"\n")],
        );

        let resolution = resolver.resolve().unwrap();
        assert_eq!(resolution.config, PoolConfig::default());
    }

    #[test]
    fn test_goal_items_replaced_wholesale() {
        let temp = TempDir::new().unwrap();
        let resolver = resolver_for(
            &temp,
            &[(
                "pool.config.yml",
                concat!(
                    "goals:\n",
                    "  enabled: true\n",
                    "  items:\n",
                    "    - id: a\n",
                    "      title: New rig\n",
                    "      target_xmr: 5.0\n",
                ),
            )],
        );

        let resolution = resolver.resolve().unwrap();
        let goals = resolution.config.goals;
        assert!(goals.enabled);
        assert_eq!(goals.items.len(), 1);
        assert_eq!(goals.items[0].id, "a");
        assert_eq!(goals.items[0].title, "New rig");
        assert_eq!(goals.items[0].target_xmr, 5.0);
    }

    #[test]
    fn test_parse_document_tolerates_garbage() {
        let tree = parse_document("{{{{ not yaml ::::", "test");
        assert_eq!(tree, Value::Object(serde_json::Map::new()));
    }
}
