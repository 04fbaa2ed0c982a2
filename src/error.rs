//! Error types.
//!
//! The configuration pipeline is availability-first: a missing document, an
//! unreadable candidate, a YAML syntax error or a wrong-typed field all
//! degrade to compiled defaults and are logged, never raised. The only
//! caller-visible failure is the cache being unable to complete resolution at
//! all, which means even the defaults could not be produced.

use thiserror::Error;

/// Failures that surface to configuration consumers.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The compiled-in defaults could not be encoded for merging. This is an
    /// infrastructure fault, not an operator mistake.
    #[error("failed to encode compiled-in defaults: {0}")]
    Defaults(#[from] serde_json::Error),
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
