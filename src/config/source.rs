//! Locating the operator's `pool.config.yml`.
//!
//! Candidates are checked in a fixed priority order: the deployment mount
//! first, then the local-development locations. The first candidate that
//! exists and is readable wins; a candidate that exists but cannot be read is
//! logged and skipped like a missing one. No candidate at all is a normal
//! outcome, the resolver then runs on compiled defaults.

use std::path::PathBuf;
use tracing::warn;

/// Environment variable naming an explicit config file, bypassing discovery.
pub const CONFIG_PATH_ENV: &str = "POOL_DASH_CONFIG_PATH";

/// Default candidate locations, highest priority first.
const DEFAULT_CANDIDATES: [&str; 3] = [
    // Docker volume mount
    "/app/config/pool.config.yml",
    // Local development, repo-adjacent theme directory
    "../config/pool-theme/pool.config.yml",
    // Alternate local path
    "config/pool.config.yml",
];

/// A raw operator document read from disk.
#[derive(Debug, Clone)]
pub struct ResolvedDocument {
    /// The raw YAML text.
    pub content: String,
    /// The candidate path it was read from.
    pub path: PathBuf,
}

/// Ordered list of candidate locations for the operator document.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    candidates: Vec<PathBuf>,
}

impl Default for ConfigSource {
    fn default() -> Self {
        Self::discover()
    }
}

impl ConfigSource {
    /// Build the source from the fixed candidate list, honoring the
    /// `POOL_DASH_CONFIG_PATH` override when set.
    pub fn discover() -> Self {
        if let Ok(explicit) = std::env::var(CONFIG_PATH_ENV) {
            return Self::explicit(explicit);
        }
        Self {
            candidates: DEFAULT_CANDIDATES.iter().map(PathBuf::from).collect(),
        }
    }

    /// A source with exactly one candidate (CLI or env override).
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        Self {
            candidates: vec![path.into()],
        }
    }

    /// A source with an arbitrary ordered candidate list.
    pub fn with_candidates(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// The candidate paths in priority order.
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Read the first candidate that exists and is readable.
    ///
    /// Returns `None` when no candidate yields content; the caller falls back
    /// to compiled defaults. Never fails: an unreadable candidate is warned
    /// about and treated like a missing one.
    pub fn read(&self) -> Option<ResolvedDocument> {
        for candidate in &self.candidates {
            if !candidate.exists() {
                continue;
            }
            match std::fs::read_to_string(candidate) {
                Ok(content) => {
                    return Some(ResolvedDocument {
                        content,
                        path: candidate.clone(),
                    });
                }
                Err(err) => {
                    warn!(
                        path = %candidate.display(),
                        "could not read config candidate, trying next: {err}"
                    );
                }
            }
        }
        None
    }
}
