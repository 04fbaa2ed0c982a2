//! Process-wide, single-flight configuration cache.
//!
//! Resolution is I/O and runs at most once per process. The first caller of
//! [`ConfigCache::get`] triggers the pipeline; callers arriving while it is in
//! flight await the same execution instead of starting their own; every caller
//! ever after observes the same `Arc`. Degrading to defaults is a normal
//! outcome, not an error: the only error this surfaces is the resolver being
//! unable to produce even the defaults.

use super::loader::{ConfigOrigin, ConfigResolver};
use super::source::ConfigSource;
use super::types::PoolConfig;
use crate::error::{ConfigError, ConfigResult};
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Shared handle to the resolved configuration.
#[derive(Debug)]
pub struct ConfigCache {
    resolver: ConfigResolver,
    resolved: OnceCell<(Arc<PoolConfig>, ConfigOrigin)>,
}

impl ConfigCache {
    pub fn new(source: ConfigSource) -> Self {
        Self {
            resolver: ConfigResolver::new(source),
            resolved: OnceCell::new(),
        }
    }

    /// The resolved configuration, running the pipeline on first call.
    ///
    /// Concurrent callers share one in-flight resolution; a failed attempt is
    /// not cached, so a later call may retry.
    pub async fn get(&self) -> ConfigResult<Arc<PoolConfig>> {
        let (config, _) = self
            .resolved
            .get_or_try_init(|| async {
                // Candidate reads are small local files; resolution stays on
                // the current task rather than a blocking pool.
                let resolution = self.resolver.resolve()?;
                Ok::<_, ConfigError>((Arc::new(resolution.config), resolution.origin))
            })
            .await?;
        Ok(Arc::clone(config))
    }

    /// Where the configuration came from, once resolution has completed.
    pub fn origin(&self) -> Option<&ConfigOrigin> {
        self.resolved.get().map(|(_, origin)| origin)
    }
}
