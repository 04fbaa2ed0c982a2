//! Pool configuration system.
//!
//! Resolves the operator's `pool.config.yml` against compiled-in defaults:
//! 1. **Source** - first readable candidate path wins (`/app/config/` mount,
//!    then local-development locations)
//! 2. **Parse** - tolerant YAML decoding; a malformed document degrades to
//!    an empty overlay instead of failing
//! 3. **Merge** - deep merge, operator values over defaults; sequences are
//!    replaced wholesale
//! 4. **Cache** - single-flight, resolved at most once per process
//!
//! ## Environment Variables
//! - `POOL_DASH_CONFIG_PATH` - Explicit config file (bypasses discovery)

mod cache;
mod loader;
mod merge;
mod source;
mod types;

pub use cache::ConfigCache;
pub use loader::{ConfigOrigin, ConfigResolver, Resolution, parse_document};
pub use merge::deep_merge;
pub use source::{CONFIG_PATH_ENV, ConfigSource, ResolvedDocument};
pub use types::*;
