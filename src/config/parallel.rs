//! Parallelism configuration for the balancing search.
//!
//! Small rosters are scored sequentially; the combination count only
//! justifies fanning out across rayon workers from `min_members` upward.

use serde::{Deserialize, Serialize};

/// Default value for parallel processing enabled
fn default_enabled() -> bool {
    true
}

/// Default roster size at which the search is split across workers
fn default_min_members() -> usize {
    16
}

/// Configuration for parallel combination scoring.
///
/// # Example
///
/// ```rust
/// use teambalance::config::ParallelConfig;
///
/// let config = ParallelConfig {
///     enabled: true,
///     max_concurrency: Some(4),
///     min_members: 12,
/// };
/// assert!(config.should_parallelize(14));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Enable parallel processing (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Maximum worker threads (default: rayon's global pool)
    ///
    /// When set, the search runs inside a dedicated pool of this size.
    #[serde(default)]
    pub max_concurrency: Option<usize>,

    /// Smallest roster that is searched in parallel (default: 16)
    #[serde(default = "default_min_members")]
    pub min_members: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_concurrency: None,
            min_members: default_min_members(),
        }
    }
}

impl ParallelConfig {
    /// Create a new parallel config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with parallel processing disabled.
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Whether a roster of `members` entries should be searched in parallel.
    pub fn should_parallelize(&self, members: usize) -> bool {
        self.enabled && members >= self.min_members
    }
}
