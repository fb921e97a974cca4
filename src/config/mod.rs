// Sub-modules
mod loader;
mod parallel;

pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use parallel::ParallelConfig;

use crate::balance::{Balancer, DEFAULT_MAX_MEMBERS};
use crate::errors::ConfigError;
use crate::io::output::OutputFormat;
use crate::roster::DEFAULT_ROSTER_FILE;
use crate::selection::TEAM_SELECTION_CAPACITY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure, read from `.teambalance.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamBalanceConfig {
    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub balance: BalanceSettings,

    #[serde(default)]
    pub parallel: ParallelConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub roster: RosterConfig,
}

fn default_capacity() -> usize {
    TEAM_SELECTION_CAPACITY
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Members picked per generation (default: 10)
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

fn default_max_members() -> usize {
    DEFAULT_MAX_MEMBERS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSettings {
    /// Largest roster searched exhaustively (default: 24)
    #[serde(default = "default_max_members")]
    pub max_members: usize,

    /// Optional time budget per balancing run, in milliseconds
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for BalanceSettings {
    fn default() -> Self {
        Self {
            max_members: default_max_members(),
            timeout_ms: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: OutputFormat,
}

fn default_roster_path() -> PathBuf {
    PathBuf::from(DEFAULT_ROSTER_FILE)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default = "default_roster_path")]
    pub path: PathBuf,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            path: default_roster_path(),
        }
    }
}

impl TeamBalanceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.selection.capacity == 0 {
            return Err(ConfigError::invalid(
                "selection.capacity",
                "must be at least 1",
            ));
        }
        if self.balance.max_members == 0 {
            return Err(ConfigError::invalid(
                "balance.max_members",
                "must be at least 1",
            ));
        }
        if self.parallel.max_concurrency == Some(0) {
            return Err(ConfigError::invalid(
                "parallel.max_concurrency",
                "must be at least 1 when set",
            ));
        }
        Ok(())
    }

    /// Build a balancer from the `[balance]` and `[parallel]` sections.
    pub fn balancer(&self) -> Balancer {
        let balancer = Balancer::new()
            .with_parallel(self.parallel.clone())
            .with_max_members(Some(self.balance.max_members));
        match self.balance.timeout_ms {
            Some(ms) => balancer.with_timeout(Duration::from_millis(ms)),
            None => balancer,
        }
    }
}
