use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::TeamBalanceConfig;
use crate::errors::ConfigError;

pub const CONFIG_FILE_NAME: &str = ".teambalance.toml";

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<TeamBalanceConfig, ConfigError> {
    let config = toml::from_str::<TeamBalanceConfig>(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load an explicitly named config file; any failure is an error.
pub fn load_config_from_path(path: &Path) -> Result<TeamBalanceConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_and_validate_config(&contents)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try a discovered config file, warning about (not failing on) bad files
fn try_load_config_from_path(config_path: &Path) -> Option<TeamBalanceConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{} in {}. Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.teambalance.toml`.
pub fn load_config_from(start: PathBuf) -> TeamBalanceConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            TeamBalanceConfig::default()
        })
}

pub fn load_config() -> TeamBalanceConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            warn!("Failed to get current directory: {}. Using default config.", e);
            TeamBalanceConfig::default()
        }
    }
}
