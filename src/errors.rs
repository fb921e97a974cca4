//! Error types for balancing, selection and roster operations.
//!
//! The engine reports failures through [`BalanceError`]. The collaborator
//! layer adds [`SelectionError`] for capacity-bounded selection state and
//! [`RosterError`] for the roster file and team generation workflow.
//! Command handlers wrap all of these in `anyhow::Error` with context.

use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by the balancing engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// The input cannot be partitioned (currently: it is empty).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The input exceeds the configured exhaustive-search bound.
    #[error("Too many members for exhaustive search: {count} (limit {limit})")]
    TooManyMembers { count: usize, limit: usize },

    /// The caller cancelled the search.
    #[error("Balancing was cancelled")]
    Cancelled,

    /// The search did not finish before its deadline.
    #[error("Balancing exceeded its deadline")]
    DeadlineExceeded,

    /// A dedicated worker pool could not be built.
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

impl BalanceError {
    pub fn empty_input() -> Self {
        Self::InvalidInput("at least one member is required".to_string())
    }

    /// Whether the failure came from an interruption rather than the input.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }
}

/// Failures when mutating or resolving a [`crate::selection::Selection`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Selection is full: at most {capacity} members can be selected")]
    Full { capacity: usize },

    #[error("Member at position {0} is already selected")]
    AlreadySelected(usize),

    #[error("No unselected member named '{0}' in the roster")]
    UnknownMember(String),

    #[error("Position {index} is outside the roster (size {len})")]
    OutOfRange { index: usize, len: usize },
}

/// Failures of the roster file and team generation workflow.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to access roster file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Selection incomplete: {selected} of {capacity} members selected")]
    SelectionIncomplete { selected: usize, capacity: usize },

    #[error("No teams are stored in the roster")]
    NoTeams,

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Balance(#[from] BalanceError),
}

impl RosterError {
    /// Whether team generation stopped because the search was interrupted.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Balance(e) if e.is_interrupted())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failures loading or validating `.teambalance.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for '{field}': {message}")]
    Invalid { field: String, message: String },
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}
