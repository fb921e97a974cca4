// Export modules for library usage
pub mod balance;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod observability;
pub mod roster;
pub mod selection;

// Re-export commonly used types
pub use crate::core::{ScoredMember, TeamPair};

pub use crate::balance::{balance, BalanceOutcome, Balancer, CancellationToken};

pub use crate::errors::{BalanceError, ConfigError, RosterError, SelectionError};

pub use crate::selection::{Selection, SelectionChange, TEAM_SELECTION_CAPACITY};

pub use crate::roster::{RosterData, RosterStore};

pub use crate::config::{load_config, ParallelConfig, TeamBalanceConfig};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter, TeamReport};
