//! CLI command implementations.
//!
//! Available commands:
//! - **balance**: Balance inline members or a roster selection
//! - **regenerate**: Re-balance the stored teams
//! - **reset**: Clear the stored teams
//! - **show**: Print roster members and stored teams
//! - **init**: Initialize a new `.teambalance.toml`

pub mod balance;
pub mod init;
pub mod roster;

pub use balance::{handle_balance, BalanceRequest};
pub use init::init_config;
pub use roster::{handle_regenerate, handle_reset, handle_show};

use crate::balance::Balancer;
use crate::cli::{OutputArgs, RosterArgs, SearchArgs};
use crate::config::TeamBalanceConfig;
use crate::io::{create_writer, OutputFormat, OutputWriter};
use crate::roster::RosterStore;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Duration;

/// Apply command-line overrides to the configured balancer.
pub fn build_balancer(config: &TeamBalanceConfig, search: &SearchArgs) -> Balancer {
    let mut parallel = config.parallel.clone();
    if search.no_parallel {
        parallel.enabled = false;
    }
    if let Some(jobs) = search.jobs.filter(|&j| j > 0) {
        parallel.max_concurrency = Some(jobs);
    }

    let balancer = config.balancer().with_parallel(parallel);
    match search.timeout_ms {
        Some(ms) => balancer.with_timeout(Duration::from_millis(ms)),
        None => balancer,
    }
}

/// Context for a failed search, pointing interrupted runs at the time budget.
pub fn search_failure_context(action: &str, interrupted: bool) -> String {
    if interrupted {
        format!("{action}: search stopped early (raise --timeout-ms or [balance].timeout_ms)")
    } else {
        action.to_string()
    }
}

pub fn roster_store(config: &TeamBalanceConfig, args: &RosterArgs) -> RosterStore {
    RosterStore::new(
        args.roster
            .clone()
            .unwrap_or_else(|| config.roster.path.clone()),
    )
}

/// Writer for the requested format and destination.
///
/// Terminal output written to a file is left uncolored.
pub fn open_writer(config: &TeamBalanceConfig, args: &OutputArgs) -> Result<Box<dyn OutputWriter>> {
    let format = args.format.unwrap_or(config.output.default_format);
    let sink: Box<dyn Write> = match &args.output {
        Some(path) => {
            if format == OutputFormat::Terminal {
                colored::control::set_override(false);
            }
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout()),
    };
    Ok(create_writer(format, sink))
}
