//! Commands that operate on the stored teams of a roster file.

use super::{build_balancer, open_writer, roster_store, search_failure_context};
use crate::cli::{OutputArgs, RosterArgs, SearchArgs};
use crate::config::TeamBalanceConfig;
use crate::io::TeamReport;
use anyhow::{Context, Result};

pub fn handle_regenerate(
    config: &TeamBalanceConfig,
    roster: &RosterArgs,
    output: &OutputArgs,
    search: &SearchArgs,
) -> Result<()> {
    let store = roster_store(config, roster);
    let mut data = store
        .load()
        .with_context(|| format!("Failed to load roster {}", store.path().display()))?;
    let outcome = store
        .regenerate(&mut data, &build_balancer(config, search))
        .map_err(|e| {
            let context = search_failure_context("Failed to regenerate teams", e.is_interrupted());
            anyhow::Error::new(e).context(context)
        })?;

    let mut writer = open_writer(config, output)?;
    writer.write_report(&TeamReport::from_outcome(&outcome))
}

pub fn handle_reset(config: &TeamBalanceConfig, roster: &RosterArgs) -> Result<()> {
    let store = roster_store(config, roster);
    let mut data = store
        .load()
        .with_context(|| format!("Failed to load roster {}", store.path().display()))?;
    store.reset(&mut data).context("Failed to reset teams")?;
    println!("Cleared stored teams in {}", store.path().display());
    Ok(())
}

pub fn handle_show(
    config: &TeamBalanceConfig,
    roster: &RosterArgs,
    output: &OutputArgs,
) -> Result<()> {
    let store = roster_store(config, roster);
    let data = store
        .load()
        .with_context(|| format!("Failed to load roster {}", store.path().display()))?;
    let mut writer = open_writer(config, output)?;
    writer.write_roster(&data)
}
