use super::{build_balancer, open_writer, roster_store, search_failure_context};
use crate::cli::{OutputArgs, RosterArgs, SearchArgs};
use crate::config::TeamBalanceConfig;
use crate::core::ScoredMember;
use crate::io::TeamReport;
use crate::roster::balance_selection;
use crate::selection::Selection;
use anyhow::{bail, Context, Result};
use tracing::{debug, info};

/// Arguments of the `balance` command.
#[derive(Debug, Clone, Default)]
pub struct BalanceRequest {
    pub members: Vec<ScoredMember>,
    pub select: Vec<String>,
    pub save: bool,
    pub roster: RosterArgs,
    pub output: OutputArgs,
    pub search: SearchArgs,
}

pub fn handle_balance(config: &TeamBalanceConfig, request: BalanceRequest) -> Result<()> {
    let balancer = build_balancer(config, &request.search);
    let store = roster_store(config, &request.roster);

    let outcome = if !request.members.is_empty() {
        debug!("Balancing {} inline members", request.members.len());
        let outcome = balancer.run(&request.members).map_err(|e| {
            let context = search_failure_context("Failed to balance members", e.is_interrupted());
            anyhow::Error::new(e).context(context)
        })?;
        if request.save {
            let mut data = store.load().context("Failed to load roster")?;
            store
                .store(&mut data, outcome.teams.clone())
                .context("Failed to save teams")?;
        }
        outcome
    } else if !request.select.is_empty() {
        let mut data = store
            .load()
            .with_context(|| format!("Failed to load roster {}", store.path().display()))?;
        let mut selection = Selection::new(config.selection.capacity);
        for name in &request.select {
            selection
                .select_by_name(&data.members, name)
                .with_context(|| format!("Cannot select '{name}'"))?;
        }
        if request.save {
            store
                .generate(&mut data, &mut selection, &balancer)
                .map_err(|e| {
                    let context = search_failure_context("Failed to generate teams", e.is_interrupted());
                    anyhow::Error::new(e).context(context)
                })?
        } else {
            balance_selection(&data.members, &selection, &balancer).map_err(|e| {
                let context = search_failure_context("Failed to balance selection", e.is_interrupted());
                anyhow::Error::new(e).context(context)
            })?
        }
    } else {
        bail!("Nothing to balance: pass --member NAME=SCORE or --select NAME,...");
    };

    info!(
        "Best split differs by {} after {} combinations",
        outcome.difference, outcome.combinations_evaluated
    );
    let mut writer = open_writer(config, &request.output)?;
    writer.write_report(&TeamReport::from_outcome(&outcome))
}
