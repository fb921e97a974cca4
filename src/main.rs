use anyhow::{Context, Result};
use clap::Parser;
use teambalance::cli::{Cli, Commands};
use teambalance::commands::{self, BalanceRequest};
use teambalance::config::{load_config, load_config_from_path, TeamBalanceConfig};
use teambalance::observability::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let config = resolve_config(&cli)?;

    match cli.command {
        Commands::Balance {
            members,
            select,
            save,
            roster,
            output,
            search,
        } => commands::handle_balance(
            &config,
            BalanceRequest {
                members,
                select,
                save,
                roster,
                output,
                search,
            },
        ),
        Commands::Regenerate {
            roster,
            output,
            search,
        } => commands::handle_regenerate(&config, &roster, &output, &search),
        Commands::Reset { roster } => commands::handle_reset(&config, &roster),
        Commands::Show { roster, output } => commands::handle_show(&config, &roster, &output),
        Commands::Init { force } => commands::init_config(force),
    }
}

// An explicit --config must load; otherwise discover or fall back to defaults
fn resolve_config(cli: &Cli) -> Result<TeamBalanceConfig> {
    match &cli.config {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(load_config()),
    }
}
