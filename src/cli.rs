use crate::core::ScoredMember;
use crate::io::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "teambalance")]
#[command(about = "Split scored members into two evenly matched teams", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .teambalance.toml)
    #[arg(short, long, global = true, env = "TEAMBALANCE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Balance inline members or a selection from the roster file
    Balance {
        /// Inline member as NAME=SCORE (repeatable)
        #[arg(short = 'm', long = "member", value_parser = parse_member, conflicts_with = "select")]
        members: Vec<ScoredMember>,

        /// Roster member names to select (comma-separated, repeat a name for duplicates)
        #[arg(short, long, value_delimiter = ',')]
        select: Vec<String>,

        /// Store the resulting teams in the roster file
        #[arg(long)]
        save: bool,

        #[command(flatten)]
        roster: RosterArgs,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Re-balance the members of the stored teams and overwrite them
    Regenerate {
        #[command(flatten)]
        roster: RosterArgs,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Clear the stored teams
    Reset {
        #[command(flatten)]
        roster: RosterArgs,
    },

    /// Show roster members and stored teams
    Show {
        #[command(flatten)]
        roster: RosterArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct RosterArgs {
    /// Roster file (defaults to [roster].path, usually teams.json)
    #[arg(long)]
    pub roster: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Number of worker threads for large rosters
    #[arg(short = 'j', long = "jobs")]
    pub jobs: Option<usize>,

    /// Score combinations on a single thread
    #[arg(long = "no-parallel")]
    pub no_parallel: bool,

    /// Abort the search after this many milliseconds
    #[arg(long = "timeout-ms")]
    pub timeout_ms: Option<u64>,
}

/// Parse an inline `NAME=SCORE` member.
pub fn parse_member(raw: &str) -> Result<ScoredMember, String> {
    let (name, score) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=SCORE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("member name is empty in '{raw}'"));
    }
    let score = score
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid score in '{raw}': {e}"))?;
    Ok(ScoredMember::new(name, score))
}
