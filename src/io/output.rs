use crate::balance::BalanceOutcome;
use crate::core::{total_score, ScoredMember, TeamPair};
use crate::io::writers::{JsonWriter, MarkdownWriter, TerminalWriter};
use crate::roster::RosterData;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored text for interactive use (default)
    #[default]
    Terminal,
    /// Machine-readable JSON
    Json,
    /// Markdown tables
    Markdown,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &TeamReport) -> anyhow::Result<()>;

    fn write_roster(&mut self, roster: &RosterData) -> anyhow::Result<()>;
}

pub fn create_writer(format: OutputFormat, writer: Box<dyn Write>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
    }
}

/// One team as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSummary {
    pub label: String,
    pub members: Vec<ScoredMember>,
    pub total: i128,
}

impl TeamSummary {
    fn new(label: &str, members: &[ScoredMember]) -> Self {
        Self {
            label: label.to_string(),
            members: members.to_vec(),
            total: total_score(members),
        }
    }
}

/// A balancing result ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamReport {
    pub generated_at: DateTime<Utc>,
    pub teams: Vec<TeamSummary>,
    pub difference: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combinations_evaluated: Option<u64>,
}

impl TeamReport {
    pub fn from_pair(pair: &TeamPair) -> Self {
        Self {
            generated_at: Utc::now(),
            teams: vec![
                TeamSummary::new("Team 1", &pair.team_a),
                TeamSummary::new("Team 2", &pair.team_b),
            ],
            difference: pair.difference(),
            combinations_evaluated: None,
        }
    }

    pub fn from_outcome(outcome: &BalanceOutcome) -> Self {
        Self {
            combinations_evaluated: Some(outcome.combinations_evaluated),
            ..Self::from_pair(&outcome.teams)
        }
    }
}
