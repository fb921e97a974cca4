use crate::core::{total_score, ScoredMember};
use crate::io::output::{OutputWriter, TeamReport, TeamSummary};
use crate::roster::RosterData;
use colored::*;
use std::io::Write;

const RULE: &str = "═══════════════════════════════════════════";

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", RULE.cyan())?;
        writeln!(self.writer, "  {}", title.bold().cyan())?;
        writeln!(self.writer, "{}", RULE.cyan())?;
        Ok(())
    }

    fn write_members(&mut self, members: &[ScoredMember]) -> anyhow::Result<()> {
        for member in members {
            writeln!(self.writer, "  • {:<20} {:>6}", member.name, member.score)?;
        }
        Ok(())
    }

    fn write_team(&mut self, team: &TeamSummary) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} {}",
            team.label.bold(),
            format!("(total {})", team.total).dimmed()
        )?;
        self.write_members(&team.members)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &TeamReport) -> anyhow::Result<()> {
        self.write_header("BALANCED TEAMS")?;
        writeln!(self.writer)?;
        for team in &report.teams {
            self.write_team(team)?;
        }

        let difference = report.difference.to_string();
        let difference = if report.difference == 0 {
            difference.green()
        } else {
            difference.yellow()
        };
        writeln!(self.writer, "Score difference: {difference}")?;
        if let Some(evaluated) = report.combinations_evaluated {
            writeln!(
                self.writer,
                "{}",
                format!("{evaluated} combinations evaluated").dimmed()
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_roster(&mut self, roster: &RosterData) -> anyhow::Result<()> {
        self.write_header("MEMBERS")?;
        if roster.members.is_empty() {
            writeln!(self.writer, "  No members yet.")?;
        } else {
            self.write_members(&roster.members)?;
        }
        writeln!(self.writer)?;

        if !roster.teams.is_empty() {
            self.write_header("TEAMS")?;
            writeln!(self.writer)?;
            for (i, team) in roster.teams.iter().enumerate() {
                self.write_team(&TeamSummary {
                    label: format!("Team {}", i + 1),
                    members: team.clone(),
                    total: total_score(team),
                })?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}
