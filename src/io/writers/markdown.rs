use crate::core::ScoredMember;
use crate::io::output::{OutputWriter, TeamReport, TeamSummary};
use crate::roster::RosterData;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_member_table(&mut self, members: &[ScoredMember]) -> anyhow::Result<()> {
        writeln!(self.writer, "| Name | Score |")?;
        writeln!(self.writer, "|------|-------|")?;
        for member in members {
            writeln!(self.writer, "| {} | {} |", escape(&member.name), member.score)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_team(&mut self, team: &TeamSummary) -> anyhow::Result<()> {
        writeln!(self.writer, "## {} (total {})", team.label, team.total)?;
        writeln!(self.writer)?;
        self.write_member_table(&team.members)
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &TeamReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Balanced Teams")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        for team in &report.teams {
            self.write_team(team)?;
        }
        writeln!(self.writer, "**Score difference:** {}", report.difference)?;
        if let Some(evaluated) = report.combinations_evaluated {
            writeln!(self.writer)?;
            writeln!(self.writer, "Combinations evaluated: {evaluated}")?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_roster(&mut self, roster: &RosterData) -> anyhow::Result<()> {
        writeln!(self.writer, "# Members")?;
        writeln!(self.writer)?;
        if roster.members.is_empty() {
            writeln!(self.writer, "_No members yet._")?;
            writeln!(self.writer)?;
        } else {
            self.write_member_table(&roster.members)?;
        }

        for (i, team) in roster.teams.iter().enumerate() {
            let summary = TeamSummary {
                label: format!("Team {}", i + 1),
                members: team.clone(),
                total: crate::core::total_score(team),
            };
            self.write_team(&summary)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Keep member names from breaking table cells.
fn escape(text: &str) -> String {
    text.replace('|', "\\|")
}
