//! Roster file handling and team generation.
//!
//! The roster file is a JSON object with two keys:
//!
//! ```json
//! {"teams": [[{"name": "A", "score": 3}, ...], [...]], "members": [...]}
//! ```
//!
//! `teams` is either empty or holds exactly the two teams of the last
//! generation. Both keys may be missing from older files.

use crate::balance::{BalanceOutcome, Balancer};
use crate::core::{ScoredMember, TeamPair};
use crate::errors::RosterError;
use crate::selection::Selection;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default roster file name, relative to the working directory.
pub const DEFAULT_ROSTER_FILE: &str = "teams.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterData {
    #[serde(default)]
    pub teams: Vec<Vec<ScoredMember>>,
    #[serde(default)]
    pub members: Vec<ScoredMember>,
}

impl RosterData {
    /// The stored teams as a pair, if a generation has been stored.
    pub fn team_pair(&self) -> Option<TeamPair> {
        match self.teams.as_slice() {
            [a, b] => Some(TeamPair::new(a.clone(), b.clone())),
            _ => None,
        }
    }

    fn store_teams(&mut self, teams: TeamPair) {
        self.teams = teams.into_vec();
    }
}

/// Balance a full selection without touching the roster file.
pub fn balance_selection(
    members: &[ScoredMember],
    selection: &Selection,
    balancer: &Balancer,
) -> Result<BalanceOutcome, RosterError> {
    if !selection.is_full() {
        return Err(RosterError::SelectionIncomplete {
            selected: selection.len(),
            capacity: selection.capacity(),
        });
    }
    let snapshot = selection.resolve(members)?;
    Ok(balancer.run(&snapshot)?)
}

/// Reads and writes a roster file and runs team generation against it.
#[derive(Debug, Clone)]
pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the roster; a missing file is an empty roster.
    pub fn load(&self) -> Result<RosterData, RosterError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No roster at {}, starting empty", self.path.display());
                return Ok(RosterData::default());
            }
            Err(e) => return Err(RosterError::io(&self.path, e)),
        };
        let data: RosterData = serde_json::from_str(&contents)?;
        debug!(
            "Loaded {} members and {} teams from {}",
            data.members.len(),
            data.teams.len(),
            self.path.display()
        );
        Ok(data)
    }

    pub fn save(&self, data: &RosterData) -> Result<(), RosterError> {
        let json = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, json).map_err(|e| RosterError::io(&self.path, e))?;
        debug!("Saved roster to {}", self.path.display());
        Ok(())
    }

    /// Balance a full selection, store the teams, and persist the roster.
    ///
    /// The selection is cleared once the teams are stored.
    pub fn generate(
        &self,
        data: &mut RosterData,
        selection: &mut Selection,
        balancer: &Balancer,
    ) -> Result<BalanceOutcome, RosterError> {
        let outcome = balance_selection(&data.members, selection, balancer)?;
        self.commit_teams(data, outcome.teams.clone())?;
        info!(
            "Generated teams from {} members (difference {})",
            selection.len(),
            outcome.difference
        );
        selection.clear();
        Ok(outcome)
    }

    /// Re-balance the members of the stored teams and overwrite them.
    pub fn regenerate(
        &self,
        data: &mut RosterData,
        balancer: &Balancer,
    ) -> Result<BalanceOutcome, RosterError> {
        let members: Vec<ScoredMember> = data.teams.iter().flatten().cloned().collect();
        if members.is_empty() {
            return Err(RosterError::NoTeams);
        }
        let outcome = balancer.run(&members)?;
        self.commit_teams(data, outcome.teams.clone())?;
        info!(
            "Regenerated teams from {} members (difference {})",
            members.len(),
            outcome.difference
        );
        Ok(outcome)
    }

    /// Store an externally computed pair, e.g. from inline members.
    pub fn store(&self, data: &mut RosterData, teams: TeamPair) -> Result<(), RosterError> {
        self.commit_teams(data, teams)
    }

    /// Drop the stored teams and persist the roster.
    pub fn reset(&self, data: &mut RosterData) -> Result<(), RosterError> {
        let cleared = RosterData {
            teams: Vec::new(),
            members: data.members.clone(),
        };
        self.save(&cleared)?;
        *data = cleared;
        info!("Cleared stored teams in {}", self.path.display());
        Ok(())
    }

    /// `data` only changes once the new teams are on disk.
    fn commit_teams(&self, data: &mut RosterData, teams: TeamPair) -> Result<(), RosterError> {
        let mut updated = data.clone();
        updated.store_teams(teams);
        self.save(&updated)?;
        *data = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParallelConfig;
    use crate::errors::BalanceError;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn ten_members() -> Vec<ScoredMember> {
        [9, 8, 7, 6, 5, 5, 4, 3, 2, 1]
            .iter()
            .enumerate()
            .map(|(i, &score)| ScoredMember::new(format!("M{i}"), score))
            .collect()
    }

    fn full_selection(data: &RosterData) -> Selection {
        let mut selection = Selection::default();
        for i in 0..data.members.len() {
            selection.add(i).unwrap();
        }
        selection
    }

    fn balancer() -> Balancer {
        Balancer::new().with_parallel(ParallelConfig::sequential())
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = RosterStore::new(dir.path().join("teams.json"));
        assert_eq!(store.load().unwrap(), RosterData::default());
    }

    #[test]
    fn test_reads_plain_json_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("teams.json");
        fs::write(
            &path,
            indoc! {r#"
                {"teams": [], "members": [{"name": "민수", "score": 7}, {"name": "Ana", "score": 3}]}
            "#},
        )
        .unwrap();

        let data = RosterStore::new(&path).load().unwrap();
        assert_eq!(data.members[0], ScoredMember::new("민수", 7));
        assert_eq!(data.members.len(), 2);
        assert!(data.teams.is_empty());
    }

    #[test]
    fn test_missing_keys_default() {
        let data: RosterData = serde_json::from_str(r#"{"members": []}"#).unwrap();
        assert!(data.teams.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = RosterStore::new(dir.path().join("teams.json"));
        let data = RosterData {
            teams: vec![],
            members: ten_members(),
        };
        store.save(&data).unwrap();
        assert_eq!(store.load().unwrap(), data);
    }

    #[test]
    fn test_non_ascii_names_are_written_verbatim() {
        let dir = TempDir::new().unwrap();
        let store = RosterStore::new(dir.path().join("teams.json"));
        let data = RosterData {
            teams: vec![],
            members: vec![ScoredMember::new("지훈", 4)],
        };
        store.save(&data).unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("지훈"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("teams.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            RosterStore::new(&path).load(),
            Err(RosterError::Json(_))
        ));
    }

    #[test]
    fn test_generate_requires_full_selection() {
        let dir = TempDir::new().unwrap();
        let store = RosterStore::new(dir.path().join("teams.json"));
        let mut data = RosterData {
            teams: vec![],
            members: ten_members(),
        };
        let mut selection = Selection::default();
        selection.add(0).unwrap();

        let err = store
            .generate(&mut data, &mut selection, &balancer())
            .unwrap_err();
        assert!(matches!(
            err,
            RosterError::SelectionIncomplete {
                selected: 1,
                capacity: 10
            }
        ));
        assert!(data.teams.is_empty());
    }

    #[test]
    fn test_generate_stores_and_persists_teams() {
        let dir = TempDir::new().unwrap();
        let store = RosterStore::new(dir.path().join("teams.json"));
        let mut data = RosterData {
            teams: vec![],
            members: ten_members(),
        };
        let mut selection = full_selection(&data);

        let outcome = store
            .generate(&mut data, &mut selection, &balancer())
            .unwrap();

        assert!(selection.is_empty());
        // total 50 splits evenly
        assert_eq!(outcome.difference, 0);
        assert_eq!(data.teams.len(), 2);
        assert_eq!(data.teams[0].len(), 5);
        assert_eq!(data.teams[1].len(), 5);
        assert_eq!(store.load().unwrap(), data);
    }

    #[test]
    fn test_regenerate_uses_stored_team_members() {
        let dir = TempDir::new().unwrap();
        let store = RosterStore::new(dir.path().join("teams.json"));
        let members = ten_members();
        let mut data = RosterData {
            // a lopsided stored split
            teams: vec![members[..5].to_vec(), members[5..].to_vec()],
            members: members.clone(),
        };

        let outcome = store.regenerate(&mut data, &balancer()).unwrap();
        assert_eq!(outcome.difference, 0);
        let pair = data.team_pair().unwrap();
        assert_eq!(pair.difference(), 0);
        assert_eq!(pair.len(), 10);
    }

    #[test]
    fn test_regenerate_without_teams() {
        let dir = TempDir::new().unwrap();
        let store = RosterStore::new(dir.path().join("teams.json"));
        let mut data = RosterData::default();
        assert!(matches!(
            store.regenerate(&mut data, &balancer()),
            Err(RosterError::NoTeams)
        ));
    }

    #[test]
    fn test_reset_clears_teams() {
        let dir = TempDir::new().unwrap();
        let store = RosterStore::new(dir.path().join("teams.json"));
        let members = ten_members();
        let mut data = RosterData {
            teams: vec![members[..5].to_vec(), members[5..].to_vec()],
            members,
        };
        store.reset(&mut data).unwrap();
        assert!(data.teams.is_empty());
        assert!(store.load().unwrap().teams.is_empty());
    }

    #[test]
    fn test_generate_propagates_balance_errors() {
        let dir = TempDir::new().unwrap();
        let store = RosterStore::new(dir.path().join("teams.json"));
        let mut data = RosterData {
            teams: vec![],
            members: ten_members(),
        };
        let mut selection = full_selection(&data);
        let strict = balancer().with_max_members(Some(4));

        let err = store
            .generate(&mut data, &mut selection, &strict)
            .unwrap_err();
        assert!(matches!(
            err,
            RosterError::Balance(BalanceError::TooManyMembers { count: 10, limit: 4 })
        ));
        // a failed generation keeps the selection for another attempt
        assert!(selection.is_full());
    }

    #[test]
    fn test_failed_save_leaves_roster_untouched() {
        let dir = TempDir::new().unwrap();
        // writing to a directory path always fails
        let store = RosterStore::new(dir.path());
        let members = ten_members();
        let stored = vec![members[..5].to_vec(), members[5..].to_vec()];
        let mut data = RosterData {
            teams: stored.clone(),
            members,
        };
        let before = data.clone();

        let mut selection = full_selection(&data);
        let err = store
            .generate(&mut data, &mut selection, &balancer())
            .unwrap_err();
        assert!(matches!(err, RosterError::Io { .. }));
        assert_eq!(data, before);
        assert!(selection.is_full());

        assert!(store.regenerate(&mut data, &balancer()).is_err());
        assert_eq!(data, before);

        assert!(store.reset(&mut data).is_err());
        assert_eq!(data.teams, stored);
    }
}
