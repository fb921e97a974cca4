//! Core data types shared by the engine and the roster layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A roster entry: a label and the score it contributes to a team.
///
/// Names are not required to be unique. Two members with the same name and
/// score are still distinct entries; every component that partitions
/// members works on positions, never on value equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredMember {
    pub name: String,
    pub score: i64,
}

impl ScoredMember {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

impl fmt::Display for ScoredMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.score)
    }
}

/// Sum of member scores, widened so no roster can overflow it.
pub fn total_score(members: &[ScoredMember]) -> i128 {
    members.iter().map(|m| i128::from(m.score)).sum()
}

/// Two teams produced by a single balancing run.
///
/// `team_a` holds the `floor(N / 2)` members of the winning combination and
/// `team_b` the remaining ones, both in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPair {
    pub team_a: Vec<ScoredMember>,
    pub team_b: Vec<ScoredMember>,
}

impl TeamPair {
    pub fn new(team_a: Vec<ScoredMember>, team_b: Vec<ScoredMember>) -> Self {
        Self { team_a, team_b }
    }

    pub fn score_a(&self) -> i128 {
        total_score(&self.team_a)
    }

    pub fn score_b(&self) -> i128 {
        total_score(&self.team_b)
    }

    /// Absolute difference between the two team totals.
    pub fn difference(&self) -> u128 {
        self.score_a().abs_diff(self.score_b())
    }

    /// Total number of members across both teams.
    pub fn len(&self) -> usize {
        self.team_a.len() + self.team_b.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the pair into the two-entry list layout used by the roster file.
    pub fn into_vec(self) -> Vec<Vec<ScoredMember>> {
        vec![self.team_a, self.team_b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difference_is_absolute() {
        let pair = TeamPair::new(
            vec![ScoredMember::new("A", 3)],
            vec![ScoredMember::new("B", 10)],
        );
        assert_eq!(pair.difference(), 7);

        let swapped = TeamPair::new(pair.team_b.clone(), pair.team_a.clone());
        assert_eq!(swapped.difference(), 7);
    }

    #[test]
    fn test_total_score_does_not_overflow() {
        let members = vec![
            ScoredMember::new("A", i64::MAX),
            ScoredMember::new("B", i64::MAX),
        ];
        assert_eq!(total_score(&members), 2 * i128::from(i64::MAX));
    }

    #[test]
    fn test_difference_with_negative_scores() {
        let pair = TeamPair::new(
            vec![ScoredMember::new("A", -4)],
            vec![ScoredMember::new("B", 6)],
        );
        assert_eq!(pair.difference(), 10);
    }

    #[test]
    fn test_member_serializes_in_roster_layout() {
        let json = serde_json::to_string(&ScoredMember::new("A", 5)).unwrap();
        assert_eq!(json, r#"{"name":"A","score":5}"#);
    }
}
