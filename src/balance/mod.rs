//! Balanced bipartition engine.
//!
//! Splits a roster into two groups of `floor(N / 2)` and `ceil(N / 2)`
//! members whose score totals differ as little as possible. The search is
//! exhaustive over every half-sized combination of input positions, so the
//! returned split is always a true optimum.
//!
//! Ties between equally good splits go to the combination that comes first
//! in lexicographic order of input positions. Both the sequential and the
//! parallel search honour that rule, so a given input order always yields
//! the same teams.
//!
//! The search costs `C(N, N/2)` combinations of `O(N)` work each. That is
//! trivial for the ten-member rosters the selection layer produces and
//! becomes impractical past roughly two dozen members; [`Balancer`] rejects
//! rosters above its `max_members` bound instead of running for hours.
//!
//! This module performs no I/O and emits no log records.

pub mod cancel;
pub mod combinations;
mod parallel;

pub use cancel::CancellationToken;
pub use combinations::{binomial, Combinations};

use crate::config::ParallelConfig;
use crate::core::{ScoredMember, TeamPair};
use crate::errors::BalanceError;
use cancel::Interrupt;
use std::time::{Duration, Instant};

/// Largest roster the default [`Balancer`] will search (C(24, 12) ≈ 2.7M).
pub const DEFAULT_MAX_MEMBERS: usize = 24;

/// Combinations scored between interruption checks.
pub(crate) const CHECK_INTERVAL: u64 = 1024;

/// Split `members` into the two most evenly scored halves.
///
/// This is the plain engine contract: sequential, unbounded, and not
/// interruptible. Use [`Balancer`] for limits, deadlines and parallelism.
///
/// # Errors
///
/// Returns [`BalanceError::InvalidInput`] when `members` is empty.
///
/// # Example
///
/// ```rust
/// use teambalance::{balance, ScoredMember};
///
/// let members = vec![
///     ScoredMember::new("A", 1),
///     ScoredMember::new("B", 2),
///     ScoredMember::new("C", 3),
///     ScoredMember::new("D", 10),
/// ];
/// let teams = balance(&members).unwrap();
/// assert_eq!(teams.team_a, vec![members[0].clone(), members[3].clone()]);
/// assert_eq!(teams.difference(), 6);
/// ```
pub fn balance(members: &[ScoredMember]) -> Result<TeamPair, BalanceError> {
    let scores = validate(members)?;
    let best = search_sequential(&scores, Interrupt::none())?;
    Ok(assemble(members, best).teams)
}

/// Result of a [`Balancer`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceOutcome {
    pub teams: TeamPair,
    /// Absolute difference of the two team totals.
    pub difference: u128,
    /// Input positions that form `teams.team_a`, ascending.
    pub team_a_indices: Vec<usize>,
    pub combinations_evaluated: u64,
}

/// Configurable front end to the exhaustive search.
#[derive(Debug, Clone)]
pub struct Balancer {
    parallel: ParallelConfig,
    max_members: Option<usize>,
    cancellation: Option<CancellationToken>,
    timeout: Option<Duration>,
    deadline: Option<Instant>,
}

impl Default for Balancer {
    fn default() -> Self {
        Self {
            parallel: ParallelConfig::default(),
            max_members: Some(DEFAULT_MAX_MEMBERS),
            cancellation: None,
            timeout: None,
            deadline: None,
        }
    }
}

impl Balancer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// `None` removes the roster size bound entirely.
    pub fn with_max_members(mut self, max_members: Option<usize>) -> Self {
        self.max_members = max_members;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Time budget measured from the start of each [`Balancer::run`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Absolute deadline shared by every run of this balancer.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn parallel(&self) -> &ParallelConfig {
        &self.parallel
    }

    pub fn max_members(&self) -> Option<usize> {
        self.max_members
    }

    /// Find the best split of `members`.
    ///
    /// # Errors
    ///
    /// - [`BalanceError::InvalidInput`] for an empty roster
    /// - [`BalanceError::TooManyMembers`] above the `max_members` bound
    /// - [`BalanceError::Cancelled`] / [`BalanceError::DeadlineExceeded`]
    ///   when interrupted
    /// - [`BalanceError::ThreadPool`] if a dedicated pool cannot be built
    pub fn run(&self, members: &[ScoredMember]) -> Result<BalanceOutcome, BalanceError> {
        let scores = validate(members)?;
        if let Some(limit) = self.max_members {
            if members.len() > limit {
                return Err(BalanceError::TooManyMembers {
                    count: members.len(),
                    limit,
                });
            }
        }

        let interrupt = Interrupt::new(self.cancellation.as_ref(), self.effective_deadline());
        let half = members.len() / 2;
        let best = match binomial(members.len(), half) {
            Some(total) if total > 1 && self.parallel.should_parallelize(members.len()) => {
                parallel::search(&scores, total, &self.parallel, interrupt)?
            }
            _ => search_sequential(&scores, interrupt)?,
        };
        Ok(assemble(members, best))
    }

    fn effective_deadline(&self) -> Option<Instant> {
        let from_timeout = self.timeout.map(|t| Instant::now() + t);
        match (from_timeout, self.deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

/// Best split found in part (or all) of the combination space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub(crate) difference: u128,
    pub(crate) rank: u64,
    pub(crate) indices: Vec<usize>,
}

impl Candidate {
    /// Lower difference wins; equal differences go to the earlier rank.
    pub(crate) fn beats(&self, other: &Candidate) -> bool {
        (self.difference, self.rank) < (other.difference, other.rank)
    }
}

/// Outcome of scoring a contiguous run of combinations.
#[derive(Debug, Clone, Default)]
pub(crate) struct SpanResult {
    pub(crate) best: Option<Candidate>,
    pub(crate) evaluated: u64,
}

impl SpanResult {
    pub(crate) fn merge(self, other: SpanResult) -> SpanResult {
        let best = match (self.best, other.best) {
            (Some(a), Some(b)) => Some(if b.beats(&a) { b } else { a }),
            (a, b) => a.or(b),
        };
        SpanResult {
            best,
            evaluated: self.evaluated + other.evaluated,
        }
    }
}

fn validate(members: &[ScoredMember]) -> Result<Vec<i128>, BalanceError> {
    if members.is_empty() {
        return Err(BalanceError::empty_input());
    }
    Ok(members.iter().map(|m| i128::from(m.score)).collect())
}

fn search_sequential(scores: &[i128], interrupt: Interrupt<'_>) -> Result<SpanResult, BalanceError> {
    let half = scores.len() / 2;
    let first: Vec<usize> = (0..half).collect();
    score_span(scores, first, 0, u64::MAX, interrupt)
}

/// Score up to `count` combinations starting at `first` (whose rank is
/// `start_rank`), keeping the earliest one with the smallest difference.
pub(crate) fn score_span(
    scores: &[i128],
    first: Vec<usize>,
    start_rank: u64,
    count: u64,
    interrupt: Interrupt<'_>,
) -> Result<SpanResult, BalanceError> {
    let n = scores.len();
    let total: i128 = scores.iter().sum();
    let mut indices = first;
    let mut result = SpanResult::default();

    while result.evaluated < count {
        if result.evaluated % CHECK_INTERVAL == 0 {
            interrupt.check()?;
        }

        let group_sum: i128 = indices.iter().map(|&i| scores[i]).sum();
        // |a - b| where b = total - a
        let difference = (2 * group_sum - total).unsigned_abs();
        if result.best.as_ref().is_none_or(|best| difference < best.difference) {
            result.best = Some(Candidate {
                difference,
                rank: start_rank + result.evaluated,
                indices: indices.clone(),
            });
        }
        result.evaluated += 1;

        if !combinations::advance(&mut indices, n) {
            break;
        }
    }
    Ok(result)
}

fn assemble(members: &[ScoredMember], result: SpanResult) -> BalanceOutcome {
    // a non-empty roster always has at least one combination to score
    let best = result.best.unwrap_or(Candidate {
        difference: 0,
        rank: 0,
        indices: Vec::new(),
    });

    let mut in_team_a = vec![false; members.len()];
    for &i in &best.indices {
        in_team_a[i] = true;
    }
    let (team_a, team_b): (Vec<_>, Vec<_>) = members
        .iter()
        .zip(&in_team_a)
        .partition(|(_, selected)| **selected);

    BalanceOutcome {
        teams: TeamPair::new(
            team_a.into_iter().map(|(m, _)| m.clone()).collect(),
            team_b.into_iter().map(|(m, _)| m.clone()).collect(),
        ),
        difference: best.difference,
        team_a_indices: best.indices,
        combinations_evaluated: result.evaluated,
    }
}
