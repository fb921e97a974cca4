//! Capacity-bounded selection of roster members.
//!
//! A selection records roster *positions* in the order they were picked.
//! Resolving it against the roster takes a snapshot of the members at that
//! moment, so later edits to the roster cannot change which entries end up
//! on which team.

use crate::core::ScoredMember;
use crate::errors::SelectionError;

/// Members picked per team generation: two teams of five.
pub const TEAM_SELECTION_CAPACITY: usize = 10;

/// What a [`Selection::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Selected,
    Deselected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    capacity: usize,
    positions: Vec<usize>,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(TEAM_SELECTION_CAPACITY)
    }
}

impl Selection {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            positions: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.positions.len() >= self.capacity
    }

    pub fn contains(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }

    /// Selected roster positions, in selection order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn add(&mut self, position: usize) -> Result<(), SelectionError> {
        if self.contains(position) {
            return Err(SelectionError::AlreadySelected(position));
        }
        if self.is_full() {
            return Err(SelectionError::Full {
                capacity: self.capacity,
            });
        }
        self.positions.push(position);
        Ok(())
    }

    /// Returns whether `position` was selected.
    pub fn remove(&mut self, position: usize) -> bool {
        match self.positions.iter().position(|&p| p == position) {
            Some(i) => {
                self.positions.remove(i);
                true
            }
            None => false,
        }
    }

    /// Select `position`, or deselect it if it is already selected.
    pub fn toggle(&mut self, position: usize) -> Result<SelectionChange, SelectionError> {
        if self.remove(position) {
            return Ok(SelectionChange::Deselected);
        }
        self.add(position).map(|_| SelectionChange::Selected)
    }

    /// Select the first roster entry called `name` that is not yet selected.
    ///
    /// Repeating a name therefore walks through same-named entries in
    /// roster order.
    pub fn select_by_name(
        &mut self,
        roster: &[ScoredMember],
        name: &str,
    ) -> Result<usize, SelectionError> {
        let position = roster
            .iter()
            .enumerate()
            .find(|(i, m)| m.name == name && !self.contains(*i))
            .map(|(i, _)| i)
            .ok_or_else(|| SelectionError::UnknownMember(name.to_string()))?;
        self.add(position)?;
        Ok(position)
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    /// Snapshot the selected members in selection order.
    pub fn resolve(&self, roster: &[ScoredMember]) -> Result<Vec<ScoredMember>, SelectionError> {
        self.positions
            .iter()
            .map(|&index| {
                roster
                    .get(index)
                    .cloned()
                    .ok_or(SelectionError::OutOfRange {
                        index,
                        len: roster.len(),
                    })
            })
            .collect()
    }
}
