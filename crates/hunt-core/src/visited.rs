use std::collections::BTreeMap;

use crate::Coord;

/// Cells an agent has physically occupied, with occupancy counts.
///
/// Only feeds loop-avoidance penalties; a visited cell is never forbidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedSet {
    counts: BTreeMap<Coord, u32>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, at: Coord) {
        *self.counts.entry(at).or_insert(0) += 1;
    }

    /// Number of times `at` was occupied.
    pub fn count(&self, at: Coord) -> u32 {
        self.counts.get(&at).copied().unwrap_or(0)
    }

    /// Number of distinct cells occupied.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }
}
