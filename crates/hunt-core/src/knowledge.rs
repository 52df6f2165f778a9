use std::collections::BTreeMap;

use crate::{Bounds, Cell, Coord};

/// An agent's accumulated partial view of the grid.
///
/// Entries are only inserted or overwritten by newer observations, never removed. Coordinates
/// that were never observed read as [`Cell::Free`] so the planner explores optimistically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeMap {
    bounds: Bounds,
    origin: Coord,
    cells: BTreeMap<Coord, Cell>,
}

impl KnowledgeMap {
    /// Knowledge seeded with the agent's starting cell marked free.
    pub fn new(bounds: Bounds, origin: Coord) -> Self {
        let mut cells = BTreeMap::new();
        if bounds.contains(origin) {
            cells.insert(origin, Cell::Free);
        }
        Self {
            bounds,
            origin,
            cells,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Coordinate the map was seeded with.
    pub fn origin(&self) -> Coord {
        self.origin
    }

    /// Record `cell` at `at`, replacing any older observation. Out-of-bounds observations are
    /// ignored.
    pub fn observe(&mut self, at: Coord, cell: Cell) {
        if self.bounds.contains(at) {
            self.cells.insert(at, cell);
        }
    }

    /// Record `cell` only if nothing is known about `at` yet.
    pub fn observe_if_unknown(&mut self, at: Coord, cell: Cell) {
        if self.bounds.contains(at) {
            self.cells.entry(at).or_insert(cell);
        }
    }

    pub fn lookup(&self, at: Coord) -> Cell {
        self.get(at).unwrap_or(Cell::Free)
    }

    /// Stored observation, `None` when `at` was never observed.
    pub fn get(&self, at: Coord) -> Option<Cell> {
        self.cells.get(&at).copied()
    }

    pub fn is_known(&self, at: Coord) -> bool {
        self.cells.contains_key(&at)
    }

    pub fn find_goal(&self) -> Option<Coord> {
        self.cells
            .iter()
            .find(|(_, cell)| **cell == Cell::Goal)
            .map(|(at, _)| *at)
    }

    /// Manhattan distance from `from` to the closest stored goal hint.
    pub fn nearest_hint_distance(&self, from: Coord) -> Option<u32> {
        self.hints().map(|at| at.manhattan(from)).min()
    }

    pub fn hints(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .filter(|(_, cell)| cell.is_goal_hint())
            .map(|(at, _)| *at)
    }

    /// A goal hint that still has an unobserved in-bounds neighbour; standing next to it can
    /// still reveal something.
    pub fn is_unresolved_hint(&self, at: Coord) -> bool {
        self.get(at).is_some_and(Cell::is_goal_hint)
            && self.bounds.neighbors(at).any(|n| !self.is_known(n))
    }

    pub fn has_unresolved_hints(&self) -> bool {
        self.hints().any(|at| self.is_unresolved_hint(at))
    }

    pub fn known_len(&self) -> usize {
        self.cells.len()
    }
}
