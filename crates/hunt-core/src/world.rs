use crate::{Bounds, Cell, Coord};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Contents of the in-bounds 4-connected neighbours of a position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Percept {
    pub cells: Vec<(Coord, Cell)>,
}

impl Percept {
    pub fn new(cells: Vec<(Coord, Cell)>) -> Self {
        Self { cells }
    }

    pub fn get(&self, at: Coord) -> Option<Cell> {
        self.cells
            .iter()
            .find(|(c, _)| *c == at)
            .map(|(_, cell)| *cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Result of asking the environment to place an agent on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MoveOutcome {
    Ok,
    GoalReached,
    /// The target was a hazard; the agent is not moved.
    HazardDeath,
    /// Out of bounds or blocked; the agent is not moved.
    Invalid,
}

impl MoveOutcome {
    /// Whether the agent now occupies the requested cell.
    pub fn moved(self) -> bool {
        matches!(self, MoveOutcome::Ok | MoveOutcome::GoalReached)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, MoveOutcome::GoalReached | MoveOutcome::HazardDeath)
    }
}

/// Read-only environment access: what an agent can sense.
pub trait WorldView {
    fn bounds(&self) -> Bounds;

    /// Must only report in-bounds coordinates.
    fn percept(&self, at: Coord) -> Percept;
}

/// Move commits. Implementations serialise commits so outcomes follow turn order.
pub trait WorldMut: WorldView {
    fn commit_move(&mut self, to: Coord) -> MoveOutcome;
}
