#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Content of a grid cell, as stored in the true grid or perceived by an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Cell {
    /// The treasure. Exactly one per world.
    Goal,
    /// Adjacent to the goal.
    HintStrong,
    /// Adjacent to both the goal and a hazard.
    HintWeak,
    #[default]
    Free,
    /// Adjacent to a hazard.
    HazardHint,
    /// A pit; entering it kills the agent.
    Hazard,
    /// Impassable.
    Obstacle,
}

impl Cell {
    pub const ALL: [Cell; 7] = [
        Cell::Goal,
        Cell::HintStrong,
        Cell::HintWeak,
        Cell::Free,
        Cell::HazardHint,
        Cell::Hazard,
        Cell::Obstacle,
    ];

    pub fn glyph(self) -> char {
        match self {
            Cell::Goal => 'T',
            Cell::HintStrong => '+',
            Cell::HintWeak => '±',
            Cell::Free => ' ',
            Cell::HazardHint => '-',
            Cell::Hazard => 'P',
            Cell::Obstacle => 'X',
        }
    }

    /// Inverse of [`Cell::glyph`]; `.` is accepted as free so maps survive editors that trim
    /// trailing spaces.
    pub fn from_glyph(ch: char) -> Option<Cell> {
        match ch {
            'T' => Some(Cell::Goal),
            '+' => Some(Cell::HintStrong),
            '±' => Some(Cell::HintWeak),
            ' ' | '.' => Some(Cell::Free),
            '-' => Some(Cell::HazardHint),
            'P' => Some(Cell::Hazard),
            'X' => Some(Cell::Obstacle),
            _ => None,
        }
    }

    /// Cells an agent must never be routed onto.
    pub fn is_blocking(self) -> bool {
        matches!(self, Cell::Hazard | Cell::Obstacle)
    }

    /// Hints that point at the goal (strong or mixed).
    pub fn is_goal_hint(self) -> bool {
        matches!(self, Cell::HintStrong | Cell::HintWeak)
    }
}

impl core::fmt::Display for Cell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Cell::Goal => "goal",
            Cell::HintStrong => "hint_strong",
            Cell::HintWeak => "hint_weak",
            Cell::Free => "free",
            Cell::HazardHint => "hazard_hint",
            Cell::Hazard => "hazard",
            Cell::Obstacle => "obstacle",
        };
        f.write_str(name)
    }
}
