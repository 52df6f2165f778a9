use crate::Cell;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Traversal costs by perceived cell content.
///
/// Hazards and obstacles are always `f64::INFINITY` and are not configurable. Unknown cells are
/// looked up as [`Cell::Free`] by the knowledge map, so they cost `free`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostModel {
    /// Goal and strong goal hints.
    pub hint_strong: f64,
    /// Mixed goal/hazard hints.
    pub hint_weak: f64,
    pub hazard_hint: f64,
    /// Baseline step cost (free and unknown cells).
    pub free: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            hint_strong: 0.5,
            hint_weak: 5.0,
            hazard_hint: 10.0,
            free: 1.0,
        }
    }
}

impl CostModel {
    pub fn cost(&self, cell: Cell) -> f64 {
        match cell {
            Cell::Goal | Cell::HintStrong => self.hint_strong,
            Cell::HintWeak => self.hint_weak,
            Cell::Free => self.free,
            Cell::HazardHint => self.hazard_hint,
            Cell::Hazard | Cell::Obstacle => f64::INFINITY,
        }
    }

    /// Preference order for the no-path fallback chooser, lowest first.
    ///
    /// Hazard and obstacle carry a rank but callers exclude them before ranking.
    pub fn priority_rank(&self, cell: Cell) -> u32 {
        match cell {
            Cell::Goal => 0,
            Cell::HintStrong => 1,
            Cell::Free | Cell::HintWeak => 2,
            Cell::HazardHint => 3,
            Cell::Hazard => 4,
            Cell::Obstacle => 5,
        }
    }

    pub fn is_passable(&self, cell: Cell) -> bool {
        self.cost(cell).is_finite()
    }
}
