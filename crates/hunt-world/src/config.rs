use hunt_core::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inclusive count range, e.g. how many hazards to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub const fn exactly(n: u32) -> Self {
        Self { min: n, max: n }
    }
}

/// How a cell next to both the goal and a hazard is marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MixedHintPolicy {
    /// The hazard wins: the cell becomes a hazard hint and the goal signal is lost.
    #[default]
    Downgrade,
    /// The cell becomes a weak (mixed) hint.
    Preserve,
}

/// Random world generation parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    pub rows: u32,
    pub cols: u32,
    pub start: Coord,
    pub hazards: CountRange,
    pub obstacles: CountRange,
    pub mixed_hints: MixedHintPolicy,
    /// Rejection-sampling budget per placed item.
    pub max_placement_attempts: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            start: Coord::new(0, 0),
            hazards: CountRange::new(1, 3),
            obstacles: CountRange::new(4, 6),
            mixed_hints: MixedHintPolicy::Downgrade,
            max_placement_attempts: 1_000,
        }
    }
}
