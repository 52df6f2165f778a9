use hunt_core::{Cell, Coord};
use thiserror::Error;

/// Errors while building a world
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("generated grids must be at least 2x2, got {rows}x{cols}")]
    InvalidDimensions { rows: u32, cols: u32 },

    #[error("map has no rows")]
    EmptyMap,

    #[error("start {0} is outside the grid")]
    StartOutOfBounds(Coord),

    #[error("start {at} is a {cell} cell")]
    StartBlocked { at: Coord, cell: Cell },

    #[error("unknown glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph { glyph: char, row: usize, col: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("map has no goal cell")]
    MissingGoal,

    #[error("map has {0} goal cells, expected exactly one")]
    MultipleGoals(usize),

    #[error("could not place {what} after {attempts} attempts")]
    PlacementExhausted { what: &'static str, attempts: u32 },
}

pub type Result<T> = std::result::Result<T, WorldError>;
