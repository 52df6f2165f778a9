#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Grid coordinate, 0-indexed `(row, col)`.
///
/// Signed so neighbour arithmetic can step off the grid; [`Bounds`] decides what is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn manhattan(self, other: Coord) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// 4-connected neighbours in a fixed order for determinism: N, E, S, W.
    ///
    /// Not bounds-checked; see [`Bounds::neighbors`].
    pub fn neighbors(self) -> [Coord; 4] {
        [
            Coord::new(self.row - 1, self.col),
            Coord::new(self.row, self.col + 1),
            Coord::new(self.row + 1, self.col),
            Coord::new(self.row, self.col - 1),
        ]
    }

    /// 8-connected ring around `self`, row-major, excluding `self`.
    pub fn ring(self) -> impl Iterator<Item = Coord> {
        (-1..=1).flat_map(move |dr| {
            (-1..=1)
                .filter(move |&dc| dr != 0 || dc != 0)
                .map(move |dc| Coord::new(self.row + dr, self.col + dc))
        })
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl core::fmt::Display for Coord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Grid dimensions: `rows` × `cols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    pub rows: u32,
    pub cols: u32,
}

impl Bounds {
    pub fn new(rows: u32, cols: u32) -> Self {
        assert!(rows > 0 && cols > 0, "grid must be non-empty");
        assert!(
            rows <= i32::MAX as u32 && cols <= i32::MAX as u32,
            "grid dimensions must fit in i32"
        );
        Self { rows, cols }
    }

    pub fn len(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && (c.row as u32) < self.rows && (c.col as u32) < self.cols
    }

    /// Dense row-major index, or `None` when out of bounds.
    pub fn index(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    pub fn coord(&self, idx: usize) -> Coord {
        let cols = self.cols as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// In-bounds 4-connected neighbours of `c` (N, E, S, W order).
    pub fn neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        c.neighbors().into_iter().filter(move |n| self.contains(*n))
    }

    /// Largest Manhattan distance between two cells of the grid.
    pub fn diameter(&self) -> u32 {
        self.rows.saturating_sub(1) + self.cols.saturating_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.len()).map(move |idx| self.coord(idx))
    }
}
