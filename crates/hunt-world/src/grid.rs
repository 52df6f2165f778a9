use std::collections::BTreeSet;

use hunt_core::{Bounds, Cell, Coord, DeterministicRng, MoveOutcome, Percept, WorldMut, WorldView};

use crate::{MixedHintPolicy, Result, WorldConfig, WorldError};

/// The true grid plus the cells agents have occupied so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridWorld {
    bounds: Bounds,
    cells: Vec<Cell>,
    start: Coord,
    goal: Coord,
    occupied: BTreeSet<Coord>,
}

impl GridWorld {
    /// Build a random world.
    ///
    /// Placement order: goal (row >= 1) and its 8 surrounding goal hints, then hazards
    /// (row >= 1, col >= 1) each with its ring of hazard hints, then obstacles (col >= 1).
    /// Hazards and obstacles only land on free cells and never on the start.
    pub fn generate<R>(config: &WorldConfig, rng: &mut R) -> Result<Self>
    where
        R: DeterministicRng + ?Sized,
    {
        if config.rows < 2 || config.cols < 2 {
            return Err(WorldError::InvalidDimensions {
                rows: config.rows,
                cols: config.cols,
            });
        }
        let bounds = Bounds::new(config.rows, config.cols);
        if !bounds.contains(config.start) {
            return Err(WorldError::StartOutOfBounds(config.start));
        }

        let mut grid = Placer {
            bounds,
            cells: vec![Cell::Free; bounds.len()],
            max_attempts: config.max_placement_attempts.max(1),
        };

        let goal = grid.pick(rng, "goal", 1, 0, |at, _| at != config.start)?;
        grid.set(goal, Cell::Goal);
        for at in goal.ring() {
            if bounds.contains(at) {
                grid.set(at, Cell::HintStrong);
            }
        }

        let hazards = rng.next_in_range(config.hazards.min, config.hazards.max);
        for _ in 0..hazards {
            let pit = grid.pick(rng, "hazard", 1, 1, |at, cell| {
                at != config.start && cell == Cell::Free
            })?;
            grid.set(pit, Cell::Hazard);
            for at in pit.ring() {
                if let Some(cell) = grid.get(at) {
                    grid.set(at, hazard_hint_over(cell, config.mixed_hints));
                }
            }
        }

        let obstacles = rng.next_in_range(config.obstacles.min, config.obstacles.max);
        for _ in 0..obstacles {
            let block = grid.pick(rng, "obstacle", 0, 1, |at, cell| {
                at != config.start && cell == Cell::Free
            })?;
            grid.set(block, Cell::Obstacle);
        }

        tracing::debug!(
            rows = config.rows,
            cols = config.cols,
            %goal,
            hazards,
            obstacles,
            "generated world"
        );

        Ok(Self {
            bounds,
            cells: grid.cells,
            start: config.start,
            goal,
            occupied: BTreeSet::from([config.start]),
        })
    }

    /// Parse a world from rows of cell glyphs (see [`Cell::glyph`]; `.` also reads as free).
    ///
    /// Empty lines are skipped. Exactly one goal is required.
    pub fn from_ascii(map: &str, start: Coord) -> Result<Self> {
        let rows: Vec<&str> = map
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(WorldError::EmptyMap);
        };

        let width = first.chars().count();
        let mut cells = Vec::with_capacity(rows.len() * width);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(WorldError::RaggedRows {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                let cell =
                    Cell::from_glyph(glyph).ok_or(WorldError::UnknownGlyph { glyph, row, col })?;
                cells.push(cell);
            }
        }

        let bounds = Bounds::new(rows.len() as u32, width as u32);
        let goals: Vec<usize> = cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Goal)
            .map(|(idx, _)| idx)
            .collect();
        let goal = match goals.as_slice() {
            [] => return Err(WorldError::MissingGoal),
            [idx] => bounds.coord(*idx),
            many => return Err(WorldError::MultipleGoals(many.len())),
        };

        let Some(start_idx) = bounds.index(start) else {
            return Err(WorldError::StartOutOfBounds(start));
        };
        if cells[start_idx].is_blocking() {
            return Err(WorldError::StartBlocked {
                at: start,
                cell: cells[start_idx],
            });
        }

        Ok(Self {
            bounds,
            cells,
            start,
            goal,
            occupied: BTreeSet::from([start]),
        })
    }

    /// The true grid as glyph rows joined by `\n`.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.bounds.rows as usize);
        for (idx, cell) in self.cells.iter().enumerate() {
            if idx > 0 && idx % self.bounds.cols as usize == 0 {
                out.push('\n');
            }
            out.push(cell.glyph());
        }
        out
    }

    pub fn cell(&self, at: Coord) -> Option<Cell> {
        self.bounds.index(at).map(|idx| self.cells[idx])
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// Every cell some agent has stood on, including the start.
    pub fn occupied(&self) -> &BTreeSet<Coord> {
        &self.occupied
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }
}

impl WorldView for GridWorld {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn percept(&self, at: Coord) -> Percept {
        Percept::new(
            self.bounds
                .neighbors(at)
                .filter_map(|n| self.cell(n).map(|cell| (n, cell)))
                .collect(),
        )
    }
}

impl WorldMut for GridWorld {
    fn commit_move(&mut self, to: Coord) -> MoveOutcome {
        let Some(cell) = self.cell(to) else {
            return MoveOutcome::Invalid;
        };
        if to == self.goal {
            self.occupied.insert(to);
            return MoveOutcome::GoalReached;
        }
        match cell {
            Cell::Hazard => MoveOutcome::HazardDeath,
            Cell::Obstacle => MoveOutcome::Invalid,
            _ => {
                self.occupied.insert(to);
                MoveOutcome::Ok
            }
        }
    }
}

/// What a cell in a hazard's ring becomes.
fn hazard_hint_over(cell: Cell, policy: MixedHintPolicy) -> Cell {
    match cell {
        Cell::Free => Cell::HazardHint,
        Cell::HintStrong => match policy {
            MixedHintPolicy::Downgrade => Cell::HazardHint,
            MixedHintPolicy::Preserve => Cell::HintWeak,
        },
        other => other,
    }
}

struct Placer {
    bounds: Bounds,
    cells: Vec<Cell>,
    max_attempts: u32,
}

impl Placer {
    fn get(&self, at: Coord) -> Option<Cell> {
        self.bounds.index(at).map(|idx| self.cells[idx])
    }

    fn set(&mut self, at: Coord, cell: Cell) {
        if let Some(idx) = self.bounds.index(at) {
            self.cells[idx] = cell;
        }
    }

    /// Rejection-sample a coordinate with `row >= min_row` and `col >= min_col` accepted by
    /// `accept`.
    fn pick<R>(
        &self,
        rng: &mut R,
        what: &'static str,
        min_row: u32,
        min_col: u32,
        accept: impl Fn(Coord, Cell) -> bool,
    ) -> Result<Coord>
    where
        R: DeterministicRng + ?Sized,
    {
        for _ in 0..self.max_attempts {
            let row = rng.next_in_range(min_row, self.bounds.rows - 1);
            let col = rng.next_in_range(min_col, self.bounds.cols - 1);
            let at = Coord::new(row as i32, col as i32);
            if let Some(cell) = self.get(at) {
                if accept(at, cell) {
                    return Ok(at);
                }
            }
        }
        Err(WorldError::PlacementExhausted {
            what,
            attempts: self.max_attempts,
        })
    }
}
