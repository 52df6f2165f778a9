use core::cmp::Ordering;
use std::collections::BinaryHeap;

use hunt_core::{Bounds, Cell, Coord, CostModel, DeterministicRng, KnowledgeMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Jitter;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// A cell whose cost was improved more than this many times in one search is not expanded
    /// again.
    pub max_local_visits: u32,
    /// Added per prior improvement of a neighbour within the same search.
    pub revisit_penalty: f64,
    /// Upper bound of the random tie-break added to frontier priorities.
    pub jitter: f64,
    /// Weight of the preference for cells far from the knowledge origin when no hint is known.
    /// Must stay well below the smallest step cost divided by the grid diameter.
    pub outward_bias: f64,
    pub max_expansions: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_local_visits: 3,
            revisit_penalty: 2.0,
            jitter: 1e-6,
            outward_bias: 1e-3,
            max_expansions: 1 << 20,
        }
    }
}

/// Coordinates from the current position to a target, both inclusive.
///
/// Empty when no target is reachable under current knowledge. A single entry means the target
/// is the goal itself, already in sight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanResult {
    pub cells: Vec<Coord>,
}

impl PlanResult {
    pub fn new(cells: Vec<Coord>) -> Self {
        Self { cells }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// First step after the current position, if the plan is actionable.
    pub fn next_step(&self) -> Option<Coord> {
        self.cells.get(1).copied()
    }

    pub fn target(&self) -> Option<Coord> {
        self.cells.last().copied()
    }

    /// Cells strictly between the start and the target.
    pub fn interior(&self) -> &[Coord] {
        if self.cells.len() < 2 {
            return &[];
        }
        &self.cells[1..self.cells.len() - 1]
    }
}

#[derive(Debug)]
struct OpenNode {
    f: f64,
    g: f64,
    idx: usize,
    tie: u64,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.g.total_cmp(&self.g))
            .then_with(|| other.tie.cmp(&self.tie))
    }
}

/// What terminates a search pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    /// The goal, or a goal hint that still borders unobserved cells.
    Hints,
    /// The goal, or any unobserved cell.
    Frontier,
}

impl Target {
    fn matches(self, knowledge: &KnowledgeMap, at: Coord) -> bool {
        match knowledge.get(at) {
            Some(Cell::Goal) => true,
            Some(_) if self == Target::Hints => knowledge.is_unresolved_hint(at),
            Some(_) => false,
            None => self == Target::Frontier,
        }
    }
}

struct Heuristic {
    goal: Option<Coord>,
    hints: Vec<Coord>,
    origin: Coord,
    diameter: u32,
    outward_bias: f64,
}

impl Heuristic {
    fn new(knowledge: &KnowledgeMap, outward_bias: f64) -> Self {
        Self {
            goal: knowledge.find_goal(),
            hints: knowledge.hints().collect(),
            origin: knowledge.origin(),
            diameter: knowledge.bounds().diameter(),
            outward_bias,
        }
    }

    fn estimate(&self, at: Coord) -> f64 {
        if let Some(goal) = self.goal {
            return f64::from(at.manhattan(goal));
        }
        if let Some(d) = self.hints.iter().map(|h| at.manhattan(*h)).min() {
            return f64::from(d);
        }
        let inward = self.diameter.saturating_sub(at.manhattan(self.origin));
        self.outward_bias * f64::from(inward)
    }
}

/// Best-first (A*) search over a [`KnowledgeMap`] on the 4-connected grid.
#[derive(Debug, Clone)]
pub struct PathPlanner {
    costs: CostModel,
    config: PlannerConfig,
}

impl Default for PathPlanner {
    fn default() -> Self {
        Self::new(CostModel::default())
    }
}

impl PathPlanner {
    pub fn new(costs: CostModel) -> Self {
        Self {
            costs,
            config: PlannerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Plan from `start` under current knowledge.
    ///
    /// A goal already in the map is returned as a one-element plan. Otherwise the search heads
    /// for the nearest goal hint that can still reveal something, and failing that for the
    /// nearest unobserved cell. Known hazards and obstacles never appear on the returned path.
    pub fn search<R>(&self, knowledge: &KnowledgeMap, start: Coord, rng: &mut R) -> PlanResult
    where
        R: DeterministicRng + ?Sized,
    {
        if let Some(goal) = knowledge.find_goal() {
            return PlanResult::new(vec![goal]);
        }
        if !knowledge.bounds().contains(start) {
            return PlanResult::empty();
        }

        if knowledge.has_unresolved_hints() {
            let plan = self.a_star(knowledge, start, Target::Hints, rng);
            if !plan.is_empty() {
                return plan;
            }
        }
        self.a_star(knowledge, start, Target::Frontier, rng)
    }

    fn a_star<R>(
        &self,
        knowledge: &KnowledgeMap,
        start: Coord,
        target: Target,
        rng: &mut R,
    ) -> PlanResult
    where
        R: DeterministicRng + ?Sized,
    {
        let bounds = knowledge.bounds();
        let Some(start_idx) = bounds.index(start) else {
            return PlanResult::empty();
        };

        let heuristic = Heuristic::new(knowledge, self.config.outward_bias);
        let jitter = Jitter::new(self.config.jitter);

        let mut open = BinaryHeap::<OpenNode>::new();
        let mut tie: u64 = 0;

        let mut g_score = vec![f64::INFINITY; bounds.len()];
        let mut came_from: Vec<Option<usize>> = vec![None; bounds.len()];
        // Per-search improvement counts; unrelated to the agent's lifetime visited set.
        let mut local_visits = vec![0u32; bounds.len()];

        g_score[start_idx] = 0.0;
        open.push(OpenNode {
            f: 0.0,
            g: 0.0,
            idx: start_idx,
            tie,
        });
        tie += 1;

        let mut expansions: usize = 0;
        let mut suppressed: usize = 0;

        while let Some(node) = open.pop() {
            if node.g > g_score[node.idx] {
                // Stale heap entry.
                continue;
            }

            let at = bounds.coord(node.idx);
            if node.idx != start_idx && target.matches(knowledge, at) {
                let path = reconstruct_path(bounds, &came_from, node.idx);
                tracing::trace!(
                    ?target,
                    expansions,
                    suppressed,
                    path_len = path.len(),
                    "search reached target"
                );
                return PlanResult::new(path);
            }

            if local_visits[node.idx] > self.config.max_local_visits {
                suppressed += 1;
                continue;
            }

            expansions += 1;
            if expansions > self.config.max_expansions {
                break;
            }

            for n in bounds.neighbors(at) {
                let step = self.costs.cost(knowledge.lookup(n));
                if !step.is_finite() {
                    continue;
                }
                let Some(n_idx) = bounds.index(n) else {
                    continue;
                };

                let penalty = self.config.revisit_penalty * f64::from(local_visits[n_idx]);
                let tentative_g = node.g + step + penalty;
                if tentative_g >= g_score[n_idx] {
                    continue;
                }

                g_score[n_idx] = tentative_g;
                came_from[n_idx] = Some(node.idx);
                local_visits[n_idx] += 1;

                open.push(OpenNode {
                    f: tentative_g + heuristic.estimate(n) + jitter.sample(rng),
                    g: tentative_g,
                    idx: n_idx,
                    tie,
                });
                tie += 1;
            }
        }

        tracing::trace!(?target, expansions, suppressed, "search exhausted");
        PlanResult::empty()
    }
}

fn reconstruct_path(bounds: Bounds, came_from: &[Option<usize>], mut current: usize) -> Vec<Coord> {
    let mut out = vec![bounds.coord(current)];
    while let Some(prev) = came_from[current] {
        current = prev;
        out.push(bounds.coord(current));
    }
    out.reverse();
    out
}
