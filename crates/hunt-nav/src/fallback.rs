use hunt_core::{Coord, CostModel, DeterministicRng, KnowledgeMap, VisitedSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Jitter;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FallbackConfig {
    /// Added per prior occupancy of a neighbour.
    pub loop_penalty: f64,
    /// Upper bound of the random tie-break. Kept below 1 so it never overrides a rank step.
    pub jitter: f64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            loop_penalty: 5.0,
            jitter: 0.5,
        }
    }
}

/// Local greedy chooser used when search yields nothing actionable.
#[derive(Debug, Clone, Default)]
pub struct FallbackChooser {
    costs: CostModel,
    config: FallbackConfig,
}

impl FallbackChooser {
    pub fn new(costs: CostModel) -> Self {
        Self {
            costs,
            config: FallbackConfig::default(),
        }
    }

    pub fn with_config(mut self, config: FallbackConfig) -> Self {
        self.config = config;
        self
    }

    /// Best-scored in-bounds neighbour of `current` that is not a known hazard or obstacle.
    ///
    /// Score is `priority_rank + loop_penalty * occupancies + jitter`, lowest wins; earlier
    /// neighbours (N, E, S, W) win exact ties. Returns `current` when every neighbour is
    /// blocked, meaning the agent stays put.
    pub fn safe_step<R>(
        &self,
        knowledge: &KnowledgeMap,
        visited: &VisitedSet,
        current: Coord,
        rng: &mut R,
    ) -> Coord
    where
        R: DeterministicRng + ?Sized,
    {
        let jitter = Jitter::new(self.config.jitter);
        let mut best: Option<(f64, Coord)> = None;

        for n in knowledge.bounds().neighbors(current) {
            let cell = knowledge.lookup(n);
            if cell.is_blocking() {
                continue;
            }
            let score = f64::from(self.costs.priority_rank(cell))
                + self.config.loop_penalty * f64::from(visited.count(n))
                + jitter.sample(rng);
            if best.map_or(true, |(s, _)| score < s) {
                best = Some((score, n));
            }
        }

        match best {
            Some((_, at)) => at,
            None => {
                tracing::debug!(%current, "no safe neighbour, staying in place");
                current
            }
        }
    }
}
