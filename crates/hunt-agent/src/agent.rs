use hunt_core::rng::derive_seed;
use hunt_core::{Bounds, Cell, Coord, KnowledgeMap, MoveOutcome, SplitMix64, VisitedSet, WorldView};
use hunt_nav::{FallbackChooser, PathPlanner};

use crate::{AgentConfig, AgentId};

const SEARCH_STREAM: u64 = 1;
const FALLBACK_STREAM: u64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecisionReason {
    /// The goal is in the knowledge map; head straight for it.
    GoalInSight,
    /// First step of a search plan.
    Plan,
    /// Local safe step; the target may equal the current position.
    Fallback,
}

impl DecisionReason {
    pub fn as_str(self) -> &'static str {
        match self {
            DecisionReason::GoalInSight => "goal_in_sight",
            DecisionReason::Plan => "plan",
            DecisionReason::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub target: Coord,
    pub reason: DecisionReason,
}

/// A single exploring agent.
///
/// Knowledge and visited cells belong to this agent alone and persist across decisions; plans
/// are recomputed on every decision.
#[derive(Debug, Clone)]
pub struct Agent {
    id: AgentId,
    position: Coord,
    knowledge: KnowledgeMap,
    visited: VisitedSet,
    planner: PathPlanner,
    fallback: FallbackChooser,
    search_rng: SplitMix64,
    fallback_rng: SplitMix64,
}

impl Agent {
    pub fn new(id: AgentId, start: Coord, bounds: Bounds, config: AgentConfig) -> Self {
        let mut visited = VisitedSet::new();
        visited.record(start);
        Self {
            id,
            position: start,
            knowledge: KnowledgeMap::new(bounds, start),
            visited,
            planner: PathPlanner::new(config.costs).with_config(config.planner),
            fallback: FallbackChooser::new(config.costs).with_config(config.fallback),
            search_rng: SplitMix64::new(derive_seed(config.seed, id.get(), SEARCH_STREAM)),
            fallback_rng: SplitMix64::new(derive_seed(config.seed, id.get(), FALLBACK_STREAM)),
        }
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    pub fn knowledge(&self) -> &KnowledgeMap {
        &self.knowledge
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Choose the next cell to move to.
    pub fn decide<W: WorldView + ?Sized>(&mut self, world: &W) -> Coord {
        self.deliberate(world).target
    }

    /// [`Agent::decide`] with the reason for the choice.
    pub fn deliberate<W: WorldView + ?Sized>(&mut self, world: &W) -> Decision {
        let percept = world.percept(self.position);
        for (at, cell) in percept.iter() {
            self.knowledge.observe(at, cell);
        }
        tracing::trace!(
            agent = self.id.get(),
            position = %self.position,
            cells = percept.len(),
            "merged percept"
        );

        let decision = self.choose();
        tracing::debug!(
            agent = self.id.get(),
            position = %self.position,
            target = %decision.target,
            reason = decision.reason.as_str(),
            "decided"
        );
        decision
    }

    fn choose(&mut self) -> Decision {
        if let Some(goal) = self.knowledge.find_goal() {
            return Decision {
                target: goal,
                reason: DecisionReason::GoalInSight,
            };
        }

        let plan = self
            .planner
            .search(&self.knowledge, self.position, &mut self.search_rng);
        if let Some(next) = plan.next_step() {
            if !self.knowledge.lookup(next).is_blocking() {
                return Decision {
                    target: next,
                    reason: DecisionReason::Plan,
                };
            }
            tracing::debug!(
                agent = self.id.get(),
                step = %next,
                "planned step is blocked, falling back"
            );
        }

        let target = self.fallback.safe_step(
            &self.knowledge,
            &self.visited,
            self.position,
            &mut self.fallback_rng,
        );
        Decision {
            target,
            reason: DecisionReason::Fallback,
        }
    }

    /// Record that the agent now stands on `at`.
    pub fn set_position(&mut self, at: Coord) {
        self.position = at;
        self.visited.record(at);
        self.knowledge.observe_if_unknown(at, Cell::Free);
    }

    /// Update position from a committed move; only `Ok` and `GoalReached` move the agent.
    /// Returns whether the agent moved.
    pub fn apply_outcome(&mut self, target: Coord, outcome: MoveOutcome) -> bool {
        if outcome.moved() {
            self.set_position(target);
        }
        outcome.moved()
    }
}
