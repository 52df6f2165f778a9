use hunt_core::{Coord, MoveOutcome, WorldMut};

use crate::{Agent, AgentId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub agent: AgentId,
    pub from: Coord,
    pub target: Coord,
    pub outcome: MoveOutcome,
}

impl Agent {
    /// One decision cycle plus its commit.
    pub fn take_turn<W: WorldMut + ?Sized>(&mut self, world: &mut W) -> TurnReport {
        let from = self.position();
        let target = self.decide(&*world);
        let outcome = world.commit_move(target);
        self.apply_outcome(target, outcome);

        tracing::debug!(
            agent = self.id().get(),
            %from,
            %target,
            ?outcome,
            "committed move"
        );

        TurnReport {
            agent: self.id(),
            from,
            target,
            outcome,
        }
    }
}

/// Advance every agent by one turn against a shared world.
///
/// Agents go in ascending id order and each move is committed before the next agent
/// decides, so later agents see the world as left by earlier ones.
pub fn step_agents<W>(world: &mut W, agents: &mut [Agent]) -> Vec<TurnReport>
where
    W: WorldMut + ?Sized,
{
    agents.sort_by_key(Agent::id);
    agents.iter_mut().map(|agent| agent.take_turn(world)).collect()
}
