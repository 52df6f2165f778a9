#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies an agent within a run.
///
/// Orders turns in [`step_agents`](crate::step_agents) and, together with the run seed, picks the
/// agent's jitter streams, so two agents with the same id behave identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AgentId(pub u64);

impl AgentId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for AgentId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl core::fmt::Display for AgentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "agent#{}", self.0)
    }
}
