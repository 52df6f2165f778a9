use hunt_core::CostModel;
use hunt_nav::{FallbackConfig, PlannerConfig};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Global seed; each agent derives its own jitter streams from it and its id.
    pub seed: u64,
    pub costs: CostModel,
    pub planner: PlannerConfig,
    pub fallback: FallbackConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            costs: CostModel::default(),
            planner: PlannerConfig::default(),
            fallback: FallbackConfig::default(),
        }
    }
}

impl AgentConfig {
    /// Same config with all tie-break jitter disabled.
    pub fn without_jitter(mut self) -> Self {
        self.planner.jitter = 0.0;
        self.fallback.jitter = 0.0;
        self
    }
}
