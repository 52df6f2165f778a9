//! Run configuration, loaded from `.hunt/config.yaml`.

use std::path::Path;

use anyhow::{Context, Result};
use hunt_agent::{Agent, AgentConfig, AgentId};
use hunt_core::rng::derive_seed;
use hunt_core::{SplitMix64, WorldView};
use hunt_world::{GridWorld, WorldConfig};
use serde::{Deserialize, Serialize};

/// Relative to the directory passed to [`HuntConfig::load_from_dir`].
pub const CONFIG_PATH: &str = ".hunt/config.yaml";

// Agent streams are 1 and 2.
const WORLD_STREAM: u64 = u64::MAX;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HuntConfig {
    /// Seeds world generation and every agent's jitter streams.
    pub seed: u64,

    /// Turn limit for whoever drives the run. Nothing in the library loops on it.
    #[serde(default = "default_max_turns")]
    pub max_turns: u32,

    pub world: WorldConfig,

    /// `agent.seed` is ignored in favour of the top-level `seed`.
    pub agent: AgentConfig,
}

fn default_max_turns() -> u32 {
    100
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_turns: default_max_turns(),
            world: WorldConfig::default(),
            agent: AgentConfig::default(),
        }
    }
}

impl HuntConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        tracing::debug!(path = %path.display(), seed = config.seed, "loaded hunt config");
        Ok(config)
    }

    /// Load `.hunt/config.yaml` under `root`, or defaults if there is none.
    pub fn load_from_dir(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_PATH);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// The agent configuration with the run seed applied.
    pub fn agent_config(&self) -> AgentConfig {
        AgentConfig {
            seed: self.seed,
            ..self.agent
        }
    }

    /// Generate the world for this run; the same seed yields the same world.
    pub fn generate_world(&self) -> Result<GridWorld> {
        let mut rng = SplitMix64::new(derive_seed(self.seed, 0, WORLD_STREAM));
        GridWorld::generate(&self.world, &mut rng).with_context(|| {
            format!(
                "Failed to generate a {}x{} world with seed {}",
                self.world.rows, self.world.cols, self.seed
            )
        })
    }

    /// An agent standing on the world's start cell.
    pub fn spawn_agent(&self, id: AgentId, world: &GridWorld) -> Agent {
        Agent::new(id, world.start(), world.bounds(), self.agent_config())
    }
}
