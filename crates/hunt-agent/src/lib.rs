//! The exploring agent: owns its knowledge and visited cells, replans on every decision, and
//! falls back to a local safe step when no plan is actionable.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod config;
pub mod id;
pub mod turn;

pub use agent::{Agent, Decision, DecisionReason};
pub use config::AgentConfig;
pub use id::AgentId;
pub use turn::{step_agents, TurnReport};
