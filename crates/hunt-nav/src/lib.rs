//! Planning over an agent's partial knowledge: informed best-first search and a local
//! safe-step fallback.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod fallback;
pub mod jitter;
pub mod planner;

pub use fallback::{FallbackChooser, FallbackConfig};
pub use jitter::Jitter;
pub use planner::{PathPlanner, PlanResult, PlannerConfig};
