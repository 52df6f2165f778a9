//! Deterministic, engine-agnostic primitives for partially observable grid exploration.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod cell;
pub mod coord;
pub mod cost;
pub mod knowledge;
pub mod rng;
pub mod visited;
pub mod world;

pub use cell::Cell;
pub use coord::{Bounds, Coord};
pub use cost::CostModel;
pub use knowledge::KnowledgeMap;
pub use rng::{DeterministicRng, SplitMix64};
pub use visited::VisitedSet;
pub use world::{MoveOutcome, Percept, WorldMut, WorldView};
