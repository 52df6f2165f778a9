//! The environment side of a hunt: holds the true grid, answers percepts and commits moves.
//!
//! Agents only ever see this crate through the `WorldView`/`WorldMut` traits from `hunt-core`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod grid;

pub use config::{CountRange, MixedHintPolicy, WorldConfig};
pub use error::{Result, WorldError};
pub use grid::GridWorld;
