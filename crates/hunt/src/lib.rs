//! Umbrella crate that re-exports the `hunt-*` building blocks and loads run configuration.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;

pub use hunt_agent as agent;
pub use hunt_core as core;
pub use hunt_nav as nav;
pub use hunt_world as world;

pub use config::HuntConfig;
