//! # wfarm-core
//!
//! Core types for the wfarm pixel-farming client.
//!
//! The model is deliberately small:
//!
//! - [`SessionState`] is the single mutable record for a farming session,
//!   owned by the loop driver and read by the reporter.
//! - [`ChargeBudget`] tracks the rate-limiting resource the backend grants;
//!   it is normalized (floored) exactly once, at the ingestion boundary.
//! - [`FarmConfig`] is the fixed in-process configuration record (tile
//!   origin, delay, palette size), loadable from `wfarm.toml`.

mod config;
mod error;
mod types;

pub use config::{FarmConfig, ThemeConfig};
pub use error::{FarmError, Result};
pub use types::*;
