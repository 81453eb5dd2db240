//! # wfarm-engine
//!
//! The paint loop and its reporting.
//!
//! [`PaintLoop`] owns the session state and runs the charge-aware cycle:
//! wait out the cooldown when charges are exhausted, otherwise spend one
//! charge on a random pixel, then pace itself with a fixed delay and a
//! stats refresh. Cancellation is cooperative - a shared flag checked once
//! per iteration boundary, never mid-sleep or mid-request.
//!
//! Presentation goes through the [`StatusSink`] trait so the engine knows
//! nothing about consoles or panels.

mod loop_engine;
mod phase;
mod reporter;

pub use loop_engine::{LoopResult, PaintLoop};
pub use phase::LoopPhase;
pub use reporter::{
    failure_message, render_stats, success_message, waiting_message, StatusKind, StatusSink,
};
