//! The paint loop
//!
//! Each iteration either waits out the charge cooldown or spends exactly one
//! charge on a random pixel. The local charge count is authoritative between
//! refreshes: it is decremented only after a confirmed success and the loop
//! never acts while it is below one, so bookkeeping cannot go negative even
//! when it drifts from the server's true value.

use crate::phase::LoopPhase;
use crate::reporter::{
    failure_message, render_stats, success_message, waiting_message, StatusKind, StatusSink,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use wfarm_client::{paint_once, refresh_charges, PlaceApi};
use wfarm_core::{FarmConfig, PaintedPixel, SessionState};

/// Summary of a finished loop run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoopResult {
    /// Iterations started (waiting iterations included)
    pub iterations: u64,
    /// Confirmed paints over the whole session
    pub painted: u64,
}

/// Charge-aware polling loop
///
/// Owns the session state for the duration of the run; the sink only ever
/// sees rendered strings. The run flag is shared so a signal handler can
/// clear it, and it is checked once per iteration boundary only - an
/// in-flight sleep or request finishes before the loop notices.
pub struct PaintLoop<A: PlaceApi, S: StatusSink> {
    api: A,
    config: FarmConfig,
    state: SessionState,
    run_flag: Arc<AtomicBool>,
    sink: S,
    phase: LoopPhase,
}

impl<A: PlaceApi, S: StatusSink> PaintLoop<A, S> {
    pub fn new(
        api: A,
        config: FarmConfig,
        state: SessionState,
        run_flag: Arc<AtomicBool>,
        sink: S,
    ) -> Self {
        Self {
            api,
            config,
            state,
            run_flag,
            sink,
            phase: LoopPhase::Idle,
        }
    }

    /// Current phase of the cycle
    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    /// Read-only view of the session state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Give the session state back after a run
    pub fn into_state(self) -> SessionState {
        self.state
    }

    /// Run until the run flag is cleared
    ///
    /// There is no terminal success condition; only external cancellation
    /// ends the loop.
    pub async fn run(&mut self) -> LoopResult {
        info!(
            "Paint loop started on tile ({}, {})",
            self.config.start_x, self.config.start_y
        );

        let mut iterations: u64 = 0;
        while self.run_flag.load(Ordering::SeqCst) {
            iterations += 1;
            let charges = self.state.charges;

            if charges.count < 1 {
                self.phase = LoopPhase::WaitingForCharge;
                debug!(
                    "No charges, waiting {}ms (iteration {})",
                    charges.cooldown_ms, iterations
                );
                self.sink.status(
                    &waiting_message(self.state.language, charges.cooldown_ms),
                    StatusKind::Status,
                );
                tokio::time::sleep(Duration::from_millis(charges.cooldown_ms)).await;
                refresh_charges(&self.api, &mut self.state).await;
                continue;
            }

            self.phase = LoopPhase::Acting;
            let (offset, response) = paint_once(&self.api, &self.config).await;

            match response {
                Some(r) if r.is_success() => {
                    self.state.painted_count += 1;
                    self.state.last_pixel = Some(PaintedPixel {
                        x: self.config.start_x + offset.x,
                        y: self.config.start_y + offset.y,
                        time: Utc::now(),
                    });
                    // count >= 1 was checked at the top of the iteration
                    self.state.charges.count -= 1;
                    self.sink.pulse();
                    self.sink
                        .status(success_message(self.state.language), StatusKind::Success);
                }
                _ => {
                    self.sink
                        .status(failure_message(self.state.language), StatusKind::Error);
                }
            }

            self.phase = LoopPhase::CoolingDown;
            tokio::time::sleep(Duration::from_millis(self.config.delay_ms)).await;
            self.refresh_stats().await;
        }

        self.phase = LoopPhase::Idle;
        info!(
            "Paint loop stopped after {} iterations, {} pixels painted",
            iterations, self.state.painted_count
        );
        LoopResult {
            iterations,
            painted: self.state.painted_count,
        }
    }

    /// Re-fetch charges and push a fresh stats summary to the sink
    async fn refresh_stats(&mut self) {
        refresh_charges(&self.api, &mut self.state).await;
        self.sink.stats(&render_stats(&self.state));
    }
}
