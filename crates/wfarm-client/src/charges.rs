//! Charge tracking
//!
//! One operation: pull `/me` and fold it into the session. An unavailable
//! backend is a silent no-op - the prior budget stays in place and the
//! caller keeps working from stale numbers until the next refresh lands.

use crate::api::PlaceApi;
use wfarm_core::{ChargeBudget, SessionState};

/// Refresh the session's charge budget and profile from the backend
///
/// On success, overwrites `state.charges` (floored count/max, raw cooldown)
/// and `state.profile`. On failure, leaves prior state untouched. Either
/// way, returns the budget the caller should plan against.
pub async fn refresh_charges<A: PlaceApi + ?Sized>(
    api: &A,
    state: &mut SessionState,
) -> ChargeBudget {
    if let Some(me) = api.fetch_me().await {
        state.charges = me.budget();
        state.profile = Some(me.profile());
        tracing::debug!(
            "Charges refreshed: {}/{} (cooldown {}ms)",
            state.charges.count,
            state.charges.max,
            state.charges.cooldown_ms
        );
    } else {
        tracing::debug!("Status fetch unavailable, keeping stale charges");
    }
    state.charges
}
