//! Loop phases

use serde::{Deserialize, Serialize};

/// Where the paint loop currently is in its cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopPhase {
    /// Not running; terminal until restarted
    #[default]
    Idle,
    /// Charges exhausted, sleeping out the server-reported cooldown
    WaitingForCharge,
    /// Submitting one paint action
    Acting,
    /// Fixed inter-action delay plus stats refresh
    CoolingDown,
}

impl std::fmt::Display for LoopPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::WaitingForCharge => write!(f, "waiting_for_charge"),
            Self::Acting => write!(f, "acting"),
            Self::CoolingDown => write!(f, "cooling_down"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(LoopPhase::Idle.to_string(), "idle");
        assert_eq!(LoopPhase::WaitingForCharge.to_string(), "waiting_for_charge");
        assert_eq!(LoopPhase::Acting.to_string(), "acting");
        assert_eq!(LoopPhase::CoolingDown.to_string(), "cooling_down");
    }
}
