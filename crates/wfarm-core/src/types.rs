//! Core type definitions for the farming session

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display language for status messages and stats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl Language {
    /// Pick a language from an ISO country code. Brazil gets Portuguese,
    /// everything else (including unknown codes) gets English.
    pub fn from_country(country: &str) -> Self {
        match country {
            "BR" => Language::Pt,
            _ => Language::En,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Pt => write!(f, "pt"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "pt" => Ok(Language::Pt),
            _ => Err(format!("Invalid language: {}. Use en or pt.", s)),
        }
    }
}

/// The rate-limiting resource budget reported by the backend
///
/// Counts are floored to integers when ingested; `count` is decremented
/// locally only after a confirmed paint success, so it never goes negative
/// in local bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeBudget {
    /// Charges currently available
    pub count: u32,
    /// Maximum charges the account can hold
    pub max: u32,
    /// Milliseconds until the next charge regenerates (raw server value)
    pub cooldown_ms: u64,
}

impl ChargeBudget {
    /// Normalize raw server floats into a budget. Flooring happens here,
    /// at the ingestion boundary, and nowhere else.
    pub fn from_raw(count: f64, max: f64, cooldown_ms: f64) -> Self {
        Self {
            count: floor_to_u32(count),
            max: floor_to_u32(max),
            cooldown_ms: cooldown_ms.max(0.0) as u64,
        }
    }
}

impl Default for ChargeBudget {
    fn default() -> Self {
        Self {
            count: 0,
            max: 80,
            cooldown_ms: 30_000,
        }
    }
}

fn floor_to_u32(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 {
        v.floor() as u32
    } else {
        0
    }
}

/// Remote account profile, as much of it as the reporter needs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    /// Account level, floored to an integer when the server reports a float
    pub level: Option<u32>,
    /// Pixels remaining until the next level
    pub next_level_in: Option<u64>,
}

/// Position and timestamp of the most recent confirmed paint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintedPixel {
    /// Absolute x in the remote coordinate system (tile origin + offset)
    pub x: u32,
    /// Absolute y in the remote coordinate system (tile origin + offset)
    pub y: u32,
    pub time: DateTime<Utc>,
}

/// Mutable state for one farming session
///
/// Created at startup, owned by the loop driver, discarded on exit. The
/// reporter only ever sees `&SessionState`.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Cumulative confirmed paint actions this session
    pub painted_count: u64,
    pub charges: ChargeBudget,
    pub profile: Option<UserProfile>,
    pub last_pixel: Option<PaintedPixel>,
    pub language: Language,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_charge_budget_floors_raw_values() {
        let budget = ChargeBudget::from_raw(4.9, 80.7, 30000.0);
        assert_eq!(budget.count, 4);
        assert_eq!(budget.max, 80);
        assert_eq!(budget.cooldown_ms, 30000);
    }

    #[test]
    fn test_charge_budget_never_negative() {
        let budget = ChargeBudget::from_raw(-3.0, -1.0, -500.0);
        assert_eq!(budget.count, 0);
        assert_eq!(budget.max, 0);
        assert_eq!(budget.cooldown_ms, 0);
    }

    #[test]
    fn test_charge_budget_non_finite() {
        let budget = ChargeBudget::from_raw(f64::NAN, f64::INFINITY, 1000.0);
        assert_eq!(budget.count, 0);
        // Infinity is finite-checked away rather than saturating
        assert_eq!(budget.max, 0);
    }

    #[test]
    fn test_language_from_country() {
        assert_eq!(Language::from_country("BR"), Language::Pt);
        assert_eq!(Language::from_country("US"), Language::En);
        assert_eq!(Language::from_country("DE"), Language::En);
        assert_eq!(Language::from_country(""), Language::En);
    }

    #[test]
    fn test_language_round_trip() {
        assert_eq!(Language::from_str("pt").unwrap(), Language::Pt);
        assert_eq!(Language::from_str("EN").unwrap(), Language::En);
        assert!(Language::from_str("fr").is_err());
        assert_eq!(Language::Pt.to_string(), "pt");
    }

    #[test]
    fn test_session_state_defaults() {
        let state = SessionState::default();
        assert_eq!(state.painted_count, 0);
        assert_eq!(state.charges.count, 0);
        assert!(state.profile.is_none());
        assert!(state.last_pixel.is_none());
        assert_eq!(state.language, Language::En);
    }
}
