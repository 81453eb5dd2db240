//! Backend API surface
//!
//! [`PlaceApi`] is the seam between the engine and the network: the engine
//! only ever sees the trait, so loop tests can substitute a scripted
//! implementation. [`BackendClient`] is the real thing.
//!
//! Wire numbers arrive as floats (the backend reports fractional charge
//! counts as charges regenerate), so the DTOs keep `f64` and the conversion
//! into core types does the flooring.

use crate::http::{Http, RequestOptions};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use wfarm_core::{ChargeBudget, FarmConfig, UserProfile};

/// An offset pair inside the target tile, in [0, pixels_per_line)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileOffset {
    pub x: u32,
    pub y: u32,
}

/// Charge block of the `/me` response
#[derive(Debug, Clone, Deserialize)]
pub struct ChargesDto {
    pub count: f64,
    pub max: f64,
    #[serde(rename = "cooldownMs")]
    pub cooldown_ms: f64,
}

/// `/me` response, the fields the session cares about
#[derive(Debug, Clone, Deserialize)]
pub struct MeResponse {
    pub charges: ChargesDto,
    #[serde(default)]
    pub name: String,
    pub level: Option<f64>,
    #[serde(rename = "nextLevelIn")]
    pub next_level_in: Option<f64>,
}

impl MeResponse {
    /// Normalize the charge block into a budget (floors floats)
    pub fn budget(&self) -> ChargeBudget {
        ChargeBudget::from_raw(self.charges.count, self.charges.max, self.charges.cooldown_ms)
    }

    /// Normalize the profile fields (floors the level when present)
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            name: self.name.clone(),
            level: self.level.filter(|l| l.is_finite() && *l >= 0.0).map(|l| l.floor() as u32),
            next_level_in: self
                .next_level_in
                .filter(|n| n.is_finite() && *n >= 0.0)
                .map(|n| n.floor() as u64),
        }
    }
}

/// Body of a paint submission
#[derive(Debug, Clone, Serialize)]
pub struct PaintRequest {
    pub coords: [u32; 2],
    pub colors: Vec<u32>,
}

/// Response to a paint submission; `painted == 1` signals success
#[derive(Debug, Clone, Deserialize)]
pub struct PaintResponse {
    pub painted: i64,
}

impl PaintResponse {
    pub fn is_success(&self) -> bool {
        self.painted == 1
    }
}

/// The backend operations the paint loop drives
#[async_trait]
pub trait PlaceApi: Send + Sync {
    /// Fetch the caller's status, or `None` when the backend is unavailable
    async fn fetch_me(&self) -> Option<MeResponse>;

    /// Submit one paint action for the configured tile
    async fn paint(&self, offset: TileOffset, color: u32) -> Option<PaintResponse>;
}

/// Real backend client
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Http,
    base_url: String,
    start_x: u32,
    start_y: u32,
}

impl BackendClient {
    pub fn new(http: Http, config: &FarmConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            start_x: config.start_x,
            start_y: config.start_y,
        }
    }
}

#[async_trait]
impl PlaceApi for BackendClient {
    async fn fetch_me(&self) -> Option<MeResponse> {
        let url = format!("{}/me", self.base_url);
        self.http.fetch_json(&url, RequestOptions::default()).await
    }

    async fn paint(&self, offset: TileOffset, color: u32) -> Option<PaintResponse> {
        let url = format!("{}/s0/pixel/{}/{}", self.base_url, self.start_x, self.start_y);
        let request = PaintRequest {
            coords: [offset.x, offset.y],
            colors: vec![color],
        };
        // The backend expects the JSON body under a text/plain content type
        let body = match serde_json::to_string(&request) {
            Ok(b) => b,
            Err(e) => {
                tracing::debug!("Failed to encode paint request: {}", e);
                return None;
            }
        };
        self.http
            .fetch_json(&url, RequestOptions::post("text/plain;charset=UTF-8", body))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_me_response_decodes_camel_case() {
        let json = r#"{
            "charges": {"count": 4.7, "max": 80.0, "cooldownMs": 30000.0},
            "name": "painter",
            "level": 12.9,
            "nextLevelIn": 340
        }"#;
        let me: MeResponse = serde_json::from_str(json).unwrap();

        let budget = me.budget();
        assert_eq!(budget.count, 4);
        assert_eq!(budget.max, 80);
        assert_eq!(budget.cooldown_ms, 30000);

        let profile = me.profile();
        assert_eq!(profile.name, "painter");
        assert_eq!(profile.level, Some(12));
        assert_eq!(profile.next_level_in, Some(340));
    }

    #[test]
    fn test_me_response_optional_fields_absent() {
        let json = r#"{"charges": {"count": 0, "max": 80, "cooldownMs": 12000}}"#;
        let me: MeResponse = serde_json::from_str(json).unwrap();

        assert_eq!(me.name, "");
        let profile = me.profile();
        assert_eq!(profile.level, None);
        assert_eq!(profile.next_level_in, None);
    }

    #[test]
    fn test_paint_request_wire_shape() {
        let request = PaintRequest {
            coords: [17, 93],
            colors: vec![5],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"coords":[17,93],"colors":[5]}"#);
    }

    #[test]
    fn test_painted_one_is_success() {
        assert!(PaintResponse { painted: 1 }.is_success());
        assert!(!PaintResponse { painted: 0 }.is_success());
        assert!(!PaintResponse { painted: 2 }.is_success());
    }
}
