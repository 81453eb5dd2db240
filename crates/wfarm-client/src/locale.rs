//! Display-language detection
//!
//! A best-effort IP geolocation lookup picks the status-message language.
//! Brazil gets Portuguese, everyone else English, and a failed lookup also
//! falls back to English.

use crate::http::{Http, RequestOptions};
use serde::Deserialize;
use wfarm_core::Language;

const GEO_URL: &str = "https://ipapi.co/json/";

#[derive(Debug, Deserialize)]
struct GeoResponse {
    #[serde(default)]
    country: String,
}

/// Detect the display language from the caller's IP geolocation
pub async fn detect_language(http: &Http) -> Language {
    match http
        .fetch_json::<GeoResponse>(GEO_URL, RequestOptions::default())
        .await
    {
        Some(geo) => {
            let language = Language::from_country(&geo.country);
            tracing::debug!("Geolocation country {:?} -> language {}", geo.country, language);
            language
        }
        None => {
            tracing::debug!("Geolocation lookup unavailable, defaulting to en");
            Language::En
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_response_decodes() {
        let geo: GeoResponse = serde_json::from_str(r#"{"country":"BR","city":"Recife"}"#).unwrap();
        assert_eq!(geo.country, "BR");
        assert_eq!(Language::from_country(&geo.country), Language::Pt);
    }

    #[test]
    fn test_geo_response_missing_country() {
        let geo: GeoResponse = serde_json::from_str(r#"{"ip":"127.0.0.1"}"#).unwrap();
        assert_eq!(Language::from_country(&geo.country), Language::En);
    }
}
