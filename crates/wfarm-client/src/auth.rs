//! Session credentials for the backend
//!
//! The backend authenticates with a browser session cookie. The CLI cannot
//! share the browser's cookie jar, so the cookie value is taken from the
//! WFARM_SESSION environment variable and attached to every request.
//! Absence is not an error: anonymous requests still go through, the
//! backend just refuses to paint for them.

use std::env;

/// Get the session cookie for backend requests, if one is configured
///
/// Reads WFARM_SESSION and returns it as a ready-to-send `Cookie` header
/// value. Returns `None` when unset or empty.
pub fn get_session_cookie() -> Option<String> {
    match env::var("WFARM_SESSION") {
        Ok(v) if !v.trim().is_empty() => {
            tracing::debug!("Using session cookie from WFARM_SESSION");
            Some(v)
        }
        _ => None,
    }
}
