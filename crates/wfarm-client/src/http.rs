//! Thin fetch wrapper over reqwest
//!
//! The whole error taxonomy of the remote side collapses to one signal:
//! "unavailable", spelled `None`. Connection failures, non-JSON bodies,
//! shape mismatches - callers cannot tell them apart and are not supposed
//! to. A non-2xx status is not treated specially either; if the body still
//! decodes into the expected shape, it counts as a response.

use serde::de::DeserializeOwned;

/// Options for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method; `None` means GET
    pub method: Option<reqwest::Method>,
    /// Content-Type header for the body, when a body is present
    pub content_type: Option<String>,
    /// Raw request body
    pub body: Option<String>,
}

impl RequestOptions {
    /// POST with a raw body and explicit content type
    pub fn post(content_type: &str, body: String) -> Self {
        Self {
            method: Some(reqwest::Method::POST),
            content_type: Some(content_type.to_string()),
            body: Some(body),
        }
    }
}

/// Credentialed JSON fetch client
#[derive(Debug, Clone)]
pub struct Http {
    client: reqwest::Client,
    session_cookie: Option<String>,
}

impl Http {
    /// Create a client, attaching `session_cookie` to every request when set
    pub fn new(session_cookie: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            session_cookie,
        }
    }

    /// Issue a request and decode the JSON body, or `None` on any failure
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Option<T> {
        let method = options.method.unwrap_or(reqwest::Method::GET);
        let mut request = self.client.request(method, url);

        if let Some(cookie) = &self.session_cookie {
            request = request.header(reqwest::header::COOKIE, cookie);
        }
        if let Some(content_type) = &options.content_type {
            request = request.header(reqwest::header::CONTENT_TYPE, content_type);
        }
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!("Request to {} failed: {}", url, e);
                return None;
            }
        };

        match response.json::<T>().await {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::debug!("Response from {} did not decode: {}", url, e);
                None
            }
        }
    }
}

impl Default for Http {
    fn default() -> Self {
        Self::new(None)
    }
}
