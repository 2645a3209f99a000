//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. The generation
//! form shows one generic failure notice regardless of cause, so error
//! strings are for logs, not for branching.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{GenerationRequest, GenerationResult, User, WebsiteSummary};
#[cfg(feature = "hydrate")]
use super::types::ApiError;

#[cfg(any(test, feature = "hydrate"))]
const GENERATE_ENDPOINT: &str = "/api/generate";

#[cfg(any(test, feature = "hydrate"))]
const WEBSITES_ENDPOINT: &str = "/api/websites";

/// Prefer the server's `{ "error": ... }` message; fall back to the status.
#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16, server_error: Option<String>) -> String {
    match server_error {
        Some(msg) if !msg.trim().is_empty() => format!("{what} failed: {msg}"),
        _ => format!("{what} failed: {status}"),
    }
}

/// Submit a generation request via `POST /api/generate`.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent, the server
/// responds with a non-OK status, or the body is not a `GenerationResult`.
pub async fn generate_website(request: &GenerationRequest) -> Result<GenerationResult, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(GENERATE_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let server_error = resp.json::<ApiError>().await.ok().map(|e| e.error);
            return Err(request_failed_message("generation", status, server_error));
        }
        resp.json::<GenerationResult>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Fetch previously generated websites from `/api/websites`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn fetch_websites() -> Result<Vec<WebsiteSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(WEBSITES_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let server_error = resp.json::<ApiError>().await.ok().map(|e| e.error);
            return Err(request_failed_message("website list", status, server_error));
        }
        resp.json::<Vec<WebsiteSummary>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(Vec::new())
    }
}

/// Fetch the signed-in operator from `/api/auth/me`.
/// Returns `None` if not available or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
