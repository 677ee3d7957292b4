//! REST helpers for the chapter endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `FetchError::Unavailable`, since the
//! fetch is a mount-time browser effect and SSR renders the loading state.
//!
//! ERROR HANDLING
//! ==============
//! Status checks and body decoding are pure functions over `(status, body)`
//! so the whole success/failure mapping is testable without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::FetchError;
use super::types::{Chapter, ChapterEnvelope};

/// Default base path of the chapter API, relative to the serving origin.
pub const DEFAULT_API_BASE: &str = "/api";

/// `GET {base}/surah`: validated `{code, status, data}` envelope.
pub fn chapters_endpoint(base: &str) -> String {
    format!("{}/surah", base.trim_end_matches('/'))
}

/// `GET {base}/surah/raw`: upstream JSON as received.
pub fn raw_chapters_endpoint(base: &str) -> String {
    format!("{}/surah/raw", base.trim_end_matches('/'))
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Map an HTTP status and body to the ordered chapter list.
///
/// # Errors
///
/// `Status` for non-2xx, `Parse` when the body is not a chapter envelope
/// (a bare array included), `Schema` when a record breaks the invariants.
pub fn decode_chapters_response(status: u16, body: &str) -> Result<Vec<Chapter>, FetchError> {
    if !is_success(status) {
        return Err(FetchError::Status(status));
    }
    let envelope: ChapterEnvelope = serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;
    Ok(envelope.into_validated()?)
}

/// Map an HTTP status and body to an arbitrary JSON value for dumping.
///
/// # Errors
///
/// `Status` for non-2xx, `Parse` when the body is not JSON at all.
pub fn decode_raw_response(status: u16, body: &str) -> Result<serde_json::Value, FetchError> {
    if !is_success(status) {
        return Err(FetchError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))
}

/// Fetch and validate the chapter list from `{base}/surah`.
///
/// # Errors
///
/// See [`decode_chapters_response`]; transport failures are `Network`.
pub async fn fetch_chapters(base: &str) -> Result<Vec<Chapter>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let (status, body) = get_text(&chapters_endpoint(base)).await?;
        decode_chapters_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base;
        Err(FetchError::Unavailable)
    }
}

/// Fetch the raw upstream JSON from `{base}/surah/raw`.
///
/// # Errors
///
/// See [`decode_raw_response`]; transport failures are `Network`.
pub async fn fetch_raw_chapters(base: &str) -> Result<serde_json::Value, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let (status, body) = get_text(&raw_chapters_endpoint(base)).await?;
        decode_raw_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base;
        Err(FetchError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn get_text(url: &str) -> Result<(u16, String), FetchError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }
    let status = resp.status();
    let body = resp.text().await.map_err(|e| FetchError::Network(e.to_string()))?;
    Ok((status, body))
}
