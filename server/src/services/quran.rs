//! Upstream chapter API client.
//!
//! Thin HTTP wrapper around `GET {base}/surah`. Status handling and body
//! decoding are pure functions (`parse_chapters`, `parse_raw`) so they can be
//! tested without a network; the envelope schema is the one the browser
//! decodes, validated here before anything is forwarded.

use client::net::types::{ChapterEnvelope, SchemaError};

use crate::config::ServerConfig;

// =============================================================================
// ERRORS
// =============================================================================

/// Failure talking to the upstream chapter API.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request did not produce a response.
    #[error("upstream request failed: {0}")]
    Request(String),

    /// The upstream answered with a non-success status.
    #[error("upstream error: status {status}")]
    Status { status: u16, body: String },

    /// The body was not the expected JSON.
    #[error("upstream response parse failed: {0}")]
    Parse(String),

    /// The body decoded but broke the chapter invariants.
    #[error("upstream returned invalid chapter data: {0}")]
    Schema(#[from] SchemaError),
}

/// Upper bound on the upstream body echoed into logs.
const BODY_PREVIEW_BYTES: usize = 512;

impl UpstreamError {
    /// Leading part of the upstream body for a `Status` error, cut at a
    /// char boundary no later than `BODY_PREVIEW_BYTES`.
    #[must_use]
    pub fn body_preview(&self) -> Option<&str> {
        let Self::Status { body, .. } = self else {
            return None;
        };
        let mut end = body.len().min(BODY_PREVIEW_BYTES);
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        Some(&body[..end])
    }
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct QuranClient {
    http: reqwest::Client,
    base_url: String,
}

impl QuranClient {
    /// Build a client for the configured upstream.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::HttpClientBuild`] if the TLS backend or
    /// timeouts cannot be applied.
    pub fn new(config: &ServerConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.quran_api_base_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/surah`.
    #[must_use]
    pub fn chapters_url(&self) -> String {
        format!("{}/surah", self.base_url)
    }

    /// Fetch, status-check, decode and validate the chapter envelope.
    ///
    /// # Errors
    ///
    /// Any [`UpstreamError`] variant except `HttpClientBuild`.
    pub async fn fetch_chapters(&self) -> Result<ChapterEnvelope, UpstreamError> {
        let (status, body) = self.get_text().await?;
        parse_chapters(status, &body)
    }

    /// Fetch the upstream body as an arbitrary JSON value.
    ///
    /// # Errors
    ///
    /// `Request`, `Status` or `Parse`.
    pub async fn fetch_raw(&self) -> Result<serde_json::Value, UpstreamError> {
        let (status, body) = self.get_text().await?;
        parse_raw(status, &body)
    }

    async fn get_text(&self) -> Result<(u16, String), UpstreamError> {
        let url = self.chapters_url();
        tracing::debug!(%url, "fetching chapters from upstream");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;
        Ok((status, text))
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn check_status(status: u16, body: &str) -> Result<(), UpstreamError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(UpstreamError::Status { status, body: body.to_owned() })
    }
}

pub(crate) fn parse_chapters(status: u16, body: &str) -> Result<ChapterEnvelope, UpstreamError> {
    check_status(status, body)?;
    let envelope: ChapterEnvelope = serde_json::from_str(body).map_err(|e| UpstreamError::Parse(e.to_string()))?;
    envelope.validate()?;
    Ok(envelope)
}

pub(crate) fn parse_raw(status: u16, body: &str) -> Result<serde_json::Value, UpstreamError> {
    check_status(status, body)?;
    serde_json::from_str(body).map_err(|e| UpstreamError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "quran_test.rs"]
mod tests;
