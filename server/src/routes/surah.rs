//! Chapter proxy routes.
//!
//! `GET /api/surah` forwards the validated upstream envelope; the browser
//! decodes the same schema. `GET /api/surah/raw` forwards whatever JSON the
//! upstream returned, for the debug dump page.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use client::net::types::ChapterEnvelope;

use crate::services::quran::UpstreamError;
use crate::state::AppState;

type ErrorResponse = (StatusCode, Json<serde_json::Value>);

/// `GET /api/surah`: validated chapter envelope.
pub async fn list_chapters(State(state): State<AppState>) -> Result<Json<ChapterEnvelope>, ErrorResponse> {
    match state.quran.fetch_chapters().await {
        Ok(envelope) => {
            tracing::debug!(count = envelope.data.len(), "chapters fetched");
            Ok(Json(envelope))
        }
        Err(e) => Err(upstream_error_response(e)),
    }
}

/// `GET /api/surah/raw`: upstream JSON, unvalidated.
pub async fn raw_chapters(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ErrorResponse> {
    state
        .quran
        .fetch_raw()
        .await
        .map(Json)
        .map_err(upstream_error_response)
}

/// Upstream 4xx/5xx pass through; everything else is a bad gateway.
pub(crate) fn upstream_error_to_status(err: &UpstreamError) -> StatusCode {
    match err {
        UpstreamError::Status { status, .. } => StatusCode::from_u16(*status)
            .ok()
            .filter(|s| s.is_client_error() || s.is_server_error())
            .unwrap_or(StatusCode::BAD_GATEWAY),
        UpstreamError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        UpstreamError::Request(_) | UpstreamError::Parse(_) | UpstreamError::Schema(_) => StatusCode::BAD_GATEWAY,
    }
}

fn upstream_error_response(err: UpstreamError) -> ErrorResponse {
    let status = upstream_error_to_status(&err);
    tracing::warn!(
        error = %err,
        %status,
        upstream_body = err.body_preview().unwrap_or_default(),
        "upstream chapter fetch failed"
    );
    (status, Json(serde_json::json!({ "error": err.to_string() })))
}

#[cfg(test)]
#[path = "surah_test.rs"]
mod tests;
