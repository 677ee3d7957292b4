//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only the upstream client; chapter data is never cached, so there
//! is no shared mutable state.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::quran::{QuranClient, UpstreamError};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the client is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub quran: Arc<QuranClient>,
}

impl AppState {
    #[must_use]
    pub fn new(quran: QuranClient) -> Self {
        Self { quran: Arc::new(quran) }
    }

    /// Build state with an upstream client for `config`.
    ///
    /// # Errors
    ///
    /// Propagates [`UpstreamError::HttpClientBuild`].
    pub fn from_config(config: &ServerConfig) -> Result<Self, UpstreamError> {
        Ok(Self::new(QuranClient::new(config)?))
    }
}
