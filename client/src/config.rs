//! Client endpoint configuration provided through Leptos context.
//!
//! Pages resolve their fetch URLs from `ApiConfig` rather than embedding
//! an absolute upstream URL; the server proxies `/api` to the configured
//! upstream.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::api::DEFAULT_API_BASE;

/// Base path the pages fetch from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_path: String,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_path: impl Into<String>) -> Self {
        Self { base_path: base_path.into() }
    }

    /// Context value if one was provided, otherwise the default.
    #[must_use]
    pub fn from_context() -> Self {
        leptos::prelude::use_context::<Self>().unwrap_or_default()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
