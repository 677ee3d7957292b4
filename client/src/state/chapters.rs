//! View state for the chapter index page.

#[cfg(test)]
#[path = "chapters_test.rs"]
mod chapters_test;

use super::fetch::FetchState;
use crate::net::types::Chapter;

/// Chapter list fetch state.
pub type ChaptersState = FetchState<Vec<Chapter>>;

impl FetchState<Vec<Chapter>> {
    /// Loaded chapters in response order; empty while loading or failed.
    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        self.value.as_deref().unwrap_or_default()
    }
}
