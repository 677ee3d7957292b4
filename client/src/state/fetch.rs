//! Single-shot fetch lifecycle state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page owns one `FetchState` in a signal. It starts loading, and the
//! one fetch attempt resolves it exactly once into either a value or an
//! error message. There is no retry, so there is no path back to loading.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use crate::net::error::FetchError;

/// Loading flag plus the outcome of a single fetch.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    pub value: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> FetchState<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { value: None, loading: true, error: None }
    }

    /// Record the outcome of the fetch and clear the loading flag.
    ///
    /// A failure discards any previously held value.
    pub fn resolve(&mut self, result: Result<T, FetchError>) {
        self.loading = false;
        match result {
            Ok(value) => {
                self.value = Some(value);
                self.error = None;
            }
            Err(err) => {
                self.value = None;
                self.error = Some(err.to_string());
            }
        }
    }

    /// Text shown in place of the content when the fetch failed.
    #[must_use]
    pub fn error_text(&self) -> Option<String> {
        self.error.as_ref().map(|msg| format!("Error: {msg}"))
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::new()
    }
}
