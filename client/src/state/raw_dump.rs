//! View state for the raw JSON debug page.

#[cfg(test)]
#[path = "raw_dump_test.rs"]
mod raw_dump_test;

use super::fetch::FetchState;

/// Raw response fetch state.
pub type RawDumpState = FetchState<serde_json::Value>;

impl FetchState<serde_json::Value> {
    /// Two-space indented JSON of the fetched value; `"null"` before load.
    #[must_use]
    pub fn pretty_json(&self) -> String {
        self.value
            .as_ref()
            .and_then(|v| serde_json::to_string_pretty(v).ok())
            .unwrap_or_else(|| "null".to_owned())
    }
}
