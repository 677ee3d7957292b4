//! Shared wire DTOs for the chapter index.
//!
//! DESIGN
//! ======
//! One schema covers both the upstream `api.alquran.cloud` response and the
//! server's `/api/surah` proxy response, so the server and the browser decode
//! the same envelope. Range and uniqueness checks live in `validate` and run
//! at every network boundary that produces `Chapter` values.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Highest valid chapter number.
pub const MAX_CHAPTER_NUMBER: u16 = 114;

/// Period in which a chapter was revealed.
///
/// Display-only, so values outside the two known periods are carried
/// verbatim in `Other` instead of failing the whole response.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RevelationType {
    Meccan,
    Medinan,
    Other(String),
}

impl RevelationType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Meccan => "Meccan",
            Self::Medinan => "Medinan",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for RevelationType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Meccan" => Self::Meccan,
            "Medinan" => Self::Medinan,
            _ => Self::Other(raw),
        }
    }
}

impl From<RevelationType> for String {
    fn from(kind: RevelationType) -> Self {
        match kind {
            RevelationType::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for RevelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single chapter (surah) record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// Chapter number, 1 through 114.
    pub number: u16,
    /// Chapter name in Arabic script.
    pub name: String,
    /// Transliterated name (e.g. `"Al-Faatiha"`).
    pub english_name: String,
    /// English meaning of the name (e.g. `"The Opening"`).
    pub english_name_translation: String,
    /// Verse count.
    pub number_of_ayahs: u16,
    pub revelation_type: RevelationType,
}

impl Chapter {
    /// Check the numeric invariants of a single record.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] if the number is outside `1..=114` or the
    /// ayah count is zero.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.number == 0 || self.number > MAX_CHAPTER_NUMBER {
            return Err(SchemaError::NumberOutOfRange(self.number));
        }
        if self.number_of_ayahs == 0 {
            return Err(SchemaError::NoAyahs(self.number));
        }
        Ok(())
    }
}

/// Response envelope returned by `GET /surah`.
///
/// Only `data` is required; a bare `{"data": [...]}` body is filled in as
/// `200 OK`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterEnvelope {
    /// HTTP-like status code echoed in the body.
    #[serde(default = "default_code")]
    pub code: u16,
    /// Status text echoed in the body (e.g. `"OK"`).
    #[serde(default = "default_status")]
    pub status: String,
    pub data: Vec<Chapter>,
}

fn default_code() -> u16 {
    200
}

fn default_status() -> String {
    "OK".to_owned()
}

impl ChapterEnvelope {
    /// Wrap a chapter list in an `OK` envelope.
    #[cfg(test)]
    #[must_use]
    pub fn ok(data: Vec<Chapter>) -> Self {
        Self { code: default_code(), status: default_status(), data }
    }

    /// Validate every record and reject duplicate chapter numbers.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaError`] found, in input order.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::with_capacity(self.data.len());
        for chapter in &self.data {
            chapter.validate()?;
            if !seen.insert(chapter.number) {
                return Err(SchemaError::DuplicateNumber(chapter.number));
            }
        }
        Ok(())
    }

    /// Validate and return the chapter list.
    ///
    /// # Errors
    ///
    /// See [`ChapterEnvelope::validate`].
    pub fn into_validated(self) -> Result<Vec<Chapter>, SchemaError> {
        self.validate()?;
        Ok(self.data)
    }
}

/// A decoded payload that breaks the chapter invariants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("chapter number {0} is outside 1..=114")]
    NumberOutOfRange(u16),

    #[error("chapter {0} has no ayahs")]
    NoAyahs(u16),

    #[error("chapter number {0} appears more than once")]
    DuplicateNumber(u16),
}
