//! Server configuration parsed from environment variables.

use std::env::VarError;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_QURAN_API_BASE_URL: &str = "http://api.alquran.cloud/v1";
pub const DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 10;

/// A configuration value could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a valid {expected}")]
    Invalid { var: &'static str, value: String, expected: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl UpstreamTimeouts {
    #[must_use]
    pub fn request(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

impl Default for UpstreamTimeouts {
    fn default() -> Self {
        Self {
            request_secs: DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Upstream API root without a trailing slash.
    pub quran_api_base_url: String,
    pub timeouts: UpstreamTimeouts,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `QURAN_API_BASE_URL`: default `http://api.alquran.cloud/v1`
    /// - `QURAN_API_REQUEST_TIMEOUT_SECS`: default 30
    /// - `QURAN_API_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a set variable is not UTF-8 or
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var))
    }

    /// Build typed server config from an arbitrary variable source with
    /// `std::env::var` semantics.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Result<String, VarError>) -> Result<Self, ConfigError> {
        let port = parse_var(&lookup, "PORT", "port number")?.unwrap_or(DEFAULT_PORT);
        let quran_api_base_url = parse_base_url(read_var(&lookup, "QURAN_API_BASE_URL")?.as_deref())?;
        let timeouts = UpstreamTimeouts {
            request_secs: parse_var(&lookup, "QURAN_API_REQUEST_TIMEOUT_SECS", "number of seconds")?
                .unwrap_or(DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_var(&lookup, "QURAN_API_CONNECT_TIMEOUT_SECS", "number of seconds")?
                .unwrap_or(DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, quran_api_base_url, timeouts })
    }

    /// Config pointing at `base_url` with default port and timeouts.
    #[cfg(test)]
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            port: DEFAULT_PORT,
            quran_api_base_url: base_url.trim_end_matches('/').to_owned(),
            timeouts: UpstreamTimeouts::default(),
        }
    }
}

fn read_var(
    lookup: &impl Fn(&str) -> Result<String, VarError>,
    var: &'static str,
) -> Result<Option<String>, ConfigError> {
    match lookup(var) {
        Ok(raw) => Ok(Some(raw)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::Invalid {
            var,
            value: raw.to_string_lossy().into_owned(),
            expected: "UTF-8 string",
        }),
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Result<String, VarError>,
    var: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = read_var(lookup, var)? else {
        return Ok(None);
    };
    raw.trim()
        .parse::<T>()
        .map(Some)
        .map_err(|_| ConfigError::Invalid { var, value: raw, expected })
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let url = raw.map_or(DEFAULT_QURAN_API_BASE_URL, str::trim);
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            var: "QURAN_API_BASE_URL",
            value: url.to_owned(),
            expected: "http(s) URL",
        });
    }
    Ok(url.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
