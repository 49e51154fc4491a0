//! Base URL configuration.
//!
//! Delegates own their base URL; `BaseUrl` is the validated form they are
//! expected to keep, loadable from the environment.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable consulted by [`BaseUrl::from_default_env`].
pub const BASE_URL_ENV: &str = "APIDESIGNER_BASE_URL";

/// An `http`/`https` URL with no trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BaseUrl(String);

impl BaseUrl {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim().trim_end_matches('/');
        let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: reason.to_string(),
        };

        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .ok_or_else(|| invalid("scheme must be http or https"))?;
        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        if host.is_empty() {
            return Err(invalid("missing host"));
        }
        if rest.contains(['?', '#']) {
            return Err(invalid("query and fragment are not allowed"));
        }
        Ok(BaseUrl(trimmed.to_string()))
    }

    pub fn from_env(var: &str) -> Result<Self, ConfigError> {
        let raw = env::var(var).map_err(|_| ConfigError::MissingEnv(var.to_string()))?;
        Self::parse(&raw)
    }

    pub fn from_default_env() -> Result<Self, ConfigError> {
        Self::from_env(BASE_URL_ENV)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn join(&self, path: &str) -> String {
        join_url(&self.0, path)
    }
}

/// Append `path` to `base` with exactly one `/` between them. A `path` that
/// is already an absolute URL is returned as is.
pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    format!("{base}/{path}")
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BaseUrl {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BaseUrl {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BaseUrl> for String {
    fn from(url: BaseUrl) -> Self {
        url.0
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
