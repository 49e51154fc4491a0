//! Key/value request payload handed to the transport delegate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// String key/value pairs populated by the caller before dispatch.
///
/// Keys are kept sorted so the wire layout of a parameter is deterministic.
/// The façade never reads a parameter; only the delegate does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameter {
    entries: BTreeMap<String, String>,
}

impl Parameter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Parameter::put`].
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.put(key, value);
        self
    }

    /// Insert `key`, returning the value it replaced.
    pub fn put(&mut self, key: impl Into<String>, value: impl ToString) -> Option<String> {
        self.entries.insert(key.into(), value.to_string())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode as a flat JSON object.
    pub fn to_json(&self) -> Result<String, ApiError> {
        serde_json::to_string(self).map_err(ApiError::serialization)
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Parameter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut parameter = Parameter::new();
        for (k, v) in iter {
            parameter.put(k, v);
        }
        parameter
    }
}
