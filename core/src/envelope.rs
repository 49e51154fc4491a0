//! JSON envelope decoding for delegates.
//!
//! Many APIs wrap every payload as `{"code": .., "message": .., "data": ..}`.
//! A delegate whose backend speaks this shape can implement all of its
//! `parse_*` methods on top of [`Envelope`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// A decoded `{code, message, data}` response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub code: i32,
    #[serde(default, alias = "msg")]
    pub message: String,
    #[serde(default)]
    pub data: Value,
}

impl Envelope {
    pub fn parse(body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body).map_err(ApiError::deserialization)
    }

    /// `data` as text: strings verbatim, `null` as empty, anything else
    /// re-encoded as JSON.
    pub fn data_string(&self) -> String {
        match &self.data {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// `data` decoded as one `T`, or `None` when absent or mismatched.
    pub fn entity<T: DeserializeOwned>(&self) -> Option<T> {
        if self.data.is_null() {
            return None;
        }
        T::deserialize(&self.data).ok()
    }

    /// `data` decoded as a list of `T`. Anything but an array of `T` yields
    /// an empty list.
    pub fn entities<T: DeserializeOwned>(&self) -> Vec<T> {
        match &self.data {
            Value::Array(_) => Vec::<T>::deserialize(&self.data).unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}
