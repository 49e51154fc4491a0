//! Error types for request dispatch and configuration.
//!
//! # Design
//! Two kinds:
//! - `ApiError` is the single error a transport delegate raises. It is handed
//!   to the failure callback on asynchronous paths and returned from
//!   `sync_request`, unchanged, in both cases.
//! - `ConfigError` covers everything that can go wrong before a request is
//!   issued: looking up a façade, building a delegate, attaching a module,
//!   loading a base URL. A caller can tell "not configured" from "failed".

use std::any::type_name;

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error raised by a transport delegate.
///
/// `code` is delegate-defined. The negative codes below are reserved for the
/// helpers in this crate.
#[derive(Debug, Error)]
#[error("API error {code}: {message}")]
pub struct ApiError {
    code: i32,
    message: String,
    #[source]
    cause: Option<BoxError>,
}

impl ApiError {
    /// The request never produced a response.
    pub const CODE_TRANSPORT: i32 = -1;
    /// The request payload could not be encoded.
    pub const CODE_SERIALIZATION: i32 = -2;
    /// The response body could not be decoded.
    pub const CODE_DESERIALIZATION: i32 = -3;

    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: Into<BoxError>,
    {
        self.cause = Some(cause.into());
        self
    }

    pub fn transport<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::new(Self::CODE_TRANSPORT, cause.to_string()).with_cause(cause)
    }

    pub fn serialization<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::new(Self::CODE_SERIALIZATION, format!("serialization failed: {cause}")).with_cause(cause)
    }

    pub fn deserialization<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::new(Self::CODE_DESERIALIZATION, format!("deserialization failed: {cause}"))
            .with_cause(cause)
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error raised while wiring façades, delegates and modules together.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No façade has been registered for this delegate type.
    #[error("no API is configured for constructor `{0}`")]
    NotConfigured(&'static str),

    /// `Registry::register` was called twice for the same delegate type.
    #[error("an API is already registered for constructor `{0}`")]
    AlreadyRegistered(&'static str),

    /// A delegate factory reported failure.
    #[error("constructor `{constructor}` could not be created: {reason}")]
    ConstructorFailed {
        constructor: &'static str,
        reason: String,
    },

    /// A module refused to attach to its façade.
    #[error("module `{module}` could not be created: {reason}")]
    ModuleFailed { module: &'static str, reason: String },

    #[error("invalid base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("environment variable `{0}` is not set")]
    MissingEnv(String),
}

impl ConfigError {
    pub fn not_configured<C>() -> Self {
        ConfigError::NotConfigured(type_name::<C>())
    }

    pub fn constructor_failed<C>(reason: impl Into<String>) -> Self {
        ConfigError::ConstructorFailed {
            constructor: type_name::<C>(),
            reason: reason.into(),
        }
    }

    pub fn module_failed<M>(reason: impl Into<String>) -> Self {
        ConfigError::ModuleFailed {
            module: type_name::<M>(),
            reason: reason.into(),
        }
    }
}
