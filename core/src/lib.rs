//! Typed request dispatch over a pluggable transport.
//!
//! # Overview
//! An [`Api`] façade sits between typed API modules and a caller-supplied
//! [`Constructor`] that performs the actual I/O. Callers describe a request
//! as `(context, method, url, parameter)` plus a listener; the façade hands
//! the request to the delegate and, when the outcome arrives, asks the
//! delegate to turn the response into the entity, entity list, raw string or
//! bare code/message the listener expects.
//!
//! # Design
//! - The façade never inspects a response itself. Every field extraction is
//!   a delegate call, so transport, serialization and error classification
//!   stay with the caller.
//! - The entity type is an explicit type parameter of each request.
//! - A [`Registry`] memoizes one façade per delegate type. It is an ordinary
//!   value, built once and passed around, not process-wide state.
//! - Wiring failures are [`ConfigError`]s; request failures are the
//!   delegate's [`ApiError`], passed through unchanged.

pub mod api;
pub mod config;
pub mod constructor;
pub mod envelope;
pub mod error;
pub mod http;
pub mod listener;
pub mod module;
pub mod parameter;
pub mod registry;

#[cfg(test)]
mod test_support;

pub use api::Api;
pub use config::{join_url, BaseUrl, BASE_URL_ENV};
pub use constructor::{Completion, Constructor};
pub use envelope::Envelope;
pub use error::{ApiError, BoxError, ConfigError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use listener::{
    callbacks, Callbacks, DefaultListener, Discard, EntityListListener, EntityListener,
    RequestListener, StringListener,
};
pub use module::Module;
pub use parameter::Parameter;
pub use registry::Registry;
