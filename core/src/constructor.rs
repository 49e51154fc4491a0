//! The transport delegate contract.
//!
//! # Design
//! A `Constructor` is everything the façade does not do itself: moving bytes,
//! knowing the base URL, and turning an opaque response into codes, messages
//! and entities. The façade holds exactly one and calls nothing else.
//!
//! Asynchronous work is the delegate's business. `async_request` receives a
//! [`Completion`] and must eventually consume it, from whatever thread or
//! task it likes. Because `Completion` is consumed by value, a delegate
//! cannot report an outcome twice.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::parameter::Parameter;

/// A pluggable transport and response parser.
pub trait Constructor: Send + Sync + 'static {
    /// Caller-supplied context threaded through every request, e.g. an
    /// application handle or a per-screen scope.
    type Context: ?Sized;

    /// Opaque response produced by the transport.
    type Response: fmt::Debug + Send + 'static;

    /// Perform a blocking request.
    fn sync_request(
        &self,
        context: &Self::Context,
        method: HttpMethod,
        url: &str,
        parameter: &Parameter,
    ) -> Result<Self::Response, ApiError>;

    /// Start a request and report its outcome through `completion`.
    fn async_request(
        &self,
        context: &Self::Context,
        method: HttpMethod,
        url: &str,
        parameter: &Parameter,
        completion: Completion<Self::Response>,
    );

    fn base_url(&self) -> &str;

    fn parse_code(&self, response: &Self::Response) -> i32;

    fn parse_message(&self, response: &Self::Response) -> String;

    /// The raw payload of `response` as text.
    fn parse_data(&self, response: &Self::Response) -> String;

    fn parse_entity<T: DeserializeOwned>(&self, response: &Self::Response) -> Option<T>;

    fn parse_entities<T: DeserializeOwned>(&self, response: &Self::Response) -> Vec<T>;

    /// Release transport resources. The default does nothing.
    fn destroy(&self, _context: &Self::Context) {}
}

type Handler<R> = Box<dyn FnOnce(Result<R, ApiError>) + Send>;

/// Single-shot completion handle for one asynchronous request.
pub struct Completion<R> {
    handler: Handler<R>,
}

impl<R> Completion<R> {
    pub fn new<F>(handler: F) -> Self
    where
        F: FnOnce(Result<R, ApiError>) + Send + 'static,
    {
        Self {
            handler: Box::new(handler),
        }
    }

    pub fn complete(self, result: Result<R, ApiError>) {
        (self.handler)(result)
    }

    pub fn succeed(self, response: R) {
        self.complete(Ok(response))
    }

    pub fn fail(self, error: ApiError) {
        self.complete(Err(error))
    }
}

impl<R> fmt::Debug for Completion<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion").finish_non_exhaustive()
    }
}
