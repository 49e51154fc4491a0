//! The request façade.
//!
//! # Design
//! `Api` owns one delegate and nothing else. Every typed request variant is
//! lowered to the canonical [`RequestListener`] shape and sent through
//! [`Api::request`], which is the one place outcomes are logged. On success
//! the typed adapter asks the delegate to parse the response into whatever
//! the caller's listener wants; on failure the delegate's error is forwarded
//! untouched.
//!
//! The entity type is a type parameter of the call, so no runtime type
//! discovery takes place.

use std::marker::PhantomData;
use std::sync::Arc;

use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::config::join_url;
use crate::constructor::{Completion, Constructor};
use crate::error::{ApiError, ConfigError};
use crate::http::HttpMethod;
use crate::listener::{
    DefaultListener, EntityListListener, EntityListener, RequestListener, StringListener,
};
use crate::module::Module;
use crate::parameter::Parameter;

/// Single entry point between typed listeners and a transport delegate.
///
/// Shared as `Arc<Api<C>>`; the typed request variants need the `Arc` so
/// the delegate can be reached again when the response arrives.
#[derive(Debug)]
pub struct Api<C: Constructor> {
    constructor: C,
}

impl<C: Constructor> Api<C> {
    pub fn new(constructor: C) -> Self {
        Self { constructor }
    }

    pub fn constructor(&self) -> &C {
        &self.constructor
    }

    /// Build a module bound to this façade.
    pub fn create<M>(self: &Arc<Self>) -> Result<M, ConfigError>
    where
        M: Module<Constructor = C>,
    {
        M::attach(Arc::clone(self))
    }

    /// Issue one asynchronous request with the canonical listener shape.
    pub fn request<L>(
        &self,
        context: &C::Context,
        method: HttpMethod,
        url: &str,
        parameter: &Parameter,
        listener: Option<L>,
    ) where
        L: RequestListener<C::Response>,
    {
        debug!("{method} {url}");
        let completion = Completion::new(move |result: Result<C::Response, ApiError>| match result {
            Ok(response) => {
                debug!("onResponse: {response:?}");
                if let Some(listener) = listener {
                    listener.on_response(response);
                }
            }
            Err(error) => {
                warn!("onFailure: {error}");
                if let Some(listener) = listener {
                    listener.on_failure(error);
                }
            }
        });
        self.constructor
            .async_request(context, method, url, parameter, completion);
    }

    /// Request one entity of type `T`.
    pub fn request_entity<T, L>(
        self: &Arc<Self>,
        context: &C::Context,
        method: HttpMethod,
        url: &str,
        parameter: &Parameter,
        listener: Option<L>,
    ) where
        T: DeserializeOwned + 'static,
        L: EntityListener<T, C::Response>,
    {
        let adapter = EntityAdapter {
            api: Arc::clone(self),
            listener,
            entity: PhantomData,
        };
        self.request(context, method, url, parameter, Some(adapter));
    }

    /// Request a list of entities of type `T`.
    pub fn request_entities<T, L>(
        self: &Arc<Self>,
        context: &C::Context,
        method: HttpMethod,
        url: &str,
        parameter: &Parameter,
        listener: Option<L>,
    ) where
        T: DeserializeOwned + 'static,
        L: EntityListListener<T, C::Response>,
    {
        let adapter = EntityListAdapter {
            api: Arc::clone(self),
            listener,
            entity: PhantomData,
        };
        self.request(context, method, url, parameter, Some(adapter));
    }

    /// Request the raw payload text.
    pub fn request_string<L>(
        self: &Arc<Self>,
        context: &C::Context,
        method: HttpMethod,
        url: &str,
        parameter: &Parameter,
        listener: Option<L>,
    ) where
        L: StringListener<C::Response>,
    {
        let adapter = StringAdapter {
            api: Arc::clone(self),
            listener,
        };
        self.request(context, method, url, parameter, Some(adapter));
    }

    /// Request code and message only.
    pub fn request_default<L>(
        self: &Arc<Self>,
        context: &C::Context,
        method: HttpMethod,
        url: &str,
        parameter: &Parameter,
        listener: Option<L>,
    ) where
        L: DefaultListener<C::Response>,
    {
        let adapter = DefaultAdapter {
            api: Arc::clone(self),
            listener,
        };
        self.request(context, method, url, parameter, Some(adapter));
    }

    /// Blocking request. Must not be called where blocking is forbidden.
    pub fn sync_request(
        &self,
        context: &C::Context,
        method: HttpMethod,
        url: &str,
        parameter: &Parameter,
    ) -> Result<C::Response, ApiError> {
        debug!("sync {method} {url}");
        self.constructor.sync_request(context, method, url, parameter)
    }

    pub fn base_url(&self) -> &str {
        self.constructor.base_url()
    }

    /// `path` joined onto the delegate's base URL.
    pub fn url(&self, path: &str) -> String {
        join_url(self.base_url(), path)
    }

    /// Forward a teardown signal to the delegate. The façade stays usable
    /// and stays registered.
    pub fn destroy(&self, context: &C::Context) {
        debug!("destroy {}", std::any::type_name::<C>());
        self.constructor.destroy(context);
    }
}

struct EntityAdapter<C: Constructor, T, L> {
    api: Arc<Api<C>>,
    listener: Option<L>,
    entity: PhantomData<fn() -> T>,
}

impl<C, T, L> RequestListener<C::Response> for EntityAdapter<C, T, L>
where
    C: Constructor,
    T: DeserializeOwned + 'static,
    L: EntityListener<T, C::Response>,
{
    fn on_response(self, response: C::Response) {
        if let Some(listener) = self.listener {
            let c = &self.api.constructor;
            let code = c.parse_code(&response);
            let message = c.parse_message(&response);
            let entity = c.parse_entity::<T>(&response);
            listener.result(code, message, entity, response);
        }
    }

    fn on_failure(self, error: ApiError) {
        if let Some(listener) = self.listener {
            listener.failure(error);
        }
    }
}

struct EntityListAdapter<C: Constructor, T, L> {
    api: Arc<Api<C>>,
    listener: Option<L>,
    entity: PhantomData<fn() -> T>,
}

impl<C, T, L> RequestListener<C::Response> for EntityListAdapter<C, T, L>
where
    C: Constructor,
    T: DeserializeOwned + 'static,
    L: EntityListListener<T, C::Response>,
{
    fn on_response(self, response: C::Response) {
        if let Some(listener) = self.listener {
            let c = &self.api.constructor;
            let code = c.parse_code(&response);
            let message = c.parse_message(&response);
            let entities = c.parse_entities::<T>(&response);
            listener.result(code, message, entities, response);
        }
    }

    fn on_failure(self, error: ApiError) {
        if let Some(listener) = self.listener {
            listener.failure(error);
        }
    }
}

struct StringAdapter<C: Constructor, L> {
    api: Arc<Api<C>>,
    listener: Option<L>,
}

impl<C, L> RequestListener<C::Response> for StringAdapter<C, L>
where
    C: Constructor,
    L: StringListener<C::Response>,
{
    fn on_response(self, response: C::Response) {
        if let Some(listener) = self.listener {
            let c = &self.api.constructor;
            let code = c.parse_code(&response);
            let message = c.parse_message(&response);
            let data = c.parse_data(&response);
            listener.result(code, message, data, response);
        }
    }

    fn on_failure(self, error: ApiError) {
        if let Some(listener) = self.listener {
            listener.failure(error);
        }
    }
}

struct DefaultAdapter<C: Constructor, L> {
    api: Arc<Api<C>>,
    listener: Option<L>,
}

impl<C, L> RequestListener<C::Response> for DefaultAdapter<C, L>
where
    C: Constructor,
    L: DefaultListener<C::Response>,
{
    fn on_response(self, response: C::Response) {
        if let Some(listener) = self.listener {
            let c = &self.api.constructor;
            listener.result(c.parse_code(&response), c.parse_message(&response), response);
        }
    }

    fn on_failure(self, error: ApiError) {
        if let Some(listener) = self.listener {
            listener.failure(error);
        }
    }
}
