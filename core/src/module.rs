//! Typed API modules bound to one façade.

use std::sync::Arc;

use crate::api::Api;
use crate::constructor::Constructor;
use crate::error::ConfigError;

/// A user-defined group of endpoint methods.
///
/// A module holds nothing but its façade handle; its methods build URLs and
/// parameters and call the façade's request methods.
///
/// ```ignore
/// struct UserModule {
///     api: Arc<Api<HttpConstructor>>,
/// }
///
/// impl Module for UserModule {
///     type Constructor = HttpConstructor;
///
///     fn attach(api: Arc<Api<HttpConstructor>>) -> Result<Self, ConfigError> {
///         Ok(Self { api })
///     }
/// }
/// ```
pub trait Module: Sized {
    type Constructor: Constructor;

    fn attach(api: Arc<Api<Self::Constructor>>) -> Result<Self, ConfigError>;
}
