//! Façade registry keyed by delegate type.
//!
//! # Design
//! One `Registry` is built at application start and passed to whatever
//! needs a façade. It holds at most one `Api<C>` per delegate type `C`,
//! created on first use and kept until the registry is dropped.
//!
//! Registration is atomic: lookup, construction and insertion all happen
//! under one lock, so racing first lookups for the same delegate type build
//! exactly one delegate. Delegate factories therefore must not call back
//! into the same registry.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info};

use crate::api::Api;
use crate::constructor::Constructor;
use crate::error::ConfigError;
use crate::module::Module;

type Entry = Arc<dyn Any + Send + Sync>;

/// Memoizes one façade per delegate type.
#[derive(Debug, Default)]
pub struct Registry {
    apis: Mutex<HashMap<TypeId, Entry>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The façade for `C`, or `None` if none has been created yet.
    pub fn get<C: Constructor>(&self) -> Option<Arc<Api<C>>> {
        Self::lookup(&self.lock())
    }

    /// Like [`Registry::get`], but a missing façade is an error.
    pub fn require<C: Constructor>(&self) -> Result<Arc<Api<C>>, ConfigError> {
        self.get::<C>().ok_or_else(ConfigError::not_configured::<C>)
    }

    /// The façade for `C`, default-constructing the delegate on first use.
    pub fn api<C: Constructor + Default>(&self) -> Arc<Api<C>> {
        let mut apis = self.lock();
        if let Some(api) = Self::lookup(&apis) {
            return api;
        }
        Self::insert(&mut apis, C::default())
    }

    /// The façade for `C`, building the delegate with `factory` on first use.
    ///
    /// `factory` runs at most once per delegate type, and only when no
    /// façade exists yet. A factory error leaves the registry unchanged.
    pub fn api_with<C, F>(&self, factory: F) -> Result<Arc<Api<C>>, ConfigError>
    where
        C: Constructor,
        F: FnOnce() -> Result<C, ConfigError>,
    {
        let mut apis = self.lock();
        if let Some(api) = Self::lookup(&apis) {
            return Ok(api);
        }
        let constructor = factory()?;
        Ok(Self::insert(&mut apis, constructor))
    }

    /// Register an already-built delegate.
    pub fn register<C: Constructor>(&self, constructor: C) -> Result<Arc<Api<C>>, ConfigError> {
        let mut apis = self.lock();
        if apis.contains_key(&TypeId::of::<C>()) {
            return Err(ConfigError::AlreadyRegistered(type_name::<C>()));
        }
        Ok(Self::insert(&mut apis, constructor))
    }

    /// Create module `M`, default-constructing its delegate if needed.
    pub fn create<M>(&self) -> Result<M, ConfigError>
    where
        M: Module,
        M::Constructor: Default,
    {
        self.api::<M::Constructor>().create::<M>()
    }

    /// Create module `M` against an already registered delegate.
    pub fn create_configured<M: Module>(&self) -> Result<M, ConfigError> {
        self.require::<M::Constructor>()?.create::<M>()
    }

    pub fn contains<C: Constructor>(&self) -> bool {
        self.lock().contains_key(&TypeId::of::<C>())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<TypeId, Entry>> {
        self.apis.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lookup<C: Constructor>(apis: &HashMap<TypeId, Entry>) -> Option<Arc<Api<C>>> {
        let entry = Arc::clone(apis.get(&TypeId::of::<C>())?);
        entry.downcast::<Api<C>>().ok()
    }

    fn insert<C: Constructor>(apis: &mut HashMap<TypeId, Entry>, constructor: C) -> Arc<Api<C>> {
        let api = Arc::new(Api::new(constructor));
        apis.insert(TypeId::of::<C>(), api.clone());
        info!("registered API for {}", type_name::<C>());
        debug!("{} APIs registered", apis.len());
        api
    }
}
