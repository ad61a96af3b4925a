//! Container
//!
//! Owns the registries of one resolution universe. Registration and
//! resolution may run concurrently from any number of threads.

use std::any::Any;
use std::sync::Arc;

use dix_domain::constants::{DEFAULT_NAMESPACE, SYMBOL_SYNTHESIZE};
use dix_domain::{
    Context, Error, HintKeys, Provider, Resolvable, Result, SharedProvider, TypeInfo,
};

use super::binding::BindingRegistry;
use super::fields::FieldCache;
use super::pool::HintPool;
use super::provider::ProviderRegistry;
use crate::config::DixConfig;
use crate::diagnostics;
use crate::logging::log_resolution_failure;

/// Resolution engine with its binding, provider and field registries
#[derive(Debug)]
pub struct Container {
    pub(super) bindings: BindingRegistry,
    pub(super) providers: ProviderRegistry,
    pub(super) fields: FieldCache,
    pub(super) hints: HintPool,
    pub(super) default_namespace: String,
    pub(super) hint_keys: HintKeys,
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    /// An empty container using the `def` namespace
    pub fn new() -> Self {
        Self {
            bindings: BindingRegistry::new(),
            providers: ProviderRegistry::new(),
            fields: FieldCache::new(),
            hints: HintPool::default(),
            default_namespace: DEFAULT_NAMESPACE.to_string(),
            hint_keys: HintKeys::default(),
        }
    }

    /// An empty container configured from `config`
    ///
    /// Also applies the process-wide diagnostics toggle.
    pub fn with_config(config: &DixConfig) -> Self {
        diagnostics::set_enabled(config.trace);
        Self {
            hints: HintPool::new(config.hint_pool_capacity),
            default_namespace: config.default_namespace.clone(),
            hint_keys: config.hint_keys.clone(),
            ..Self::new()
        }
    }

    pub fn default_namespace(&self) -> &str {
        &self.default_namespace
    }

    /// Key names hint descriptors are parsed with
    pub fn hint_keys(&self) -> &HintKeys {
        &self.hint_keys
    }

    pub fn bindings(&self) -> &BindingRegistry {
        &self.bindings
    }

    pub fn providers(&self) -> &ProviderRegistry {
        &self.providers
    }

    pub fn field_cache(&self) -> &FieldCache {
        &self.fields
    }

    pub fn hint_pool(&self) -> &HintPool {
        &self.hints
    }

    /// Register `value` under each namespace, the default one when empty
    ///
    /// A [`SharedProvider`] is registered as a provider under its symbol
    /// instead of as a plain binding.
    pub fn bind<T: Clone + Send + Sync + 'static>(&self, value: T, namespaces: &[&str]) {
        let namespaces = self.target_namespaces(namespaces);
        if let Some(provider) = (&value as &dyn Any).downcast_ref::<SharedProvider>() {
            self.providers.register(Arc::clone(provider), &namespaces);
            diagnostics::trace_provider(provider.symbol(), &namespaces);
            return;
        }
        self.bindings.insert(value, &namespaces);
        diagnostics::trace_binding(std::any::type_name::<T>(), &namespaces);
    }

    /// Register a provider under its symbol in each namespace
    pub fn bind_provider<P: Provider + 'static>(&self, provider: P, namespaces: &[&str]) {
        let provider: SharedProvider = Arc::new(provider);
        self.bind(provider, namespaces);
    }

    /// Resolve a fully populated `T`
    pub fn resolve<T: Resolvable>(&self, ctx: &Context) -> Result<T> {
        self.resolve_with(ctx, "")
    }

    /// Resolve `T` with `descriptor` applied on top of the root `from:?` hint
    ///
    /// Resolution continues the path carried by `ctx`, so a provider asking
    /// for a record that is already being injected gets
    /// [`Error::CyclicDependency`].
    ///
    /// ```
    /// use dix_domain::Context;
    /// use dix_infrastructure::di::Container;
    ///
    /// let container = Container::new();
    /// container.bind(100_i64, &["int100"]);
    ///
    /// let value: i64 = container
    ///     .resolve_with(&Context::background(), "namespace:int100")
    ///     .unwrap();
    /// assert_eq!(value, 100);
    /// ```
    pub fn resolve_with<T: Resolvable>(&self, ctx: &Context, descriptor: &str) -> Result<T> {
        let ty = TypeInfo::of::<T>();
        let mut hint = self.hints.acquire();
        hint.set_symbol(SYMBOL_SYNTHESIZE).unmarshal_with(&self.hint_keys, descriptor);

        let resolved = self
            .resolve_type(ctx, &ty, &hint)
            .and_then(|value| value.ok_or_else(|| Error::unresolved(ty.name())))
            .and_then(|value| {
                value
                    .downcast::<T>()
                    .map(|value| *value)
                    .map_err(|_| Error::type_mismatch(hint.symbol(), ty.name()))
            });
        if let Err(e) = &resolved {
            log_resolution_failure(ty.name(), e);
        }
        resolved
    }

    /// Resolve `T`, panicking on failure
    pub fn must_resolve<T: Resolvable>(&self, ctx: &Context) -> T {
        self.resolve(ctx)
            .unwrap_or_else(|e| panic!("failed to resolve `{}`: {e}", std::any::type_name::<T>()))
    }

    fn target_namespaces<'a>(&'a self, namespaces: &[&'a str]) -> Vec<&'a str> {
        if namespaces.is_empty() {
            vec![self.default_namespace.as_str()]
        } else {
            namespaces.to_vec()
        }
    }
}
