//! Ambient configuration scoped to a render subtree.
//!
//! Defaults are supplied once per subtree through a [`Scope`] and read by
//! every call beneath it. Resolution is an explicit ordered fall-through
//! (explicit per-call value, then ambient default, then built-in), applied
//! per field — never object merging — so precedence stays auditable.

use std::sync::Arc;

use serde_json::Value;

use crate::branch::Flag;
use crate::render::View;
use crate::status::merge::Merger;
use crate::status::OperationMap;

/// Wrapper collaborator nested around the entire branch-selection output.
/// Receives the rendered value plus its configured options.
pub type ErrorWrapper<V> = Arc<dyn Fn(V, &Value) -> V + Send + Sync>;

/// Ordered override resolution: the explicit per-call value wins over the
/// ambient default. Callers chain their built-in fallback onto the result.
pub fn resolve<'a, T: ?Sized>(explicit: Option<&'a T>, ambient: Option<&'a T>) -> Option<&'a T> {
    explicit.or(ambient)
}

/// Per-branch views for the four named branches.
pub struct Components<V> {
    pub loading: Option<View<V>>,
    pub fetching: Option<View<V>>,
    pub error: Option<View<V>>,
    pub no_data: Option<View<V>>,
}

impl<V> Default for Components<V> {
    fn default() -> Self {
        Self {
            loading: None,
            fetching: None,
            error: None,
            no_data: None,
        }
    }
}

impl<V: Clone> Clone for Components<V> {
    fn clone(&self) -> Self {
        Self {
            loading: self.loading.clone(),
            fetching: self.fetching.clone(),
            error: self.error.clone(),
            no_data: self.no_data.clone(),
        }
    }
}

/// Subtree-wide defaults. Every field is optional; absent fields fall
/// through to the built-in defaults at the call site.
pub struct AsyncConfig<V> {
    pub queries: Option<OperationMap>,
    pub mutations: Option<OperationMap>,
    pub is_loading: Option<Flag>,
    pub is_fetching: Option<Flag>,
    pub has_error: Option<Flag>,
    pub has_data: Option<Flag>,
    pub show_fetching: Option<bool>,
    pub components: Components<V>,
    pub merge_query_states: Option<Merger>,
    pub merge_mutation_states: Option<Merger>,
    pub error_wrapper: Option<ErrorWrapper<V>>,
    pub error_wrapper_options: Option<Value>,
}

impl<V> Default for AsyncConfig<V> {
    fn default() -> Self {
        Self {
            queries: None,
            mutations: None,
            is_loading: None,
            is_fetching: None,
            has_error: None,
            has_data: None,
            show_fetching: None,
            components: Components::default(),
            merge_query_states: None,
            merge_mutation_states: None,
            error_wrapper: None,
            error_wrapper_options: None,
        }
    }
}

/// Immutable handle to the ambient configuration of one subtree.
///
/// Cloning is cheap and shares the underlying config; the config itself
/// never changes for the subtree's lifetime. Pass it down the call graph
/// explicitly — there is no global registry.
pub struct Scope<V> {
    inner: Arc<AsyncConfig<V>>,
}

impl<V> Scope<V> {
    pub fn new(config: AsyncConfig<V>) -> Self {
        Self {
            inner: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AsyncConfig<V> {
        &self.inner
    }
}

impl<V> Clone for Scope<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> Default for Scope<V> {
    fn default() -> Self {
        Self::new(AsyncConfig::default())
    }
}
