//! Per-call entry point: resolve configuration, aggregate, select, render.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::aggregate::aggregate;
use crate::branch::{select_branch, Branch, Flag, ManualFlags};
use crate::config::{resolve, Components, ErrorWrapper, Scope};
use crate::render::{flex_render, RenderFn, RenderPayload, View};
use crate::status::merge::Merger;
use crate::status::OperationMap;

/// The per-call contract: the same optional field set as
/// [`crate::config::AsyncConfig`], plus the required content function
/// invoked with the standard payload on the Ready path.
pub struct AsyncProps<V> {
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
    pub children: RenderFn<V>,
}

impl<V> AsyncProps<V> {
    pub fn new(
        children: impl for<'a> Fn(&RenderPayload<'a, V>) -> V + Send + Sync + 'static,
    ) -> Self {
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
            children: Arc::new(children),
        }
    }

    pub fn queries(mut self, queries: OperationMap) -> Self {
        self.queries = Some(queries);
        self
    }

    pub fn mutations(mut self, mutations: OperationMap) -> Self {
        self.mutations = Some(mutations);
        self
    }

    pub fn is_loading(mut self, flag: impl Into<Flag>) -> Self {
        self.is_loading = Some(flag.into());
        self
    }

    pub fn is_fetching(mut self, flag: impl Into<Flag>) -> Self {
        self.is_fetching = Some(flag.into());
        self
    }

    pub fn has_error(mut self, flag: impl Into<Flag>) -> Self {
        self.has_error = Some(flag.into());
        self
    }

    pub fn has_data(mut self, flag: impl Into<Flag>) -> Self {
        self.has_data = Some(flag.into());
        self
    }

    pub fn show_fetching(mut self, show: bool) -> Self {
        self.show_fetching = Some(show);
        self
    }

    pub fn components(mut self, components: Components<V>) -> Self {
        self.components = components;
        self
    }

    pub fn merge_query_states(mut self, merger: Merger) -> Self {
        self.merge_query_states = Some(merger);
        self
    }

    pub fn merge_mutation_states(mut self, merger: Merger) -> Self {
        self.merge_mutation_states = Some(merger);
        self
    }

    pub fn error_wrapper(mut self, wrapper: ErrorWrapper<V>) -> Self {
        self.error_wrapper = Some(wrapper);
        self
    }

    pub fn error_wrapper_options(mut self, options: Value) -> Self {
        self.error_wrapper_options = Some(options);
        self
    }
}

/// Run one render pass.
///
/// Resolves every field through the explicit → ambient → built-in chain,
/// merges both mappings, selects the branch, and renders its view with
/// the standard payload. An unconfigured branch view falls back to
/// `V::default()`. When an error wrapper is configured the whole output
/// is handed to it, so it can recover from any branch including Ready.
pub fn render<V>(props: &AsyncProps<V>, scope: &Scope<V>) -> V
where
    V: Clone + Default,
{
    let config = scope.config();
    let empty = OperationMap::new();

    let queries = resolve(props.queries.as_ref(), config.queries.as_ref()).unwrap_or(&empty);
    let mutations = resolve(props.mutations.as_ref(), config.mutations.as_ref()).unwrap_or(&empty);

    let query_merger = resolve(
        props.merge_query_states.as_ref(),
        config.merge_query_states.as_ref(),
    )
    .cloned()
    .unwrap_or_default();
    let mutation_merger = resolve(
        props.merge_mutation_states.as_ref(),
        config.merge_mutation_states.as_ref(),
    )
    .cloned()
    .unwrap_or_default();

    let (query_state, mutation_state) =
        aggregate(queries, mutations, &query_merger, &mutation_merger);

    let manual = ManualFlags {
        is_loading: resolve(props.is_loading.as_ref(), config.is_loading.as_ref()),
        is_fetching: resolve(props.is_fetching.as_ref(), config.is_fetching.as_ref()),
        has_error: resolve(props.has_error.as_ref(), config.has_error.as_ref()),
        has_data: resolve(props.has_data.as_ref(), config.has_data.as_ref()),
    };
    let show_fetching = resolve(props.show_fetching.as_ref(), config.show_fetching.as_ref())
        .copied()
        .unwrap_or(false);

    let branch = select_branch(&manual, show_fetching, &query_state, &mutation_state);
    debug!(
        ?branch,
        queries = queries.len(),
        mutations = mutations.len(),
        "render pass"
    );

    let payload = RenderPayload {
        queries,
        mutations,
        query_state,
        mutation_state,
        children: &props.children,
    };

    let output = match branch {
        Branch::Loading => branch_view(
            resolve(
                props.components.loading.as_ref(),
                config.components.loading.as_ref(),
            ),
            &payload,
        ),
        Branch::Fetching => branch_view(
            resolve(
                props.components.fetching.as_ref(),
                config.components.fetching.as_ref(),
            ),
            &payload,
        ),
        Branch::Error => branch_view(
            resolve(
                props.components.error.as_ref(),
                config.components.error.as_ref(),
            ),
            &payload,
        ),
        Branch::NoData => branch_view(
            resolve(
                props.components.no_data.as_ref(),
                config.components.no_data.as_ref(),
            ),
            &payload,
        ),
        Branch::Ready => (props.children)(&payload),
    };

    match resolve(props.error_wrapper.as_ref(), config.error_wrapper.as_ref()) {
        Some(wrap) => {
            let options = resolve(
                props.error_wrapper_options.as_ref(),
                config.error_wrapper_options.as_ref(),
            )
            .cloned()
            .unwrap_or(Value::Null);
            wrap(output, &options)
        }
        None => output,
    }
}

fn branch_view<V>(view: Option<&View<V>>, payload: &RenderPayload<'_, V>) -> V
where
    V: Clone + Default,
{
    match view {
        Some(view) => flex_render(view, payload),
        None => V::default(),
    }
}
