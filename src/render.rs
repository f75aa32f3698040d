//! Flexible render adapter.
//!
//! A configured branch view is either a static artifact handed back as-is
//! or a function invoked with the standard payload. Making the two modes
//! an explicit tagged union keeps dispatch free of runtime type inspection.

use std::sync::Arc;

use crate::status::{OperationMap, OperationState};

/// Payload handed to every branch view and to the Ready content function.
///
/// The raw operation mappings ride along with their merged summaries so a
/// view can drill into a specific named operation — e.g. render one
/// query's partial data while a sibling in the same group is still
/// loading. `children` is included so a branch view can delegate back to
/// the consumer's content function.
pub struct RenderPayload<'a, V> {
    pub queries: &'a OperationMap,
    pub mutations: &'a OperationMap,
    pub query_state: OperationState,
    pub mutation_state: OperationState,
    pub children: &'a RenderFn<V>,
}

/// A payload-aware view producer.
pub type RenderFn<V> = Arc<dyn for<'a> Fn(&RenderPayload<'a, V>) -> V + Send + Sync>;

/// A configured view: a static placeholder or a dynamic, payload-aware one.
pub enum View<V> {
    Static(V),
    Dynamic(RenderFn<V>),
}

impl<V> View<V> {
    pub fn dynamic(
        render: impl for<'a> Fn(&RenderPayload<'a, V>) -> V + Send + Sync + 'static,
    ) -> Self {
        View::Dynamic(Arc::new(render))
    }
}

impl<V: Clone> Clone for View<V> {
    fn clone(&self) -> Self {
        match self {
            View::Static(value) => View::Static(value.clone()),
            View::Dynamic(render) => View::Dynamic(Arc::clone(render)),
        }
    }
}

/// Invoke a dynamic view with the payload; pass a static view through.
pub fn flex_render<V: Clone>(view: &View<V>, payload: &RenderPayload<'_, V>) -> V {
    match view {
        View::Static(value) => value.clone(),
        View::Dynamic(render) => render(payload),
    }
}
