//! Apply the configured mergers to the query and mutation mappings.

use crate::config::{resolve, Scope};
use crate::status::merge::Merger;
use crate::status::{OperationMap, OperationState};

/// Merge the two mappings independently and return the pair.
///
/// Pure and total: absent operations simply fold to the empty accumulator.
pub fn aggregate(
    queries: &OperationMap,
    mutations: &OperationMap,
    query_merger: &Merger,
    mutation_merger: &Merger,
) -> (OperationState, OperationState) {
    (query_merger.merge(queries), mutation_merger.merge(mutations))
}

/// Per-call inputs for [`aggregate_in`]. Same resolution contract as the
/// full render path, without any branch selection.
#[derive(Debug, Default)]
pub struct Aggregate {
    pub queries: Option<OperationMap>,
    pub mutations: Option<OperationMap>,
    pub merge_query_states: Option<Merger>,
    pub merge_mutation_states: Option<Merger>,
}

/// Aggregate under an ambient scope: explicit inputs win, then the scope's
/// defaults, then the primary merger over empty mappings.
pub fn aggregate_in<V>(props: &Aggregate, scope: &Scope<V>) -> (OperationState, OperationState) {
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

    aggregate(queries, mutations, &query_merger, &mutation_merger)
}
