//! Branch selection: exactly one of five mutually exclusive render states.

use tracing::trace;

use super::flags::{self, Flag};
use crate::status::OperationState;

/// The render branch chosen for one pass. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Loading,
    Fetching,
    Error,
    NoData,
    Ready,
}

/// Manual overrides already resolved through the props/config layers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualFlags<'a> {
    pub is_loading: Option<&'a Flag>,
    pub is_fetching: Option<&'a Flag>,
    pub has_error: Option<&'a Flag>,
    pub has_data: Option<&'a Flag>,
}

/// Decide the branch for one render pass. Evaluated top to bottom, first
/// match wins. The Fetching branch only takes part when `show_fetching`
/// is set or a manual `is_fetching` override resolves truthy.
pub fn select_branch(
    manual: &ManualFlags<'_>,
    show_fetching: bool,
    query_state: &OperationState,
    mutation_state: &OperationState,
) -> Branch {
    let branch = decide(manual, show_fetching, query_state, mutation_state);
    trace!(
        ?branch,
        query_status = ?query_state.status,
        mutation_status = ?mutation_state.status,
        "selected render branch"
    );
    branch
}

fn decide(
    manual: &ManualFlags<'_>,
    show_fetching: bool,
    query_state: &OperationState,
    mutation_state: &OperationState,
) -> Branch {
    if flags::resolve_is_loading(manual.is_loading, query_state, mutation_state) {
        return Branch::Loading;
    }

    // Evaluate a manual override once per pass; a time-varying predicate
    // must not answer differently for the gate and the branch test.
    let manual_fetching = manual.is_fetching.map(Flag::eval);
    let fetching_enabled = show_fetching || manual_fetching.unwrap_or(false);
    if fetching_enabled
        && manual_fetching
            .unwrap_or_else(|| query_state.is_fetching || mutation_state.is_fetching)
    {
        return Branch::Fetching;
    }

    if flags::resolve_has_error(manual.has_error, query_state, mutation_state) {
        return Branch::Error;
    }

    if !flags::resolve_has_data(manual.has_data, query_state, mutation_state) {
        return Branch::NoData;
    }

    Branch::Ready
}
