//! Manual override flags and their fall-through to computed state.
//!
//! Every flag resolves the same way: an override wins when present,
//! otherwise the computed query/mutation pair decides. An override may be
//! a frozen boolean or a zero-argument predicate re-evaluated on every
//! call; the predicate's boolean result is used directly.

use std::fmt;
use std::sync::Arc;

use crate::status::OperationState;

/// A live override predicate.
pub type FlagFn = Arc<dyn Fn() -> bool + Send + Sync>;

/// Manual override for one of the branch-selection flags.
#[derive(Clone)]
pub enum Flag {
    Value(bool),
    Predicate(FlagFn),
}

impl Flag {
    pub fn predicate(check: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Flag::Predicate(Arc::new(check))
    }

    /// Evaluate the override. Predicates run fresh on every call.
    pub fn eval(&self) -> bool {
        match self {
            Flag::Value(value) => *value,
            Flag::Predicate(check) => check(),
        }
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        Flag::Value(value)
    }
}

impl fmt::Debug for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flag::Value(value) => write!(f, "Value({value})"),
            Flag::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

pub fn resolve_is_loading(
    flag: Option<&Flag>,
    query_state: &OperationState,
    mutation_state: &OperationState,
) -> bool {
    match flag {
        Some(flag) => flag.eval(),
        None => query_state.is_loading || mutation_state.is_loading,
    }
}

pub fn resolve_has_error(
    flag: Option<&Flag>,
    query_state: &OperationState,
    mutation_state: &OperationState,
) -> bool {
    match flag {
        Some(flag) => flag.eval(),
        None => query_state.has_error || mutation_state.has_error,
    }
}

pub fn resolve_has_data(
    flag: Option<&Flag>,
    query_state: &OperationState,
    mutation_state: &OperationState,
) -> bool {
    if let Some(flag) = flag {
        return flag.eval();
    }
    // Zero non-idle operations anywhere: nothing to report yet, let the
    // empty pair pass so selection falls through to Ready.
    if query_state.is_empty() && mutation_state.is_empty() {
        return true;
    }
    query_state.has_data || mutation_state.has_data
}
