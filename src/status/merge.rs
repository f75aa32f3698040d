//! Mergers: fold a mapping of named operations into one [`OperationState`].
//!
//! One merger exists per upstream status convention. All three share the
//! same fold shape: OR over the busy/error flags, AND over success and
//! per-operation data presence, with the first folded operation seeding
//! the AND accumulators. The fold is commutative and associative, so
//! insertion order of the mapping never matters.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use super::{has_data, OpStatus, OperationMap, OperationState, Status};

/// A caller-supplied merge strategy.
pub type MergeFn = Arc<dyn Fn(&OperationMap) -> OperationState + Send + Sync>;

fn fold_and(acc: &mut OperationState, op_success: bool, op_has_data: bool) {
    if acc.folded == 0 {
        acc.is_success = op_success;
        acc.has_data = op_has_data;
    } else {
        acc.is_success &= op_success;
        acc.has_data &= op_has_data;
    }
    acc.folded += 1;
}

/// Merge operations of the primary convention
/// (`status`/`is_loading`/`is_fetching`/`is_paused`/`is_error`/`is_success`).
///
/// Idle operations are excluded from the fold; a mapping with nothing but
/// idle entries yields the empty accumulator ([`OperationState::is_empty`]).
pub fn merge_primary(operations: &OperationMap) -> OperationState {
    let mut acc = OperationState::default();
    for op in operations
        .values()
        .filter(|op| op.status != Some(OpStatus::Idle))
    {
        acc.is_loading |= op.is_loading;
        acc.is_fetching |= op.is_fetching;
        acc.is_paused |= op.is_paused;
        acc.has_error |= op.is_error;
        fold_and(&mut acc, op.is_success, has_data(op.data.as_ref()));
    }
    acc.status = Status::from_flags(acc.is_loading, acc.has_error, acc.is_success);
    acc
}

/// Merge operations of the simplified A convention
/// (`is_validating`/`error`/`data`). No idle state exists, so nothing is
/// filtered; revalidation counts as loading.
pub fn merge_validating(operations: &OperationMap) -> OperationState {
    let mut acc = OperationState::default();
    for op in operations.values() {
        acc.is_loading |= op.is_validating;
        acc.has_error |= op.error.is_some();
        let op_has_data = has_data(op.data.as_ref());
        fold_and(&mut acc, op_has_data, op_has_data);
    }
    acc.status = Status::from_flags(acc.is_loading, acc.has_error, acc.is_success);
    acc
}

/// Merge operations of the simplified B convention (`loading`/`error`/`data`).
pub fn merge_loading(operations: &OperationMap) -> OperationState {
    let mut acc = OperationState::default();
    for op in operations.values() {
        acc.is_loading |= op.loading;
        acc.has_error |= op.error.is_some();
        let op_has_data = has_data(op.data.as_ref());
        fold_and(&mut acc, op_has_data, op_has_data);
    }
    acc.status = Status::from_flags(acc.is_loading, acc.has_error, acc.is_success);
    acc
}

/// Closed set of merge strategies, selected by configuration.
///
/// `Custom` carries a caller-supplied fold for conventions the built-ins
/// do not cover. It must uphold the same contract: pure, total, and
/// order-independent over the mapping.
#[derive(Clone, Default)]
pub enum Merger {
    #[default]
    Primary,
    Validating,
    Loading,
    Custom(MergeFn),
}

impl Merger {
    pub fn merge(&self, operations: &OperationMap) -> OperationState {
        match self {
            Merger::Primary => merge_primary(operations),
            Merger::Validating => merge_validating(operations),
            Merger::Loading => merge_loading(operations),
            Merger::Custom(merge) => merge(operations),
        }
    }
}

impl fmt::Debug for Merger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Merger::Primary => f.write_str("Primary"),
            Merger::Validating => f.write_str("Validating"),
            Merger::Loading => f.write_str("Loading"),
            Merger::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Built-in merger names, for declarative configuration sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergerKind {
    Primary,
    Validating,
    Loading,
}

/// Unknown merger name in configuration.
#[derive(Debug, Error)]
#[error("unknown merger '{0}', expected one of: primary, validating, loading")]
pub struct ParseMergerError(String);

impl FromStr for MergerKind {
    type Err = ParseMergerError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "primary" => Ok(MergerKind::Primary),
            "validating" => Ok(MergerKind::Validating),
            "loading" => Ok(MergerKind::Loading),
            other => Err(ParseMergerError(other.to_string())),
        }
    }
}

impl From<MergerKind> for Merger {
    fn from(kind: MergerKind) -> Self {
        match kind {
            MergerKind::Primary => Merger::Primary,
            MergerKind::Validating => Merger::Validating,
            MergerKind::Loading => Merger::Loading,
        }
    }
}
