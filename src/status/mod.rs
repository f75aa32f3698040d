//! Operation snapshots and the merged state they fold into.
//!
//! An [`Operation`] is a read-only snapshot of one async unit of work,
//! owned by the external data-fetching layer. The core never mutates or
//! retains one across render passes. All fields are optional on the wire
//! so a snapshot from any of the three supported status conventions
//! deserializes into the same type; absent fields behave as falsy.

pub mod merge;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Named operations, as handed over by the data-fetching layer.
pub type OperationMap = BTreeMap<String, Operation>;

/// Status tag carried by an individual operation (primary convention).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpStatus {
    Idle,
    Loading,
    Error,
    Success,
}

/// Status of a merged state, derived with fixed precedence:
/// loading > error > success > idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Loading,
    Error,
    Success,
    #[default]
    Idle,
}

impl Status {
    /// Derive the merged status from the folded flags.
    pub fn from_flags(is_loading: bool, has_error: bool, is_success: bool) -> Self {
        if is_loading {
            Status::Loading
        } else if has_error {
            Status::Error
        } else if is_success {
            Status::Success
        } else {
            Status::Idle
        }
    }
}

/// Snapshot of one async operation.
///
/// Field groups by upstream convention:
/// - primary: `status`, `is_loading`, `is_paused`, `is_fetching`, `is_error`,
///   `is_success`, `data`
/// - simplified A: `is_validating`, `error`, `data`
/// - simplified B: `loading`, `error`, `data`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Operation {
    pub status: Option<OpStatus>,
    pub is_loading: bool,
    pub is_paused: bool,
    pub is_fetching: bool,
    pub is_error: bool,
    pub is_success: bool,
    /// Revalidation flag of the simplified A convention.
    pub is_validating: bool,
    /// Loading flag of the simplified B convention.
    pub loading: bool,
    pub error: Option<Value>,
    pub data: Option<Value>,
}

impl Operation {
    /// Idle operation under the primary convention. Excluded from the fold.
    pub fn idle() -> Self {
        Self {
            status: Some(OpStatus::Idle),
            ..Self::default()
        }
    }

    /// Operation with an in-flight initial load (primary convention).
    pub fn loading() -> Self {
        Self {
            status: Some(OpStatus::Loading),
            is_loading: true,
            is_fetching: true,
            ..Self::default()
        }
    }

    /// Settled successful operation carrying `data` (primary convention).
    pub fn success(data: Value) -> Self {
        Self {
            status: Some(OpStatus::Success),
            is_success: true,
            data: Some(data),
            ..Self::default()
        }
    }

    /// Settled failed operation (primary convention).
    pub fn error(error: Value) -> Self {
        Self {
            status: Some(OpStatus::Error),
            is_error: true,
            error: Some(error),
            ..Self::default()
        }
    }

    /// Revalidating operation (simplified A convention).
    pub fn validating() -> Self {
        Self {
            is_validating: true,
            ..Self::default()
        }
    }

    /// Settled operation of the simplified conventions, carrying `data`.
    pub fn resolved(data: Value) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    /// Failed operation of the simplified conventions.
    pub fn failed(error: Value) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    /// Mark a background refetch in progress.
    pub fn fetching(mut self) -> Self {
        self.is_fetching = true;
        self
    }

    /// Mark the operation paused (primary convention).
    pub fn paused(mut self) -> Self {
        self.is_paused = true;
        self
    }
}

/// Merged summary of one operation mapping. Recomputed on every call,
/// no identity beyond the call that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OperationState {
    pub is_loading: bool,
    pub is_fetching: bool,
    pub is_paused: bool,
    pub has_error: bool,
    pub has_data: bool,
    /// AND-accumulator over individual success flags; seeds the status
    /// derivation. False while the accumulator is empty.
    pub is_success: bool,
    pub status: Status,
    /// Number of operations that took part in the fold.
    pub folded: usize,
}

impl OperationState {
    /// True when no operation took part in the fold — either the mapping
    /// was empty or every entry was idle. Callers must treat this
    /// distinctly from an explicit idle result: an idle system with zero
    /// pending operations has nothing to report yet, it is not "no data".
    pub fn is_empty(&self) -> bool {
        self.folded == 0
    }
}

/// Does a payload hold meaningful data?
///
/// Arrays and objects count only when non-empty; null and absent payloads
/// never count; every other value does.
pub fn has_data(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(fields)) => !fields.is_empty(),
        Some(_) => true,
    }
}
