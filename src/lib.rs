//! Collapse independently-loading async operations into one renderable state.
//!
//! Data-fetching libraries hand the UI a pile of per-operation status flags
//! (loading, fetching, error, data). This crate folds a mapping of named
//! operations into a single [`OperationState`] per group (queries and
//! mutations), then picks exactly one of five mutually exclusive render
//! branches: Loading, Fetching, Error, NoData, or Ready.
//!
//! # Architecture
//!
//! ```text
//! OperationMap ──→ Merger ──→ OperationState ──→ select_branch ──→ Branch ──→ View
//!                                                      ↑
//!                               AsyncProps / Scope (overrides, defaults)
//! ```
//!
//! - **Mergers**: pure commutative folds, one per upstream status convention
//! - **Aggregator**: applies the configured merger to each mapping
//! - **Branch selector**: manual overrides and computed states, first match wins
//! - **Flexible render**: static views pass through, dynamic views get the payload
//!
//! The crate owns no rendering and no state across calls. It is generic over
//! the view artifact `V` the host framework works with, and is re-invoked
//! from scratch on every render pass.

pub mod aggregate;
pub mod branch;
pub mod config;
pub mod dispatch;
pub mod render;
pub mod status;

pub use branch::{Branch, Flag, FlagFn, ManualFlags};
pub use config::{AsyncConfig, Components, ErrorWrapper, Scope};
pub use dispatch::AsyncProps;
pub use render::{flex_render, RenderFn, RenderPayload, View};
pub use status::merge::{MergeFn, Merger, MergerKind, ParseMergerError};
pub use status::{OpStatus, Operation, OperationMap, OperationState, Status};
