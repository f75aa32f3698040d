//! Shared fixtures for integration tests.

#![allow(dead_code, unused_imports)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use async_view::{Operation, OperationMap, OperationState, RenderPayload, Status};

static TRACING: Once = Once::new();

/// Install the test subscriber once per binary. Quiet by default; set
/// `RUST_LOG=async_view=trace` to see branch decisions while debugging.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Minimal view artifact standing in for a host framework's output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TestView {
    #[default]
    Blank,
    Text(String),
}

impl TestView {
    pub fn text(content: &str) -> Self {
        TestView::Text(content.to_string())
    }
}

pub fn map(entries: Vec<(&str, Operation)>) -> OperationMap {
    entries
        .into_iter()
        .map(|(name, op)| (name.to_string(), op))
        .collect()
}

/// Merged state of a single in-flight initial load.
pub fn loading_state() -> OperationState {
    OperationState {
        is_loading: true,
        is_fetching: true,
        status: Status::Loading,
        folded: 1,
        ..OperationState::default()
    }
}

/// Merged state of a single settled failure.
pub fn error_state() -> OperationState {
    OperationState {
        has_error: true,
        status: Status::Error,
        folded: 1,
        ..OperationState::default()
    }
}

/// Merged state of a single settled success carrying data.
pub fn success_state() -> OperationState {
    OperationState {
        has_data: true,
        is_success: true,
        status: Status::Success,
        folded: 1,
        ..OperationState::default()
    }
}

/// Merged state of a single settled success with an empty payload.
pub fn no_data_state() -> OperationState {
    OperationState {
        is_success: true,
        status: Status::Success,
        folded: 1,
        ..OperationState::default()
    }
}

/// Content function that counts its invocations.
pub fn counting_children(
    counter: Arc<AtomicUsize>,
) -> impl for<'a> Fn(&RenderPayload<'a, TestView>) -> TestView + Send + Sync + 'static {
    move |_: &RenderPayload<'_, TestView>| {
        counter.fetch_add(1, Ordering::SeqCst);
        TestView::text("content")
    }
}
