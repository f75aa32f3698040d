mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_view::dispatch::render;
use async_view::{AsyncProps, Components, Operation, RenderPayload, Scope, View};
use common::{counting_children, init_tracing, map, TestView};
use serde_json::json;

fn default_scope() -> Scope<TestView> {
    init_tracing();
    Scope::default()
}

#[test]
fn pending_query_renders_loading_then_ready_with_data() {
    let scope = default_scope();
    let components = Components {
        loading: Some(View::Static(TestView::text("loading"))),
        ..Components::default()
    };

    // First pass: the query is still in flight.
    let props = AsyncProps::new(|payload: &RenderPayload<'_, TestView>| {
        let data = payload.queries["query1"].data.clone();
        TestView::Text(data.unwrap().as_str().unwrap().to_string())
    })
    .queries(map(vec![("query1", Operation::loading())]))
    .components(components.clone());
    assert_eq!(render(&props, &scope), TestView::text("loading"));

    // Second pass: resolved, children reads the payload.
    let props = AsyncProps::new(|payload: &RenderPayload<'_, TestView>| {
        assert!(payload.query_state.has_data);
        let data = payload.queries["query1"].data.clone();
        TestView::Text(data.unwrap().as_str().unwrap().to_string())
    })
    .queries(map(vec![("query1", Operation::success(json!("Foo Bar")))]))
    .components(components);
    assert_eq!(render(&props, &scope), TestView::text("Foo Bar"));
}

#[test]
fn failed_query_renders_error_and_never_invokes_children() {
    let scope = default_scope();
    let calls = Arc::new(AtomicUsize::new(0));

    let props = AsyncProps::new(counting_children(Arc::clone(&calls)))
        .queries(map(vec![("query1", Operation::error(json!("boom")))]))
        .components(Components {
            error: Some(View::Static(TestView::text("error"))),
            ..Components::default()
        });

    // Re-render a few passes; the branch must stay Error.
    for _ in 0..3 {
        assert_eq!(render(&props, &scope), TestView::text("error"));
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn empty_system_renders_ready() {
    let scope = default_scope();
    let calls = Arc::new(AtomicUsize::new(0));
    let props = AsyncProps::new(counting_children(Arc::clone(&calls)));

    assert_eq!(render(&props, &scope), TestView::text("content"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn mutation_pair_transitions_independently_of_queries() {
    let scope = default_scope();
    let components = Components {
        loading: Some(View::Static(TestView::text("saving"))),
        ..Components::default()
    };
    let children = |_: &RenderPayload<'_, TestView>| TestView::text("form");

    // Nothing triggered yet: both halves empty, Ready.
    let props = AsyncProps::new(children).components(components.clone());
    assert_eq!(render(&props, &scope), TestView::text("form"));

    // Mutation fires: Loading.
    let props = AsyncProps::new(children)
        .mutations(map(vec![("create", Operation::loading())]))
        .components(components.clone());
    assert_eq!(render(&props, &scope), TestView::text("saving"));

    // Mutation settles with data: back to Ready.
    let props = AsyncProps::new(|payload: &RenderPayload<'_, TestView>| {
        assert!(payload.mutation_state.has_data);
        assert!(payload.query_state.is_empty());
        TestView::text("form")
    })
    .mutations(map(vec![(
        "create",
        Operation::success(json!({"id": 1})),
    )]))
    .components(components);
    assert_eq!(render(&props, &scope), TestView::text("form"));
}

#[test]
fn unconfigured_branch_view_falls_back_to_default() {
    let scope = default_scope();
    let props = AsyncProps::new(|_: &RenderPayload<'_, TestView>| TestView::text("content"))
        .queries(map(vec![("query1", Operation::loading())]));
    assert_eq!(render(&props, &scope), TestView::Blank);
}

#[test]
fn dynamic_branch_view_receives_the_payload() {
    let scope = default_scope();
    let props = AsyncProps::new(|_: &RenderPayload<'_, TestView>| TestView::text("content"))
        .queries(map(vec![
            ("slow", Operation::loading()),
            ("slower", Operation::loading()),
        ]))
        .components(Components {
            loading: Some(View::dynamic(|payload: &RenderPayload<'_, TestView>| {
                TestView::Text(format!("{} pending", payload.queries.len()))
            })),
            ..Components::default()
        });
    assert_eq!(render(&props, &scope), TestView::text("2 pending"));
}

#[test]
fn show_fetching_prop_surfaces_background_refetch() {
    let scope = default_scope();
    let refetching = map(vec![(
        "query1",
        Operation::success(json!("Foo Bar")).fetching(),
    )]);

    let quiet = AsyncProps::new(|_: &RenderPayload<'_, TestView>| TestView::text("content"))
        .queries(refetching.clone());
    assert_eq!(render(&quiet, &scope), TestView::text("content"));

    let overlay = AsyncProps::new(|_: &RenderPayload<'_, TestView>| TestView::text("content"))
        .queries(refetching)
        .show_fetching(true)
        .components(Components {
            fetching: Some(View::Static(TestView::text("refreshing"))),
            ..Components::default()
        });
    assert_eq!(render(&overlay, &scope), TestView::text("refreshing"));
}

#[test]
fn error_wrapper_wraps_every_branch_output() {
    let scope = default_scope();
    let wrap: async_view::ErrorWrapper<TestView> = Arc::new(|view, options| match view {
        TestView::Text(content) => {
            TestView::Text(format!("[{}] {content}", options["label"].as_str().unwrap()))
        }
        TestView::Blank => TestView::Blank,
    });

    let ready = AsyncProps::new(|_: &RenderPayload<'_, TestView>| TestView::text("content"))
        .error_wrapper(Arc::clone(&wrap))
        .error_wrapper_options(json!({"label": "guard"}));
    assert_eq!(render(&ready, &scope), TestView::text("[guard] content"));

    let failed = AsyncProps::new(|_: &RenderPayload<'_, TestView>| TestView::text("content"))
        .queries(map(vec![("query1", Operation::error(json!("boom")))]))
        .components(Components {
            error: Some(View::Static(TestView::text("error"))),
            ..Components::default()
        })
        .error_wrapper(wrap)
        .error_wrapper_options(json!({"label": "guard"}));
    assert_eq!(render(&failed, &scope), TestView::text("[guard] error"));
}

#[test]
fn manual_loading_predicate_forces_loading_branch() {
    let scope = default_scope();
    let props = AsyncProps::new(|_: &RenderPayload<'_, TestView>| TestView::text("content"))
        .queries(map(vec![(
            "query1",
            Operation::success(json!("Foo Bar")),
        )]))
        .is_loading(async_view::Flag::predicate(|| true))
        .components(Components {
            loading: Some(View::Static(TestView::text("loading"))),
            ..Components::default()
        });
    assert_eq!(render(&props, &scope), TestView::text("loading"));
}
