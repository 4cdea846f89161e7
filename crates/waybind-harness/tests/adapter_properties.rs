//! Property-based tests for the adapter lifecycle contract.
//!
//! Invariants are verified under arbitrary context values and operation
//! sequences, with the reference [`LifecycleModel`] predicting the exact
//! controller call log the adapter must produce.

use proptest::prelude::*;
use waybind_core::{
    ContextValue, Diagnostics, RouteContext, RouterAdapter, RouterProps, SharedController,
    shallow_differs,
};
use waybind_harness::{
    LifecycleModel, Operation, RecordingController, RecordingEngine, SharedLog,
};

/// Generate random context values.
fn value_strategy() -> impl Strategy<Value = ContextValue> {
    prop_oneof![
        any::<bool>().prop_map(ContextValue::Bool),
        any::<i64>().prop_map(ContextValue::Integer),
        "[a-z]{0,6}".prop_map(ContextValue::from),
    ]
}

/// Generate random contexts over a small key universe, so collisions between
/// consecutive updates actually happen.
fn context_strategy() -> impl Strategy<Value = RouteContext> {
    prop::collection::btree_map("[a-d]", value_strategy(), 0..4).prop_map(|entries| {
        let mut context = RouteContext::new();
        for (key, value) in entries {
            context.insert(key, value);
        }
        context
    })
}

/// Generate a well-formed host sequence: mount, some updates, unmount.
fn operation_sequence() -> impl Strategy<Value = Vec<Operation>> {
    prop::collection::vec(
        prop::option::of(context_strategy()).prop_map(Operation::Update),
        0..8,
    )
    .prop_map(|updates| {
        let mut operations = vec![Operation::Mount];
        operations.extend(updates);
        operations.push(Operation::Unmount);
        operations
    })
}

/// Drive one operation on the real adapter.
fn drive(
    adapter: &mut RouterAdapter<RecordingEngine>,
    navigation: Option<&SharedController<RecordingController>>,
    operation: &Operation,
) {
    match operation {
        Operation::Mount => adapter.mount().expect("mount"),
        Operation::Update(context) => {
            let mut props = RouterProps::new();
            props.context = context.clone();
            props.navigation = navigation.cloned();
            adapter.update(props).expect("update");
        },
        Operation::Unmount => adapter.unmount().expect("unmount"),
    }
}

/// Assert the recorded log matches the model's predictions.
fn assert_matches_model(log: &SharedLog, model: &LifecycleModel) -> Result<(), TestCaseError> {
    let log = log.borrow();
    prop_assert_eq!(log.contexts.as_slice(), model.expected_contexts());
    prop_assert_eq!(log.dispose_count, model.expected_disposes());
    Ok(())
}

proptest! {
    /// Shallow-equal contexts must never reach the controller.
    #[test]
    fn prop_shallow_equal_update_never_calls(context in context_strategy()) {
        let engine = RecordingEngine::new();
        let props = RouterProps::new().with_context(context.clone());
        let mut adapter = RouterAdapter::new(&engine, props, Diagnostics::disabled())
            .expect("construct");
        adapter.mount().expect("mount");

        adapter.update(RouterProps::new().with_context(context)).expect("update");

        let log = engine.created_log(0).expect("log");
        prop_assert!(log.borrow().contexts.is_empty());
    }

    /// A differing context must reach the controller exactly once, verbatim.
    #[test]
    fn prop_differing_update_calls_exactly_once(
        first in context_strategy(),
        second in context_strategy(),
    ) {
        prop_assume!(shallow_differs(&first, &second));

        let engine = RecordingEngine::new();
        let props = RouterProps::new().with_context(first);
        let mut adapter = RouterAdapter::new(&engine, props, Diagnostics::disabled())
            .expect("construct");
        adapter.mount().expect("mount");

        adapter.update(RouterProps::new().with_context(second.clone())).expect("update");

        let log = engine.created_log(0).expect("log");
        let log = log.borrow();
        prop_assert_eq!(log.contexts.as_slice(), &[second]);
    }

    /// Shallow difference is symmetric and irreflexive on clones.
    #[test]
    fn prop_shallow_differs_is_symmetric(a in context_strategy(), b in context_strategy()) {
        prop_assert_eq!(shallow_differs(&a, &b), shallow_differs(&b, &a));
        prop_assert!(!shallow_differs(&a, &a.clone()));
    }

    /// An owned adapter tracks the reference model over any host sequence.
    #[test]
    fn prop_owned_adapter_matches_model(
        initial in prop::option::of(context_strategy()),
        operations in operation_sequence(),
    ) {
        let engine = RecordingEngine::new();
        let mut props = RouterProps::new();
        props.context = initial.clone();
        let mut adapter = RouterAdapter::new(&engine, props, Diagnostics::disabled())
            .expect("construct");
        let log = engine.created_log(0).expect("log");

        let mut model = LifecycleModel::owned(initial);
        for operation in &operations {
            drive(&mut adapter, None, operation);
            model.apply(operation);
            assert_matches_model(&log, &model)?;
        }

        // Owned controllers are disposed exactly once by the final unmount.
        prop_assert_eq!(log.borrow().dispose_count, 1);
    }

    /// An adopting adapter tracks the reference model and never disposes.
    #[test]
    fn prop_adopted_adapter_matches_model(
        initial in prop::option::of(context_strategy()),
        operations in operation_sequence(),
    ) {
        let engine = RecordingEngine::new();
        let (controller, log) = RecordingController::standalone();
        let mut props = RouterProps::new().with_navigation(controller.clone());
        props.context = initial.clone();
        let mut adapter = RouterAdapter::new(&engine, props, Diagnostics::disabled())
            .expect("construct");

        let mut model = LifecycleModel::adopted(initial);
        for operation in &operations {
            drive(&mut adapter, Some(&controller), operation);
            model.apply(operation);
            assert_matches_model(&log, &model)?;
        }

        prop_assert_eq!(log.borrow().dispose_count, 0);
        prop_assert_eq!(engine.created_count(), 0);
    }
}
