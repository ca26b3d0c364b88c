//! Integration tests for size-class propagation through nested grids.

use std::sync::Arc;

use cascade_grid::{
    GridConfig, GridNode, InheritanceMode, LifecycleState, Measurement, SizeClass, SizeListener,
    SizeSubscriber, WindowMetrics, WindowSize,
};
use parking_lot::Mutex;

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("cascade_grid=trace")
        .with_test_writer()
        .try_init();
}

/// Record every size class a node announces.
fn record_transitions(node: &GridNode) -> Arc<Mutex<Vec<SizeClass>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    node.size_class_changed()
        .connect(move |class: &SizeClass| seen_clone.lock().push(*class));
    seen
}

fn self_measured() -> GridConfig {
    GridConfig::new().relative_to(InheritanceMode::SelfMeasured)
}

fn parent_relative() -> GridConfig {
    GridConfig::new().relative_to(InheritanceMode::Parent)
}

#[test]
fn subscriber_fans_out_in_registration_order() {
    setup();
    let subscriber = SizeSubscriber::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    let listeners: Vec<SizeListener> = (0..4)
        .map(|i| {
            let order = order.clone();
            let listener: SizeListener =
                Arc::new(move |m: &Measurement| order.lock().push((i, *m)));
            listener
        })
        .collect();
    for listener in &listeners {
        subscriber.subscribe(listener);
    }

    subscriber.update(320.0, 200.0);

    let expected: Vec<_> = (0..4).map(|i| (i, Measurement::new(320.0, 200.0))).collect();
    assert_eq!(*order.lock(), expected);
}

#[test]
fn unsubscribe_during_fan_out_keeps_current_pass() {
    setup();
    let subscriber = SizeSubscriber::new();
    let calls = Arc::new(Mutex::new(Vec::new()));

    let late_calls = calls.clone();
    let late: SizeListener = Arc::new(move |_: &Measurement| late_calls.lock().push("late"));

    let handle = subscriber.handle();
    let late_clone = late.clone();
    let early_calls = calls.clone();
    let early: SizeListener = Arc::new(move |_: &Measurement| {
        early_calls.lock().push("early");
        handle.unsubscribe(&late_clone);
    });

    subscriber.subscribe(&early);
    subscriber.subscribe(&late);

    subscriber.update(10.0, 10.0);
    assert_eq!(*calls.lock(), vec!["early", "late"]);

    subscriber.update(20.0, 20.0);
    assert_eq!(*calls.lock(), vec!["early", "late", "early"]);
}

#[test]
fn same_class_measurements_do_not_propagate() {
    setup();
    let window = Arc::new(WindowSize::new(1000.0, 600.0));
    let root = GridNode::new(GridConfig::default(), None, window.clone());
    root.on_mount().unwrap();
    let transitions = record_transitions(&root);

    assert_eq!(root.size_class(), SizeClass::Md);
    window.resize(1010.0, 600.0);
    window.resize(800.0, 600.0);
    assert_eq!(root.size_class(), SizeClass::Md);
    assert!(transitions.lock().is_empty());

    window.resize(1100.0, 600.0);
    assert_eq!(*transitions.lock(), vec![SizeClass::Lg]);
}

#[test]
fn three_level_chain_propagates_from_mid() {
    setup();
    let window = Arc::new(WindowSize::new(1300.0, 800.0));
    let root = GridNode::new(GridConfig::default(), None, window.clone());
    root.on_mount().unwrap();

    let mid = root.child(self_measured());
    mid.on_mount().unwrap();
    let leaf = mid.child(parent_relative());
    leaf.on_mount().unwrap();

    assert!(!leaf.follows_window());
    let mid_transitions = record_transitions(&mid);
    let leaf_transitions = record_transitions(&leaf);

    mid.on_measured(900.0, 400.0);
    assert_eq!(mid.size_class(), SizeClass::Md);
    assert_eq!(leaf.size_class(), SizeClass::Md);
    assert_eq!(*leaf_transitions.lock(), vec![SizeClass::Md]);

    // Same class at mid: nothing moves below it.
    mid.on_measured(950.0, 420.0);
    assert_eq!(*mid_transitions.lock(), vec![SizeClass::Md]);
    assert_eq!(*leaf_transitions.lock(), vec![SizeClass::Md]);

    mid.on_measured(300.0, 420.0);
    assert_eq!(leaf.size_class(), SizeClass::Xs);

    // The window root is not part of this chain.
    window.resize(500.0, 800.0);
    assert_eq!(root.size_class(), SizeClass::Sm);
    assert_eq!(leaf.size_class(), SizeClass::Xs);
}

#[test]
fn leaf_starts_from_reference_measurement() {
    setup();
    let window = Arc::new(WindowSize::new(1300.0, 800.0));
    let root = GridNode::new(GridConfig::default(), None, window.clone());
    let mid = root.child(self_measured());
    mid.on_mount().unwrap();
    mid.on_measured(600.0, 300.0);

    let leaf = mid.child(parent_relative());
    assert_eq!(leaf.size_class(), SizeClass::Sm);
}

#[test]
fn leaf_unmount_leaves_live_reference() {
    setup();
    let window = Arc::new(WindowSize::new(1300.0, 800.0));
    let root = GridNode::new(GridConfig::default(), None, window.clone());
    let mid = root.child(self_measured());
    mid.on_mount().unwrap();
    let leaf = mid.child(parent_relative());
    let reference = mid.context().size_provider;
    assert_eq!(reference.listener_count(), 0);

    leaf.on_mount().unwrap();
    assert_eq!(reference.listener_count(), 1);

    leaf.on_unmount();
    assert_eq!(reference.listener_count(), 0);
    assert!(!reference.is_closed());

    // The reference keeps publishing; the unmounted leaf no longer follows.
    mid.on_measured(1100.0, 400.0);
    assert_eq!(mid.size_class(), SizeClass::Lg);
    assert_eq!(leaf.size_class(), SizeClass::Xs);
    assert_eq!(reference.measurement(), Measurement::new(1100.0, 400.0));
}

#[test]
fn parent_mode_under_window_root_follows_window() {
    setup();
    let window = Arc::new(WindowSize::new(1300.0, 800.0));
    let root = GridNode::new(GridConfig::default(), None, window.clone());
    root.on_mount().unwrap();

    let child = root.child(parent_relative());
    let grandchild = child.child(parent_relative());
    child.on_mount().unwrap();
    grandchild.on_mount().unwrap();

    assert!(root.context().reference_provider.is_none());
    assert!(child.follows_window());
    assert!(grandchild.follows_window());
    assert_eq!(grandchild.size_class(), SizeClass::Xl);
    assert_eq!(window.listener_count(), 3);

    window.resize(700.0, 800.0);
    assert_eq!(child.size_class(), SizeClass::Sm);
    assert_eq!(grandchild.size_class(), SizeClass::Sm);
}

#[test]
fn unmount_removes_window_registration() {
    setup();
    let window = Arc::new(WindowSize::new(1300.0, 800.0));
    let root = GridNode::new(GridConfig::default(), None, window.clone());
    root.on_mount().unwrap();
    assert_eq!(window.listener_count(), 1);

    root.on_unmount();
    assert_eq!(root.lifecycle_state(), LifecycleState::Unmounted);
    assert_eq!(window.listener_count(), 0);

    window.resize(300.0, 800.0);
    assert_eq!(root.size_class(), SizeClass::Xl);
    assert_eq!(window.window_size(), Measurement::new(300.0, 800.0));
}

#[test]
fn dropping_a_node_unsubscribes_it() {
    setup();
    let window = Arc::new(WindowSize::new(1300.0, 800.0));
    {
        let root = GridNode::new(GridConfig::default(), None, window.clone());
        root.on_mount().unwrap();
        assert_eq!(window.listener_count(), 1);
    }
    assert_eq!(window.listener_count(), 0);
    assert!(window.resize(200.0, 200.0));
}
