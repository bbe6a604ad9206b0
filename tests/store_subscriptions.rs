//! Observer notifications from the counter store owned by `App`.

mod common;

use common::*;
use parking_lot::Mutex;
use reactive_counter::ui::counter::CounterState;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn each_increment_notifies_once() {
    let mut app = make_app();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    app.subscribe(move |_: &CounterState| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    for _ in 0..5 {
        app.increment();
    }

    assert_eq!(calls.load(Ordering::SeqCst), 5);
}

#[test]
fn observers_see_every_value_in_order() {
    let mut app = make_app();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    app.subscribe(move |state: &CounterState| sink.lock().push(state.count()));

    app.increment();
    app.increment();
    app.increment();

    assert_eq!(*seen.lock(), vec![1, 2, 3]);
}

#[test]
fn mutation_is_visible_before_increment_returns() {
    let mut app = make_app();
    app.increment();
    assert_eq!(app.count(), 1);
    app.increment();
    assert_eq!(app.count(), 2);
}

#[test]
fn reads_do_not_notify_or_mutate() {
    let mut app = make_app();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    app.subscribe(move |_: &CounterState| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    app.increment();

    for _ in 0..10 {
        assert_eq!(app.count(), 1);
        assert_eq!(app.counter().count(), 1);
        let _ = app.view();
    }
    let _ = render_lines(&app);

    assert_eq!(app.count(), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn unsubscribed_observer_is_silent() {
    let mut app = make_app();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let id = app.subscribe(move |_: &CounterState| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    app.increment();
    assert!(app.unsubscribe(id));
    app.increment();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(app.count(), 2);
}

#[test]
fn view_keeps_its_own_subscription() {
    let mut app = make_app();
    assert_eq!(app.observer_count(), 1);
    let id = app.subscribe(|_: &CounterState| {});
    assert_eq!(app.observer_count(), 2);
    app.unsubscribe(id);
    assert_eq!(app.observer_count(), 1);
}
