use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recording_store() -> (Store<CounterReducer>, Rc<RefCell<Vec<i64>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let store = Store::<CounterReducer>::default()
        .with_listener(move |state: &CounterState| sink.borrow_mut().push(state.count));
    (store, seen)
}

// =============================================================
// Reducer
// =============================================================

#[test]
fn counter_starts_at_zero() {
    assert_eq!(CounterState::default().count, 0);
}

#[test]
fn increment_and_decrement_move_by_one() {
    let state = CounterState { count: 5 };
    assert_eq!(CounterReducer::reduce(state, CounterAction::Increment).count, 6);
    assert_eq!(CounterReducer::reduce(state, CounterAction::Decrement).count, 4);
}

#[test]
fn count_can_go_negative() {
    let state = CounterReducer::reduce(CounterState::default(), CounterAction::Decrement);
    assert_eq!(state.count, -1);
}

#[test]
fn count_saturates_at_limits() {
    let top = CounterState { count: i64::MAX };
    assert_eq!(CounterReducer::reduce(top, CounterAction::Increment).count, i64::MAX);
    let bottom = CounterState { count: i64::MIN };
    assert_eq!(CounterReducer::reduce(bottom, CounterAction::Decrement).count, i64::MIN);
}

// =============================================================
// Batching
// =============================================================

#[test]
fn add_performs_one_dispatch_per_unit() {
    let (mut store, seen) = recording_store();
    assert_eq!(store.add(3).count, 3);
    assert_eq!(store.dispatch_count(), 3);
    assert_eq!(*seen.borrow(), vec![1, 2, 3]);
}

#[test]
fn subtract_performs_one_dispatch_per_unit() {
    let (mut store, seen) = recording_store();
    assert_eq!(store.subtract(3).count, -3);
    assert_eq!(*seen.borrow(), vec![-1, -2, -3]);
}

#[test]
fn zero_batch_is_a_no_op() {
    let (mut store, seen) = recording_store();
    assert_eq!(store.add(0).count, 0);
    assert_eq!(store.subtract(0).count, 0);
    assert_eq!(store.dispatch_count(), 0);
    assert!(seen.borrow().is_empty());
}

#[test]
fn mixed_sequences_sum_their_batches() {
    let (mut store, _) = recording_store();
    let adds = [3_u32, 7, 0, 2];
    let subs = [5_u32, 1, 4];
    for (i, n) in adds.iter().enumerate() {
        store.add(*n);
        if let Some(m) = subs.get(i) {
            store.subtract(*m);
        }
    }
    let expected = adds.iter().map(|n| i64::from(*n)).sum::<i64>()
        - subs.iter().map(|m| i64::from(*m)).sum::<i64>();
    assert_eq!(store.state().count, expected);
    assert_eq!(store.dispatch_count(), 22);
}

#[test]
fn free_batch_helpers_emit_unit_actions() {
    let mut actions = Vec::new();
    add(2, |action| actions.push(action));
    subtract(1, |action| actions.push(action));
    assert_eq!(
        actions,
        vec![CounterAction::Increment, CounterAction::Increment, CounterAction::Decrement]
    );
}
