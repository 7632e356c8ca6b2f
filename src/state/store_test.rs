use std::cell::RefCell;
use std::rc::Rc;

use super::*;

/// Appends each action's letter to the state string.
struct Append;

impl Reducer for Append {
    type State = String;
    type Action = char;

    fn reduce(mut state: String, action: char) -> String {
        state.push(action);
        state
    }
}

#[test]
fn new_store_holds_initial_state_and_no_dispatches() {
    let store = Store::<Append>::new("x".to_owned());
    assert_eq!(store.state(), "x");
    assert_eq!(store.dispatch_count(), 0);
}

#[test]
fn default_store_uses_default_state() {
    let store = Store::<Append>::default();
    assert_eq!(store.state(), "");
}

#[test]
fn dispatch_reduces_in_order() {
    let mut store = Store::<Append>::default();
    store.dispatch('a');
    store.dispatch('b');
    assert_eq!(store.dispatch('c'), "abc");
    assert_eq!(store.dispatch_count(), 3);
}

#[test]
fn listener_sees_every_intermediate_state() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut store = Store::<Append>::default().with_listener(move |state: &String| {
        sink.borrow_mut().push(state.clone());
    });

    store.dispatch('a');
    store.dispatch('b');

    assert_eq!(*seen.borrow(), vec!["a".to_owned(), "ab".to_owned()]);
}
