//! Batch counter state and reducer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The counter widget never adds `n` in one step. Each click performs `n`
//! unit dispatches so every intermediate transition goes through the reducer.
//! [`CounterAction`] is a closed set matched exhaustively, so an action the
//! reducer does not know cannot be built, let alone dispatched.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use super::store::{Reducer, Store};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterState {
    pub count: i64,
}

/// Unit counter transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
}

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn reduce(state: CounterState, action: CounterAction) -> CounterState {
        match action {
            CounterAction::Increment => CounterState {
                count: state.count.saturating_add(1),
            },
            CounterAction::Decrement => CounterState {
                count: state.count.saturating_sub(1),
            },
        }
    }
}

/// Dispatch `action` `n` times, one unit transition per call.
pub fn repeat(action: CounterAction, n: u32, mut dispatch: impl FnMut(CounterAction)) {
    for _ in 0..n {
        dispatch(action);
    }
}

pub fn add(n: u32, dispatch: impl FnMut(CounterAction)) {
    repeat(CounterAction::Increment, n, dispatch);
}

pub fn subtract(n: u32, dispatch: impl FnMut(CounterAction)) {
    repeat(CounterAction::Decrement, n, dispatch);
}

impl Store<CounterReducer> {
    pub fn add(&mut self, n: u32) -> CounterState {
        add(n, |action| {
            self.dispatch(action);
        });
        *self.state()
    }

    pub fn subtract(&mut self, n: u32) -> CounterState {
        subtract(n, |action| {
            self.dispatch(action);
        });
        *self.state()
    }
}
