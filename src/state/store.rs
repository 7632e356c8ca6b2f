//! Reducer-driven state holder.
//!
//! DESIGN
//! ======
//! A [`Reducer`] is the only place a state transition happens: a pure
//! `(State, Action) -> State` function. A [`Store`] owns one state value,
//! feeds it through the reducer one action at a time, and notifies an optional
//! listener after every single transition so batched callers stay observable
//! step by step.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Pure state transition function.
pub trait Reducer {
    type State: Clone;
    type Action;

    /// Produce the next state from the current one and an action.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}

type Listener<S> = Box<dyn FnMut(&S)>;

/// Explicitly owned state plus the reducer that evolves it.
pub struct Store<R: Reducer> {
    state: R::State,
    dispatches: u64,
    listener: Option<Listener<R::State>>,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            dispatches: 0,
            listener: None,
        }
    }

    /// Call `listener` with the new state after every dispatch.
    #[must_use]
    pub fn with_listener(mut self, listener: impl FnMut(&R::State) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Number of actions reduced so far.
    pub fn dispatch_count(&self) -> u64 {
        self.dispatches
    }

    /// Reduce one action into the held state.
    pub fn dispatch(&mut self, action: R::Action) -> &R::State {
        self.state = R::reduce(self.state.clone(), action);
        self.dispatches += 1;
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.state);
        }
        &self.state
    }
}

impl<R> Default for Store<R>
where
    R: Reducer,
    R::State: Default,
{
    fn default() -> Self {
        Self::new(R::State::default())
    }
}
