//! Exhaustive step-by-step reducer testing.
//!
//! [`TestStore`] holds a state and a reducer. Each [`send`](TestStore::send)
//! takes the action and a closure describing how the state should change;
//! the store applies the same closure to a copy of the previous state and
//! asserts the two agree. A change the closure does not describe, or one it
//! describes that did not happen, fails the test.

use composable_state_core::reducer::Reducer;
use std::fmt::Debug;

/// A synchronous store for asserting every state change.
///
/// # Example
///
/// ```
/// use composable_state_core::prelude::*;
/// use composable_state_testing::TestStore;
///
/// #[derive(Clone, Debug, Default, PartialEq)]
/// struct State {
///     count: i64,
///     history: Vec<i64>,
/// }
///
/// let reducer = reducer::from_fn(|s: &mut State, n: i64| {
///     s.count += n;
///     s.history.push(n);
/// });
///
/// let mut store = TestStore::new(State::default(), reducer);
/// store.send(5, |s| {
///     s.count = 5;
///     s.history = vec![5];
/// });
/// ```
pub struct TestStore<R>
where
    R: Reducer,
{
    reducer: R,
    state: R::State,
    steps: usize,
}

impl<R> TestStore<R>
where
    R: Reducer,
    R::State: Clone + PartialEq + Debug,
    R::Action: Debug,
{
    /// Create a test store with an initial state
    #[must_use]
    pub const fn new(initial_state: R::State, reducer: R) -> Self {
        Self {
            reducer,
            state: initial_state,
            steps: 0,
        }
    }

    /// Send an action and assert the exact resulting state
    ///
    /// `update` receives a copy of the state before the action and must
    /// turn it into the state the reducer is expected to produce.
    ///
    /// # Panics
    ///
    /// Panics if the reducer's result differs from the expected state.
    #[allow(clippy::panic)] // Test assertion
    pub fn send<F>(&mut self, action: R::Action, update: F) -> &mut Self
    where
        F: FnOnce(&mut R::State),
    {
        self.steps += 1;
        let description = format!("{action:?}");

        let mut expected = self.state.clone();
        update(&mut expected);

        self.reducer.reduce(&mut self.state, action);

        assert_eq!(
            self.state, expected,
            "State mismatch after step {} ({description})",
            self.steps
        );
        self
    }

    /// Send an action that must leave the state unchanged
    ///
    /// # Panics
    ///
    /// Panics if the reducer changed the state.
    pub fn send_unchanged(&mut self, action: R::Action) -> &mut Self {
        self.send(action, |_| {})
    }

    /// The current state
    #[must_use]
    pub const fn state(&self) -> &R::State {
        &self.state
    }

    /// Number of actions sent so far
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Consume the store, returning the final state
    #[must_use]
    pub fn into_state(self) -> R::State {
        self.state
    }
}

impl<R> Debug for TestStore<R>
where
    R: Reducer,
    R::State: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestStore")
            .field("state", &self.state)
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}
