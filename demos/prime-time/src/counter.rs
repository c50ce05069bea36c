//! Counter feature
//!
//! The counter owns a single number. It knows nothing about primes or the
//! rest of the app; [`app`](crate::app) lifts it onto `AppState::count`.

use composable_state_core::reducer::Reducer;

/// Counter actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    /// The "+" button
    IncrementTapped,
    /// The "-" button
    DecrementTapped,
}

/// Counter reducer over a bare `i64`
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = i64;
    type Action = CounterAction;

    fn reduce(&self, count: &mut i64, action: CounterAction) {
        match action {
            CounterAction::IncrementTapped => *count += 1,
            CounterAction::DecrementTapped => *count -= 1,
        }
    }
}
