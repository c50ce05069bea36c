//! # Composable State Core
//!
//! Reducers and the algebra that composes them.
//!
//! This crate provides the building blocks for splitting application logic
//! into small reducers that each know only their own slice of state and
//! their own actions, then gluing them back together into one reducer over
//! the whole application.
//!
//! ## Core Concepts
//!
//! - **State**: A plain, cloneable value describing the application
//! - **Action**: A closed enum of everything that can happen
//! - **Reducer**: Deterministic in-place transform `(&mut State, Action)`
//! - **Lens**: Total get/set pair focusing a part of a larger state
//! - **Prism**: Partial extract / total embed pair focusing one action variant
//! - **Pullback**: Lifts a local reducer to global state and actions
//! - **Combine**: Runs several reducers over the same state, in order
//!
//! ## Example
//!
//! ```
//! use composable_state_core::prelude::*;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct AppState {
//!     count: i64,
//!     favorites: Vec<i64>,
//! }
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum AppAction {
//!     Counter(CounterAction),
//!     ClearFavorites,
//! }
//!
//! let counter = reducer::from_fn(|count: &mut i64, action: CounterAction| match action {
//!     CounterAction::Increment => *count += 1,
//! });
//!
//! let app = combine(vec![
//!     counter
//!         .pullback(
//!             Lens::new(|s: &AppState| s.count, |s: &mut AppState, count: i64| s.count = count),
//!             Prism::new(
//!                 |a: AppAction| match a {
//!                     AppAction::Counter(action) => Some(action),
//!                     _ => None,
//!                 },
//!                 AppAction::Counter,
//!             ),
//!         )
//!         .boxed(),
//!     reducer::from_fn(|s: &mut AppState, a: AppAction| {
//!         if a == AppAction::ClearFavorites {
//!             s.favorites.clear();
//!         }
//!     })
//!     .boxed(),
//! ]);
//!
//! let mut state = AppState::default();
//! app.reduce(&mut state, AppAction::Counter(CounterAction::Increment));
//! assert_eq!(state.count, 1);
//! ```

/// Lenses - total get/set projections from a global state to a local state
pub mod lens;

/// Prisms - partial extract / total embed projections between actions
pub mod prism;

/// Reducer composition (`combine`, `pullback`, `scope`)
pub mod composition;

/// Reducers that wrap other reducers
pub mod higher_order;

/// Executable statements of the projection and pullback laws
pub mod laws;

/// Reducer module - The core trait for business logic
///
/// Reducers are deterministic functions: `(State, Action) → State`, written
/// as an in-place mutation of the state they are given.
///
/// They contain all business logic and must not perform I/O, block, or read
/// anything besides their two arguments.
pub mod reducer {
    use std::marker::PhantomData;
    use std::sync::Arc;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state this reducer operates on
    /// - `Action`: The action type this reducer processes
    ///
    /// # Contract
    ///
    /// A reducer is total over its action type. Actions it does not care
    /// about leave the state untouched; an unhandled action is never an error.
    ///
    /// # Example
    ///
    /// ```
    /// use composable_state_core::reducer::Reducer;
    ///
    /// enum CounterAction {
    ///     IncrementTapped,
    ///     DecrementTapped,
    /// }
    ///
    /// struct CounterReducer;
    ///
    /// impl Reducer for CounterReducer {
    ///     type State = i64;
    ///     type Action = CounterAction;
    ///
    ///     fn reduce(&self, count: &mut i64, action: CounterAction) {
    ///         match action {
    ///             CounterAction::IncrementTapped => *count += 1,
    ///             CounterAction::DecrementTapped => *count -= 1,
    ///         }
    ///     }
    /// }
    ///
    /// let mut count = 0;
    /// CounterReducer.reduce(&mut count, CounterAction::IncrementTapped);
    /// assert_eq!(count, 1);
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// Reduce an action into the state, in place
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        fn reduce(&self, state: &mut Self::State, action: Self::Action);
    }

    /// A type-erased reducer that can be shared across threads.
    pub type BoxedReducer<S, A> = Box<dyn Reducer<State = S, Action = A> + Send + Sync>;

    impl<R: Reducer + ?Sized> Reducer for Box<R> {
        type State = R::State;
        type Action = R::Action;

        fn reduce(&self, state: &mut Self::State, action: Self::Action) {
            (**self).reduce(state, action);
        }
    }

    impl<R: Reducer + ?Sized> Reducer for Arc<R> {
        type State = R::State;
        type Action = R::Action;

        fn reduce(&self, state: &mut Self::State, action: Self::Action) {
            (**self).reduce(state, action);
        }
    }

    impl<R: Reducer + ?Sized> Reducer for &R {
        type State = R::State;
        type Action = R::Action;

        fn reduce(&self, state: &mut Self::State, action: Self::Action) {
            (**self).reduce(state, action);
        }
    }

    /// Wrap a closure or function as a [`Reducer`].
    ///
    /// ```
    /// use composable_state_core::reducer::{from_fn, Reducer};
    ///
    /// let double = from_fn(|n: &mut u32, times: u32| *n *= 2_u32.pow(times));
    /// let mut n = 3;
    /// double.reduce(&mut n, 2);
    /// assert_eq!(n, 12);
    /// ```
    #[must_use]
    pub const fn from_fn<S, A, F>(f: F) -> FnReducer<S, A, F>
    where
        F: Fn(&mut S, A),
    {
        FnReducer {
            f,
            _phantom: PhantomData,
        }
    }

    /// A reducer backed by a closure.
    ///
    /// Created by [`from_fn`].
    pub struct FnReducer<S, A, F> {
        f: F,
        _phantom: PhantomData<fn(&mut S, A)>,
    }

    impl<S, A, F: Clone> Clone for FnReducer<S, A, F> {
        fn clone(&self) -> Self {
            Self {
                f: self.f.clone(),
                _phantom: PhantomData,
            }
        }
    }

    impl<S, A, F> std::fmt::Debug for FnReducer<S, A, F> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("FnReducer")
                .field("state", &std::any::type_name::<S>())
                .field("action", &std::any::type_name::<A>())
                .finish_non_exhaustive()
        }
    }

    impl<S, A, F> Reducer for FnReducer<S, A, F>
    where
        F: Fn(&mut S, A),
    {
        type State = S;
        type Action = A;

        fn reduce(&self, state: &mut S, action: A) {
            (self.f)(state, action);
        }
    }
}

/// Environment module - Dependency injection traits
///
/// Reducers never reach for the outside world on their own. When a reducer
/// needs something like the current time, it is handed an implementation of
/// a trait from here at construction, so tests can substitute a fixed one.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use composable_state_core::environment::{Clock, SystemClock};
    ///
    /// let clock = SystemClock;
    /// let _now = clock.now();
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}

/// Commonly used items, for glob import.
pub mod prelude {
    pub use crate::composition::{CombinedReducer, combine, pullback, scope};
    pub use crate::higher_order::{ReducerExt, logging};
    pub use crate::lens::{Lens, StateLens};
    pub use crate::prism::{ActionPrism, Prism};
    pub use crate::reducer::{self, BoxedReducer, Reducer};
}

pub use composition::{CombinedReducer, Pullback, ScopedReducer, combine, pullback, scope};
pub use lens::{Lens, StateLens};
pub use prism::{ActionPrism, Prism};
pub use reducer::{BoxedReducer, Reducer};

#[cfg(test)]
mod tests {
    use super::reducer::{Reducer, from_fn};
    use std::sync::Arc;

    #[test]
    fn test_from_fn_reducer() {
        let reducer = from_fn(|count: &mut i32, delta: i32| *count += delta);
        let mut count = 1;

        reducer.reduce(&mut count, 4);

        assert_eq!(count, 5);
    }

    #[test]
    fn test_smart_pointers_forward_reduce() {
        let reducer = from_fn(|count: &mut i32, delta: i32| *count += delta);
        let boxed: Box<dyn Reducer<State = i32, Action = i32>> = Box::new(reducer.clone());
        let shared = Arc::new(reducer);
        let mut count = 0;

        boxed.reduce(&mut count, 1);
        shared.reduce(&mut count, 2);
        (&*shared).reduce(&mut count, 3);

        assert_eq!(count, 6);
    }
}
