//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers in various ways:
//! - **`combine`**: Run multiple reducers on the same state/action, in order
//! - **`pullback`**: Lift a reducer over local state/actions to global ones
//! - **`scope`**: Focus a reducer on a subset of state, keeping its actions
//!
//! # Examples
//!
//! ## Pulling Back and Combining
//!
//! ```
//! use composable_state_core::prelude::*;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct AppState {
//!     count: i64,
//!     favorite_primes: Vec<i64>,
//! }
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum CounterAction {
//!     IncrementTapped,
//! }
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum FavoritesAction {
//!     Clear,
//! }
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum AppAction {
//!     Counter(CounterAction),
//!     Favorites(FavoritesAction),
//! }
//!
//! let counter = reducer::from_fn(|count: &mut i64, action: CounterAction| match action {
//!     CounterAction::IncrementTapped => *count += 1,
//! });
//! let favorites = reducer::from_fn(|primes: &mut Vec<i64>, action: FavoritesAction| match action {
//!     FavoritesAction::Clear => primes.clear(),
//! });
//!
//! let app = combine(vec![
//!     Box::new(pullback(
//!         counter,
//!         Lens::new(|s: &AppState| s.count, |s: &mut AppState, v: i64| s.count = v),
//!         Prism::new(
//!             |a: AppAction| match a {
//!                 AppAction::Counter(a) => Some(a),
//!                 AppAction::Favorites(_) => None,
//!             },
//!             AppAction::Counter,
//!         ),
//!     )),
//!     Box::new(pullback(
//!         favorites,
//!         Lens::new(
//!             |s: &AppState| s.favorite_primes.clone(),
//!             |s: &mut AppState, v: Vec<i64>| s.favorite_primes = v,
//!         ),
//!         Prism::new(
//!             |a: AppAction| match a {
//!                 AppAction::Favorites(a) => Some(a),
//!                 AppAction::Counter(_) => None,
//!             },
//!             AppAction::Favorites,
//!         ),
//!     )),
//! ]);
//!
//! let mut state = AppState { count: 0, favorite_primes: vec![2, 3] };
//! app.reduce(&mut state, AppAction::Counter(CounterAction::IncrementTapped));
//! assert_eq!(state, AppState { count: 1, favorite_primes: vec![2, 3] });
//! ```

use crate::lens::StateLens;
use crate::prism::ActionPrism;
use crate::reducer::{BoxedReducer, Reducer};

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in the order given, each one seeing the state the
/// previous one left behind and a clone of the same action. Order is
/// significant: a reducer that must observe the state *before* another
/// reducer changes it has to be listed first.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
///
/// # Examples
///
/// ```
/// use composable_state_core::{combine, reducer::from_fn, Reducer};
///
/// #[derive(Clone)]
/// enum AppAction {
///     Increment,
/// }
///
/// let combined = combine(vec![
///     Box::new(from_fn(|log: &mut Vec<String>, _: AppAction| log.push("first".into()))),
///     Box::new(from_fn(|log: &mut Vec<String>, _: AppAction| log.push("second".into()))),
/// ]);
///
/// let mut log = Vec::new();
/// combined.reduce(&mut log, AppAction::Increment);
/// assert_eq!(log, vec!["first", "second"]);
/// ```
#[must_use]
pub fn combine<S, A>(reducers: Vec<BoxedReducer<S, A>>) -> CombinedReducer<S, A>
where
    A: Clone,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine`].
pub struct CombinedReducer<S, A> {
    reducers: Vec<BoxedReducer<S, A>>,
}

impl<S, A> CombinedReducer<S, A> {
    /// Number of reducers being combined
    #[must_use]
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Whether no reducers are combined (the result is a no-op)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<S, A> std::fmt::Debug for CombinedReducer<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombinedReducer")
            .field("reducers", &self.reducers.len())
            .finish()
    }
}

impl<S, A> Reducer for CombinedReducer<S, A>
where
    A: Clone,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) {
        let Some((last, rest)) = self.reducers.split_last() else {
            return;
        };

        for reducer in rest {
            reducer.reduce(state, action.clone());
        }
        last.reduce(state, action);
    }
}

/// Lifts a reducer over local state and actions into one over global state
/// and actions.
///
/// On each action the prism decides whether the local reducer runs at all.
/// If the action is not the focused variant, the global state is left alone
/// and the lens is never consulted. Otherwise the local state is read through
/// the lens, reduced, and written back.
///
/// Pulling back along [`Lens::identity`](crate::lens::Lens::identity) runs
/// the reducer directly on the global state, gated only by the prism.
///
/// # Examples
///
/// ```
/// use composable_state_core::prelude::*;
///
/// #[derive(Clone, Debug, Default)]
/// struct AppState {
///     count: i64,
///     title: String,
/// }
///
/// #[derive(Clone, Debug)]
/// enum AppAction {
///     Counter(i64),
///     Rename(String),
/// }
///
/// let add = reducer::from_fn(|count: &mut i64, delta: i64| *count += delta);
/// let lifted = pullback(
///     add,
///     Lens::new(|s: &AppState| s.count, |s: &mut AppState, count: i64| s.count = count),
///     Prism::new(
///         |a: AppAction| match a {
///             AppAction::Counter(delta) => Some(delta),
///             AppAction::Rename(_) => None,
///         },
///         AppAction::Counter,
///     ),
/// );
///
/// let mut state = AppState::default();
/// lifted.reduce(&mut state, AppAction::Counter(5));
/// lifted.reduce(&mut state, AppAction::Rename("ignored".into()));
/// assert_eq!(state.count, 5);
/// assert_eq!(state.title, "");
/// ```
pub const fn pullback<R, L, P>(reducer: R, lens: L, prism: P) -> Pullback<R, L, P>
where
    R: Reducer,
    L: StateLens<Local = R::State>,
    P: ActionPrism<Local = R::Action>,
{
    Pullback {
        reducer,
        lens,
        prism,
    }
}

/// A reducer lifted to global state and actions.
///
/// Created by [`pullback`].
#[derive(Debug, Clone)]
pub struct Pullback<R, L, P> {
    reducer: R,
    lens: L,
    prism: P,
}

impl<R, L, P> Reducer for Pullback<R, L, P>
where
    R: Reducer,
    L: StateLens<Local = R::State>,
    P: ActionPrism<Local = R::Action>,
{
    type State = L::Global;
    type Action = P::Global;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) {
        let Some(local_action) = self.prism.extract(action) else {
            return;
        };

        let mut local_state = self.lens.get(state);
        self.reducer.reduce(&mut local_state, local_action);
        self.lens.set(state, local_state);
    }
}

/// Scopes a reducer to operate on a subset of a larger state.
///
/// This allows you to reuse reducers designed for smaller state types
/// within a larger application state when the action type is shared. It
/// is a [`pullback`] along an identity prism.
///
/// # Type Parameters
///
/// - `R`: The reducer over the sub-state
/// - `L`: A lens from the parent state to the sub-state
///
/// # Examples
///
/// ```
/// use composable_state_core::prelude::*;
///
/// #[derive(Clone, Default)]
/// struct CounterState {
///     count: i32,
/// }
///
/// #[derive(Clone)]
/// enum CounterAction {
///     Increment,
/// }
///
/// #[derive(Clone, Default)]
/// struct AppState {
///     counter: CounterState,
///     other_data: String,
/// }
///
/// let counter = reducer::from_fn(|s: &mut CounterState, action: CounterAction| match action {
///     CounterAction::Increment => s.count += 1,
/// });
///
/// let scoped = scope(
///     counter,
///     Lens::new(
///         |app: &AppState| app.counter.clone(),
///         |app: &mut AppState, counter: CounterState| app.counter = counter,
///     ),
/// );
///
/// let mut state = AppState::default();
/// scoped.reduce(&mut state, CounterAction::Increment);
/// assert_eq!(state.counter.count, 1);
/// ```
pub const fn scope<R, L>(reducer: R, lens: L) -> ScopedReducer<R, L>
where
    R: Reducer,
    L: StateLens<Local = R::State>,
{
    ScopedReducer { reducer, lens }
}

/// A scoped reducer that operates on a subset of state.
///
/// Created by [`scope`].
#[derive(Debug, Clone)]
pub struct ScopedReducer<R, L> {
    reducer: R,
    lens: L,
}

impl<R, L> Reducer for ScopedReducer<R, L>
where
    R: Reducer,
    L: StateLens<Local = R::State>,
{
    type State = L::Global;
    type Action = R::Action;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) {
        self.lens
            .over(state, |sub_state| self.reducer.reduce(sub_state, action));
    }
}
