//! Reducers that wrap other reducers.
//!
//! A higher-order reducer takes a reducer and returns a new one with the
//! same state and action types, adding behavior around the inner call.
//! [`ReducerExt`] gathers these and the composition functions into
//! method-chaining form:
//!
//! ```
//! use composable_state_core::prelude::*;
//!
//! #[derive(Clone, Debug, Default)]
//! struct AppState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum AppAction {
//!     Add(i64),
//! }
//!
//! let app = reducer::from_fn(|count: &mut i64, delta: i64| *count += delta)
//!     .pullback(
//!         Lens::new(|s: &AppState| s.count, |s: &mut AppState, count: i64| s.count = count),
//!         Prism::new(|a: AppAction| match a { AppAction::Add(n) => Some(n) }, AppAction::Add),
//!     )
//!     .logging("app");
//!
//! let mut state = AppState::default();
//! app.reduce(&mut state, AppAction::Add(2));
//! assert_eq!(state.count, 2);
//! ```

use crate::composition::{Pullback, ScopedReducer, pullback, scope};
use crate::lens::StateLens;
use crate::prism::ActionPrism;
use crate::reducer::{BoxedReducer, Reducer};
use std::fmt::Debug;

/// Wrap a reducer so that every action it receives is traced.
///
/// After the inner reducer runs, a `DEBUG` event is emitted carrying the
/// action and the resulting state. The action is only formatted when the
/// event is enabled, so the wrapper costs nothing with debug logging off.
///
/// The wrapper only emits `tracing` events; it does not alter the state.
pub const fn logging<R>(reducer: R, name: &'static str) -> Logging<R>
where
    R: Reducer,
    R::State: Debug,
    R::Action: Debug,
{
    Logging {
        inner: reducer,
        name,
    }
}

/// A reducer that traces each action it handles.
///
/// Created by [`logging`].
#[derive(Debug, Clone)]
pub struct Logging<R> {
    inner: R,
    name: &'static str,
}

impl<R> Reducer for Logging<R>
where
    R: Reducer,
    R::State: Debug,
    R::Action: Debug,
{
    type State = R::State;
    type Action = R::Action;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) {
        let description =
            tracing::enabled!(tracing::Level::DEBUG).then(|| format!("{action:?}"));

        self.inner.reduce(state, action);

        if let Some(action) = description {
            tracing::debug!(reducer = self.name, action = %action, state = ?state, "Reduced action");
        }
    }
}

/// Method-chaining forms of the composition functions.
///
/// Implemented for every sized [`Reducer`].
pub trait ReducerExt: Reducer + Sized {
    /// See [`pullback`].
    fn pullback<L, P>(self, lens: L, prism: P) -> Pullback<Self, L, P>
    where
        L: StateLens<Local = Self::State>,
        P: ActionPrism<Local = Self::Action>,
    {
        pullback(self, lens, prism)
    }

    /// See [`scope`].
    fn scope<L>(self, lens: L) -> ScopedReducer<Self, L>
    where
        L: StateLens<Local = Self::State>,
    {
        scope(self, lens)
    }

    /// See [`logging`].
    fn logging(self, name: &'static str) -> Logging<Self>
    where
        Self::State: Debug,
        Self::Action: Debug,
    {
        logging(self, name)
    }

    /// Erase the reducer's type, for use with
    /// [`combine`](crate::composition::combine).
    fn boxed(self) -> BoxedReducer<Self::State, Self::Action>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<R: Reducer> ReducerExt for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::combine;
    use crate::lens::Lens;
    use crate::prism::Prism;
    use crate::reducer::from_fn;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct AppState {
        count: i64,
        history: Vec<i64>,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum AppAction {
        Add(i64),
        Record,
    }

    #[test]
    fn test_logging_preserves_behavior() {
        let plain = from_fn(|s: &mut AppState, a: AppAction| {
            if let AppAction::Add(n) = a {
                s.count += n;
            }
        });
        let logged = plain.clone().logging("test");
        let mut expected = AppState::default();
        let mut actual = AppState::default();

        plain.reduce(&mut expected, AppAction::Add(4));
        logged.reduce(&mut actual, AppAction::Add(4));

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_chained_composition() {
        let add = from_fn(|count: &mut i64, n: i64| *count += n)
            .pullback(
                Lens::new(|s: &AppState| s.count, |s: &mut AppState, count: i64| s.count = count),
                Prism::new(
                    |a: AppAction| match a {
                        AppAction::Add(n) => Some(n),
                        AppAction::Record => None,
                    },
                    AppAction::Add,
                ),
            )
            .boxed();
        let record = from_fn(|s: &mut AppState, a: AppAction| {
            if a == AppAction::Record {
                s.history.push(s.count);
            }
        })
        .boxed();

        let app = combine(vec![add, record]).logging("app");
        let mut state = AppState::default();

        app.reduce(&mut state, AppAction::Add(2));
        app.reduce(&mut state, AppAction::Record);
        app.reduce(&mut state, AppAction::Add(3));
        app.reduce(&mut state, AppAction::Record);

        assert_eq!(state.count, 5);
        assert_eq!(state.history, vec![2, 5]);
    }
}
