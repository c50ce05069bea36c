//! App composition
//!
//! Each feature reducer is pulled back along a lens into `AppState` and a
//! prism into `AppAction`, then everything is combined. The functions
//! returning a single lifted feature are public so tests can compose them
//! in other orders.

use crate::activity_feed::ActivityFeedReducer;
use crate::counter::CounterReducer;
use crate::favorite_primes::FavoritePrimesReducer;
use crate::prime_modal::PrimeModalReducer;
use crate::{AppAction, AppState};
use composable_state_core::environment::Clock;
use composable_state_core::prelude::*;

/// The counter, lifted onto `AppState::count`
#[must_use]
pub fn counter() -> BoxedReducer<AppState, AppAction> {
    CounterReducer
        .pullback(AppState::count_lens(), AppAction::counter_prism())
        .boxed()
}

/// The prime modal, lifted onto `(count, favorite_primes)`
#[must_use]
pub fn prime_modal() -> BoxedReducer<AppState, AppAction> {
    PrimeModalReducer
        .pullback(AppState::prime_modal_lens(), AppAction::prime_modal_prism())
        .boxed()
}

/// The favorite primes list, lifted onto `AppState::favorite_primes`
#[must_use]
pub fn favorite_primes() -> BoxedReducer<AppState, AppAction> {
    FavoritePrimesReducer
        .pullback(AppState::favorite_primes_lens(), AppAction::favorite_primes_prism())
        .boxed()
}

/// The activity feed, already on app types
#[must_use]
pub fn activity_feed<C>(clock: C) -> BoxedReducer<AppState, AppAction>
where
    C: Clock + 'static,
{
    ActivityFeedReducer::new(clock).boxed()
}

/// The full app reducer
///
/// The activity feed runs first so it sees favorites before they are
/// deleted. Every action is traced under the `app` name.
pub fn app_reducer<C>(clock: C) -> impl Reducer<State = AppState, Action = AppAction> + Send + Sync + 'static
where
    C: Clock + 'static,
{
    combine(vec![
        activity_feed(clock),
        counter(),
        prime_modal(),
        favorite_primes(),
    ])
    .pullback(Lens::identity(), Prism::identity())
    .logging("app")
}
