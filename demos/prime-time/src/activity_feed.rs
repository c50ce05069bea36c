//! Activity feed
//!
//! Records favorite-prime changes with a timestamp. Runs on the whole app
//! state because it reads the count and the favorites list and writes the
//! feed. It must be combined before the reducers it reports on: a deletion
//! is described by positions, and the primes at those positions are gone
//! once the favorite primes reducer has run.

use crate::{Activity, ActivityKind, AppAction, AppState, FavoritePrimesAction, PrimeModalAction};
use composable_state_core::environment::Clock;
use composable_state_core::reducer::Reducer;

/// Activity feed reducer
///
/// Timestamps come from the injected clock so the reducer stays
/// deterministic under test.
#[derive(Debug, Clone)]
pub struct ActivityFeedReducer<C> {
    clock: C,
}

impl<C: Clock> ActivityFeedReducer<C> {
    /// Create an activity feed reducer stamping entries with `clock`
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    fn record(&self, state: &mut AppState, kind: ActivityKind) {
        tracing::trace!(?kind, "Recording activity");
        state.activity_feed.push(Activity {
            timestamp: self.clock.now(),
            kind,
        });
    }
}

impl<C: Clock> Reducer for ActivityFeedReducer<C> {
    type State = AppState;
    type Action = AppAction;

    fn reduce(&self, state: &mut AppState, action: AppAction) {
        let count = state.count;
        match action {
            AppAction::Counter(_) => {},
            AppAction::PrimeModal(PrimeModalAction::SaveFavoritePrimeTapped) => {
                self.record(state, ActivityKind::AddedFavoritePrime(count));
            },
            AppAction::PrimeModal(PrimeModalAction::RemoveFavoritePrimeTapped) => {
                self.record(state, ActivityKind::RemovedFavoritePrime(count));
            },
            AppAction::FavoritePrimes(FavoritePrimesAction::DeleteFavoritePrimes(indices)) => {
                for index in indices {
                    if let Some(&prime) = state.favorite_primes.get(index) {
                        self.record(state, ActivityKind::RemovedFavoritePrime(prime));
                    }
                }
            },
        }
    }
}
