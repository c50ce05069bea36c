//! # Prime Time
//!
//! A small app assembled from independent features, each written against
//! its own state and action types and lifted into the app with
//! [`pullback`](composable_state_core::pullback):
//!
//! - [`counter`]: a number you can step up and down
//! - [`prime_modal`]: save or remove the current number as a favorite prime
//! - [`favorite_primes`]: a list of saved primes with deletion
//! - [`activity_feed`]: a timestamped log of favorite-prime changes
//!
//! [`app`] combines them into one reducer over [`AppState`]/[`AppAction`].
//!
//! ## Example
//!
//! ```
//! use composable_state_core::environment::SystemClock;
//! use composable_state_runtime::Store;
//! use prime_time::{AppAction, AppState, CounterAction, app};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let store = Store::new(AppState::default(), app::app_reducer(SystemClock));
//!
//! store.send(AppAction::Counter(CounterAction::IncrementTapped)).await;
//! assert_eq!(store.state(|s| s.count).await, 1);
//! # });
//! ```

use chrono::{DateTime, Utc};
use composable_state_core::Lens;
use composable_state_macros::{Lenses, Prisms};

pub mod activity_feed;
pub mod app;
pub mod counter;
pub mod favorite_primes;
pub mod prime_modal;
pub mod primes;

pub use counter::CounterAction;
pub use favorite_primes::FavoritePrimesAction;
pub use prime_modal::{PrimeModalAction, PrimeModalState};

/// A signed-in user. Carried in [`AppState`] but never changed by a reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// User id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Free-form profile text
    pub bio: String,
}

/// What happened to a favorite prime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    /// The prime was saved
    AddedFavoritePrime(i64),
    /// The prime was removed
    RemovedFavoritePrime(i64),
}

/// One entry of the activity feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    /// When the change was recorded
    pub timestamp: DateTime<Utc>,
    /// The change
    pub kind: ActivityKind,
}

/// The whole app's state
#[derive(Debug, Clone, Default, PartialEq, Eq, Lenses)]
pub struct AppState {
    /// The counter's current number
    pub count: i64,
    /// Saved primes, in the order they were saved
    pub favorite_primes: Vec<i64>,
    /// Signed-in user, if any
    pub logged_in_user: Option<User>,
    /// Favorite-prime changes, oldest first
    pub activity_feed: Vec<Activity>,
}

impl AppState {
    /// Lens onto the two fields the prime modal works with
    #[must_use]
    pub fn prime_modal_lens() -> Lens<Self, PrimeModalState> {
        Lens::new(
            |state: &Self| PrimeModalState {
                count: state.count,
                favorite_primes: state.favorite_primes.clone(),
            },
            |state: &mut Self, modal: PrimeModalState| {
                state.count = modal.count;
                state.favorite_primes = modal.favorite_primes;
            },
        )
    }
}

/// Every action the app handles, one variant per feature
#[derive(Debug, Clone, PartialEq, Eq, Prisms)]
pub enum AppAction {
    /// Counter screen
    Counter(CounterAction),
    /// Prime modal
    PrimeModal(PrimeModalAction),
    /// Favorite primes screen
    FavoritePrimes(FavoritePrimesAction),
}
