//! Prime modal feature
//!
//! Shown for the counter's current number. Saves it to, or removes it
//! from, the favorite primes. Works on [`PrimeModalState`], a view built
//! from two app fields by [`AppState::prime_modal_lens`](crate::AppState::prime_modal_lens).

use composable_state_core::reducer::Reducer;

/// The slice of app state the modal needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimeModalState {
    /// The number being shown
    pub count: i64,
    /// Saved primes
    pub favorite_primes: Vec<i64>,
}

impl PrimeModalState {
    /// Whether the shown number is already a favorite, which decides
    /// between offering save and remove
    #[must_use]
    pub fn is_favorite(&self) -> bool {
        self.favorite_primes.contains(&self.count)
    }
}

/// Prime modal actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimeModalAction {
    /// Append the current number to the favorites
    SaveFavoritePrimeTapped,
    /// Remove every occurrence of the current number from the favorites
    RemoveFavoritePrimeTapped,
}

/// Prime modal reducer
///
/// Saving does not check for duplicates; the modal only offers save when
/// the number is not yet a favorite.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimeModalReducer;

impl Reducer for PrimeModalReducer {
    type State = PrimeModalState;
    type Action = PrimeModalAction;

    fn reduce(&self, state: &mut PrimeModalState, action: PrimeModalAction) {
        match action {
            PrimeModalAction::SaveFavoritePrimeTapped => {
                state.favorite_primes.push(state.count);
            },
            PrimeModalAction::RemoveFavoritePrimeTapped => {
                let count = state.count;
                state.favorite_primes.retain(|&prime| prime != count);
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composable_state_testing::TestStore;

    #[test]
    fn test_save_then_remove() {
        let mut store = TestStore::new(
            PrimeModalState {
                count: 7,
                favorite_primes: vec![2],
            },
            PrimeModalReducer,
        );

        store
            .send(PrimeModalAction::SaveFavoritePrimeTapped, |s| {
                s.favorite_primes = vec![2, 7];
            })
            .send(PrimeModalAction::RemoveFavoritePrimeTapped, |s| {
                s.favorite_primes = vec![2];
            });
    }

    #[test]
    fn test_remove_drops_every_occurrence() {
        let mut store = TestStore::new(
            PrimeModalState {
                count: 3,
                favorite_primes: vec![3, 2, 3, 5, 3],
            },
            PrimeModalReducer,
        );

        store.send(PrimeModalAction::RemoveFavoritePrimeTapped, |s| {
            s.favorite_primes = vec![2, 5];
        });
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = TestStore::new(
            PrimeModalState {
                count: 11,
                favorite_primes: vec![2, 3],
            },
            PrimeModalReducer,
        );

        store.send_unchanged(PrimeModalAction::RemoveFavoritePrimeTapped);
    }

    #[test]
    fn test_is_favorite() {
        let state = PrimeModalState {
            count: 5,
            favorite_primes: vec![2, 5],
        };

        assert!(state.is_favorite());
        assert!(!PrimeModalState::default().is_favorite());
    }
}
