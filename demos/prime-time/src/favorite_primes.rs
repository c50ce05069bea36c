//! Favorite primes feature

use composable_state_core::reducer::Reducer;
use std::collections::BTreeSet;

/// Favorite primes actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritePrimesAction {
    /// Delete the favorites at these positions
    ///
    /// Positions refer to the list before any of them is removed.
    /// Positions past the end are ignored.
    DeleteFavoritePrimes(BTreeSet<usize>),
}

/// Favorite primes reducer over the list of saved primes
#[derive(Debug, Clone, Copy, Default)]
pub struct FavoritePrimesReducer;

impl Reducer for FavoritePrimesReducer {
    type State = Vec<i64>;
    type Action = FavoritePrimesAction;

    fn reduce(&self, favorite_primes: &mut Vec<i64>, action: FavoritePrimesAction) {
        match action {
            FavoritePrimesAction::DeleteFavoritePrimes(indices) => {
                // Highest first, so earlier removals don't shift later positions.
                for &index in indices.iter().rev() {
                    if index < favorite_primes.len() {
                        favorite_primes.remove(index);
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composable_state_testing::TestStore;

    fn delete(indices: &[usize]) -> FavoritePrimesAction {
        FavoritePrimesAction::DeleteFavoritePrimes(indices.iter().copied().collect())
    }

    #[test]
    fn test_delete_uses_original_positions() {
        let mut store = TestStore::new(vec![2, 3, 5, 7], FavoritePrimesReducer);

        store.send(delete(&[0, 2]), |primes| *primes = vec![3, 7]);
    }

    #[test]
    fn test_delete_out_of_range_is_ignored() {
        let mut store = TestStore::new(vec![2, 3], FavoritePrimesReducer);

        store
            .send(delete(&[1, 5]), |primes| *primes = vec![2])
            .send_unchanged(delete(&[1]))
            .send_unchanged(delete(&[]));
    }

    #[test]
    fn test_delete_everything() {
        let mut store = TestStore::new(vec![2, 3, 5], FavoritePrimesReducer);

        store.send(delete(&[0, 1, 2]), Vec::clear);
    }
}
