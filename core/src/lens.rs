//! State projections.
//!
//! A lens relates a global state to exactly one local state it logically
//! contains. Both directions are total: `get` always produces a local value
//! and `set` always accepts one.
//!
//! Every lens must satisfy two laws (see [`crate::laws`]):
//!
//! 1. **GetPut**: `set(g, get(g))` leaves `g` unchanged.
//! 2. **PutGet**: `get(set(g, l)) == l`.
//!
//! # Example
//!
//! ```
//! use composable_state_core::lens::{Lens, StateLens};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct AppState {
//!     count: i64,
//!     favorite_primes: Vec<i64>,
//! }
//!
//! // A lens onto a computed pair of fields
//! let prime_modal = Lens::new(
//!     |s: &AppState| (s.count, s.favorite_primes.clone()),
//!     |s: &mut AppState, (count, favorite_primes): (i64, Vec<i64>)| {
//!         s.count = count;
//!         s.favorite_primes = favorite_primes;
//!     },
//! );
//!
//! let mut state = AppState { count: 7, favorite_primes: vec![] };
//! prime_modal.over(&mut state, |(count, favorites)| favorites.push(*count));
//! assert_eq!(state.favorite_primes, vec![7]);
//! ```

use std::fmt;

/// A total, round-trip-consistent get/set pair.
///
/// Implemented by [`Lens`] and by the composition of two lenses
/// ([`ComposedLens`]).
pub trait StateLens {
    /// The composite state
    type Global;

    /// The embedded sub-state
    type Local;

    /// Read the local state out of the global state.
    fn get(&self, global: &Self::Global) -> Self::Local;

    /// Write a local state back into the global state.
    fn set(&self, global: &mut Self::Global, local: Self::Local);

    /// Modify the local state in place through the lens.
    fn over<F>(&self, global: &mut Self::Global, f: F)
    where
        F: FnOnce(&mut Self::Local),
    {
        let mut local = self.get(global);
        f(&mut local);
        self.set(global, local);
    }

    /// Focus further into the local state with another lens.
    fn then<L>(self, next: L) -> ComposedLens<Self, L>
    where
        Self: Sized,
        L: StateLens<Global = Self::Local>,
    {
        ComposedLens { outer: self, inner: next }
    }
}

/// A lens built from a pair of function pointers.
///
/// # Type Parameters
///
/// - `G`: The global state
/// - `L`: The local state
pub struct Lens<G, L> {
    get: fn(&G) -> L,
    set: fn(&mut G, L),
}

impl<G, L> Lens<G, L> {
    /// Create a lens from explicit get and set functions.
    #[must_use]
    pub const fn new(get: fn(&G) -> L, set: fn(&mut G, L)) -> Self {
        Self { get, set }
    }
}

impl<G: Clone> Lens<G, G> {
    /// The lens that focuses the whole state.
    ///
    /// Pulling a reducer back along the identity lens runs it directly on
    /// the global state.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            get: G::clone,
            set: |global, local| *global = local,
        }
    }
}

impl<G, L> StateLens for Lens<G, L> {
    type Global = G;
    type Local = L;

    fn get(&self, global: &G) -> L {
        (self.get)(global)
    }

    fn set(&self, global: &mut G, local: L) {
        (self.set)(global, local);
    }
}

impl<G, L> Clone for Lens<G, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G, L> Copy for Lens<G, L> {}

impl<G, L> fmt::Debug for Lens<G, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lens")
            .field("global", &std::any::type_name::<G>())
            .field("local", &std::any::type_name::<L>())
            .finish()
    }
}

/// Two lenses applied one after the other.
///
/// Created by [`StateLens::then`].
#[derive(Debug, Clone, Copy)]
pub struct ComposedLens<O, I> {
    outer: O,
    inner: I,
}

impl<O, I> StateLens for ComposedLens<O, I>
where
    O: StateLens,
    I: StateLens<Global = O::Local>,
{
    type Global = O::Global;
    type Local = I::Local;

    fn get(&self, global: &Self::Global) -> Self::Local {
        self.inner.get(&self.outer.get(global))
    }

    fn set(&self, global: &mut Self::Global, local: Self::Local) {
        let mut middle = self.outer.get(global);
        self.inner.set(&mut middle, local);
        self.outer.set(global, middle);
    }
}
