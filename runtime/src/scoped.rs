//! Scoped stores.
//!
//! A feature written against `(LocalState, LocalAction)` should not need the
//! whole application store. A [`ScopedStore`] gives it exactly that view:
//! reads go through a lens, sends are embedded through a prism into the
//! parent store. The parent remains the single owner of the state, so
//! every send still runs the full composed reducer.
//!
//! ```
//! use composable_state_core::prelude::*;
//! use composable_state_runtime::Store;
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
//! let count = Lens::new(|s: &AppState| s.count, |s: &mut AppState, count: i64| s.count = count);
//! let add = Prism::new(|a: AppAction| match a { AppAction::Add(n) => Some(n) }, AppAction::Add);
//!
//! # tokio_test::block_on(async {
//! let store = Store::new(
//!     AppState::default(),
//!     reducer::from_fn(|c: &mut i64, n: i64| *c += n).pullback(count, add),
//! );
//! let counter = store.scope(count, add);
//!
//! counter.send(4).await;
//! assert_eq!(counter.current_state().await, 4);
//! assert_eq!(store.state(|s| s.count).await, 4);
//! # });
//! ```

use crate::store::{ObserverId, Store};
use composable_state_core::lens::{ComposedLens, StateLens};
use composable_state_core::prism::{ActionPrism, ComposedPrism};
use composable_state_core::reducer::Reducer;

/// A view of a [`Store`] focused on a local state and action type.
///
/// Created by [`Store::scope`] or [`ScopedStore::scope`].
pub struct ScopedStore<S, A, R, L, P>
where
    R: Reducer<State = S, Action = A>,
{
    parent: Store<S, A, R>,
    lens: L,
    prism: P,
}

impl<S, A, R, L, P> ScopedStore<S, A, R, L, P>
where
    R: Reducer<State = S, Action = A> + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
    A: Send + 'static,
    L: StateLens<Global = S>,
    P: ActionPrism<Global = A>,
{
    pub(crate) const fn new(parent: Store<S, A, R>, lens: L, prism: P) -> Self {
        Self {
            parent,
            lens,
            prism,
        }
    }

    /// Send a local action
    ///
    /// The action is embedded into the parent's action type and sent to the
    /// parent store.
    pub async fn send(&self, action: P::Local) {
        self.parent.send(self.prism.embed(action)).await;
    }

    /// Read the local state via a closure
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&L::Local) -> T,
    {
        self.parent.state(|global| f(&self.lens.get(global))).await
    }

    /// A snapshot of the local state
    pub async fn current_state(&self) -> L::Local {
        self.parent.state(|global| self.lens.get(global)).await
    }

    /// Register a callback receiving the local state after every send
    ///
    /// The callback is registered on the parent store, so it fires for every
    /// action the parent handles, including ones sent through other scopes.
    pub fn observe<F>(&self, observer: F) -> ObserverId
    where
        L: Clone + Send + Sync + 'static,
        F: Fn(&L::Local) + Send + Sync + 'static,
    {
        let lens = self.lens.clone();
        self.parent.observe(move |global| observer(&lens.get(global)))
    }

    /// Focus further into the local state and action
    pub fn scope<L2, P2>(
        &self,
        lens: L2,
        prism: P2,
    ) -> ScopedStore<S, A, R, ComposedLens<L, L2>, ComposedPrism<P, P2>>
    where
        L: Clone,
        P: Clone,
        L2: StateLens<Global = L::Local>,
        P2: ActionPrism<Global = P::Local>,
    {
        ScopedStore::new(
            self.parent.clone(),
            self.lens.clone().then(lens),
            self.prism.clone().then(prism),
        )
    }

    /// The store this view was scoped from
    #[must_use]
    pub const fn parent(&self) -> &Store<S, A, R> {
        &self.parent
    }
}

impl<S, A, R, L, P> Clone for ScopedStore<S, A, R, L, P>
where
    R: Reducer<State = S, Action = A>,
    L: Clone,
    P: Clone,
{
    fn clone(&self) -> Self {
        Self {
            parent: self.parent.clone(),
            lens: self.lens.clone(),
            prism: self.prism.clone(),
        }
    }
}

impl<S, A, R, L, P> std::fmt::Debug for ScopedStore<S, A, R, L, P>
where
    R: Reducer<State = S, Action = A>,
    L: std::fmt::Debug,
    P: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedStore")
            .field("parent", &self.parent)
            .field("lens", &self.lens)
            .field("prism", &self.prism)
            .finish()
    }
}
