//! # Composable State Runtime
//!
//! Runtime implementation for composable reducers.
//!
//! This crate provides the Store that owns live application state and is
//! the only way to change it.
//!
//! ## Core Components
//!
//! - **Store**: Holds the state and the single composed reducer; serializes `send`
//! - **Observers**: Synchronous callbacks and a broadcast channel, notified once per `send`
//! - **`ScopedStore`**: A view of a store focused on a local state and action type
//!
//! ## Example
//!
//! ```
//! use composable_state_core::reducer::from_fn;
//! use composable_state_runtime::Store;
//!
//! # tokio_test::block_on(async {
//! let store = Store::new(0_i64, from_fn(|count: &mut i64, delta: i64| *count += delta));
//!
//! store.send(2).await;
//! store.send(3).await;
//!
//! assert_eq!(store.current_state().await, 5);
//! # });
//! ```

use composable_state_core::reducer::Reducer;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Metric names and descriptions
pub mod metrics;

/// Store views focused on local state and actions
pub mod scoped;

pub use scoped::ScopedStore;

/// Error types for the Store runtime
pub mod error {
    use super::store::ObserverId;
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// Reduction itself never fails; these cover misuse of the observer
    /// registry.
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// The observer was never registered or was already removed
        #[error("Observer {0} is not registered")]
        UnknownObserver(ObserverId),
    }
}

/// Store configuration
///
/// # Example
///
/// ```
/// use composable_state_runtime::StoreConfig;
///
/// let config = StoreConfig::default()
///     .with_name("prime-time")
///     .with_broadcast_capacity(64);
///
/// assert_eq!(config.name(), "prime-time");
/// assert_eq!(config.broadcast_capacity(), 64);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    name: String,
    broadcast_capacity: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    ///
    /// # Arguments
    ///
    /// - `name`: Label attached to the store's tracing spans and metrics
    /// - `broadcast_capacity`: Number of state snapshots buffered per subscriber
    #[must_use]
    pub fn new(name: impl Into<String>, broadcast_capacity: usize) -> Self {
        Self {
            name: name.into(),
            broadcast_capacity: broadcast_capacity.max(1),
        }
    }

    /// Set the store name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the broadcast channel capacity (minimum 1)
    #[must_use]
    pub fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = capacity.max(1);
        self
    }

    /// The store name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The broadcast channel capacity
    #[must_use]
    pub const fn broadcast_capacity(&self) -> usize {
        self.broadcast_capacity
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "store".to_string(),
            broadcast_capacity: 16,
        }
    }
}

/// Store runtime owning the state and dispatching actions to the reducer.
pub mod store {
    use super::{Arc, Reducer, RwLock, StoreConfig};
    use crate::error::StoreError;
    use crate::metrics::{OBSERVERS_NOTIFIED_TOTAL, REDUCER_DURATION_SECONDS, STORE_ACTIONS_TOTAL};
    use crate::scoped::ScopedStore;
    use composable_state_core::lens::StateLens;
    use composable_state_core::prism::ActionPrism;
    use futures::Stream;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU64, Ordering};
    use tokio::sync::broadcast;

    /// Identifies a registered observer callback.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct ObserverId(u64);

    impl std::fmt::Display for ObserverId {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "#{}", self.0)
        }
    }

    type Observer<S> = Arc<dyn Fn(&S) + Send + Sync>;

    /// Registered observer callbacks.
    struct Observers<S> {
        next_id: AtomicU64,
        entries: Mutex<Vec<(ObserverId, Observer<S>)>>,
    }

    impl<S> Observers<S> {
        fn new() -> Self {
            Self {
                next_id: AtomicU64::new(0),
                entries: Mutex::new(Vec::new()),
            }
        }

        fn entries(&self) -> std::sync::MutexGuard<'_, Vec<(ObserverId, Observer<S>)>> {
            // Entries are plain data; a panic while the lock was held cannot
            // leave them half-updated.
            self.entries
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
        }

        fn insert(&self, observer: Observer<S>) -> ObserverId {
            let id = ObserverId(self.next_id.fetch_add(1, Ordering::Relaxed));
            self.entries().push((id, observer));
            id
        }

        fn remove(&self, id: ObserverId) -> Result<(), StoreError> {
            let mut entries = self.entries();
            let position = entries
                .iter()
                .position(|(existing, _)| *existing == id)
                .ok_or(StoreError::UnknownObserver(id))?;
            entries.remove(position);
            Ok(())
        }

        fn snapshot(&self) -> Vec<Observer<S>> {
            self.entries()
                .iter()
                .map(|(_, observer)| Arc::clone(observer))
                .collect()
        }

        fn len(&self) -> usize {
            self.entries().len()
        }
    }

    /// The Store - runtime owner of a state and its reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock` for concurrent access)
    /// 2. Reducer (the single composed reducer for the whole state)
    /// 3. Observers (callbacks and broadcast subscribers)
    ///
    /// `send` is the only way to change the state. Concurrent `send` calls
    /// are serialized by the write lock, and readers see either the state
    /// before or after a `send`, never a partially reduced one.
    ///
    /// Cloning a Store is cheap and yields a handle to the same state.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `R`: Reducer implementation
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(AppState::default(), app_reducer());
    ///
    /// store.send(AppAction::Counter(CounterAction::IncrementTapped)).await;
    /// let count = store.state(|s| s.count).await;
    /// ```
    pub struct Store<S, A, R>
    where
        R: Reducer<State = S, Action = A>,
    {
        state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        observers: Arc<Observers<S>>,
        config: Arc<StoreConfig>,
        /// Post-send state snapshots for async subscribers.
        state_broadcast: broadcast::Sender<S>,
    }

    impl<S, A, R> Store<S, A, R>
    where
        R: Reducer<State = S, Action = A> + Send + Sync + 'static,
        S: Clone + Send + Sync + 'static,
        A: Send + 'static,
    {
        /// Create a new store with initial state and reducer
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R) -> Self {
            Self::with_config(initial_state, reducer, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        ///
        /// # Arguments
        ///
        /// - `initial_state`: Initial state value
        /// - `reducer`: The fully composed reducer
        /// - `config`: Name and broadcast capacity
        #[must_use]
        pub fn with_config(initial_state: S, reducer: R, config: StoreConfig) -> Self {
            let (state_broadcast, _) = broadcast::channel(config.broadcast_capacity());

            tracing::debug!(store = config.name(), "Store created");

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                observers: Arc::new(Observers::new()),
                config: Arc::new(config),
                state_broadcast,
            }
        }

        /// Send an action to the store
        ///
        /// This is the primary way to interact with the store:
        /// 1. Acquires the write lock on state
        /// 2. Runs the reducer with (state, action)
        /// 3. Notifies every observer with the new state, exactly once
        ///
        /// Observers are notified even if the new state equals the old one:
        /// a notification means the reducer ran, not that something changed.
        ///
        /// # Concurrency
        ///
        /// - The reducer executes synchronously while holding the write lock
        /// - Observers are notified before the lock is released, so
        ///   notifications arrive in the same order as the sends that caused them
        /// - Multiple concurrent `send()` calls serialize at the lock
        ///
        /// # Panics
        ///
        /// If the reducer panics, the panic propagates to the caller.
        /// Reducers are total and should not panic.
        #[tracing::instrument(skip(self, action), fields(store = %self.config.name()), name = "store_send")]
        pub async fn send(&self, action: A) {
            tracing::debug!("Processing action");
            metrics::counter!(STORE_ACTIONS_TOTAL, "store" => self.config.name().to_string())
                .increment(1);

            let mut state = self.state.write().await;
            tracing::trace!("Acquired write lock on state");

            {
                let span = tracing::debug_span!("reducer_execution");
                let _enter = span.enter();

                let start = std::time::Instant::now();
                self.reducer.reduce(&mut *state, action);
                metrics::histogram!(REDUCER_DURATION_SECONDS, "store" => self.config.name().to_string())
                    .record(start.elapsed().as_secs_f64());
            }

            self.notify(&state);
            tracing::debug!("Action processing completed");
        }

        fn notify(&self, state: &S) {
            let observers = self.observers.snapshot();
            for observer in &observers {
                observer(state);
            }

            let subscribers = if self.state_broadcast.receiver_count() > 0 {
                // Only fails when every receiver has been dropped since the check.
                self.state_broadcast.send(state.clone()).unwrap_or(0)
            } else {
                0
            };

            tracing::trace!(
                observers = observers.len(),
                subscribers,
                "Notified observers"
            );
            metrics::counter!(OBSERVERS_NOTIFIED_TOTAL, "store" => self.config.name().to_string())
                .increment((observers.len() + subscribers) as u64);
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure to ensure the lock is released promptly:
        ///
        /// ```ignore
        /// let count = store.state(|s| s.count).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// A snapshot of the current state
        pub async fn current_state(&self) -> S {
            self.state(S::clone).await
        }

        /// Register a callback run synchronously after every `send`
        ///
        /// The callback receives the post-send state. It runs while the store
        /// holds its write lock, so it must not block; it may register or
        /// remove observers but must not wait on this store.
        pub fn observe<F>(&self, observer: F) -> ObserverId
        where
            F: Fn(&S) + Send + Sync + 'static,
        {
            let id = self.observers.insert(Arc::new(observer));
            tracing::debug!(observer = %id, "Observer registered");
            id
        }

        /// Remove a previously registered callback
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::UnknownObserver`] if `id` is not registered.
        pub fn unobserve(&self, id: ObserverId) -> Result<(), StoreError> {
            self.observers.remove(id)?;
            tracing::debug!(observer = %id, "Observer removed");
            Ok(())
        }

        /// Number of registered observer callbacks
        #[must_use]
        pub fn observer_count(&self) -> usize {
            self.observers.len()
        }

        /// Subscribe to post-send state snapshots
        ///
        /// Each `send` after subscribing delivers one snapshot. A receiver
        /// that falls more than the configured capacity behind gets
        /// `RecvError::Lagged` and skips ahead.
        #[must_use]
        pub fn subscribe(&self) -> broadcast::Receiver<S> {
            self.state_broadcast.subscribe()
        }

        /// Post-send state snapshots as a stream
        ///
        /// Like [`subscribe`](Self::subscribe), but lagging is logged and
        /// skipped instead of surfaced. The stream ends when every handle to
        /// the store has been dropped.
        pub fn changes(&self) -> impl Stream<Item = S> + Send + 'static {
            let receiver = self.subscribe();
            futures::stream::unfold(receiver, |mut receiver| async move {
                loop {
                    match receiver.recv().await {
                        Ok(state) => return Some((state, receiver)),
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            tracing::warn!(skipped, "State subscriber lagged, skipping snapshots");
                        },
                        Err(broadcast::error::RecvError::Closed) => return None,
                    }
                }
            })
        }

        /// Focus this store on a local state and action type
        ///
        /// The scoped store reads through `lens` and sends by embedding local
        /// actions through `prism` into this store.
        pub fn scope<L, P>(&self, lens: L, prism: P) -> ScopedStore<S, A, R, L, P>
        where
            L: StateLens<Global = S>,
            P: ActionPrism<Global = A>,
        {
            ScopedStore::new(self.clone(), lens, prism)
        }

        /// The store configuration
        #[must_use]
        pub fn config(&self) -> &StoreConfig {
            &self.config
        }
    }

    impl<S, A, R> Clone for Store<S, A, R>
    where
        R: Reducer<State = S, Action = A>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                observers: Arc::clone(&self.observers),
                config: Arc::clone(&self.config),
                state_broadcast: self.state_broadcast.clone(),
            }
        }
    }

    impl<S, A, R> std::fmt::Debug for Store<S, A, R>
    where
        R: Reducer<State = S, Action = A>,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("name", &self.config.name())
                .field("observers", &self.observers.len())
                .field("subscribers", &self.state_broadcast.receiver_count())
                .finish_non_exhaustive()
        }
    }
}

// Re-export for convenience
pub use error::StoreError;
pub use store::{ObserverId, Store};
