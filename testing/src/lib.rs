//! # Composable State Testing
//!
//! Testing utilities for reducers built with `composable-state-core`.
//!
//! This crate provides:
//! - [`FixedClock`], a deterministic [`Clock`] for time-stamping reducers
//! - [`ReducerTest`], a Given-When-Then harness for a single reducer call
//! - [`TestStore`], which steps through actions and demands that every
//!   state change is spelled out
//! - Property-test helpers for the lens and prism laws
//!
//! ## Example
//!
//! ```
//! use composable_state_core::prelude::*;
//! use composable_state_testing::TestStore;
//!
//! let counter = reducer::from_fn(|count: &mut i64, delta: i64| *count += delta);
//! let mut store = TestStore::new(0, counter);
//!
//! store
//!     .send(2, |count| *count = 2)
//!     .send(-1, |count| *count = 1);
//! ```

use chrono::{DateTime, Utc};
use composable_state_core::environment::Clock;

pub mod test_store;

/// Mock implementations of injected dependencies.
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use composable_state_testing::mocks::FixedClock;
    /// use composable_state_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Test helpers and utilities
pub mod helpers {
    use tracing_subscriber::EnvFilter;

    /// Route `tracing` output through the test harness
    ///
    /// Respects `RUST_LOG`, defaulting to `debug`. Safe to call from every
    /// test; only the first call installs a subscriber.
    pub fn init_test_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Fails when another test already installed a subscriber.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }
}

/// Property-based testing utilities
///
/// Adapters from the law checks in
/// [`composable_state_core::laws`] to proptest failures, so a broken
/// projection is reported with its counterexample:
///
/// ```
/// use composable_state_core::Lens;
/// use composable_state_testing::properties::check_lens_laws;
/// use proptest::prelude::*;
///
/// proptest! {
///     fn first_lens_is_lawful(pair in any::<(u8, u8)>(), first in any::<u8>()) {
///         let lens = Lens::new(|p: &(u8, u8)| p.0, |p: &mut (u8, u8), v: u8| p.0 = v);
///         check_lens_laws(&lens, &pair, &first)?;
///     }
/// }
/// # first_lens_is_lawful();
/// ```
pub mod properties {
    use composable_state_core::laws;
    use composable_state_core::{ActionPrism, Reducer, StateLens};
    use proptest::test_runner::TestCaseError;
    use std::fmt::Debug;

    fn fail(violation: laws::LawViolation) -> TestCaseError {
        TestCaseError::fail(violation.to_string())
    }

    /// Check GetPut and PutGet for one sample.
    ///
    /// # Errors
    ///
    /// Fails the current proptest case if either law is violated.
    pub fn check_lens_laws<L>(
        lens: &L,
        global: &L::Global,
        local: &L::Local,
    ) -> Result<(), TestCaseError>
    where
        L: StateLens,
        L::Global: Clone + PartialEq + Debug,
        L::Local: Clone + PartialEq + Debug,
    {
        laws::check_lens(lens, global, local).map_err(fail)
    }

    /// Check the prism round trip for one sample.
    ///
    /// # Errors
    ///
    /// Fails the current proptest case if `extract(embed(local))` is not
    /// `Some(local)`.
    pub fn check_prism_laws<P>(prism: &P, local: &P::Local) -> Result<(), TestCaseError>
    where
        P: ActionPrism,
        P::Local: Clone + PartialEq + Debug,
    {
        laws::check_prism(prism, local).map_err(fail)
    }

    /// Check that `action` leaves `state` untouched.
    ///
    /// # Errors
    ///
    /// Fails the current proptest case if the reducer changed the state.
    pub fn check_pass_through<R>(
        reducer: &R,
        state: &R::State,
        action: R::Action,
    ) -> Result<(), TestCaseError>
    where
        R: Reducer,
        R::State: Clone + PartialEq + Debug,
        R::Action: Debug,
    {
        laws::check_pass_through(reducer, state, action).map_err(fail)
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};
pub use reducer_test::ReducerTest;
pub use test_store::TestStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
    }

    #[test]
    fn test_init_test_tracing_is_idempotent() {
        helpers::init_test_tracing();
        helpers::init_test_tracing();
    }
}
