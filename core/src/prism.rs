//! Action projections.
//!
//! A prism relates a global action enum to the payload of one of its
//! variants. `extract` is partial: it yields `None` when the action is some
//! other variant. `embed` is total: it always builds the global action.
//!
//! The round-trip law `extract(embed(a)) == Some(a)` is what lets
//! [`pullback`](crate::composition::pullback) route actions without ever
//! misdelivering one.
//!
//! # Example
//!
//! ```
//! use composable_state_core::prism::{ActionPrism, Prism};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum CounterAction {
//!     IncrementTapped,
//! }
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum AppAction {
//!     Counter(CounterAction),
//!     Refresh,
//! }
//!
//! let counter = Prism::new(
//!     |action: AppAction| match action {
//!         AppAction::Counter(action) => Some(action),
//!         _ => None,
//!     },
//!     AppAction::Counter,
//! );
//!
//! assert_eq!(
//!     counter.extract(AppAction::Counter(CounterAction::IncrementTapped)),
//!     Some(CounterAction::IncrementTapped)
//! );
//! assert_eq!(counter.extract(AppAction::Refresh), None);
//! ```

use std::fmt;

/// A partial extract / total embed pair between two action types.
///
/// Implemented by [`Prism`] and by the composition of two prisms
/// ([`ComposedPrism`]).
pub trait ActionPrism {
    /// The composite action
    type Global;

    /// The payload of the focused variant
    type Local;

    /// Extract the local action if the global action is the focused variant.
    fn extract(&self, global: Self::Global) -> Option<Self::Local>;

    /// Build the global action from a local one.
    fn embed(&self, local: Self::Local) -> Self::Global;

    /// Focus further into the local action with another prism.
    fn then<P>(self, next: P) -> ComposedPrism<Self, P>
    where
        Self: Sized,
        P: ActionPrism<Global = Self::Local>,
    {
        ComposedPrism { outer: self, inner: next }
    }
}

/// A prism built from a pair of function pointers.
///
/// # Type Parameters
///
/// - `G`: The global action
/// - `L`: The local action
pub struct Prism<G, L> {
    extract: fn(G) -> Option<L>,
    embed: fn(L) -> G,
}

impl<G, L> Prism<G, L> {
    /// Create a prism from explicit extract and embed functions.
    ///
    /// Tuple-variant constructors (`AppAction::Counter`) can be passed
    /// directly as `embed`.
    #[must_use]
    pub const fn new(extract: fn(G) -> Option<L>, embed: fn(L) -> G) -> Self {
        Self { extract, embed }
    }
}

impl<G> Prism<G, G> {
    /// The prism that matches every action.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            extract: Some,
            embed: std::convert::identity,
        }
    }
}

impl<G, L> ActionPrism for Prism<G, L> {
    type Global = G;
    type Local = L;

    fn extract(&self, global: G) -> Option<L> {
        (self.extract)(global)
    }

    fn embed(&self, local: L) -> G {
        (self.embed)(local)
    }
}

impl<G, L> Clone for Prism<G, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G, L> Copy for Prism<G, L> {}

impl<G, L> fmt::Debug for Prism<G, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prism")
            .field("global", &std::any::type_name::<G>())
            .field("local", &std::any::type_name::<L>())
            .finish()
    }
}

/// Two prisms applied one after the other.
///
/// Created by [`ActionPrism::then`].
#[derive(Debug, Clone, Copy)]
pub struct ComposedPrism<O, I> {
    outer: O,
    inner: I,
}

impl<O, I> ActionPrism for ComposedPrism<O, I>
where
    O: ActionPrism,
    I: ActionPrism<Global = O::Local>,
{
    type Global = O::Global;
    type Local = I::Local;

    fn extract(&self, global: Self::Global) -> Option<Self::Local> {
        self.outer
            .extract(global)
            .and_then(|middle| self.inner.extract(middle))
    }

    fn embed(&self, local: Self::Local) -> Self::Global {
        self.outer.embed(self.inner.embed(local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Clone, Debug, PartialEq)]
    enum VolumeAction {
        Set(u8),
        Mute,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum SettingsAction {
        Volume(VolumeAction),
        Reset,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum AppAction {
        Settings(SettingsAction),
        Quit,
    }

    fn settings_prism() -> Prism<AppAction, SettingsAction> {
        Prism::new(
            |action: AppAction| match action {
                AppAction::Settings(action) => Some(action),
                AppAction::Quit => None,
            },
            AppAction::Settings,
        )
    }

    fn volume_prism() -> Prism<SettingsAction, VolumeAction> {
        Prism::new(
            |action: SettingsAction| match action {
                SettingsAction::Volume(action) => Some(action),
                SettingsAction::Reset => None,
            },
            SettingsAction::Volume,
        )
    }

    #[test]
    fn test_extract_matching_variant() {
        let prism = settings_prism();

        assert_eq!(
            prism.extract(AppAction::Settings(SettingsAction::Reset)),
            Some(SettingsAction::Reset)
        );
    }

    #[test]
    fn test_extract_other_variant_is_absent() {
        assert_eq!(settings_prism().extract(AppAction::Quit), None);
    }

    #[test]
    fn test_identity_prism() {
        let prism = Prism::<AppAction, AppAction>::identity();

        assert_eq!(prism.extract(AppAction::Quit), Some(AppAction::Quit));
        assert_eq!(prism.embed(AppAction::Quit), AppAction::Quit);
    }

    #[test]
    fn test_composed_prism() {
        let prism = settings_prism().then(volume_prism());

        assert_eq!(
            prism.embed(VolumeAction::Mute),
            AppAction::Settings(SettingsAction::Volume(VolumeAction::Mute))
        );
        assert_eq!(
            prism.extract(AppAction::Settings(SettingsAction::Volume(VolumeAction::Set(4)))),
            Some(VolumeAction::Set(4))
        );
        assert_eq!(prism.extract(AppAction::Settings(SettingsAction::Reset)), None);
        assert_eq!(prism.extract(AppAction::Quit), None);
    }

    proptest! {
        #[test]
        fn prop_composed_prism_round_trip(level in any::<u8>(), mute in any::<bool>()) {
            let prism = settings_prism().then(volume_prism());
            let local = if mute { VolumeAction::Mute } else { VolumeAction::Set(level) };

            prop_assert_eq!(prism.extract(prism.embed(local.clone())), Some(local));
        }
    }
}
