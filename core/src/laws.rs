//! Executable statements of the projection laws.
//!
//! A lens or prism that breaks its laws silently corrupts state or misroutes
//! actions once it is used in a [`pullback`](crate::composition::pullback).
//! These checks return a [`LawViolation`] describing the counterexample so
//! property tests can report it; nothing here is meant to run in production.

use crate::lens::StateLens;
use crate::prism::ActionPrism;
use crate::reducer::Reducer;
use std::fmt::Debug;
use thiserror::Error;

/// A broken projection or reducer law, with the offending values rendered
/// via `Debug`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LawViolation {
    /// `set(g, get(g))` changed `g`
    #[error("GetPut violated: writing back the value just read changed {before} into {after}")]
    GetPut {
        /// The global state before the write
        before: String,
        /// The global state after the write
        after: String,
    },

    /// `get(set(g, l))` did not return `l`
    #[error("PutGet violated: wrote {written} but read back {read}")]
    PutGet {
        /// The local state that was written
        written: String,
        /// The local state read back afterwards
        read: String,
    },

    /// `extract(embed(a))` was not `Some(a)`
    #[error("prism round trip violated: embedded {embedded} but extracted {extracted}")]
    PrismRoundTrip {
        /// The local action that was embedded
        embedded: String,
        /// What extract returned
        extracted: String,
    },

    /// A reducer changed state for an action it should ignore
    #[error("pass-through violated: {action} changed {before} into {after}")]
    PassThrough {
        /// The action that should have been ignored
        action: String,
        /// State before the action
        before: String,
        /// State after the action
        after: String,
    },
}

/// Check the GetPut law for `global`.
///
/// # Errors
///
/// Returns [`LawViolation::GetPut`] if writing back the value just read
/// changes `global`.
pub fn check_get_put<L>(lens: &L, global: &L::Global) -> Result<(), LawViolation>
where
    L: StateLens,
    L::Global: Clone + PartialEq + Debug,
{
    let mut written = global.clone();
    let local = lens.get(&written);
    lens.set(&mut written, local);

    if written == *global {
        Ok(())
    } else {
        Err(LawViolation::GetPut {
            before: format!("{global:?}"),
            after: format!("{written:?}"),
        })
    }
}

/// Check the PutGet law for `global` and `local`.
///
/// # Errors
///
/// Returns [`LawViolation::PutGet`] if reading after writing `local` does
/// not return `local`.
pub fn check_put_get<L>(lens: &L, global: &L::Global, local: &L::Local) -> Result<(), LawViolation>
where
    L: StateLens,
    L::Global: Clone,
    L::Local: Clone + PartialEq + Debug,
{
    let mut written = global.clone();
    lens.set(&mut written, local.clone());
    let read = lens.get(&written);

    if read == *local {
        Ok(())
    } else {
        Err(LawViolation::PutGet {
            written: format!("{local:?}"),
            read: format!("{read:?}"),
        })
    }
}

/// Check both lens laws.
///
/// # Errors
///
/// Returns the first [`LawViolation`] found.
pub fn check_lens<L>(lens: &L, global: &L::Global, local: &L::Local) -> Result<(), LawViolation>
where
    L: StateLens,
    L::Global: Clone + PartialEq + Debug,
    L::Local: Clone + PartialEq + Debug,
{
    check_get_put(lens, global)?;
    check_put_get(lens, global, local)
}

/// Check `extract(embed(local)) == Some(local)`.
///
/// # Errors
///
/// Returns [`LawViolation::PrismRoundTrip`] if the embedded action does not
/// come back out unchanged.
pub fn check_prism<P>(prism: &P, local: &P::Local) -> Result<(), LawViolation>
where
    P: ActionPrism,
    P::Local: Clone + PartialEq + Debug,
{
    let extracted = prism.extract(prism.embed(local.clone()));

    if extracted.as_ref() == Some(local) {
        Ok(())
    } else {
        Err(LawViolation::PrismRoundTrip {
            embedded: format!("{local:?}"),
            extracted: format!("{extracted:?}"),
        })
    }
}

/// Check that `reducer` leaves `state` untouched for `action`.
///
/// Used with a pulled-back reducer and an action of some other variant to
/// show that unrelated reducers do not interfere.
///
/// # Errors
///
/// Returns [`LawViolation::PassThrough`] if the state changed.
pub fn check_pass_through<R>(reducer: &R, state: &R::State, action: R::Action) -> Result<(), LawViolation>
where
    R: Reducer,
    R::State: Clone + PartialEq + Debug,
    R::Action: Debug,
{
    let description = format!("{action:?}");
    let mut after = state.clone();
    reducer.reduce(&mut after, action);

    if after == *state {
        Ok(())
    } else {
        Err(LawViolation::PassThrough {
            action: description,
            before: format!("{state:?}"),
            after: format!("{after:?}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::pullback;
    use crate::lens::Lens;
    use crate::prism::Prism;
    use crate::reducer::from_fn;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Pair {
        left: i32,
        right: i32,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum PairAction {
        Left(i32),
        Right(i32),
    }

    #[test]
    fn test_lawful_lens_passes() {
        let lens = Lens::new(|p: &Pair| p.left, |p: &mut Pair, v: i32| p.left = v);

        assert_eq!(check_lens(&lens, &Pair { left: 1, right: 2 }, &9), Ok(()));
    }

    #[test]
    fn test_lens_writing_wrong_field_breaks_put_get() {
        let lens = Lens::new(|p: &Pair| p.left, |p: &mut Pair, v: i32| p.right = v);
        let result = check_put_get(&lens, &Pair { left: 1, right: 2 }, &9);

        assert_eq!(
            result,
            Err(LawViolation::PutGet {
                written: "9".to_string(),
                read: "1".to_string(),
            })
        );
    }

    #[test]
    fn test_lens_with_side_write_breaks_get_put() {
        let lens = Lens::new(
            |p: &Pair| p.left,
            |p: &mut Pair, v: i32| {
                p.left = v;
                p.right += 1;
            },
        );

        assert!(matches!(
            check_get_put(&lens, &Pair::default()),
            Err(LawViolation::GetPut { .. })
        ));
    }

    #[test]
    fn test_misrouting_prism_breaks_round_trip() {
        let broken = Prism::new(
            |a: PairAction| match a {
                PairAction::Left(n) => Some(n),
                PairAction::Right(_) => None,
            },
            PairAction::Right,
        );

        assert_eq!(
            check_prism(&broken, &3).map_err(|e| e.to_string()),
            Err("prism round trip violated: embedded 3 but extracted None".to_string())
        );
    }

    #[test]
    fn test_pullback_passes_through_other_variant() {
        let lifted = pullback(
            from_fn(|n: &mut i32, delta: i32| *n += delta),
            Lens::new(|p: &Pair| p.left, |p: &mut Pair, v: i32| p.left = v),
            Prism::new(
                |a: PairAction| match a {
                    PairAction::Left(n) => Some(n),
                    PairAction::Right(_) => None,
                },
                PairAction::Left,
            ),
        );

        assert_eq!(
            check_pass_through(&lifted, &Pair { left: 1, right: 1 }, PairAction::Right(5)),
            Ok(())
        );
        assert!(check_pass_through(&lifted, &Pair::default(), PairAction::Left(5)).is_err());
    }
}
