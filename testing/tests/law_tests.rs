//! Property tests for the projection laws, driven through the proptest
//! adapters.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use composable_state_core::prelude::*;
use composable_state_testing::helpers::init_test_tracing;
use composable_state_testing::properties::{check_lens_laws, check_pass_through, check_prism_laws};
use composable_state_testing::{ReducerTest, TestStore};
use proptest::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
struct Settings {
    volume: u8,
    muted: bool,
}

#[derive(Clone, Debug, PartialEq)]
enum SettingsAction {
    SetVolume(u8),
    ToggleMute,
}

fn volume_lens() -> Lens<Settings, u8> {
    Lens::new(|s: &Settings| s.volume, |s: &mut Settings, v: u8| s.volume = v)
}

fn set_volume_prism() -> Prism<SettingsAction, u8> {
    Prism::new(
        |a: SettingsAction| match a {
            SettingsAction::SetVolume(v) => Some(v),
            SettingsAction::ToggleMute => None,
        },
        SettingsAction::SetVolume,
    )
}

fn volume_reducer() -> impl Reducer<State = Settings, Action = SettingsAction> {
    reducer::from_fn(|volume: &mut u8, v: u8| *volume = v).pullback(volume_lens(), set_volume_prism())
}

fn settings() -> impl Strategy<Value = Settings> {
    (any::<u8>(), any::<bool>()).prop_map(|(volume, muted)| Settings { volume, muted })
}

proptest! {
    #[test]
    fn volume_lens_is_lawful(global in settings(), local in any::<u8>()) {
        check_lens_laws(&volume_lens(), &global, &local)?;
    }

    #[test]
    fn set_volume_prism_round_trips(local in any::<u8>()) {
        check_prism_laws(&set_volume_prism(), &local)?;
    }

    #[test]
    fn toggle_mute_passes_through_volume_reducer(state in settings()) {
        check_pass_through(&volume_reducer(), &state, SettingsAction::ToggleMute)?;
    }

    #[test]
    fn set_volume_only_touches_volume(state in settings(), v in any::<u8>()) {
        let mut after = state.clone();
        volume_reducer().reduce(&mut after, SettingsAction::SetVolume(v));

        prop_assert_eq!(after, Settings { volume: v, ..state });
    }
}

#[test]
fn test_broken_lens_is_reported() {
    let broken = Lens::new(|s: &Settings| s.volume, |s: &mut Settings, _: u8| s.muted = !s.muted);

    let failure = check_lens_laws(&broken, &Settings::default(), &0).unwrap_err();

    assert!(failure.to_string().contains("GetPut"));
}

#[test]
fn test_logged_reducer_under_test_harness() {
    init_test_tracing();
    tracing::debug!("running logged reducer");

    ReducerTest::new(volume_reducer().logging("settings"))
        .given_state(Settings::default())
        .when_actions([SettingsAction::SetVolume(7), SettingsAction::ToggleMute])
        .then_state(|s| assert_eq!(s.volume, 7))
        .run();
}

#[test]
fn test_store_walkthrough() {
    let mut store = TestStore::new(Settings::default(), volume_reducer());

    store
        .send(SettingsAction::SetVolume(3), |s| s.volume = 3)
        .send_unchanged(SettingsAction::ToggleMute)
        .send(SettingsAction::SetVolume(0), |s| s.volume = 0);

    assert_eq!(store.steps(), 3);
}
