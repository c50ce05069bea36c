//! Tests for #[derive(Prisms)] macro

use composable_state_core::{ActionPrism, Prism};
use composable_state_macros::Prisms;

#[derive(Prisms, Clone, Debug, PartialEq)]
enum CounterAction {
    IncrementTapped,
    DecrementTapped,
}

#[derive(Prisms, Clone, Debug, PartialEq)]
enum AppAction {
    Counter(CounterAction),
    Move(i32, i32),
    Rename { name: String },
    #[prism(skip)]
    Internal(u8),
}

#[derive(Prisms, Clone, Debug, PartialEq)]
enum Only {
    One(u8),
}

#[test]
fn test_single_field_variant() {
    let counter: Prism<AppAction, CounterAction> = AppAction::counter_prism();

    assert_eq!(
        counter.extract(AppAction::Counter(CounterAction::IncrementTapped)),
        Some(CounterAction::IncrementTapped)
    );
    assert_eq!(counter.extract(AppAction::Move(1, 2)), None);
    assert_eq!(
        counter.embed(CounterAction::DecrementTapped),
        AppAction::Counter(CounterAction::DecrementTapped)
    );
}

#[test]
fn test_tuple_variant() {
    let moved = AppAction::move_prism();

    assert_eq!(moved.extract(AppAction::Move(3, -1)), Some((3, -1)));
    assert_eq!(moved.embed((0, 5)), AppAction::Move(0, 5));
    assert_eq!(
        moved.extract(AppAction::Rename {
            name: "n".to_string()
        }),
        None
    );
}

#[test]
fn test_unit_variants() {
    let increment = CounterAction::increment_tapped_prism();

    assert_eq!(increment.extract(CounterAction::IncrementTapped), Some(()));
    assert_eq!(increment.extract(CounterAction::DecrementTapped), None);
    assert_eq!(
        CounterAction::decrement_tapped_prism().embed(()),
        CounterAction::DecrementTapped
    );
}

#[test]
fn test_single_variant_enum() {
    let one = Only::one_prism();

    assert_eq!(one.extract(Only::One(1)), Some(1));
    assert_eq!(one.embed(2), Only::One(2));
}

#[test]
fn test_generated_prisms_compose() {
    let increment = AppAction::counter_prism().then(CounterAction::increment_tapped_prism());

    assert_eq!(increment.embed(()), AppAction::Counter(CounterAction::IncrementTapped));
    assert_eq!(
        increment.extract(AppAction::Counter(CounterAction::DecrementTapped)),
        None
    );
}
