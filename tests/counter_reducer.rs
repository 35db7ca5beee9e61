//! Accumulation properties of the counter, driven through the store.

use tally::ui::counter::{render, CounterIntent, CounterReducer, CounterState, DEFAULT_HEADING};
use tally::ui::mvi::{Reducer, Store};

fn apply(intents: &[CounterIntent]) -> i64 {
    let mut store: Store<CounterReducer> = Store::new();
    for intent in intents {
        store.dispatch(*intent);
    }
    store.state().count
}

/// Deterministic pseudo-random sequence of presses.
fn sequence(seed: u64, len: usize) -> Vec<CounterIntent> {
    let mut x = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..len)
        .map(|_| {
            x = x
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            if (x >> 33) & 1 == 0 {
                CounterIntent::Increment
            } else {
                CounterIntent::Decrement
            }
        })
        .collect()
}

#[test]
fn initial_count_is_zero() {
    let store: Store<CounterReducer> = Store::new();
    assert_eq!(store.state().count, 0);
    assert_eq!(store.state(), &CounterState::default());
}

#[test]
fn count_equals_increments_minus_decrements() {
    for seed in 0..32 {
        let intents = sequence(seed, 200);
        let ups = intents
            .iter()
            .filter(|intent| **intent == CounterIntent::Increment)
            .count() as i64;
        let downs = intents.len() as i64 - ups;
        assert_eq!(apply(&intents), ups - downs, "seed {seed}");
    }
}

#[test]
fn interleaving_does_not_change_result() {
    let intents = sequence(7, 64);
    let mut sorted = intents.clone();
    sorted.sort_by_key(|intent| *intent == CounterIntent::Decrement);
    let mut reversed = intents.clone();
    reversed.reverse();

    assert_eq!(apply(&intents), apply(&sorted));
    assert_eq!(apply(&intents), apply(&reversed));
}

#[test]
fn reducer_is_pure() {
    let state = CounterState::new(5);
    let first = CounterReducer::reduce(state, CounterIntent::Decrement);
    let second = CounterReducer::reduce(state, CounterIntent::Decrement);
    assert_eq!(first, second);
    assert_eq!(state.count, 5);
}

#[test]
fn scenario_start_shows_zero() {
    let view = render(&CounterState::default(), DEFAULT_HEADING);
    assert!(view.count_line.contains('0'));
}

#[test]
fn scenario_plus_shows_one() {
    let count = apply(&[CounterIntent::Increment]);
    assert_eq!(render(&CounterState::new(count), DEFAULT_HEADING).count_line, "count: 1");
}

#[test]
fn scenario_minus_shows_minus_one() {
    let count = apply(&[CounterIntent::Decrement]);
    assert_eq!(render(&CounterState::new(count), DEFAULT_HEADING).count_line, "count: -1");
}

#[test]
fn scenario_three_plus_one_minus_shows_two() {
    let count = apply(&[
        CounterIntent::Increment,
        CounterIntent::Increment,
        CounterIntent::Increment,
        CounterIntent::Decrement,
    ]);
    assert_eq!(count, 2);
    assert_eq!(render(&CounterState::new(count), DEFAULT_HEADING).count_line, "count: 2");
}

#[test]
fn revision_counts_every_dispatch() {
    let mut store: Store<CounterReducer> = Store::new();
    store.dispatch(CounterIntent::Increment);
    store.dispatch(CounterIntent::Decrement);
    assert_eq!(store.state().count, 0);
    assert_eq!(store.revision(), 2);
}

#[test]
fn store_can_start_from_given_state() {
    let mut store: Store<CounterReducer> = Store::with_state(CounterState::new(-4));
    assert_eq!(store.revision(), 0);
    store.dispatch(CounterIntent::Increment);
    assert_eq!(store.state().count, -3);
}

#[test]
fn store_wraps_from_max() {
    let mut store: Store<CounterReducer> = Store::with_state(CounterState::new(i64::MAX));
    store.dispatch(CounterIntent::Increment);
    store.dispatch(CounterIntent::Decrement);
    assert_eq!(store.state().count, i64::MAX);
}
