//! Reducer for the counter widget.

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

/// Reducer for counter state transitions.
///
/// Both transitions are total: the count wraps at the `i64` extremes instead
/// of overflowing, so any interleaving of N increments and M decrements lands
/// on `N - M`.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => CounterState {
                count: state.count.wrapping_add(1),
            },
            CounterIntent::Decrement => CounterState {
                count: state.count.wrapping_sub(1),
            },
        }
    }
}
