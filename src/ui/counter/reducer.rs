//! Reducer for the counter.

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::{CounterState, OverflowPolicy};

/// Reducer for counter state transitions.
///
/// Pure function. Logging and redraw scheduling happen in the caller
/// around [`Store::dispatch`](crate::ui::mvi::Store::dispatch).
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => {
                let next = match state.overflow() {
                    OverflowPolicy::Saturate => state.count().saturating_add(1),
                    OverflowPolicy::Wrap => state.count().wrapping_add(1),
                };
                CounterState::at(next, state.overflow())
            }
        }
    }
}
