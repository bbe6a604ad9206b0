//! Intents for the counter.

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the counter reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// User activated the increment button.
    Increment,
}

impl Intent for CounterIntent {}
