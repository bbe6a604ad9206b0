//! Counter feature module.
//!
//! A single `count` that only ever changes by one step at a time.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - `CounterState` and the overflow policy
//! - `intent.rs` - user actions (Increment)
//! - `reducer.rs` - state transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::{CounterState, OverflowPolicy};
