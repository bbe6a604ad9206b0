//! Model-View-Intent (MVI) primitives.
//!
//! Unidirectional data flow for the UI layer, plus an observable [`Store`]
//! that owns a feature's state and tells subscribers about every change.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Store::dispatch ──→ Reducer ──→ State ──→ subscribers ──→ View
//!    ↑                                                                  │
//!    └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: plain value describing everything the view needs
//! - **Intent**: user action or system event
//! - **Reducer**: pure `(State, Intent) -> State`
//! - **Store**: the only place a state value is replaced

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{Store, SubscriptionId};
