//! State for the counter.

use serde::{Deserialize, Serialize};

use crate::ui::mvi::UiState;

/// What an increment does once `count` has reached `u64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Stay at `u64::MAX`.
    #[default]
    Saturate,
    /// Roll over to zero.
    Wrap,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CounterState {
    count: u64,
    overflow: OverflowPolicy,
}

impl UiState for CounterState {}

impl CounterState {
    /// Fresh counter at zero using `overflow` for the top of the range.
    pub fn with_policy(overflow: OverflowPolicy) -> Self {
        Self { count: 0, overflow }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    pub fn is_saturated(&self) -> bool {
        self.overflow == OverflowPolicy::Saturate && self.count == u64::MAX
    }

    /// Counter positioned at an arbitrary value. Only the reducer and
    /// tests build states this way; the store always mounts at zero.
    pub(crate) fn at(count: u64, overflow: OverflowPolicy) -> Self {
        Self { count, overflow }
    }
}
