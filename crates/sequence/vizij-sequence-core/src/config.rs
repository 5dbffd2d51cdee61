//! Sequence configuration.

use serde::{Deserialize, Serialize};

/// Playback flags and event buffering limits for one sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Repeat indefinitely instead of stopping after one pass.
    pub cyclic: bool,

    /// Collect `SequenceEvent`s for `take_events()`.
    pub record_events: bool,

    /// Maximum events retained between drains; extra events are dropped.
    pub max_events_per_tick: usize,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            cyclic: false,
            record_events: true,
            max_events_per_tick: 1024,
        }
    }
}

impl SequenceConfig {
    pub fn cyclic() -> Self {
        Self {
            cyclic: true,
            ..Self::default()
        }
    }
}
