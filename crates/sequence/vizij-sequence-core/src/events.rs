//! Discrete signals emitted while a sequence is driven.
//!
//! Events are buffered on the sequence and drained by the host after each
//! tick, the same way engine outputs are collected per update.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SequenceEvent {
    /// The element at `index` received its terminal progress and was passed.
    ElementEnded { index: usize },
    /// A cyclic sequence wrapped back to its first element.
    CycleCompleted { cycle: u64 },
    /// A one-shot pass finished and the cursor was reset.
    Ended,
    Aborted,
}

/// Bounded event buffer.
#[derive(Clone, Debug, Default)]
pub(crate) struct EventQueue {
    events: Vec<SequenceEvent>,
    dropped: usize,
}

impl EventQueue {
    pub(crate) fn push(&mut self, event: SequenceEvent, limit: usize) {
        if self.events.len() >= limit {
            if self.dropped == 0 {
                log::warn!("sequence event buffer full ({limit}); dropping events until drained");
            }
            self.dropped += 1;
            return;
        }
        self.events.push(event);
    }

    pub(crate) fn drain(&mut self) -> Vec<SequenceEvent> {
        self.dropped = 0;
        std::mem::take(&mut self.events)
    }

    #[inline]
    pub(crate) fn dropped(&self) -> usize {
        self.dropped
    }
}
