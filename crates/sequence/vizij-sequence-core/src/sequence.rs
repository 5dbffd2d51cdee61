//! AnimationSequence: maps elapsed time onto the active element and its fraction.
//!
//! Methods:
//! - new, with_config, with_element, append, has_common_property
//! - advance (cyclic fast-forward -> stepping loop -> fractional update -> exact-end reset)
//! - abort, progress_to_end, is_finished, take_events

use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::config::SequenceConfig;
use crate::element::AnimationElement;
use crate::events::{EventQueue, SequenceEvent};
use crate::property::{sets_intersect, PropertySet};
use crate::time::TimeDelta;

/// Playback position: how many elements have been passed since the logical
/// start, and when the element addressed by `index` began.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Unbounded counter; the active slot is `index % len`.
    pub index: u64,
    pub start: TimeDelta,
}

/// Ordered, owned elements driven by an externally supplied elapsed time.
///
/// `D` is the delegate type the elements write to. The sequence never reads
/// it and never keeps it beyond a single call.
pub struct AnimationSequence<D: ?Sized> {
    elements: Vec<Box<dyn AnimationElement<D>>>,
    // Aggregates, maintained on append only.
    duration: TimeDelta,
    properties: PropertySet,
    cfg: SequenceConfig,
    cursor: Cursor,
    // Latest elapsed value seen since the last reset; elapsed must not go back.
    last_elapsed: TimeDelta,
    completed_cycles: u64,
    events: EventQueue,
}

impl<D: ?Sized> Default for AnimationSequence<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: ?Sized> fmt::Debug for AnimationSequence<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationSequence")
            .field("elements", &self.elements.len())
            .field("duration", &self.duration)
            .field("properties", &self.properties)
            .field("cyclic", &self.cfg.cyclic)
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl<D: ?Sized> AnimationSequence<D> {
    /// Empty, non-cyclic sequence with default event buffering.
    pub fn new() -> Self {
        Self::with_config(SequenceConfig::default())
    }

    pub fn with_config(cfg: SequenceConfig) -> Self {
        Self {
            elements: Vec::new(),
            duration: TimeDelta::zero(),
            properties: PropertySet::new(),
            cfg,
            cursor: Cursor::default(),
            last_elapsed: TimeDelta::zero(),
            completed_cycles: 0,
            events: EventQueue::default(),
        }
    }

    /// Sequence holding a single initial element.
    pub fn with_element(element: Box<dyn AnimationElement<D>>) -> Self {
        let mut seq = Self::new();
        seq.append(element);
        seq
    }

    /// Builder form of [`append`](Self::append).
    pub fn then<E>(mut self, element: E) -> Self
    where
        E: AnimationElement<D> + 'static,
    {
        self.append(Box::new(element));
        self
    }

    /// Add an element at the end and fold it into the aggregates.
    pub fn append(&mut self, element: Box<dyn AnimationElement<D>>) {
        self.duration += element.duration();
        self.properties.extend(element.properties().iter().copied());
        self.elements.push(element);
    }

    /// True when any property animated here is also in `other`.
    #[inline]
    pub fn has_common_property(&self, other: &PropertySet) -> bool {
        sets_intersect(&self.properties, other)
    }

    #[inline]
    pub fn duration(&self) -> TimeDelta {
        self.duration
    }

    #[inline]
    pub fn properties(&self) -> &PropertySet {
        &self.properties
    }

    #[inline]
    pub fn is_cyclic(&self) -> bool {
        self.cfg.cyclic
    }

    /// Switch between cyclic and one-shot playback. Changing the mode
    /// rewinds the cursor, since a cyclic cursor may already sit past the
    /// last element.
    pub fn set_cyclic(&mut self, cyclic: bool) {
        if self.cfg.cyclic != cyclic {
            self.cfg.cyclic = cyclic;
            self.reset_cursor();
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Whole cycles passed since the last reset (cyclic sequences only).
    #[inline]
    pub fn completed_cycles(&self) -> u64 {
        self.completed_cycles
    }

    /// Slot of the element the cursor addresses, `None` once a one-shot pass
    /// has run off the end or when there are no elements.
    pub fn active_index(&self) -> Option<usize> {
        if self.elements.is_empty() || !self.is_running() {
            return None;
        }
        Some(self.active_slot())
    }

    pub fn first_element(&self) -> Option<&dyn AnimationElement<D>> {
        self.elements.first().map(|e| &**e)
    }

    /// Drain events recorded since the previous call.
    pub fn take_events(&mut self) -> Vec<SequenceEvent> {
        self.events.drain()
    }

    /// Events discarded since the last drain because the buffer was full.
    pub fn dropped_events(&self) -> usize {
        self.events.dropped()
    }

    /// Drive the sequence to `elapsed`, measured from the sequence start.
    ///
    /// `elapsed` must not decrease between calls until the cursor is reset
    /// (end of a one-shot pass, `abort`, `progress_to_end`). Does nothing
    /// while the sequence is empty or its total duration is not positive.
    pub fn advance(&mut self, elapsed: TimeDelta, delegate: &mut D) {
        if self.elements.is_empty() || !self.duration.is_positive() {
            return;
        }
        debug_assert!(
            elapsed >= self.last_elapsed,
            "elapsed went back from {:?} to {elapsed:?}",
            self.last_elapsed
        );
        self.last_elapsed = elapsed;

        if self.cfg.cyclic {
            // Skip whole loops but leave one for the stepping loop below.
            let delta = elapsed - self.cursor.start;
            let k = delta / self.duration - 1;
            if k > 0 {
                self.cursor.start += self.duration * k;
                self.completed_cycles = self.completed_cycles.saturating_add(k as u64);
                trace!(
                    "sequence skipped {k} cycles, element start now {:?}",
                    self.cursor.start
                );
                self.emit(SequenceEvent::CycleCompleted {
                    cycle: self.completed_cycles,
                });
            }
        }

        let mut current = self.active_slot();
        while self.is_running() && self.cursor.start + self.elements[current].duration() < elapsed
        {
            let element = &mut self.elements[current];
            element.progress(1.0, delegate);
            self.cursor.start += element.duration();
            self.cursor.index += 1;
            self.emit(SequenceEvent::ElementEnded { index: current });

            current = self.active_slot();
            if self.cfg.cyclic && current == 0 {
                self.completed_cycles = self.completed_cycles.saturating_add(1);
                self.emit(SequenceEvent::CycleCompleted {
                    cycle: self.completed_cycles,
                });
            }
        }

        if self.is_running() {
            let start = self.cursor.start;
            let element = &mut self.elements[current];
            let element_duration = element.duration();
            let t = if element_duration.is_positive() {
                (elapsed - start).ratio(element_duration)
            } else {
                1.0
            };
            element.progress(t, delegate);
        }

        if !self.cfg.cyclic && elapsed == self.duration {
            debug!("sequence reached its end at {elapsed:?}; cursor reset");
            self.reset_cursor();
            self.emit(SequenceEvent::Ended);
        }
    }

    /// Abort the active element and everything after it in the current pass.
    ///
    /// Elements before the active slot already finished and are left alone.
    /// The cursor returns to the start whether or not the sequence is cyclic.
    pub fn abort(&mut self) {
        if !self.elements.is_empty() {
            let from = self.active_slot();
            debug!(
                "sequence aborted at element {from} of {}",
                self.elements.len()
            );
            for element in &mut self.elements[from..] {
                element.abort();
            }
        }
        self.reset_cursor();
        self.emit(SequenceEvent::Aborted);
    }

    /// Finish the current pass immediately: every element from the active
    /// slot onwards gets its terminal progress, then the cursor resets.
    pub fn progress_to_end(&mut self, delegate: &mut D) {
        if self.elements.is_empty() {
            return;
        }
        let from = self.active_slot();
        debug!(
            "sequence progressed to end from element {from} of {}",
            self.elements.len()
        );
        for index in from..self.elements.len() {
            self.elements[index].progress(1.0, delegate);
            self.emit(SequenceEvent::ElementEnded { index });
        }
        self.reset_cursor();
        self.emit(SequenceEvent::Ended);
    }

    /// Whether a one-shot sequence has nothing left to play at `elapsed`.
    /// Cyclic sequences never finish.
    pub fn is_finished(&self, elapsed: TimeDelta) -> bool {
        if self.cfg.cyclic {
            return false;
        }
        if self.elements.is_empty() || !self.is_running() {
            return true;
        }
        let remaining: TimeDelta = self.elements[self.active_slot()..]
            .iter()
            .map(|e| e.duration())
            .sum();
        elapsed >= self.cursor.start + remaining
    }

    #[inline]
    fn is_running(&self) -> bool {
        self.cfg.cyclic || self.cursor.index < self.elements.len() as u64
    }

    /// Callers guarantee `elements` is non-empty.
    #[inline]
    fn active_slot(&self) -> usize {
        (self.cursor.index % self.elements.len() as u64) as usize
    }

    fn reset_cursor(&mut self) {
        self.cursor = Cursor::default();
        self.last_elapsed = TimeDelta::zero();
        self.completed_cycles = 0;
    }

    fn emit(&mut self, event: SequenceEvent) {
        if self.cfg.record_events {
            self.events.push(event, self.cfg.max_events_per_tick);
        }
    }
}
