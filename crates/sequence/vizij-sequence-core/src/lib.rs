//! Vizij Sequence Core (engine-agnostic)
//!
//! Plays an ordered list of animation elements against an elapsed-time value
//! supplied by the host. `AnimationSequence` decides which element is active
//! and how far along it is, for one-shot and cyclic playback; elements turn
//! that fraction into property writes on a delegate.

pub mod config;
pub mod delegate;
pub mod element;
pub mod error;
pub mod events;
pub mod property;
pub mod sequence;
pub mod stored_sequence;
pub mod time;
pub mod tween;
pub mod value;

// Re-exports for consumers (adapters)
pub use config::SequenceConfig;
pub use delegate::{PropertyDelegate, PropertyStore};
pub use element::{AnimationElement, PauseElement, TransitionElement};
pub use error::SequenceError;
pub use events::SequenceEvent;
pub use property::{AnimatableProperty, PropertySet};
pub use sequence::{AnimationSequence, Cursor};
pub use stored_sequence::parse_stored_sequence_json;
pub use time::TimeDelta;
pub use tween::Tween;
pub use value::{PropertyValue, Rect, ValueKind};

/// Result type for fallible sequence construction.
pub type Result<T> = core::result::Result<T, SequenceError>;
