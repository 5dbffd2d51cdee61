//! Error types for sequence construction and loading.
//!
//! Advancing and aborting a sequence never fail; only the helpers that turn
//! host input into elements (time parsing, property transitions, stored JSON)
//! report errors.

use serde::{Deserialize, Serialize};

use crate::value::ValueKind;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SequenceError {
    /// Negative or non-finite time value
    #[error("Invalid time value: {time}")]
    InvalidTime { time: f64 },

    #[error("Unknown animatable property: {name}")]
    UnknownProperty { name: String },

    /// Transition target does not fit the animated property
    #[error("Value kind mismatch for {property}: expected {expected:?}, got {actual:?}")]
    ValueKindMismatch {
        property: String,
        expected: ValueKind,
        actual: ValueKind,
    },

    #[error("Unknown tween: {name}")]
    UnknownTween { name: String },

    #[error("Sequence definition has no elements")]
    EmptyDefinition,

    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl SequenceError {
    /// Whether a host can retry with corrected input without rebuilding state.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidTime { .. } | Self::ValueKindMismatch { .. }
        )
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidTime { .. } => "time",
            Self::UnknownProperty { .. } | Self::ValueKindMismatch { .. } => "property",
            Self::UnknownTween { .. } => "tween",
            Self::EmptyDefinition | Self::Serialization { .. } => "definition",
        }
    }
}

impl From<serde_json::Error> for SequenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}
