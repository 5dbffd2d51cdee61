/**
 * Time spans for sequencing.
 * Durations and elapsed values share one signed microsecond type so that
 * `elapsed - cursor_start` stays well defined even when a caller misbehaves.
 */
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SequenceError;

const MICROS_PER_MILLI: i64 = 1_000;
const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// A span of animation time with microsecond resolution.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TimeDelta(i64);

impl TimeDelta {
    /// Zero time
    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn from_micros(micros: i64) -> Self {
        Self(micros)
    }

    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis.saturating_mul(MICROS_PER_MILLI))
    }

    /// Create a span from fractional milliseconds (e.g. a host clock reading).
    #[inline]
    pub fn from_millis_f64(millis: f64) -> Result<Self, SequenceError> {
        Self::from_secs_f64(millis / 1000.0)
    }

    /// Create a span from fractional seconds, rejecting negative or non-finite input.
    #[inline]
    pub fn from_secs_f64(seconds: f64) -> Result<Self, SequenceError> {
        if seconds < 0.0 || !seconds.is_finite() {
            return Err(SequenceError::InvalidTime { time: seconds });
        }
        Ok(Self((seconds * MICROS_PER_SECOND).round() as i64))
    }

    #[inline]
    pub const fn as_micros(&self) -> i64 {
        self.0
    }

    /// Milliseconds with sub-millisecond precision.
    #[inline]
    pub fn as_millis_f64(&self) -> f64 {
        self.0 as f64 / MICROS_PER_MILLI as f64
    }

    #[inline]
    pub fn as_secs_f64(&self) -> f64 {
        self.0 as f64 / MICROS_PER_SECOND
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Real-valued ratio `self / other`; `0.0` when `other` is zero.
    #[inline]
    pub fn ratio(&self, other: TimeDelta) -> f64 {
        if other.0 == 0 {
            return 0.0;
        }
        self.0 as f64 / other.0 as f64
    }
}

impl Add for TimeDelta {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for TimeDelta {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for TimeDelta {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for TimeDelta {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Mul<i64> for TimeDelta {
    type Output = Self;

    fn mul(self, k: i64) -> Self {
        Self(self.0.saturating_mul(k))
    }
}

/// Truncating whole-number ratio of two spans.
impl Div for TimeDelta {
    type Output = i64;

    fn div(self, other: Self) -> i64 {
        self.0 / other.0
    }
}

impl Sum for TimeDelta {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, d| acc + d)
    }
}

impl From<Duration> for TimeDelta {
    fn from(duration: Duration) -> Self {
        Self(i64::try_from(duration.as_micros()).unwrap_or(i64::MAX))
    }
}
