//! Tweens map an element's linear fraction onto an eased fraction.
//!
//! Cubic-bezier timing inverts the x curve by binary search and evaluates y,
//! matching CSS `cubic-bezier(x1, y1, x2, y2)`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SequenceError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tween {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Holds 0.0 until the fraction reaches 1.0.
    Step,
    /// Control points (x1, y1, x2, y2).
    CubicBezier([f32; 4]),
}

impl Tween {
    /// Eased value for a fraction, clamped to [0, 1] first.
    pub fn ease(&self, t: f64) -> f32 {
        let t = t.clamp(0.0, 1.0) as f32;
        match self {
            Tween::Linear => t,
            Tween::EaseIn => t * t,
            Tween::EaseOut => t * (2.0 - t),
            Tween::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Tween::Step => {
                if t >= 1.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Tween::CubicBezier(ctrl) => solve_cubic_bezier(t, *ctrl),
        }
    }
}

impl FromStr for Tween {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Tween::Linear),
            "ease_in" => Ok(Tween::EaseIn),
            "ease_out" => Ok(Tween::EaseOut),
            "ease_in_out" => Ok(Tween::EaseInOut),
            "step" => Ok(Tween::Step),
            other => Err(SequenceError::UnknownTween {
                name: other.to_string(),
            }),
        }
    }
}

const BEZIER_STEPS: usize = 24;
const BEZIER_TOLERANCE: f32 = 1e-6;

/// One axis of a unit cubic bezier whose end points are pinned to 0 and 1.
#[inline]
fn unit_bezier_axis(c1: f32, c2: f32, s: f32) -> f32 {
    let r = 1.0 - s;
    3.0 * s * r * (r * c1 + s * c2) + s * s * s
}

/// CSS timing: find the curve parameter whose x equals `t`, return its y.
///
/// x control points are clamped into [0, 1] so x(s) stays monotonic and the
/// bisection always converges.
fn solve_cubic_bezier(t: f32, [x1, y1, x2, y2]: [f32; 4]) -> f32 {
    let (x1, x2) = (x1.clamp(0.0, 1.0), x2.clamp(0.0, 1.0));
    if x1 == y1 && x2 == y2 {
        return t;
    }
    let (mut lo, mut hi, mut s) = (0.0f32, 1.0f32, t);
    for _ in 0..BEZIER_STEPS {
        let err = unit_bezier_axis(x1, x2, s) - t;
        if err.abs() < BEZIER_TOLERANCE {
            break;
        }
        if err < 0.0 {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    unit_bezier_axis(y1, y2, s)
}
