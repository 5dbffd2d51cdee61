//! Property value kinds and typed values written by transition elements.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValueKind {
    Scalar,
    Bool,
    Rect,
    Color,
    Transform,
}

/// Axis-aligned rectangle in layer space.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum PropertyValue {
    Scalar(f32),
    /// Step-only boolean value (switches at the end of a transition)
    Bool(bool),
    Rect(Rect),
    /// RGBA color
    Color([f32; 4]),
    /// 2D affine transform (a, b, c, d, tx, ty)
    Transform([f32; 6]),
}

impl PropertyValue {
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            PropertyValue::Scalar(_) => ValueKind::Scalar,
            PropertyValue::Bool(_) => ValueKind::Bool,
            PropertyValue::Rect(_) => ValueKind::Rect,
            PropertyValue::Color(_) => ValueKind::Color,
            PropertyValue::Transform(_) => ValueKind::Transform,
        }
    }

    /// Component-wise linear blend towards `target`.
    ///
    /// Booleans hold `self` until `t` reaches 1.0. Mismatched kinds keep the
    /// left value (fail-soft).
    pub fn lerp(&self, target: &PropertyValue, t: f32) -> PropertyValue {
        match (self, target) {
            (PropertyValue::Scalar(a), PropertyValue::Scalar(b)) => {
                PropertyValue::Scalar(lerp_f32(*a, *b, t))
            }
            (PropertyValue::Bool(a), PropertyValue::Bool(b)) => {
                PropertyValue::Bool(if t >= 1.0 { *b } else { *a })
            }
            (PropertyValue::Rect(a), PropertyValue::Rect(b)) => PropertyValue::Rect(Rect {
                x: lerp_f32(a.x, b.x, t),
                y: lerp_f32(a.y, b.y, t),
                width: lerp_f32(a.width, b.width, t),
                height: lerp_f32(a.height, b.height, t),
            }),
            (PropertyValue::Color(a), PropertyValue::Color(b)) => {
                PropertyValue::Color(lerp_array(*a, *b, t))
            }
            (PropertyValue::Transform(a), PropertyValue::Transform(b)) => {
                PropertyValue::Transform(lerp_array(*a, *b, t))
            }
            _ => self.clone(),
        }
    }
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
fn lerp_array<const N: usize>(a: [f32; N], b: [f32; N], t: f32) -> [f32; N] {
    let mut out = a;
    for (o, (x, y)) in out.iter_mut().zip(a.iter().zip(b.iter())) {
        *o = lerp_f32(*x, *y, t);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_and_rect_lerp() {
        let a = PropertyValue::Scalar(0.0);
        let b = PropertyValue::Scalar(2.0);
        assert_eq!(a.lerp(&b, 0.25), PropertyValue::Scalar(0.5));

        let ra = PropertyValue::Rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let rb = PropertyValue::Rect(Rect::new(10.0, 20.0, 30.0, 10.0));
        assert_eq!(
            ra.lerp(&rb, 0.5),
            PropertyValue::Rect(Rect::new(5.0, 10.0, 20.0, 10.0))
        );
    }

    #[test]
    fn bool_steps_at_end() {
        let a = PropertyValue::Bool(false);
        let b = PropertyValue::Bool(true);
        assert_eq!(a.lerp(&b, 0.99), PropertyValue::Bool(false));
        assert_eq!(a.lerp(&b, 1.0), PropertyValue::Bool(true));
    }

    #[test]
    fn mismatched_kinds_keep_left() {
        let a = PropertyValue::Scalar(1.0);
        let b = PropertyValue::Color([0.0, 0.0, 0.0, 1.0]);
        assert_eq!(a.lerp(&b, 0.5), a);
    }

    #[test]
    fn tagged_json_shape() {
        let v = PropertyValue::Color([1.0, 0.5, 0.0, 1.0]);
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["type"], "Color");
        assert_eq!(v.kind(), ValueKind::Color);
    }
}
