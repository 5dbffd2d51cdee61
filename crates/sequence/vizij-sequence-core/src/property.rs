//! Animatable layer properties and ordered property sets.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SequenceError;
use crate::value::ValueKind;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimatableProperty {
    Transform,
    Bounds,
    Opacity,
    Visibility,
    Brightness,
    Grayscale,
    Color,
}

/// Ordered so that intersection checks can merge in linear time.
pub type PropertySet = BTreeSet<AnimatableProperty>;

impl AnimatableProperty {
    pub const ALL: [AnimatableProperty; 7] = [
        AnimatableProperty::Transform,
        AnimatableProperty::Bounds,
        AnimatableProperty::Opacity,
        AnimatableProperty::Visibility,
        AnimatableProperty::Brightness,
        AnimatableProperty::Grayscale,
        AnimatableProperty::Color,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AnimatableProperty::Transform => "transform",
            AnimatableProperty::Bounds => "bounds",
            AnimatableProperty::Opacity => "opacity",
            AnimatableProperty::Visibility => "visibility",
            AnimatableProperty::Brightness => "brightness",
            AnimatableProperty::Grayscale => "grayscale",
            AnimatableProperty::Color => "color",
        }
    }

    /// Kind of value a transition on this property reads and writes.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            AnimatableProperty::Transform => ValueKind::Transform,
            AnimatableProperty::Bounds => ValueKind::Rect,
            AnimatableProperty::Opacity
            | AnimatableProperty::Brightness
            | AnimatableProperty::Grayscale => ValueKind::Scalar,
            AnimatableProperty::Visibility => ValueKind::Bool,
            AnimatableProperty::Color => ValueKind::Color,
        }
    }
}

impl fmt::Display for AnimatableProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnimatableProperty {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or_else(|| SequenceError::UnknownProperty { name: s.to_string() })
    }
}

/// True when the two ordered sets share at least one property.
pub fn sets_intersect(a: &PropertySet, b: &PropertySet) -> bool {
    let mut left = a.iter();
    let mut right = b.iter();
    let (mut l, mut r) = (left.next(), right.next());
    while let (Some(x), Some(y)) = (l, r) {
        match x.cmp(y) {
            Ordering::Less => l = left.next(),
            Ordering::Greater => r = right.next(),
            Ordering::Equal => return true,
        }
    }
    false
}
