//! Animation elements: the segments a sequence plays one after another.
//!
//! An element owns its duration, the properties it animates and the way it
//! turns a fraction into an effect on the delegate. The sequence only decides
//! which element is active and what fraction it has reached.

use crate::delegate::PropertyDelegate;
use crate::error::SequenceError;
use crate::property::{AnimatableProperty, PropertySet};
use crate::time::TimeDelta;
use crate::tween::Tween;
use crate::value::PropertyValue;

/// Contract between a sequence and one of its segments.
///
/// `duration` and `properties` must stay stable once the element has been
/// appended. Each element passed over during a pass receives exactly one
/// `progress(1.0, ..)` from the sequence before the next one starts.
pub trait AnimationElement<D: ?Sized> {
    fn duration(&self) -> TimeDelta;

    fn properties(&self) -> &PropertySet;

    /// Apply the effect at `fraction` (normally within [0, 1]).
    fn progress(&mut self, fraction: f64, delegate: &mut D);

    /// Stop any in-flight effect and drop transient state.
    fn abort(&mut self);
}

/// Holds its properties for `duration` without changing them.
#[derive(Clone, Debug)]
pub struct PauseElement {
    duration: TimeDelta,
    properties: PropertySet,
}

impl PauseElement {
    pub fn new(properties: PropertySet, duration: TimeDelta) -> Self {
        Self {
            duration,
            properties,
        }
    }
}

impl<D: ?Sized> AnimationElement<D> for PauseElement {
    fn duration(&self) -> TimeDelta {
        self.duration
    }

    fn properties(&self) -> &PropertySet {
        &self.properties
    }

    fn progress(&mut self, _fraction: f64, _delegate: &mut D) {}

    fn abort(&mut self) {}
}

/// Moves one property from its current value to `target`.
///
/// The start value is read from the delegate on the first progress of each
/// pass and released after the terminal call, so cyclic sequences restart
/// from whatever the previous element left behind.
#[derive(Clone, Debug)]
pub struct TransitionElement {
    property: AnimatableProperty,
    properties: PropertySet,
    target: PropertyValue,
    duration: TimeDelta,
    tween: Tween,
    start: Option<PropertyValue>,
}

impl TransitionElement {
    pub fn new(
        property: AnimatableProperty,
        target: PropertyValue,
        duration: TimeDelta,
    ) -> Result<Self, SequenceError> {
        let expected = property.value_kind();
        if target.kind() != expected {
            return Err(SequenceError::ValueKindMismatch {
                property: property.name().to_string(),
                expected,
                actual: target.kind(),
            });
        }
        Ok(Self {
            property,
            properties: PropertySet::from([property]),
            target,
            duration,
            tween: Tween::Linear,
            start: None,
        })
    }

    pub fn opacity(target: f32, duration: TimeDelta) -> Self {
        Self::scalar(AnimatableProperty::Opacity, target, duration)
    }

    pub fn brightness(target: f32, duration: TimeDelta) -> Self {
        Self::scalar(AnimatableProperty::Brightness, target, duration)
    }

    pub fn grayscale(target: f32, duration: TimeDelta) -> Self {
        Self::scalar(AnimatableProperty::Grayscale, target, duration)
    }

    pub fn visibility(visible: bool, duration: TimeDelta) -> Self {
        Self::unchecked(
            AnimatableProperty::Visibility,
            PropertyValue::Bool(visible),
            duration,
        )
    }

    fn scalar(property: AnimatableProperty, target: f32, duration: TimeDelta) -> Self {
        Self::unchecked(property, PropertyValue::Scalar(target), duration)
    }

    fn unchecked(property: AnimatableProperty, target: PropertyValue, duration: TimeDelta) -> Self {
        Self {
            property,
            properties: PropertySet::from([property]),
            target,
            duration,
            tween: Tween::Linear,
            start: None,
        }
    }

    pub fn with_tween(mut self, tween: Tween) -> Self {
        self.tween = tween;
        self
    }

    #[inline]
    pub fn property(&self) -> AnimatableProperty {
        self.property
    }

    #[inline]
    pub fn target(&self) -> &PropertyValue {
        &self.target
    }

    /// True while a pass is in flight (start value captured).
    #[inline]
    pub fn is_running(&self) -> bool {
        self.start.is_some()
    }
}

impl<D: PropertyDelegate + ?Sized> AnimationElement<D> for TransitionElement {
    fn duration(&self) -> TimeDelta {
        self.duration
    }

    fn properties(&self) -> &PropertySet {
        &self.properties
    }

    fn progress(&mut self, fraction: f64, delegate: &mut D) {
        let start = self.start.get_or_insert_with(|| {
            delegate
                .property_value(self.property)
                .filter(|v| v.kind() == self.target.kind())
                .unwrap_or_else(|| self.target.clone())
        });
        let value = start.lerp(&self.target, self.tween.ease(fraction));
        delegate.set_property(self.property, value);
        if fraction >= 1.0 {
            self.start = None;
        }
    }

    fn abort(&mut self) {
        self.start = None;
    }
}
