//! Delegates receive the effects of property elements.
//!
//! The sequence itself never touches a delegate; it only passes `&mut D`
//! through to its elements. `PropertyDelegate` is the contract the built-in
//! transition elements need, and `PropertyStore` is a plain in-memory
//! implementation for hosts that apply values after each tick.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::property::AnimatableProperty;
use crate::value::PropertyValue;

pub trait PropertyDelegate {
    /// Current value of `property`, if the target has one.
    fn property_value(&self, property: AnimatableProperty) -> Option<PropertyValue>;

    fn set_property(&mut self, property: AnimatableProperty, value: PropertyValue);
}

/// Map-backed delegate that also counts writes per tick.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PropertyStore {
    values: HashMap<AnimatableProperty, PropertyValue>,
    #[serde(skip)]
    writes: usize,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a baseline value without counting it as a write.
    pub fn with_value(mut self, property: AnimatableProperty, value: PropertyValue) -> Self {
        self.values.insert(property, value);
        self
    }

    #[inline]
    pub fn get(&self, property: AnimatableProperty) -> Option<&PropertyValue> {
        self.values.get(&property)
    }

    /// Scalar shortcut for opacity-like properties.
    pub fn scalar(&self, property: AnimatableProperty) -> Option<f32> {
        match self.values.get(&property) {
            Some(PropertyValue::Scalar(v)) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Returns the write count accumulated since the previous call.
    pub fn take_writes(&mut self) -> usize {
        std::mem::take(&mut self.writes)
    }
}

impl PropertyDelegate for PropertyStore {
    fn property_value(&self, property: AnimatableProperty) -> Option<PropertyValue> {
        self.values.get(&property).cloned()
    }

    fn set_property(&mut self, property: AnimatableProperty, value: PropertyValue) {
        self.writes += 1;
        self.values.insert(property, value);
    }
}
