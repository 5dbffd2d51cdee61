use serde::Deserialize;

use crate::config::SequenceConfig;
use crate::delegate::PropertyDelegate;
use crate::element::{PauseElement, TransitionElement};
use crate::error::SequenceError;
use crate::property::{AnimatableProperty, PropertySet};
use crate::sequence::AnimationSequence;
use crate::time::TimeDelta;
use crate::tween::Tween;
use crate::value::{PropertyValue, Rect};

/// Public API: parse StoredSequence-style JSON into a ready-to-drive sequence.
///
/// Notes:
/// - Element durations are milliseconds (fractions allowed) and must be >= 0.
/// - Property names are snake_case (`opacity`, `bounds`, ...).
/// - Transition targets are untagged: number, bool, `{x,y,width,height}`,
///   `{r,g,b,a?}` or a 6-number affine array; they must fit the property.
/// - Playback flags (`cyclic`, `record_events`, `max_events_per_tick`) sit at
///   the top level next to `elements`.
pub fn parse_stored_sequence_json<D>(s: &str) -> Result<AnimationSequence<D>, SequenceError>
where
    D: PropertyDelegate + ?Sized,
{
    let stored: StoredSequence = serde_json::from_str(s)?;
    if stored.elements.is_empty() {
        return Err(SequenceError::EmptyDefinition);
    }

    let mut seq = AnimationSequence::with_config(stored.config);
    for el in stored.elements {
        match el {
            SsElement::Pause {
                duration,
                properties,
            } => {
                let properties = properties
                    .iter()
                    .map(|name| name.parse::<AnimatableProperty>())
                    .collect::<Result<PropertySet, _>>()?;
                let duration = TimeDelta::from_millis_f64(duration)?;
                seq.append(Box::new(PauseElement::new(properties, duration)));
            }
            SsElement::Transition {
                property,
                duration,
                target,
                tween,
            } => {
                let property = property.parse::<AnimatableProperty>()?;
                let duration = TimeDelta::from_millis_f64(duration)?;
                let tween = match tween {
                    None => Tween::Linear,
                    Some(RawTween::Name(name)) => name.parse()?,
                    Some(RawTween::Bezier(ctrl)) => Tween::CubicBezier(ctrl),
                };
                let target = to_property_value(&target);
                let element = TransitionElement::new(property, target, duration)?.with_tween(tween);
                seq.append(Box::new(element));
            }
        }
    }
    Ok(seq)
}

fn to_property_value(v: &RawValue) -> PropertyValue {
    match v {
        RawValue::Boolean(b) => PropertyValue::Bool(*b),
        RawValue::Number(n) => PropertyValue::Scalar(*n as f32),
        RawValue::Rect {
            x,
            y,
            width,
            height,
        } => PropertyValue::Rect(Rect::new(*x as f32, *y as f32, *width as f32, *height as f32)),
        RawValue::Rgba { r, g, b, a } => {
            PropertyValue::Color([*r as f32, *g as f32, *b as f32, a.unwrap_or(1.0) as f32])
        }
        RawValue::Affine(m) => PropertyValue::Transform(m.map(|c| c as f32)),
    }
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
// Unknown keys (a descriptive "name", editor metadata) are ignored.
struct StoredSequence {
    #[serde(flatten)]
    pub config: SequenceConfig,
    pub elements: Vec<SsElement>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum SsElement {
    Pause {
        duration: f64, // milliseconds
        #[serde(default)]
        properties: Vec<String>,
    },
    Transition {
        property: String,
        duration: f64, // milliseconds
        target: RawValue,
        #[serde(default)]
        tween: Option<RawTween>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTween {
    Name(String),
    Bezier([f32; 4]),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Boolean(bool),
    Number(f64),
    // Put more specific shapes BEFORE less specific to avoid untagged matching pitfalls.
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Rgba {
        r: f64,
        g: f64,
        b: f64,
        #[serde(default)]
        a: Option<f64>,
    },
    Affine([f64; 6]),
}
