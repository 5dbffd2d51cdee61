use approx::assert_abs_diff_eq;
use vizij_sequence_core::{
    parse_stored_sequence_json, AnimatableProperty, AnimationSequence, PropertySet, PropertyStore,
    PropertyValue, SequenceError, TimeDelta,
};

fn load(json: &str) -> Result<AnimationSequence<PropertyStore>, SequenceError> {
    parse_stored_sequence_json::<PropertyStore>(json)
}

const PULSE: &str = r#"
{
  "name": "pulse",
  "cyclic": true,
  "elements": [
    { "kind": "transition", "property": "opacity", "duration": 200, "target": 0.2, "tween": "ease_in_out" },
    { "kind": "pause", "duration": 50.5, "properties": ["opacity", "bounds"] },
    { "kind": "transition", "property": "opacity", "duration": 200, "target": 1.0,
      "tween": [0.42, 0.0, 0.58, 1.0] }
  ]
}
"#;

#[test]
fn loads_elements_and_flags() {
    let seq = load(PULSE).expect("pulse parses");
    assert!(seq.is_cyclic());
    assert_eq!(seq.len(), 3);
    assert_eq!(seq.duration(), TimeDelta::from_micros(450_500));
    assert_eq!(
        seq.properties(),
        &PropertySet::from([AnimatableProperty::Opacity, AnimatableProperty::Bounds])
    );
}

#[test]
fn loaded_sequence_drives_store() {
    let mut seq = load(PULSE).unwrap();
    let mut store =
        PropertyStore::new().with_value(AnimatableProperty::Opacity, PropertyValue::Scalar(1.0));

    seq.advance(TimeDelta::from_millis(100), &mut store);
    // ease_in_out(0.5) == 0.5 -> halfway between 1.0 and 0.2
    assert_abs_diff_eq!(
        store.scalar(AnimatableProperty::Opacity).unwrap(),
        0.6,
        epsilon = 1e-6
    );
}

#[test]
fn typed_targets() {
    let json = r#"{
      "elements": [
        { "kind": "transition", "property": "bounds", "duration": 10,
          "target": { "x": 1, "y": 2, "width": 30, "height": 40 } },
        { "kind": "transition", "property": "color", "duration": 10,
          "target": { "r": 1, "g": 0.5, "b": 0 } },
        { "kind": "transition", "property": "transform", "duration": 10,
          "target": [2, 0, 0, 2, 5, 5] },
        { "kind": "transition", "property": "visibility", "duration": 0, "target": true }
      ]
    }"#;
    let mut seq = load(json).unwrap();
    assert!(!seq.is_cyclic());
    let mut store = PropertyStore::new();
    seq.progress_to_end(&mut store);

    assert_eq!(
        store.get(AnimatableProperty::Color),
        Some(&PropertyValue::Color([1.0, 0.5, 0.0, 1.0]))
    );
    assert_eq!(
        store.get(AnimatableProperty::Transform),
        Some(&PropertyValue::Transform([2.0, 0.0, 0.0, 2.0, 5.0, 5.0]))
    );
    assert_eq!(
        store.get(AnimatableProperty::Visibility),
        Some(&PropertyValue::Bool(true))
    );
    assert!(matches!(
        store.get(AnimatableProperty::Bounds),
        Some(PropertyValue::Rect(r)) if r.width == 30.0 && r.height == 40.0
    ));
}

#[test]
fn rejects_invalid_definitions() {
    assert_eq!(
        load(r#"{ "elements": [] }"#).unwrap_err(),
        SequenceError::EmptyDefinition
    );

    let err = load(
        r#"{ "elements": [ { "kind": "pause", "duration": 10, "properties": ["glow"] } ] }"#,
    )
    .unwrap_err();
    assert_eq!(
        err,
        SequenceError::UnknownProperty {
            name: "glow".into()
        }
    );

    let err = load(
        r#"{ "elements": [ { "kind": "transition", "property": "opacity", "duration": 10, "target": true } ] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, SequenceError::ValueKindMismatch { .. }));

    let err = load(r#"{ "elements": [ { "kind": "pause", "duration": -5 } ] }"#).unwrap_err();
    assert!(matches!(err, SequenceError::InvalidTime { .. }));

    let err = load(
        r#"{ "elements": [ { "kind": "transition", "property": "opacity", "duration": 10, "target": 0.0, "tween": "bounce" } ] }"#,
    )
    .unwrap_err();
    assert_eq!(
        err,
        SequenceError::UnknownTween {
            name: "bounce".into()
        }
    );

    let err = load(r#"{ "elements": [ { "kind": "spin", "duration": 10 } ] }"#).unwrap_err();
    assert_eq!(err.category(), "definition");
}
