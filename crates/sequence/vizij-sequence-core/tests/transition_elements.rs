use approx::assert_abs_diff_eq;
use vizij_sequence_core::{
    AnimatableProperty, AnimationSequence, PauseElement, PropertySet, PropertyStore,
    PropertyValue, Rect, SequenceConfig, SequenceEvent, TimeDelta, TransitionElement, Tween,
};

fn ms(v: i64) -> TimeDelta {
    TimeDelta::from_millis(v)
}

fn opacity(store: &PropertyStore) -> f32 {
    store
        .scalar(AnimatableProperty::Opacity)
        .expect("opacity is set")
}

#[test]
fn fade_out_hold_fade_in() {
    let mut store =
        PropertyStore::new().with_value(AnimatableProperty::Opacity, PropertyValue::Scalar(1.0));
    let mut seq = AnimationSequence::<PropertyStore>::new()
        .then(TransitionElement::opacity(0.0, ms(100)))
        .then(PauseElement::new(
            PropertySet::from([AnimatableProperty::Opacity]),
            ms(50),
        ))
        .then(TransitionElement::opacity(1.0, ms(100)).with_tween(Tween::EaseIn));
    assert_eq!(seq.duration(), ms(250));

    seq.advance(ms(50), &mut store);
    assert_abs_diff_eq!(opacity(&store), 0.5, epsilon = 1e-6);

    seq.advance(ms(120), &mut store);
    assert_abs_diff_eq!(opacity(&store), 0.0, epsilon = 1e-6);

    seq.advance(ms(200), &mut store);
    assert_abs_diff_eq!(opacity(&store), 0.25, epsilon = 1e-6);

    seq.advance(ms(250), &mut store);
    assert_abs_diff_eq!(opacity(&store), 1.0, epsilon = 1e-6);
    assert_eq!(seq.take_events().last(), Some(&SequenceEvent::Ended));
}

#[test]
fn cyclic_pulse_recaptures_start_each_pass() {
    let mut store =
        PropertyStore::new().with_value(AnimatableProperty::Opacity, PropertyValue::Scalar(1.0));
    let mut seq = AnimationSequence::<PropertyStore>::with_config(SequenceConfig::cyclic())
        .then(TransitionElement::opacity(0.0, ms(100)))
        .then(TransitionElement::opacity(1.0, ms(100)));

    // Fast-forward to 800ms, then el0 and el1 finish and el0 is half way.
    seq.advance(ms(1_050), &mut store);
    assert_abs_diff_eq!(opacity(&store), 0.5, epsilon = 1e-6);

    seq.advance(ms(1_180), &mut store);
    // el1 started from 0.0 at 1_100ms.
    assert_abs_diff_eq!(opacity(&store), 0.8, epsilon = 1e-6);
}

#[test]
fn bounds_and_visibility_transitions() {
    let mut store = PropertyStore::new()
        .with_value(
            AnimatableProperty::Bounds,
            PropertyValue::Rect(Rect::new(0.0, 0.0, 100.0, 100.0)),
        )
        .with_value(AnimatableProperty::Visibility, PropertyValue::Bool(false));

    let grow = TransitionElement::new(
        AnimatableProperty::Bounds,
        PropertyValue::Rect(Rect::new(0.0, 0.0, 200.0, 50.0)),
        ms(100),
    )
    .unwrap();
    let mut seq = AnimationSequence::<PropertyStore>::new()
        .then(grow)
        .then(TransitionElement::visibility(true, ms(20)));

    seq.advance(ms(50), &mut store);
    assert_eq!(
        store.get(AnimatableProperty::Bounds),
        Some(&PropertyValue::Rect(Rect::new(0.0, 0.0, 150.0, 75.0)))
    );
    assert_eq!(
        store.get(AnimatableProperty::Visibility),
        Some(&PropertyValue::Bool(false))
    );

    seq.advance(ms(110), &mut store);
    assert_eq!(
        store.get(AnimatableProperty::Visibility),
        Some(&PropertyValue::Bool(false))
    );

    seq.advance(ms(120), &mut store);
    assert_eq!(
        store.get(AnimatableProperty::Visibility),
        Some(&PropertyValue::Bool(true))
    );
    assert_eq!(
        seq.properties(),
        &PropertySet::from([AnimatableProperty::Bounds, AnimatableProperty::Visibility])
    );
}

#[test]
fn abort_keeps_last_written_value() {
    let mut store =
        PropertyStore::new().with_value(AnimatableProperty::Grayscale, PropertyValue::Scalar(0.0));
    let mut seq = AnimationSequence::<PropertyStore>::new()
        .then(TransitionElement::grayscale(1.0, ms(100)));

    seq.advance(ms(40), &mut store);
    seq.abort();
    assert_abs_diff_eq!(
        store.scalar(AnimatableProperty::Grayscale).unwrap(),
        0.4,
        epsilon = 1e-6
    );

    // Replaying starts from where the aborted pass left the property.
    seq.advance(ms(50), &mut store);
    assert_abs_diff_eq!(
        store.scalar(AnimatableProperty::Grayscale).unwrap(),
        0.7,
        epsilon = 1e-6
    );
}

#[test]
fn conflicting_sequences_share_properties() {
    let fade = AnimationSequence::<PropertyStore>::new()
        .then(TransitionElement::opacity(0.0, ms(100)));
    let dim = AnimationSequence::<PropertyStore>::new()
        .then(TransitionElement::brightness(0.2, ms(100)))
        .then(TransitionElement::opacity(1.0, ms(100)));
    let tint = AnimationSequence::<PropertyStore>::new().then(
        TransitionElement::new(
            AnimatableProperty::Color,
            PropertyValue::Color([1.0, 0.0, 0.0, 1.0]),
            ms(100),
        )
        .unwrap(),
    );

    assert!(fade.has_common_property(dim.properties()));
    assert!(!fade.has_common_property(tint.properties()));
    assert!(!dim.has_common_property(tint.properties()));
}

#[test]
fn store_counts_writes_per_tick() {
    let mut store = PropertyStore::new();
    let mut seq = AnimationSequence::<PropertyStore>::new()
        .then(TransitionElement::opacity(0.0, ms(100)))
        .then(TransitionElement::brightness(0.5, ms(100)));

    seq.advance(ms(150), &mut store);
    // Terminal write for el0 plus the fractional write for el1.
    assert_eq!(store.take_writes(), 2);
    seq.advance(ms(160), &mut store);
    assert_eq!(store.take_writes(), 1);
    assert_eq!(store.writes(), 0);
}
