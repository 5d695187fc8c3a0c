//! Motion accumulator properties


use gesture_camera::{
    accumulator::{MotionAccumulator, Sensitivity, Vec2},
    constants::REFERENCE_LANDMARK,
    gesture::{classify, GestureLabel},
};
use proptest::prelude::*;
use test_helpers::*;

fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-5, "{a} != {b}");
}

#[test]
fn test_palm_then_pinch_while_stationary_has_no_zoom_spike() {
    let mut acc = MotionAccumulator::default();
    let palm = hand(PALM);
    acc.update(&palm, GestureLabel::Palm);
    acc.update(&translated(&palm, 0.01, 0.0, 0.0), GestureLabel::Palm);

    // Hand stops moving and pinches: z of the reference point is unchanged
    let pinch = translated(&palm, 0.01, 0.0, 0.0);
    let zoom_before = acc.state().accumulated_zoom;
    let payload = acc.update(&pinch, GestureLabel::Pinch);
    assert_close(payload.zoom, zoom_before);
    assert_eq!(payload.gesture, GestureLabel::Pinch);
}

#[test]
fn test_sticky_values_survive_other_gestures() {
    let mut acc = MotionAccumulator::default();
    let point = hand(POINT);
    acc.update(&point, GestureLabel::None);
    let panned = acc.update(&translated(&point, 0.1, -0.05, 0.0), GestureLabel::Point);
    assert_close(panned.pan.x, 0.5);
    assert_close(panned.pan.y, -0.25);

    // Fist and no-gesture frames move the hand but not the pan
    let moved = translated(&point, 0.3, 0.3, 0.3);
    let held = acc.update(&moved, GestureLabel::Fist);
    assert_eq!(held.pan, panned.pan);
    let held = acc.update(&translated(&moved, -0.2, 0.1, 0.0), GestureLabel::None);
    assert_eq!(held.pan, panned.pan);
    assert_eq!(held.rotation, Vec2::default());
    assert_eq!(held.zoom, 0.0);
}

#[test]
fn test_classified_stream_drives_rotation() {
    let mut acc = MotionAccumulator::default();
    let palm = hand(PALM);
    assert_eq!(classify(&palm), GestureLabel::Palm);

    // The first detection only establishes the reference point
    acc.update(&palm, GestureLabel::None);
    let mut payload = acc.state().payload();
    for step in 1..=10 {
        let moved = translated(&palm, 0.01 * step as f32, 0.0, 0.0);
        payload = acc.update(&moved, classify(&moved));
    }
    // Ten 0.01 steps in x at sensitivity 5 yaw the camera by 0.5
    assert_close(payload.rotation.y, 0.5);
    assert_close(payload.rotation.x, 0.0);
}

#[test]
fn test_custom_sensitivity() {
    let mut acc = MotionAccumulator::new(Sensitivity { x: 1.0, y: 2.0, z: 4.0 });
    let pinch = hand(FIST);
    acc.update(&pinch, GestureLabel::Pinch);
    let payload = acc.update(&translated(&pinch, 0.0, 0.0, 0.25), GestureLabel::Pinch);
    assert_close(payload.zoom, 1.0);
}

fn any_label() -> impl Strategy<Value = GestureLabel> {
    prop::sample::select(GestureLabel::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_palm_only_changes_rotation(
        labels in prop::collection::vec(any_label(), 0..8),
        moves in prop::collection::vec((-0.1f32..0.1, -0.1f32..0.1, -0.1f32..0.1), 9),
    ) {
        let mut acc = MotionAccumulator::default();
        let mut current = hand(PALM);
        for (label, (dx, dy, dz)) in labels.iter().zip(&moves) {
            current = translated(&current, *dx, *dy, *dz);
            acc.update(&current, *label);
        }

        let before = *acc.state();
        let (dx, dy, dz) = moves[8];
        current = translated(&current, dx, dy, dz);
        let after = acc.update(&current, GestureLabel::Palm);

        prop_assert_eq!(after.zoom, before.accumulated_zoom);
        prop_assert_eq!(after.pan, before.accumulated_pan);
        prop_assert_eq!(acc.state().last_reference_point, current[REFERENCE_LANDMARK]);
    }

    #[test]
    fn prop_stationary_switch_adds_nothing(
        first in any_label(),
        second in any_label(),
        dx in -0.2f32..0.2,
        dy in -0.2f32..0.2,
        dz in -0.2f32..0.2,
    ) {
        let mut acc = MotionAccumulator::default();
        let start = hand(PALM);
        acc.update(&start, first);
        let placed = translated(&start, dx, dy, dz);
        let before = acc.update(&placed, first);
        let after = acc.update(&placed, second);

        prop_assert_eq!(after.rotation, before.rotation);
        prop_assert_eq!(after.zoom, before.zoom);
        prop_assert_eq!(after.pan, before.pan);
        prop_assert_eq!(after.gesture, second);
    }
}
