//! Gesture classification scenarios and properties


use gesture_camera::{
    constants::{
        HAND_LANDMARK_VALUES, INDEX_MCP, INDEX_TIP, MIDDLE_MCP, MIDDLE_TIP, PINKY_MCP, PINKY_TIP, RING_MCP, RING_TIP,
        THUMB_TIP,
    },
    gesture::{classify, GestureClassifier, GestureLabel},
    landmarks::{HandLandmarks, Point3},
};
use proptest::prelude::*;
use test_helpers::*;

#[test]
fn test_pinch_scenario() {
    let mut h = hand(PALM);
    h.points_mut()[THUMB_TIP] = Point3::new(0.50, 0.50, 0.0);
    h.points_mut()[INDEX_TIP] = Point3::new(0.52, 0.50, 0.0);
    assert_eq!(classify(&h), GestureLabel::Pinch);
}

#[test]
fn test_point_scenario() {
    let mut h = HandLandmarks::default();
    let p = h.points_mut();
    p[THUMB_TIP] = Point3::new(0.2, 0.6, 0.0);
    p[INDEX_MCP] = Point3::new(0.45, 0.50, 0.0);
    p[INDEX_TIP] = Point3::new(0.45, 0.30, 0.0);
    p[MIDDLE_MCP] = Point3::new(0.50, 0.50, 0.0);
    p[MIDDLE_TIP] = Point3::new(0.50, 0.55, 0.0);
    p[RING_MCP] = Point3::new(0.55, 0.50, 0.0);
    p[RING_TIP] = Point3::new(0.55, 0.55, 0.0);
    p[PINKY_MCP] = Point3::new(0.60, 0.50, 0.0);
    p[PINKY_TIP] = Point3::new(0.60, 0.55, 0.0);
    assert_eq!(classify(&h), GestureLabel::Point);
}

#[test]
fn test_every_extension_pattern() {
    for bits in 0u8..16 {
        let extended = [bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0];
        let expected = match extended {
            [true, true, false, false] => GestureLabel::Peace,
            [true, false, false, false] => GestureLabel::Point,
            [false, false, false, false] => GestureLabel::Fist,
            [true, true, true, true] => GestureLabel::Palm,
            _ => GestureLabel::None,
        };
        assert_eq!(classify(&hand(extended)), expected, "pattern {extended:?}");
    }
}

#[test]
fn test_threshold_boundary_is_exclusive() {
    let mut h = hand(FIST);
    h.points_mut()[THUMB_TIP] = Point3::new(0.0, 0.0, 0.0);
    h.points_mut()[INDEX_TIP] = Point3::new(0.5, 0.0, 0.0);
    let classifier = GestureClassifier::new(0.5);
    assert_ne!(classifier.classify(&h), GestureLabel::Pinch);
}

#[test]
fn test_sideways_hand_is_a_known_limitation() {
    // An open palm rotated 90° keeps tips level with their knuckles,
    // so no finger reads as extended
    let mut h = hand(PALM);
    for (mcp, tip) in FINGERS {
        let joint = h[mcp];
        h.points_mut()[tip] = Point3::new(joint.x + 0.2, joint.y, joint.z);
    }
    h.points_mut()[THUMB_TIP] = Point3::new(0.1, 0.1, 0.0);
    assert_eq!(classify(&h), GestureLabel::Fist);
}

fn any_hand() -> impl Strategy<Value = HandLandmarks> {
    prop::collection::vec(0.0f32..1.0, HAND_LANDMARK_VALUES)
        .prop_map(|values| HandLandmarks::from_flat(&values).expect("63 finite values"))
}

fn any_extension() -> impl Strategy<Value = [bool; 4]> {
    prop::array::uniform4(any::<bool>())
}

proptest! {
    #[test]
    fn prop_close_thumb_and_index_always_pinch(
        base in any_hand(),
        dx in -0.028f32..0.028,
        dy in -0.028f32..0.028,
        dz in -0.028f32..0.028,
    ) {
        let mut h = base;
        let index_tip = h[INDEX_TIP];
        h.points_mut()[THUMB_TIP] = Point3::new(index_tip.x + dx, index_tip.y + dy, index_tip.z + dz);
        prop_assert_eq!(classify(&h), GestureLabel::Pinch);
    }

    #[test]
    fn prop_peace(base in any_hand(), lift in 0.01f32..0.3) {
        let h = shape(base, PEACE, lift);
        prop_assert_eq!(classify(&h), GestureLabel::Peace);
    }

    #[test]
    fn prop_palm_fist_point(base in any_hand(), lift in 0.01f32..0.3) {
        prop_assert_eq!(classify(&shape(base, PALM, lift)), GestureLabel::Palm);
        prop_assert_eq!(classify(&shape(base, FIST, lift)), GestureLabel::Fist);
        prop_assert_eq!(classify(&shape(base, POINT, lift)), GestureLabel::Point);
    }

    #[test]
    fn prop_classify_is_deterministic(base in any_hand(), extended in any_extension()) {
        let h = shape(base, extended, 0.1);
        prop_assert_eq!(classify(&h), classify(&h));
        prop_assert_eq!(classify(&base), classify(&base));
    }
}
