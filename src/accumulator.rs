//! Motion accumulation from frame-to-frame hand displacement.
//!
//! The middle-finger MCP joint is tracked as a palm-center proxy. Its
//! displacement since the previous detected frame is scaled and folded into
//! exactly one sticky accumulator chosen by the current gesture:
//!
//! | Gesture | Accumulator | Update |
//! |---|---|---|
//! | `Palm` | rotation | `x += dy`, `y += dx` (cross-mapped) |
//! | `Pinch` | zoom | `+= dz` |
//! | `Point` | pan | `x += dx`, `y += dy` |
//! | others | none | label recorded only |
//!
//! The reference point is refreshed on every detected frame whatever the
//! gesture, so switching gestures never produces a displacement spike.

use crate::{
    constants::{DEFAULT_SENSITIVITY_X, DEFAULT_SENSITIVITY_Y, DEFAULT_SENSITIVITY_Z, REFERENCE_LANDMARK},
    gesture::GestureLabel,
    landmarks::{HandLandmarks, Point3},
};
use log::debug;
use serde::{Deserialize, Serialize};

/// Two-axis offset
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Create an offset
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Scale factors applied to raw normalized deltas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sensitivity {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self {
            x: DEFAULT_SENSITIVITY_X,
            y: DEFAULT_SENSITIVITY_Y,
            z: DEFAULT_SENSITIVITY_Z,
        }
    }
}

/// Per-frame payload delivered to the camera sink
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraPayload {
    pub rotation: Vec2,
    pub zoom: f32,
    pub pan: Vec2,
    pub gesture: GestureLabel,
}

/// Persistent per-session motion state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureState {
    /// Reference point of the most recent detected frame
    pub last_reference_point: Point3,
    /// Mutated only while the gesture is `Palm`
    pub accumulated_rotation: Vec2,
    /// Mutated only while the gesture is `Pinch`
    pub accumulated_zoom: f32,
    /// Mutated only while the gesture is `Point`
    pub accumulated_pan: Vec2,
    /// Label of the most recent detected frame
    pub current_gesture: GestureLabel,
}

impl GestureState {
    /// Snapshot for the camera sink
    #[must_use]
    pub const fn payload(&self) -> CameraPayload {
        CameraPayload {
            rotation: self.accumulated_rotation,
            zoom: self.accumulated_zoom,
            pan: self.accumulated_pan,
            gesture: self.current_gesture,
        }
    }
}

/// Owns the gesture state and integrates per-frame deltas into it
#[derive(Debug, Clone, Default)]
pub struct MotionAccumulator {
    state: GestureState,
    sensitivity: Sensitivity,
}

impl MotionAccumulator {
    /// Create an accumulator with the given sensitivity and a fresh state
    #[must_use]
    pub fn new(sensitivity: Sensitivity) -> Self {
        Self {
            state: GestureState::default(),
            sensitivity,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &GestureState {
        &self.state
    }

    /// Sensitivity in use
    #[must_use]
    pub const fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }

    /// Fold one detected frame into the state and return the payload to emit
    pub fn update(&mut self, hand: &HandLandmarks, label: GestureLabel) -> CameraPayload {
        let reference = hand[REFERENCE_LANDMARK];
        let raw = reference - self.state.last_reference_point;
        let dx = raw.x * self.sensitivity.x;
        let dy = raw.y * self.sensitivity.y;
        let dz = raw.z * self.sensitivity.z;

        match label {
            GestureLabel::Palm => {
                self.state.accumulated_rotation.x += dy;
                self.state.accumulated_rotation.y += dx;
            }
            GestureLabel::Pinch => {
                self.state.accumulated_zoom += dz;
            }
            GestureLabel::Point => {
                self.state.accumulated_pan.x += dx;
                self.state.accumulated_pan.y += dy;
            }
            GestureLabel::Fist | GestureLabel::Peace | GestureLabel::None => {}
        }

        if label != self.state.current_gesture {
            debug!("Gesture changed: {} -> {}", self.state.current_gesture, label);
        }

        self.state.last_reference_point = reference;
        self.state.current_gesture = label;
        self.state.payload()
    }

    /// Discard accumulated motion and start over from the origin
    pub fn reset(&mut self) {
        self.state = GestureState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand_at(x: f32, y: f32, z: f32) -> HandLandmarks {
        let mut hand = HandLandmarks::default();
        hand.points_mut()[REFERENCE_LANDMARK] = Point3::new(x, y, z);
        hand
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_palm_cross_maps_rotation() {
        let mut acc = MotionAccumulator::default();
        acc.update(&hand_at(0.5, 0.5, 0.0), GestureLabel::Fist);
        let payload = acc.update(&hand_at(0.6, 0.4, 0.0), GestureLabel::Palm);

        assert!(approx(payload.rotation.x, -0.5)); // dy * 5
        assert!(approx(payload.rotation.y, 0.5)); // dx * 5
        assert_eq!(payload.zoom, 0.0);
        assert_eq!(payload.pan, Vec2::default());
        assert_eq!(payload.gesture, GestureLabel::Palm);
    }

    #[test]
    fn test_pinch_zooms_on_depth() {
        let mut acc = MotionAccumulator::default();
        acc.update(&hand_at(0.5, 0.5, 0.0), GestureLabel::Pinch);
        let payload = acc.update(&hand_at(0.7, 0.1, -0.05), GestureLabel::Pinch);

        assert!(approx(payload.zoom, -0.5));
        assert_eq!(payload.rotation, Vec2::default());
        assert_eq!(payload.pan, Vec2::default());
    }

    #[test]
    fn test_point_pans() {
        let mut acc = MotionAccumulator::default();
        acc.update(&hand_at(0.5, 0.5, 0.0), GestureLabel::None);
        let payload = acc.update(&hand_at(0.4, 0.6, 0.3), GestureLabel::Point);

        assert!(approx(payload.pan.x, -0.5));
        assert!(approx(payload.pan.y, 0.5));
        assert_eq!(payload.zoom, 0.0);
    }

    #[test]
    fn test_first_frame_delta_is_from_origin() {
        let mut acc = MotionAccumulator::default();
        let payload = acc.update(&hand_at(0.2, 0.1, 0.0), GestureLabel::Point);
        assert!(approx(payload.pan.x, 1.0));
        assert!(approx(payload.pan.y, 0.5));
    }

    #[test]
    fn test_label_only_gestures() {
        let mut acc = MotionAccumulator::default();
        acc.update(&hand_at(0.5, 0.5, 0.0), GestureLabel::Palm);
        let before = *acc.state();

        for label in [GestureLabel::Fist, GestureLabel::Peace, GestureLabel::None] {
            let payload = acc.update(&hand_at(0.9, 0.1, 0.4), label);
            assert_eq!(payload.rotation, before.accumulated_rotation);
            assert_eq!(payload.zoom, before.accumulated_zoom);
            assert_eq!(payload.pan, before.accumulated_pan);
            assert_eq!(payload.gesture, label);
        }
        assert_eq!(acc.state().last_reference_point, Point3::new(0.9, 0.1, 0.4));
    }

    #[test]
    fn test_custom_sensitivity() {
        let mut acc = MotionAccumulator::new(Sensitivity { x: 1.0, y: 2.0, z: 3.0 });
        let payload = acc.update(&hand_at(0.1, 0.1, 0.1), GestureLabel::Palm);
        assert!(approx(payload.rotation.x, 0.2));
        assert!(approx(payload.rotation.y, 0.1));
    }

    #[test]
    fn test_reset() {
        let mut acc = MotionAccumulator::default();
        acc.update(&hand_at(0.3, 0.3, 0.3), GestureLabel::Palm);
        acc.reset();
        assert_eq!(*acc.state(), GestureState::default());
    }
}
