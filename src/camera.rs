//! Camera state sinks.
//!
//! A sink receives the accumulated gesture payload after every processed
//! frame plus the discrete reset and tour commands. `OrbitCamera` is the
//! gallery camera: it re-applies the sticky accumulators on every host tick,
//! so a held rotation keeps orbiting until the hand moves back.

use crate::{
    accumulator::CameraPayload,
    constants::{
        EPSILON, ORBIT_HOME, ORBIT_MAX_HEIGHT, ORBIT_MIN_HEIGHT, ORBIT_PAN_GAIN, ORBIT_PITCH_GAIN,
        ORBIT_ROTATION_GAIN, ORBIT_TARGET, ORBIT_ZOOM_GAIN,
    },
    tour::AutoTour,
    Error, Result,
};
use log::{debug, info};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Consumer of gesture camera control
pub trait CameraSink {
    /// Latest accumulated payload, delivered once per processed frame
    fn submit(&mut self, payload: &CameraPayload);

    /// Return to the home view
    fn reset(&mut self);

    /// Start or stop the auto-tour
    fn toggle_tour(&mut self, now: Instant);

    /// Called on every host tick, whether or not a frame was processed
    fn advance(&mut self, _now: Instant) {}
}

/// Orbit camera tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitSettings {
    /// Position restored by a reset
    pub home: [f32; 3],
    /// Point the camera orbits and looks at
    pub target: [f32; 3],
    /// Radians of orbit per unit of accumulated rotation.y
    pub rotation_gain: f32,
    /// Height change per unit of accumulated rotation.x
    pub pitch_gain: f32,
    /// Distance along the view direction per unit of zoom
    pub zoom_gain: f32,
    /// Distance per unit of pan
    pub pan_gain: f32,
    /// Lowest camera height while orbiting
    pub min_height: f32,
    /// Highest camera height while orbiting
    pub max_height: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            home: ORBIT_HOME,
            target: ORBIT_TARGET,
            rotation_gain: ORBIT_ROTATION_GAIN,
            pitch_gain: ORBIT_PITCH_GAIN,
            zoom_gain: ORBIT_ZOOM_GAIN,
            pan_gain: ORBIT_PAN_GAIN,
            min_height: ORBIT_MIN_HEIGHT,
            max_height: ORBIT_MAX_HEIGHT,
        }
    }
}

impl OrbitSettings {
    /// Check limits are usable
    ///
    /// # Errors
    ///
    /// Returns an error if the height range is empty or a gain is not finite
    pub fn validate(&self) -> Result<()> {
        if !(self.min_height < self.max_height) {
            return Err(Error::ConfigError(
                "Orbit min_height must be below max_height".to_string(),
            ));
        }
        let gains = [self.rotation_gain, self.pitch_gain, self.zoom_gain, self.pan_gain];
        if gains.iter().any(|g| !g.is_finite()) {
            return Err(Error::ConfigError("Orbit gains must be finite".to_string()));
        }
        Ok(())
    }
}

/// Gallery camera orbiting a fixed display
#[derive(Debug)]
pub struct OrbitCamera {
    settings: OrbitSettings,
    position: Vector3<f32>,
    look_at: Vector3<f32>,
    payload: CameraPayload,
    tour: AutoTour,
}

impl OrbitCamera {
    /// Camera at its home position
    #[must_use]
    pub fn new(settings: OrbitSettings, tour_duration: Duration) -> Self {
        Self {
            position: Vector3::from(settings.home),
            look_at: Vector3::from(settings.target),
            settings,
            payload: CameraPayload::default(),
            tour: AutoTour::new(tour_duration),
        }
    }

    /// Current position
    #[must_use]
    pub const fn position(&self) -> Vector3<f32> {
        self.position
    }

    /// Current look-at point
    #[must_use]
    pub const fn look_at(&self) -> Vector3<f32> {
        self.look_at
    }

    /// Whether the auto-tour is driving the camera
    #[must_use]
    pub const fn is_touring(&self) -> bool {
        self.tour.is_active()
    }

    /// Last payload received
    #[must_use]
    pub const fn payload(&self) -> &CameraPayload {
        &self.payload
    }

    /// Unit vector from the camera toward its look-at point
    fn view_direction(&self) -> Option<Vector3<f32>> {
        (self.look_at - self.position).try_normalize(EPSILON)
    }

    /// Integrate the held payload once
    fn apply_gestures(&mut self) {
        let target = Vector3::from(self.settings.target);
        let payload = self.payload;

        // Orbit about the vertical axis, pitch by height
        let radius = self.position.x.hypot(self.position.z);
        let angle = self.position.x.atan2(self.position.z) + payload.rotation.y * self.settings.rotation_gain;
        self.position.x = radius * angle.sin();
        self.position.z = radius * angle.cos();
        self.position.y = (self.position.y - payload.rotation.x * self.settings.pitch_gain)
            .clamp(self.settings.min_height, self.settings.max_height);
        self.look_at = target;

        if payload.zoom != 0.0 {
            if let Some(direction) = self.view_direction() {
                self.position += direction * (payload.zoom * self.settings.zoom_gain);
            }
        }

        if let Some(direction) = self.view_direction() {
            if let Some(right) = Vector3::y().cross(&direction).try_normalize(EPSILON) {
                self.position += right * (-payload.pan.x * self.settings.pan_gain);
            }
        }
        self.position.y += payload.pan.y * self.settings.pan_gain;
    }
}

impl CameraSink for OrbitCamera {
    fn submit(&mut self, payload: &CameraPayload) {
        self.payload = *payload;
    }

    fn reset(&mut self) {
        info!("Camera reset to home view");
        self.position = Vector3::from(self.settings.home);
        self.look_at = Vector3::from(self.settings.target);
    }

    fn toggle_tour(&mut self, now: Instant) {
        if self.tour.is_active() {
            info!("Auto-tour stopped");
            self.tour.stop();
        } else {
            info!("Auto-tour started ({:?})", self.tour.duration());
            self.tour.start(now);
        }
    }

    fn advance(&mut self, now: Instant) {
        if self.tour.is_active() {
            match self.tour.pose(now) {
                Some(pose) => {
                    self.position = pose.position;
                    self.look_at = pose.look_at;
                }
                None => debug!("Auto-tour complete"),
            }
            return;
        }
        self.apply_gestures();
    }
}
