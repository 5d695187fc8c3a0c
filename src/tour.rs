//! Timed auto-tour camera path.
//!
//! The tour is split into equal segments, each a short scripted move
//! around the gallery's central display. Progress past the end finishes it.

use crate::constants::{DEFAULT_TOUR_DURATION_SECS, ORBIT_TARGET, TOUR_SEGMENTS};
use nalgebra::Vector3;
use std::{
    f32::consts::PI,
    time::{Duration, Instant},
};

/// Camera placement for one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vector3<f32>,
    pub look_at: Vector3<f32>,
}

/// Auto-tour timeline
#[derive(Debug, Clone)]
pub struct AutoTour {
    duration: Duration,
    started_at: Option<Instant>,
}

impl Default for AutoTour {
    fn default() -> Self {
        Self::new(Duration::from_secs_f64(DEFAULT_TOUR_DURATION_SECS))
    }
}

impl AutoTour {
    /// Create an inactive tour of the given length
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            started_at: None,
        }
    }

    /// Total tour length
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether the tour is running
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start from the beginning at `now`
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    /// Stop the tour
    pub fn stop(&mut self) {
        self.started_at = None;
    }

    /// Pose at `now`. Returns `None` when inactive; a finished tour stops itself.
    pub fn pose(&mut self, now: Instant) -> Option<CameraPose> {
        let started_at = self.started_at?;
        let pose = Self::pose_at(now.saturating_duration_since(started_at), self.duration);
        if pose.is_none() {
            self.started_at = None;
        }
        pose
    }

    /// Pose `elapsed` into a tour of length `duration`, `None` once complete
    #[must_use]
    pub fn pose_at(elapsed: Duration, duration: Duration) -> Option<CameraPose> {
        if duration.is_zero() {
            return None;
        }
        let progress = (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0);
        if progress >= 1.0 {
            return None;
        }

        let scaled = progress * TOUR_SEGMENTS as f64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // progress is in [0, 1)
        let segment = scaled.floor() as usize;
        #[allow(clippy::cast_possible_truncation)]
        let t = scaled.fract() as f32;

        let display = Vector3::from(ORBIT_TARGET);
        let pose = match segment {
            // Entrance dolly
            0 => CameraPose {
                position: Vector3::new((t * PI).sin() * 3.0, 1.8, 12.0 - t * 6.0),
                look_at: display,
            },
            // Half circle around the display
            1 => {
                let angle = t * PI;
                CameraPose {
                    position: Vector3::new(
                        angle.sin() * 7.0,
                        1.5 + (t * PI).sin() * 1.5,
                        display.z + angle.cos() * 7.0,
                    ),
                    look_at: display,
                }
            }
            // Left info point
            2 => CameraPose {
                position: Vector3::new(-3.0 + t * 2.0, 2.5, -3.0),
                look_at: Vector3::new(-4.0, 2.0, -6.0),
            },
            // Right info point
            3 => CameraPose {
                position: Vector3::new(3.0 - t * 2.0, 2.5, -3.0),
                look_at: Vector3::new(4.0, 2.0, -6.0),
            },
            // Overhead orbit
            4 => {
                let angle = t * 2.0 * PI;
                CameraPose {
                    position: Vector3::new(angle.sin() * 5.0, 5.5 - t, -5.0 + angle.cos() * 5.0),
                    look_at: display,
                }
            }
            // Closing angle
            _ => {
                let angle = t * PI / 2.0;
                CameraPose {
                    position: Vector3::new(angle.sin() * 9.0, 2.5 - t * 0.7, -2.0 - t * 6.0),
                    look_at: display,
                }
            }
        };

        Some(pose)
    }
}
