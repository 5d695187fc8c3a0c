//! Discrete camera commands derived from the gesture stream.
//!
//! - A fist held continuously for the hold duration resets the view. The
//!   timer re-arms when it fires, so holding on resets again one hold
//!   duration later.
//! - Entering `Peace` toggles the auto-tour once per transition, not once
//!   per frame while the sign is held.
//!
//! A frame with no detected hand is fed in as `GestureLabel::None`: it breaks
//! a fist hold and re-arms the peace edge.

use crate::gesture::GestureLabel;
use log::{debug, info};
use std::time::{Duration, Instant};

/// Command for the camera sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraCommand {
    /// Return the camera to its home pose
    ResetView,
    /// Start or stop the auto-tour
    ToggleTour,
}

/// Fist-hold and peace-edge detector
#[derive(Debug, Clone)]
pub struct GestureTriggers {
    fist_hold: Duration,
    fist_since: Option<Instant>,
    previous: GestureLabel,
}

impl GestureTriggers {
    /// Create a detector that resets after `fist_hold` of continuous fist
    #[must_use]
    pub const fn new(fist_hold: Duration) -> Self {
        Self {
            fist_hold,
            fist_since: None,
            previous: GestureLabel::None,
        }
    }

    /// Required fist hold
    #[must_use]
    pub const fn fist_hold(&self) -> Duration {
        self.fist_hold
    }

    /// Feed the label observed at `now`; returns the command it fires, if any
    pub fn update(&mut self, label: GestureLabel, now: Instant) -> Option<CameraCommand> {
        let entered = label != self.previous;
        self.previous = label;

        match label {
            GestureLabel::Fist => {
                let since = *self.fist_since.get_or_insert(now);
                if now.duration_since(since) >= self.fist_hold {
                    info!("Fist held for {:?}, resetting view", self.fist_hold);
                    self.fist_since = Some(now);
                    return Some(CameraCommand::ResetView);
                }
                None
            }
            GestureLabel::Peace => {
                self.fist_since = None;
                if entered {
                    info!("Peace sign, toggling auto-tour");
                    Some(CameraCommand::ToggleTour)
                } else {
                    None
                }
            }
            _ => {
                if self.fist_since.take().is_some() {
                    debug!("Fist hold interrupted by {label}");
                }
                None
            }
        }
    }

    /// Forget any hold in progress and the previous label
    pub fn reset(&mut self) {
        self.fist_since = None;
        self.previous = GestureLabel::None;
    }
}
