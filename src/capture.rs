//! Capabilities the controller consumes: video capture and hand landmark detection.
//!
//! Both are external collaborators. The controller owns exactly one stream
//! and one landmark source per session and releases both on teardown.

use crate::{
    constants::{
        DEFAULT_CAPTURE_HEIGHT, DEFAULT_CAPTURE_WIDTH, DEFAULT_MAX_HANDS, DEFAULT_MIN_DETECTION_CONFIDENCE,
        DEFAULT_MIN_TRACKING_CONFIDENCE, DEFAULT_MODEL_COMPLEXITY,
    },
    error::CaptureError,
    landmarks::HandLandmarks,
    Result,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Which camera to prefer on devices with several
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacingMode {
    /// Front camera, facing the user
    #[default]
    User,
    /// Rear camera
    Environment,
}

/// Constraints passed to the capture backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConstraints {
    /// Ideal frame width in pixels
    pub width: u32,
    /// Ideal frame height in pixels
    pub height: u32,
    /// Preferred camera
    pub facing_mode: FacingMode,
    /// Request an audio track as well
    pub audio: bool,
}

impl Default for CaptureConstraints {
    fn default() -> Self {
        Self {
            width: DEFAULT_CAPTURE_WIDTH,
            height: DEFAULT_CAPTURE_HEIGHT,
            facing_mode: FacingMode::User,
            audio: false,
        }
    }
}

/// Options for the hand landmark model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerOptions {
    /// Maximum number of hands to detect
    pub max_hands: u32,
    /// Model size/accuracy tier, 0 is the lightest
    pub model_complexity: u32,
    /// Minimum confidence for a new detection (0.0-1.0)
    pub min_detection_confidence: f32,
    /// Minimum confidence to keep tracking a hand (0.0-1.0)
    pub min_tracking_confidence: f32,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            max_hands: DEFAULT_MAX_HANDS,
            model_complexity: DEFAULT_MODEL_COMPLEXITY,
            min_detection_confidence: DEFAULT_MIN_DETECTION_CONFIDENCE,
            min_tracking_confidence: DEFAULT_MIN_TRACKING_CONFIDENCE,
        }
    }
}

/// One captured video frame handed to the landmark source
#[derive(Debug, Clone, PartialEq)]
pub struct VideoFrame {
    /// Sequence number within the stream
    pub index: u64,
    pub width: u32,
    pub height: u32,
    /// When the frame was grabbed
    pub captured_at: Instant,
    /// Raw pixel data, empty for sources that do not need it
    pub pixels: Vec<u8>,
}

/// Media capture backend (webcam, file, test double)
pub trait MediaCapture {
    /// Whether the hosting context allows camera access at all
    fn is_secure_context(&self) -> bool {
        true
    }

    /// Acquire a live video stream
    ///
    /// # Errors
    ///
    /// Returns the specific reason the camera could not be acquired
    fn open(&mut self, constraints: &CaptureConstraints) -> std::result::Result<Box<dyn VideoStream>, CaptureError>;
}

/// Result of asking a stream for its current frame
#[derive(Debug, Clone, PartialEq)]
pub enum Grab {
    /// A new frame
    Frame(VideoFrame),
    /// No frame yet (camera warming up, frame not decoded); try again later
    NotReady,
    /// The stream is finished and will never yield another frame
    Ended,
}

/// A live capture stream owned by one controller
pub trait VideoStream {
    /// Grab the current frame
    fn grab(&mut self) -> Grab;

    /// Stop and release every track of the stream
    fn stop_all_tracks(&mut self);
}

/// Hand landmark detector
pub trait LandmarkSource {
    /// Apply model options before the first frame
    ///
    /// # Errors
    ///
    /// Returns an error if the options are rejected
    fn configure(&mut self, options: &TrackerOptions) -> Result<()>;

    /// Run detection on one frame; returns zero or more hands
    ///
    /// # Errors
    ///
    /// Returns an error if detection fails for this frame
    fn send(&mut self, frame: &VideoFrame) -> Result<Vec<HandLandmarks>>;

    /// Release model resources
    fn close(&mut self);
}
