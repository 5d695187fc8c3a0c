//! Configuration management for gesture camera control

use crate::{
    accumulator::Sensitivity,
    camera::OrbitSettings,
    capture::{CaptureConstraints, TrackerOptions},
    constants::{DEFAULT_FIST_HOLD_MS, DEFAULT_PINCH_THRESHOLD, DEFAULT_TARGET_FPS, DEFAULT_TOUR_DURATION_SECS},
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hand landmark model options
    pub tracker: TrackerOptions,

    /// Camera capture configuration
    pub capture: CaptureConfig,

    /// Classifier thresholds
    pub classifier: ClassifierConfig,

    /// Motion sensitivity
    pub motion: MotionConfig,

    /// Frame rate and hold timings
    pub timing: TimingConfig,

    /// Orbit camera tuning
    pub camera: OrbitSettings,

    /// Auto-tour configuration
    pub tour: TourConfig,
}

/// Camera capture configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Constraints requested from the capture backend
    #[serde(flatten)]
    pub constraints: CaptureConstraints,

    /// Refuse to start outside a secure context
    pub require_secure_context: bool,
}

/// Classifier thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Thumb-index tip distance below which the hand is pinching
    pub pinch_threshold: f32,
}

/// Motion sensitivity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Scale applied to raw reference-point deltas
    pub sensitivity: Sensitivity,
}

/// Frame rate and hold timings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Maximum pipeline executions per second
    pub target_fps: u32,

    /// Continuous fist duration that resets the view (ms)
    pub fist_hold_ms: u64,
}

/// Auto-tour configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    /// Tour length in seconds
    pub duration_secs: f64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            constraints: CaptureConstraints::default(),
            require_secure_context: true,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: DEFAULT_PINCH_THRESHOLD,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            target_fps: DEFAULT_TARGET_FPS,
            fist_hold_ms: DEFAULT_FIST_HOLD_MS,
        }
    }
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_TOUR_DURATION_SECS,
        }
    }
}

impl TimingConfig {
    /// Fist hold as a duration
    #[must_use]
    pub const fn fist_hold(&self) -> Duration {
        Duration::from_millis(self.fist_hold_ms)
    }
}

impl TourConfig {
    /// Tour length as a duration
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.duration_secs.max(0.0))
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Serialize configuration to YAML text
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_yaml()?;

        std::fs::write(path, content).map_err(|e| Error::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        // Tracker
        if self.tracker.max_hands == 0 {
            return Err(Error::ConfigError("max_hands must be at least 1".to_string()));
        }
        if !(0.0..=1.0).contains(&self.tracker.min_detection_confidence) {
            return Err(Error::ConfigError(
                "Detection confidence must be between 0.0 and 1.0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.tracker.min_tracking_confidence) {
            return Err(Error::ConfigError(
                "Tracking confidence must be between 0.0 and 1.0".to_string(),
            ));
        }

        // Capture
        if self.capture.constraints.width == 0 || self.capture.constraints.height == 0 {
            return Err(Error::ConfigError("Capture size must be non-zero".to_string()));
        }

        // Classifier and motion
        if !(self.classifier.pinch_threshold > 0.0 && self.classifier.pinch_threshold.is_finite()) {
            return Err(Error::ConfigError(
                "Pinch threshold must be a positive number".to_string(),
            ));
        }
        let s = self.motion.sensitivity;
        if ![s.x, s.y, s.z].iter().all(|v| v.is_finite()) {
            return Err(Error::ConfigError("Sensitivity values must be finite".to_string()));
        }

        // Timing
        if self.timing.target_fps == 0 {
            return Err(Error::ConfigError("Target FPS must be greater than 0".to_string()));
        }
        if self.timing.fist_hold_ms == 0 {
            return Err(Error::ConfigError("Fist hold must be greater than 0 ms".to_string()));
        }

        if !(self.tour.duration_secs > 0.0 && self.tour.duration_secs.is_finite()) {
            return Err(Error::ConfigError("Tour duration must be positive".to_string()));
        }

        self.camera.validate()
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Gesture Camera Configuration

# Hand landmark model
tracker:
  max_hands: 1
  model_complexity: 0
  min_detection_confidence: 0.5
  min_tracking_confidence: 0.5

# Camera capture
capture:
  width: 320
  height: 240
  facing_mode: "user"
  audio: false
  require_secure_context: true

# Gesture classification
classifier:
  pinch_threshold: 0.05

# Motion sensitivity (x, y for rotation/pan, z for zoom)
motion:
  sensitivity:
    x: 5.0
    y: 5.0
    z: 10.0

# Frame rate cap and fist hold duration
timing:
  target_fps: 30
  fist_hold_ms: 1000

# Orbit camera
camera:
  home: [0.0, 2.0, 12.0]
  target: [0.0, 1.5, -9.8]
  rotation_gain: 0.005
  pitch_gain: 0.05
  zoom_gain: 0.1
  pan_gain: 0.05
  min_height: 1.0
  max_height: 8.0

# Auto-tour
tour:
  duration_secs: 30.0
"#;
