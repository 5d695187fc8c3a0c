//! Constants used throughout the library

/// Number of landmarks in one tracked hand
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Flat float count for one hand (21 points × x, y, z)
pub const HAND_LANDMARK_VALUES: usize = NUM_HAND_LANDMARKS * 3;

/// Hand landmark indices
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_TIP: usize = 20;

/// Palm-center proxy used for motion tracking (middle-finger MCP)
pub const REFERENCE_LANDMARK: usize = MIDDLE_MCP;

/// Thumb-tip to index-tip distance below which the hand is pinching
pub const DEFAULT_PINCH_THRESHOLD: f32 = 0.05;

/// Motion sensitivity applied to raw reference-point deltas
pub const DEFAULT_SENSITIVITY_X: f32 = 5.0;
pub const DEFAULT_SENSITIVITY_Y: f32 = 5.0;
pub const DEFAULT_SENSITIVITY_Z: f32 = 10.0;

/// Pipeline rate cap
pub const DEFAULT_TARGET_FPS: u32 = 30;

/// Continuous fist duration that resets the view
pub const DEFAULT_FIST_HOLD_MS: u64 = 1000;

/// Landmark model defaults
pub const DEFAULT_MAX_HANDS: u32 = 1;
pub const DEFAULT_MODEL_COMPLEXITY: u32 = 0;
pub const DEFAULT_MIN_DETECTION_CONFIDENCE: f32 = 0.5;
pub const DEFAULT_MIN_TRACKING_CONFIDENCE: f32 = 0.5;

/// Capture defaults
pub const DEFAULT_CAPTURE_WIDTH: u32 = 320;
pub const DEFAULT_CAPTURE_HEIGHT: u32 = 240;

/// Orbit camera gains
pub const ORBIT_ROTATION_GAIN: f32 = 0.005;
pub const ORBIT_PITCH_GAIN: f32 = 0.05;
pub const ORBIT_ZOOM_GAIN: f32 = 0.1;
pub const ORBIT_PAN_GAIN: f32 = 0.05;

/// Orbit camera height limits
pub const ORBIT_MIN_HEIGHT: f32 = 1.0;
pub const ORBIT_MAX_HEIGHT: f32 = 8.0;

/// Point the orbit camera looks at (the gallery's central display)
pub const ORBIT_TARGET: [f32; 3] = [0.0, 1.5, -9.8];

/// Camera position restored by a reset
pub const ORBIT_HOME: [f32; 3] = [0.0, 2.0, 12.0];

/// Auto-tour length
pub const DEFAULT_TOUR_DURATION_SECS: f64 = 30.0;

/// Number of equal tour segments
pub const TOUR_SEGMENTS: usize = 6;

/// Numeric precision epsilon
pub const EPSILON: f32 = 1e-6;
