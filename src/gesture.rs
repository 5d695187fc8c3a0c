//! Single-frame hand shape classification.
//!
//! Rules are checked in priority order and the first match wins:
//!
//! 1. Thumb tip within the pinch threshold of the index tip: `Pinch`
//! 2. Index and middle extended, ring and pinky flexed: `Peace`
//! 3. Only index extended: `Point`
//! 4. No finger extended: `Fist`
//! 5. All four fingers extended: `Palm`
//! 6. Anything else: `None`
//!
//! A finger counts as extended when its tip sits above its MCP joint on
//! screen (smaller y). This only looks at the y axis, so a hand rotated
//! sideways, upside down or tilted toward the camera is misclassified.
//! That is a known limitation of the rule set and is kept as-is.

use crate::{
    constants::{
        DEFAULT_PINCH_THRESHOLD, INDEX_MCP, INDEX_TIP, MIDDLE_MCP, MIDDLE_TIP, PINKY_MCP, PINKY_TIP, RING_MCP,
        RING_TIP, THUMB_TIP,
    },
    landmarks::HandLandmarks,
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Discrete hand shape for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureLabel {
    /// All four fingers extended: rotate
    Palm,
    /// Thumb and index tips touching: zoom
    Pinch,
    /// All fingers curled: reset view when held
    Fist,
    /// Index and middle extended: toggle auto-tour
    Peace,
    /// Index extended alone: pan
    Point,
    /// No hand, or an ambiguous shape
    #[default]
    None,
}

impl GestureLabel {
    /// Every label, in declaration order
    pub const ALL: [Self; 6] = [Self::Palm, Self::Pinch, Self::Fist, Self::Peace, Self::Point, Self::None];

    /// Lowercase name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Palm => "palm",
            Self::Pinch => "pinch",
            Self::Fist => "fist",
            Self::Peace => "peace",
            Self::Point => "point",
            Self::None => "none",
        }
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GestureLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidInput(format!("Unknown gesture: {s}")))
    }
}

/// Extended/flexed state of the four non-thumb fingers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerState {
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerState {
    /// Derive finger extension from tip-above-MCP comparisons
    #[must_use]
    pub fn from_landmarks(hand: &HandLandmarks) -> Self {
        let extended = |tip: usize, mcp: usize| hand[tip].y < hand[mcp].y;
        Self {
            index: extended(INDEX_TIP, INDEX_MCP),
            middle: extended(MIDDLE_TIP, MIDDLE_MCP),
            ring: extended(RING_TIP, RING_MCP),
            pinky: extended(PINKY_TIP, PINKY_MCP),
        }
    }
}

/// Hand shape classifier with a configurable pinch threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureClassifier {
    pinch_threshold: f32,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_PINCH_THRESHOLD)
    }
}

impl GestureClassifier {
    /// Create a classifier
    #[must_use]
    pub const fn new(pinch_threshold: f32) -> Self {
        Self { pinch_threshold }
    }

    /// Pinch distance threshold in normalized units
    #[must_use]
    pub const fn pinch_threshold(&self) -> f32 {
        self.pinch_threshold
    }

    /// Classify one hand. Pure and deterministic.
    #[must_use]
    pub fn classify(&self, hand: &HandLandmarks) -> GestureLabel {
        if hand[THUMB_TIP].distance(&hand[INDEX_TIP]) < self.pinch_threshold {
            return GestureLabel::Pinch;
        }

        let fingers = FingerState::from_landmarks(hand);
        match (fingers.index, fingers.middle, fingers.ring, fingers.pinky) {
            (true, true, false, false) => GestureLabel::Peace,
            (true, false, false, false) => GestureLabel::Point,
            (false, false, false, false) => GestureLabel::Fist,
            (true, true, true, true) => GestureLabel::Palm,
            _ => GestureLabel::None,
        }
    }
}

/// Classify with the default pinch threshold
#[must_use]
pub fn classify(hand: &HandLandmarks) -> GestureLabel {
    GestureClassifier::default().classify(hand)
}
