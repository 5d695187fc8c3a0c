//! Error types for the gesture camera library.

use thiserror::Error;

/// Reasons the camera/media capture could not be acquired.
///
/// These are fatal to a gesture session. Each carries a user-facing message
/// naming the cause and what to do about it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// Capture requested from a non-HTTPS page
    #[error("camera access requires a secure (HTTPS) context")]
    InsecureContext,

    /// The user or platform refused camera permission
    #[error("camera permission denied")]
    PermissionDenied,

    /// No video input device present
    #[error("no camera device found")]
    NoDevice,

    /// Camera held by another application
    #[error("camera is busy or already in use")]
    DeviceBusy,

    /// Device exists but cannot satisfy the requested constraints
    #[error("camera cannot satisfy the requested constraints: {0}")]
    ConstraintsUnsatisfiable(String),

    /// Anything the capture backend reports that is not classified above
    #[error("camera error: {0}")]
    Other(String),
}

impl CaptureError {
    /// Message shown to the user when gesture control cannot start.
    pub fn user_message(&self) -> String {
        let cause = match self {
            Self::InsecureContext => {
                "Gesture control needs a secure connection. Open this page over HTTPS (or localhost)."
                    .to_string()
            }
            Self::PermissionDenied => {
                "Camera permission was denied. Allow camera access for this site in your browser settings."
                    .to_string()
            }
            Self::NoDevice => "No camera was found. Connect a webcam and make sure it is enabled.".to_string(),
            Self::DeviceBusy => {
                "Your camera is being used by another application. Close it (video calls, other tabs) and try again."
                    .to_string()
            }
            Self::ConstraintsUnsatisfiable(detail) => {
                format!("Your camera does not support the required video settings ({detail}).")
            }
            Self::Other(detail) => format!("The camera could not be started: {detail}."),
        };
        format!("{cause} Reload to retry.")
    }
}

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Camera acquisition failed during initialization
    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    /// Hand landmark source failed to configure or process a frame
    #[error("Landmark source error: {0}")]
    LandmarkSource(String),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Recorded landmark file could not be parsed
    #[error("Replay error: {0}")]
    Replay(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic I/O error with description
    #[error("I/O error: {0}")]
    IoError(String),
}

impl Error {
    /// True for failures that prevent a session from starting at all.
    pub const fn is_initialization(&self) -> bool {
        matches!(self, Self::Capture(_))
    }

    /// User-visible text for initialization failures, `None` for everything else.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Capture(cause) => Some(cause.user_message()),
            _ => None,
        }
    }
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
