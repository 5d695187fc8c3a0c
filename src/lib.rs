//! Hand-gesture camera control for 3D scenes.
//!
//! This library turns a stream of hand landmarks (21 normalized points per
//! hand, as produced by common hand tracking models) into camera control:
//!
//! 1. Each frame's hand shape is classified into a discrete gesture
//!    (palm, pinch, fist, peace, point or none)
//! 2. Palm-center displacement since the previous frame is folded into sticky
//!    rotation, zoom and pan accumulators, one per gesture
//! 3. The accumulated payload is emitted to a camera sink; a held fist resets
//!    the view and entering a peace sign toggles an auto-tour
//!
//! The pipeline is rate limited by a frame gate and owns its capture stream
//! and landmark source for the lifetime of a session.
//!
//! # Examples
//!
//! ## Classifying a Hand
//!
//! ```
//! use gesture_camera::{gesture::{classify, GestureLabel}, landmarks::{HandLandmarks, Point3}};
//!
//! let mut hand = HandLandmarks::default();
//! hand.points_mut()[4] = Point3::new(0.50, 0.50, 0.0); // thumb tip
//! hand.points_mut()[8] = Point3::new(0.52, 0.50, 0.0); // index tip
//! assert_eq!(classify(&hand), GestureLabel::Pinch);
//! ```
//!
//! ## Replaying a Recording
//!
//! ```no_run
//! use gesture_camera::{
//!     camera::{OrbitCamera, OrbitSettings},
//!     config::Config,
//!     controller::GestureController,
//!     replay::Recording,
//!     ticker::IntervalTicker,
//! };
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let camera = OrbitCamera::new(config.camera.clone(), config.tour.duration());
//! let mut controller = GestureController::new(&config, camera)?;
//!
//! let (mut capture, source) = Recording::from_file("session.landmarks")?.into_playback();
//! controller.enable(&mut capture, Box::new(source))?;
//!
//! let stats = controller.run(&mut IntervalTicker::new(Duration::from_millis(16)));
//! println!("processed {} frames", stats.processed);
//! println!("camera at {:?}", controller.sink().position());
//! # Ok(())
//! # }
//! ```

/// Constants used throughout the library
pub mod constants;

/// Error types and result handling
pub mod error;

/// Hand landmark types
pub mod landmarks;

/// Single-frame gesture classification
pub mod gesture;

/// Frame-to-frame motion accumulation
pub mod accumulator;

/// Fist-hold and peace-edge camera commands
pub mod triggers;

/// Pipeline frame rate gate
pub mod frame_gate;

/// Host tick sources
pub mod ticker;

/// Capture and landmark source capabilities
pub mod capture;

/// Camera sinks
pub mod camera;

/// Auto-tour camera path
pub mod tour;

/// Gesture control session lifecycle
pub mod controller;

/// Recorded landmark playback
pub mod replay;

/// Configuration management
pub mod config;

pub use error::{CaptureError, Error, Result};
