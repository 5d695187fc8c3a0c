//! Configuration file handling

use gesture_camera::{
    capture::FacingMode,
    config::{Config, EXAMPLE_CONFIG},
    controller::GestureController,
    Error,
};
use std::time::Duration;

use test_helpers::{scratch_path, RecordingSink};

#[test]
fn test_file_round_trip() {
    let path = scratch_path("round-trip.yaml");

    let mut config = Config::default();
    config.timing.target_fps = 24;
    config.capture.constraints.facing_mode = FacingMode::Environment;
    config.motion.sensitivity.z = 20.0;
    config.to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded.timing.target_fps, 24);
    assert_eq!(loaded.capture.constraints.facing_mode, FacingMode::Environment);
    assert_eq!(loaded.motion.sensitivity.z, 20.0);
    assert_eq!(loaded.capture.constraints.width, 320);
}

#[test]
fn test_example_config_is_the_default() {
    let example = Config::from_yaml(EXAMPLE_CONFIG).unwrap();
    example.validate().unwrap();
    assert_eq!(example.to_yaml().unwrap(), Config::default().to_yaml().unwrap());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let path = scratch_path("partial.yaml");
    std::fs::write(&path, "timing:\n  fist_hold_ms: 1500\ncapture:\n  width: 640\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.timing.fist_hold(), Duration::from_millis(1500));
    assert_eq!(config.timing.target_fps, 30);
    assert_eq!(config.capture.constraints.width, 640);
    assert_eq!(config.capture.constraints.height, 240);
    assert!(config.capture.require_secure_context);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = Config::from_file(scratch_path("absent.yaml")).unwrap_err();
    assert!(matches!(err, Error::IoError(_)));
}

#[test]
fn test_invalid_config_is_rejected_by_controller() {
    let mut config = Config::default();
    config.timing.target_fps = 0;
    let err = GestureController::new(&config, RecordingSink::default()).err();
    assert!(matches!(err, Some(Error::ConfigError(_))));
}
