//! Gesture control session: the per-frame pipeline and its lifecycle.
//!
//! Each admitted tick runs grab → detect → classify → accumulate → emit to
//! completion before the next tick is considered. A failing detection call
//! is logged and skipped; it never ends the session. Disabling tears down the
//! landmark source and the capture stream together.

use crate::{
    accumulator::{CameraPayload, MotionAccumulator},
    camera::CameraSink,
    capture::{CaptureConstraints, Grab, LandmarkSource, MediaCapture, TrackerOptions, VideoStream},
    config::Config,
    error::CaptureError,
    frame_gate::FrameGate,
    gesture::{GestureClassifier, GestureLabel},
    ticker::HostTicker,
    triggers::{CameraCommand, GestureTriggers},
    Error, Result,
};
use log::{debug, error, info, warn};
use std::{
    fmt,
    time::{Duration, Instant},
};

/// What happened on one host tick
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Gesture control is not enabled
    Disabled,
    /// Too soon after the previous frame
    Skipped,
    /// Stream had no frame ready yet; the session stays up
    NoFrame,
    /// Capture stream ended; the session has been torn down
    StreamEnded,
    /// Detection failed for this frame; logged and ignored
    FrameFailed,
    /// Frame processed, no hand in view
    NoHand,
    /// Frame processed with a hand
    Processed {
        payload: CameraPayload,
        command: Option<CameraCommand>,
    },
}

/// Counters for one run of the frame loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub ticks: u64,
    pub processed: u64,
    pub skipped: u64,
    pub not_ready: u64,
    pub no_hand: u64,
    pub failed: u64,
    pub resets: u64,
    pub tour_toggles: u64,
}

impl RunStats {
    /// Count one tick's outcome
    pub fn record(&mut self, outcome: &TickOutcome) {
        self.ticks += 1;
        match outcome {
            TickOutcome::Skipped => self.skipped += 1,
            TickOutcome::NoFrame => self.not_ready += 1,
            TickOutcome::FrameFailed => self.failed += 1,
            TickOutcome::NoHand => self.no_hand += 1,
            TickOutcome::Processed { command, .. } => {
                self.processed += 1;
                match command {
                    Some(CameraCommand::ResetView) => self.resets += 1,
                    Some(CameraCommand::ToggleTour) => self.tour_toggles += 1,
                    None => {}
                }
            }
            TickOutcome::Disabled | TickOutcome::StreamEnded => {}
        }
    }
}

/// Resources exclusively owned by an enabled session
struct Session {
    stream: Box<dyn VideoStream>,
    source: Box<dyn LandmarkSource>,
}

impl Session {
    /// Release the landmark model and every capture track
    fn teardown(mut self) {
        self.source.close();
        self.stream.stop_all_tracks();
        info!("Gesture session resources released");
    }
}

/// Hand-gesture camera controller
pub struct GestureController<S: CameraSink> {
    sink: S,
    classifier: GestureClassifier,
    accumulator: MotionAccumulator,
    triggers: GestureTriggers,
    gate: FrameGate,
    tracker: TrackerOptions,
    constraints: CaptureConstraints,
    require_secure_context: bool,
    session: Option<Session>,
}

impl<S: CameraSink> GestureController<S> {
    /// Create a disabled controller from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: &Config, sink: S) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            sink,
            classifier: GestureClassifier::new(config.classifier.pinch_threshold),
            accumulator: MotionAccumulator::new(config.motion.sensitivity),
            triggers: GestureTriggers::new(config.timing.fist_hold()),
            gate: FrameGate::from_fps(config.timing.target_fps)?,
            tracker: config.tracker.clone(),
            constraints: config.capture.constraints.clone(),
            require_secure_context: config.capture.require_secure_context,
            session: None,
        })
    }

    /// Whether a session is running
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.session.is_some()
    }

    /// The camera sink
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the camera sink
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Accumulated gesture state
    #[must_use]
    pub const fn accumulator(&self) -> &MotionAccumulator {
        &self.accumulator
    }

    /// Minimum interval between processed frames
    #[must_use]
    pub const fn frame_interval(&self) -> Duration {
        self.gate.interval()
    }

    /// Start a session: configure the landmark source, then acquire the camera.
    ///
    /// On failure nothing is left running and the loop is not started.
    ///
    /// # Errors
    ///
    /// Returns a capture error naming the cause (insecure context, permission,
    /// missing or busy device, unsatisfiable constraints) or a landmark source
    /// configuration error
    pub fn enable(&mut self, capture: &mut dyn MediaCapture, mut source: Box<dyn LandmarkSource>) -> Result<()> {
        if self.session.is_some() {
            return Err(Error::InvalidInput("Gesture control is already enabled".to_string()));
        }

        info!("Enabling gesture control");

        if self.require_secure_context && !capture.is_secure_context() {
            let err = CaptureError::InsecureContext;
            error!("{}", err.user_message());
            return Err(err.into());
        }

        if let Err(err) = source.configure(&self.tracker) {
            source.close();
            error!("Landmark source failed to start: {}", err);
            return Err(err);
        }

        let stream = match capture.open(&self.constraints) {
            Ok(stream) => stream,
            Err(err) => {
                source.close();
                error!("{}", err.user_message());
                return Err(err.into());
            }
        };

        info!(
            "Camera acquired ({}x{}, {:?}), processing at most every {:?}",
            self.constraints.width,
            self.constraints.height,
            self.constraints.facing_mode,
            self.gate.interval()
        );

        self.accumulator.reset();
        self.triggers.reset();
        self.gate.reset();
        self.session = Some(Session { stream, source });
        Ok(())
    }

    /// Stop the session and release the source and stream together.
    ///
    /// Does nothing when already disabled.
    pub fn disable(&mut self) {
        if let Some(session) = self.session.take() {
            info!("Disabling gesture control");
            session.teardown();
        }
    }

    /// Handle one host tick
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let outcome = self.process(now);
        if outcome != TickOutcome::Disabled {
            self.sink.advance(now);
        }
        outcome
    }

    /// Drive ticks until the ticker stops or the session ends
    pub fn run(&mut self, ticker: &mut dyn HostTicker) -> RunStats {
        let mut stats = RunStats::default();

        while let Some(now) = ticker.next_tick() {
            let outcome = self.tick(now);
            stats.record(&outcome);
            if matches!(outcome, TickOutcome::Disabled | TickOutcome::StreamEnded) {
                break;
            }
        }

        debug!("Frame loop finished: {:?}", stats);
        stats
    }

    fn process(&mut self, now: Instant) -> TickOutcome {
        let Some(session) = self.session.as_mut() else {
            return TickOutcome::Disabled;
        };

        if !self.gate.try_admit(now) {
            return TickOutcome::Skipped;
        }

        let frame = match session.stream.grab() {
            Grab::Frame(frame) => frame,
            Grab::NotReady => {
                debug!("No video frame ready yet");
                return TickOutcome::NoFrame;
            }
            Grab::Ended => {
                info!("Video stream ended");
                self.disable();
                return TickOutcome::StreamEnded;
            }
        };

        let hands = match session.source.send(&frame) {
            Ok(hands) => hands,
            Err(e) => {
                warn!("Hand detection failed on frame {}: {}", frame.index, e);
                return TickOutcome::FrameFailed;
            }
        };

        let Some(hand) = hands.first() else {
            self.triggers.update(GestureLabel::None, now);
            return TickOutcome::NoHand;
        };

        let label = self.classifier.classify(hand);
        let payload = self.accumulator.update(hand, label);
        self.sink.submit(&payload);

        let command = self.triggers.update(label, now);
        match command {
            Some(CameraCommand::ResetView) => self.sink.reset(),
            Some(CameraCommand::ToggleTour) => self.sink.toggle_tour(now),
            None => {}
        }

        TickOutcome::Processed { payload, command }
    }
}

impl<S: CameraSink + fmt::Debug> fmt::Debug for GestureController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureController")
            .field("sink", &self.sink)
            .field("classifier", &self.classifier)
            .field("accumulator", &self.accumulator)
            .field("triggers", &self.triggers)
            .field("gate", &self.gate)
            .field("tracker", &self.tracker)
            .field("constraints", &self.constraints)
            .field("require_secure_context", &self.require_secure_context)
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

impl<S: CameraSink> Drop for GestureController<S> {
    fn drop(&mut self) {
        self.disable();
    }
}
