//! Frame rate gate for the processing pipeline.
//!
//! The host offers a processing opportunity on every display tick. The gate
//! admits one only if at least one frame interval has passed since the last
//! admitted frame; otherwise the opportunity is dropped. Nothing is queued.

use crate::{Error, Result};
use std::time::{Duration, Instant};

/// Drop-if-too-soon rate gate
#[derive(Debug, Clone)]
pub struct FrameGate {
    interval: Duration,
    last_frame: Option<Instant>,
    admitted: u64,
    skipped: u64,
}

impl FrameGate {
    /// Gate with an explicit minimum interval between frames
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_frame: None,
            admitted: 0,
            skipped: 0,
        }
    }

    /// Gate admitting at most `fps` frames per second
    ///
    /// # Errors
    ///
    /// Returns an error if `fps` is zero
    pub fn from_fps(fps: u32) -> Result<Self> {
        if fps == 0 {
            return Err(Error::InvalidInput("Target FPS must be greater than 0".to_string()));
        }
        Ok(Self::new(Duration::from_secs_f64(1.0 / f64::from(fps))))
    }

    /// Minimum interval between admitted frames
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Offer a processing opportunity at `now`; true if the frame should run
    pub fn try_admit(&mut self, now: Instant) -> bool {
        let due = self
            .last_frame
            .map_or(true, |last| now.saturating_duration_since(last) >= self.interval);

        if due {
            self.last_frame = Some(now);
            self.admitted += 1;
        } else {
            self.skipped += 1;
        }
        due
    }

    /// Frames admitted so far
    #[must_use]
    pub const fn admitted(&self) -> u64 {
        self.admitted
    }

    /// Opportunities dropped so far
    #[must_use]
    pub const fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Forget the last admitted frame and counters
    pub fn reset(&mut self) {
        self.last_frame = None;
        self.admitted = 0;
        self.skipped = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_opportunity_is_admitted() {
        let mut gate = FrameGate::from_fps(30).unwrap();
        assert!(gate.try_admit(Instant::now()));
    }

    #[test]
    fn test_throttles_fast_ticks() {
        let mut gate = FrameGate::from_fps(30).unwrap();
        let start = Instant::now();

        let runs = (0..100u64)
            .filter(|i| gate.try_admit(start + Duration::from_millis(i * 8)))
            .count();

        // 33.3ms interval on an 8ms tick admits every fifth tick
        assert_eq!(runs, 20);
        assert!(runs <= 24);
        assert_eq!(gate.admitted(), 20);
        assert_eq!(gate.skipped(), 80);
    }

    #[test]
    fn test_slow_ticks_always_admitted() {
        let mut gate = FrameGate::from_fps(30).unwrap();
        let start = Instant::now();
        for i in 0..10u64 {
            assert!(gate.try_admit(start + Duration::from_millis(i * 50)));
        }
    }

    #[test]
    fn test_zero_fps_rejected() {
        assert!(FrameGate::from_fps(0).is_err());
    }

    #[test]
    fn test_reset() {
        let mut gate = FrameGate::new(Duration::from_secs(10));
        let now = Instant::now();
        assert!(gate.try_admit(now));
        assert!(!gate.try_admit(now));
        gate.reset();
        assert!(gate.try_admit(now));
        assert_eq!(gate.admitted(), 1);
    }
}
