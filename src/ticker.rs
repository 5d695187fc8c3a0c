//! Host tick sources driving the frame loop.
//!
//! The controller does no scheduling of its own: the host offers a tick
//! (a display refresh) and the controller decides whether to process a frame.

use std::time::{Duration, Instant};

/// Source of processing opportunities
pub trait HostTicker {
    /// Wait for the next tick; `None` stops the loop
    fn next_tick(&mut self) -> Option<Instant>;
}

/// Real-time ticker sleeping between ticks
#[derive(Debug, Clone)]
pub struct IntervalTicker {
    period: Duration,
    remaining: Option<u64>,
    next: Option<Instant>,
}

impl IntervalTicker {
    /// Tick every `period`, forever
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            remaining: None,
            next: None,
        }
    }

    /// Stop after `ticks` ticks
    #[must_use]
    pub const fn with_limit(mut self, ticks: u64) -> Self {
        self.remaining = Some(ticks);
        self
    }
}

impl HostTicker for IntervalTicker {
    fn next_tick(&mut self) -> Option<Instant> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }

        let now = Instant::now();
        let due = self.next.unwrap_or(now);
        if due > now {
            std::thread::sleep(due - now);
        }
        let tick = Instant::now();
        // A late tick restarts the cadence instead of bursting to catch up
        let next = due + self.period;
        self.next = Some(if next < tick { tick + self.period } else { next });
        Some(tick)
    }
}

/// Deterministic ticker producing evenly spaced instants without sleeping
#[derive(Debug, Clone)]
pub struct SimulatedTicker {
    start: Instant,
    period: Duration,
    count: u64,
    limit: u64,
}

impl SimulatedTicker {
    /// `limit` ticks spaced `period` apart, beginning at `start`
    #[must_use]
    pub const fn new(start: Instant, period: Duration, limit: u64) -> Self {
        Self {
            start,
            period,
            count: 0,
            limit,
        }
    }

    /// Ticks produced so far
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }
}

impl HostTicker for SimulatedTicker {
    fn next_tick(&mut self) -> Option<Instant> {
        if self.count >= self.limit {
            return None;
        }
        let offset = self.period.checked_mul(u32::try_from(self.count).ok()?)?;
        self.count += 1;
        Some(self.start + offset)
    }
}
