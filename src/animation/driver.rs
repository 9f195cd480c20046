use std::time::{Duration, Instant};

use super::Oscillator;
use crate::config::Config;

/// Owns the oscillator and the single pending tick.
///
/// Time is always passed in, so the driver never reads a clock itself. The
/// pending slot holds at most one deadline: restarting replaces it, and a
/// tick only ever schedules its own successor.
#[derive(Clone, Debug)]
pub struct Driver {
    oscillator: Oscillator,
    pending: Option<Instant>,
    fast_interval: Duration,
    pause_interval: Duration,
}

impl Driver {
    pub fn new(config: &Config) -> Self {
        Self {
            oscillator: Oscillator::from_config(config),
            pending: None,
            fast_interval: config.fast_interval,
            pause_interval: config.pause_interval,
        }
    }

    /// Cancel any pending tick and start a fresh cycle, first tick due at `now`
    pub fn restart(&mut self, now: Instant) {
        if let Some(deadline) = self.cancel() {
            log::debug!(
                "Cancelled tick due in {:?}",
                deadline.saturating_duration_since(now)
            );
        }
        self.oscillator.reset();
        self.pending = Some(now);
    }

    /// Drop the pending tick, returning its deadline
    pub fn cancel(&mut self) -> Option<Instant> {
        self.pending.take()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending
    }

    pub fn oscillator(&self) -> &Oscillator {
        &self.oscillator
    }

    /// Delay before the next tick given the current state
    pub fn delay_after_tick(&self) -> Duration {
        if self.oscillator.at_minimum() {
            self.pause_interval
        } else {
            self.fast_interval
        }
    }

    /// Run the pending tick if it is due. Returns the vertex count to draw.
    pub fn poll(&mut self, now: Instant) -> Option<usize> {
        match self.pending {
            Some(deadline) if deadline <= now => {
                let sides = self.oscillator.advance();
                let delay = self.delay_after_tick();
                self.pending = Some(now + delay);
                log::debug!(
                    "Tick: drew {} sides, n = {:.3}, next in {:?}",
                    sides,
                    self.oscillator.n(),
                    delay
                );
                Some(sides)
            }
            _ => None,
        }
    }
}
