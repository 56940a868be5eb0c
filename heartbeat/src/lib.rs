//! Tick bookkeeping for periodic work driven by a fixed-rate interrupt.
//!
//! A [`Heartbeat`] divides a stream of timer ticks down to a slower beat:
//! the interrupt handler calls [`Heartbeat::tick`] once per tick and runs its
//! periodic side effects whenever the call reports that a full period has
//! elapsed. The counter is plain owned state, meant to live as a task-local
//! resource of the handler that ticks it.

#![no_std]
#![deny(missing_docs)]

/// Counts fixed-rate ticks and reports when a full period has elapsed.
///
/// The count is incremented before the period comparison, so a `Heartbeat`
/// with period `N` reports its first beat on the `N`th call to [`tick`] and
/// every `N` calls thereafter. Between calls the observable count is always
/// in `[0, period)`.
///
/// [`tick`]: Heartbeat::tick
#[derive(Debug)]
pub struct Heartbeat {
    ticks: u32,
    period: u32,
}

impl Heartbeat {
    /// Creates a heartbeat that beats once every `period` ticks.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub const fn new(period: u32) -> Self {
        assert!(period > 0, "heartbeat period must be non-zero");
        Heartbeat { ticks: 0, period }
    }

    /// Advances the counter by one tick.
    ///
    /// Returns `true` when this tick completes a period; the counter is
    /// reset to zero before returning in that case.
    pub fn tick(&mut self) -> bool {
        self.ticks += 1;
        if self.ticks == self.period {
            self.ticks = 0;
            true
        } else {
            false
        }
    }

    /// Ticks counted since the last beat.
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// The configured period, in ticks.
    pub const fn period(&self) -> u32 {
        self.period
    }
}
