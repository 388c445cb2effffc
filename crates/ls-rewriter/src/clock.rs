//! Time sources for pass budgets.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait Clock {
    /// Time since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Deterministic clock that advances by `step` on every read.
///
/// The first read returns zero. Useful for reproducing budget behaviour
/// without depending on machine speed.
#[derive(Debug, Default)]
pub struct SteppingClock {
    step: Duration,
    reads: Cell<u32>,
}

impl SteppingClock {
    pub fn new(step: Duration) -> Self {
        Self { step, reads: Cell::new(0) }
    }

    /// A clock that never advances.
    pub fn frozen() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn reads(&self) -> u32 {
        self.reads.get()
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Duration {
        let n = self.reads.get();
        self.reads.set(n.saturating_add(1));
        self.step.saturating_mul(n)
    }
}

/// Start point captured from a clock.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Duration,
}

impl Stopwatch {
    pub fn start<C: Clock + ?Sized>(clock: &C) -> Self {
        Self { start: clock.now() }
    }

    pub fn elapsed<C: Clock + ?Sized>(&self, clock: &C) -> Duration {
        clock.now().saturating_sub(self.start)
    }
}
