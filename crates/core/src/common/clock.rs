//! Clock capability for timed operation holds.
//!
//! Every simulated operation "holds" for its full duration before completing.
//! The hold is expressed against a single shared start reference: the target
//! completion time is the current elapsed time plus the operation duration,
//! corrected by a fixed compensation constant for polling overhead. This module
//! provides:
//! 1. **`Clock` trait:** elapsed-time query and hold-until-target suspension.
//! 2. **`WallClock`:** real-time implementation that spins on the wall clock.
//! 3. **`VirtualClock`:** deterministic implementation for tests; jumps straight
//!    to the target while preserving the same elapsed-time arithmetic.

use std::cell::Cell;
use std::time::Instant;

/// Fixed correction applied to every hold target, in seconds.
///
/// The polling loop overshoots slightly; the original timing calibration
/// settled on 0.8 ms and trace timestamps depend on it.
pub const TIME_COMPENSATION_SECS: f64 = -0.0008;

/// Elapsed-time and suspension capability shared by all executors in a run.
///
/// All timestamps in a run are relative to one shared start reference, so a
/// single clock instance is created per run and handed to every program.
pub trait Clock {
    /// Seconds elapsed since the run's start reference.
    fn elapsed_secs(&self) -> f64;

    /// Blocks until `elapsed_secs()` reaches `target_secs`.
    ///
    /// A target already in the past returns immediately. Holds are not
    /// cancellable; the caller resumes only once the target has been reached.
    fn hold_until(&self, target_secs: f64);
}

/// Computes the hold target for an operation of `duration_ms` milliseconds.
///
/// Target = elapsed + duration + compensation. The arithmetic is identical for
/// wall and virtual clocks so traces stay comparable between the two.
pub fn hold_target(clock: &dyn Clock, duration_ms: u64) -> f64 {
    clock.elapsed_secs() + (duration_ms as f64 / 1000.0) + TIME_COMPENSATION_SECS
}

/// Real-time clock anchored at a run's start instant.
#[derive(Debug)]
pub struct WallClock {
    start: Instant,
}

impl WallClock {
    /// Anchors a new wall clock at the current instant.
    pub fn start_now() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for WallClock {
    fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    fn hold_until(&self, target_secs: f64) {
        while self.elapsed_secs() < target_secs {
            std::hint::spin_loop();
        }
    }
}

/// Deterministic clock for tests.
///
/// Holds advance the virtual time directly instead of waiting, so a test run
/// completes instantly while producing the same timestamps a real run would.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Cell<f64>,
}

impl VirtualClock {
    /// Creates a virtual clock at elapsed time zero.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for VirtualClock {
    fn elapsed_secs(&self) -> f64 {
        self.now.get()
    }

    fn hold_until(&self, target_secs: f64) {
        if target_secs > self.now.get() {
            self.now.set(target_secs);
        }
    }
}
