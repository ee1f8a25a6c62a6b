//! Test lifecycle state machine.
//!
//! A test attempt passes through `Idle -> RunningWaiting ->
//! RunningInPosition -> Completed`. The countdown only advances while the
//! posture signal stays continuously true; a single out-of-position frame
//! snaps the countdown back to the full hold duration. All session
//! mutation goes through the transition methods here, so the scheduling
//! layer never touches counters directly.

use crate::constants::HOLD_DURATION_SECONDS;
use log::{debug, info, warn};

/// Phase of one test attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestPhase {
    /// Before start / after reset
    Idle,
    /// Test started, user not yet (or no longer) in position
    RunningWaiting,
    /// User in position, countdown active
    RunningInPosition,
    /// Hold finished; terminal until an explicit reset
    Completed,
}

/// Handle identifying one scheduled countdown.
///
/// Every transition that invalidates pending ticks mints a new epoch, so a
/// tick fired for an earlier schedule is recognizable as stale and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken(u64);

/// Mutable state of one test attempt
#[derive(Debug)]
pub struct TestSession {
    phase: TestPhase,
    remaining_seconds: u32,
    epoch: u64,
}

impl Default for TestSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: TestPhase::Idle,
            remaining_seconds: HOLD_DURATION_SECONDS,
            epoch: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> TestPhase {
        self.phase
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Fraction of the hold completed so far, in `[0, 1]`, for progress UI
    #[must_use]
    pub fn elapsed_fraction(&self) -> f64 {
        f64::from(HOLD_DURATION_SECONDS - self.remaining_seconds) / f64::from(HOLD_DURATION_SECONDS)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, TestPhase::RunningWaiting | TestPhase::RunningInPosition)
    }

    /// Token for the currently valid countdown schedule
    #[must_use]
    pub fn timer_token(&self) -> TimerToken {
        TimerToken(self.epoch)
    }

    /// Begin a test attempt.
    ///
    /// From `Completed` this behaves as reset-then-start; while already
    /// running it is ignored.
    pub fn start(&mut self) {
        match self.phase {
            TestPhase::Idle | TestPhase::Completed => {
                self.phase = TestPhase::RunningWaiting;
                self.remaining_seconds = HOLD_DURATION_SECONDS;
                self.epoch += 1;
                info!("test started, waiting for position");
            }
            TestPhase::RunningWaiting | TestPhase::RunningInPosition => {
                warn!("start() ignored: test already running");
            }
        }
    }

    /// Return to `Idle` from any state, cancelling any pending tick
    pub fn reset(&mut self) {
        self.phase = TestPhase::Idle;
        self.remaining_seconds = HOLD_DURATION_SECONDS;
        self.epoch += 1;
        info!("test reset");
    }

    /// Feed one frame's aggregate posture signal.
    ///
    /// Returns true if this frame entered `RunningInPosition`, meaning the
    /// caller should schedule a fresh countdown tick for
    /// [`timer_token`](Self::timer_token).
    pub fn observe_frame(&mut self, in_position: bool) -> bool {
        match (self.phase, in_position) {
            (TestPhase::RunningWaiting, true) => {
                self.phase = TestPhase::RunningInPosition;
                self.epoch += 1;
                debug!("position acquired, countdown armed at {}s", self.remaining_seconds);
                true
            }
            (TestPhase::RunningInPosition, false) => {
                // The hold must be continuous: one bad frame restarts it
                self.phase = TestPhase::RunningWaiting;
                self.remaining_seconds = HOLD_DURATION_SECONDS;
                self.epoch += 1;
                debug!("position lost, countdown reset to {}s", self.remaining_seconds);
                false
            }
            _ => false,
        }
    }

    /// Apply one elapsed second of countdown.
    ///
    /// A token from a cancelled schedule, or a tick arriving outside
    /// `RunningInPosition`, is a silent no-op. Returns true when this tick
    /// completed the test.
    pub fn tick(&mut self, token: TimerToken) -> bool {
        if token.0 != self.epoch || self.phase != TestPhase::RunningInPosition {
            debug!("stale or out-of-phase tick ignored");
            return false;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        debug!("countdown: {}s remaining", self.remaining_seconds);

        if self.remaining_seconds == 0 {
            self.phase = TestPhase::Completed;
            self.epoch += 1;
            info!("test completed");
            return true;
        }
        false
    }
}
