//! Application controller wiring the evaluator, session and overlay.
//!
//! `ArmTestApp` is the single entry point per frame: it services the
//! countdown timer, evaluates posture, advances the state machine and
//! produces the outputs the presentation layer consumes. The timer is not
//! a thread; it is a due time plus a [`TimerToken`] owned here, fired from
//! the frame path, so all session mutation stays on one execution context.

use crate::{
    config::Config,
    constants::TICK_INTERVAL_MS,
    evaluator::{PostureEvaluator, PostureResult},
    landmarks::LandmarkFrame,
    overlay::{build_draw_list, DrawList},
    session::{TestPhase, TestSession, TimerToken},
    source::{FrameRecord, FrameSource},
    Result,
};
use log::{debug, info};
use std::time::{Duration, Instant};

/// Countdown tick scheduled for a specific session epoch
#[derive(Debug, Clone, Copy)]
struct PendingTick {
    token: TimerToken,
    due: Instant,
}

/// Per-frame outputs for the external presentation layer
#[derive(Debug, Clone)]
pub struct FrameOutput {
    /// What the 2D backend must draw over the preview
    pub draw_list: DrawList,
    /// Per-side posture diagnostics for this frame
    pub posture: PostureResult,
    /// Current test phase
    pub phase: TestPhase,
    /// Seconds left on the countdown
    pub remaining_seconds: u32,
    /// Fraction of the hold completed, for progress rings
    pub elapsed_fraction: f64,
}

/// Summary of a completed replay run
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    pub frames_processed: usize,
    pub completed: bool,
}

/// Main application controller
pub struct ArmTestApp {
    config: Config,
    evaluator: PostureEvaluator,
    session: TestSession,
    pending_tick: Option<PendingTick>,
}

impl ArmTestApp {
    /// Create a new controller from validated configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        info!(
            "initializing arm hold test engine ({}x{} surface)",
            config.surface.width, config.surface.height
        );

        let evaluator = PostureEvaluator::new(config.surface.width, config.surface.height);
        Ok(Self {
            config,
            evaluator,
            session: TestSession::new(),
            pending_tick: None,
        })
    }

    #[must_use]
    pub fn session(&self) -> &TestSession {
        &self.session
    }

    /// Begin a test attempt
    pub fn start_test(&mut self) {
        self.pending_tick = None;
        self.session.start();
    }

    /// Abort the current attempt and return to idle
    pub fn reset_test(&mut self) {
        self.pending_tick = None;
        self.session.reset();
    }

    /// Per-frame entry point using the wall clock
    pub fn on_frame(&mut self, record: &FrameRecord) -> FrameOutput {
        self.on_frame_at(record, Instant::now())
    }

    /// Per-frame entry point with an explicit timestamp.
    ///
    /// Replay and tests drive this directly so countdown behavior is
    /// deterministic.
    pub fn on_frame_at(&mut self, record: &FrameRecord, now: Instant) -> FrameOutput {
        self.service_timer(now);

        let empty = LandmarkFrame::default();
        let frame = record.landmarks.as_ref().unwrap_or(&empty);

        // No detection degrades to "not in position", never an error
        let posture = self.evaluator.evaluate(frame);

        if self.session.observe_frame(posture.in_position) {
            // Countdown armed for the freshly minted epoch
            self.pending_tick = Some(PendingTick {
                token: self.session.timer_token(),
                due: now + Duration::from_millis(TICK_INTERVAL_MS),
            });
        } else if !matches!(self.session.phase(), TestPhase::RunningInPosition) {
            self.pending_tick = None;
        }

        let draw_list = build_draw_list(frame, &posture, self.config.surface.width, self.config.surface.height);

        FrameOutput {
            draw_list,
            phase: self.session.phase(),
            remaining_seconds: self.session.remaining_seconds(),
            elapsed_fraction: self.session.elapsed_fraction(),
            posture,
        }
    }

    /// Fire any due countdown ticks, rescheduling while the hold continues
    fn service_timer(&mut self, now: Instant) {
        while let Some(pending) = self.pending_tick {
            if now < pending.due {
                break;
            }
            let completed = self.session.tick(pending.token);
            if completed || self.session.phase() != TestPhase::RunningInPosition {
                self.pending_tick = None;
                break;
            }
            self.pending_tick = Some(PendingTick {
                token: self.session.timer_token(),
                due: pending.due + Duration::from_millis(TICK_INTERVAL_MS),
            });
        }
    }

    /// Run a full test attempt over a frame source.
    ///
    /// Starts a session, feeds every frame through the engine and paces the
    /// stream at the configured FPS unless playback is unpaced. The loop
    /// ends when the stream is exhausted or the test completes.
    pub fn run<S: FrameSource>(&mut self, source: &mut S) -> Result<RunReport> {
        info!("starting test run");
        self.start_test();

        let frame_interval = Duration::from_secs_f64(1.0 / f64::from(self.config.playback.fps));
        let mut frames_processed = 0;

        while let Some(record) = source.next_frame()? {
            let output = self.on_frame(&record);
            frames_processed += 1;
            debug!(
                "frame {}: phase={:?} remaining={}s in_position={}",
                frames_processed, output.phase, output.remaining_seconds, output.posture.in_position
            );

            if output.phase == TestPhase::Completed {
                break;
            }
            if !self.config.playback.unpaced {
                std::thread::sleep(frame_interval);
            }
        }

        let completed = self.session.phase() == TestPhase::Completed;
        info!(
            "run finished: {} frames, completed={}",
            frames_processed, completed
        );
        Ok(RunReport {
            frames_processed,
            completed,
        })
    }
}
