//! Posture validation and test-progression engine for a timed arm-hold
//! strength test.
//!
//! The test asks the user to hold one arm at 45 degrees above shoulder
//! level for 15 continuous seconds, judged from per-frame body landmarks
//! delivered by an external inference engine (`MediaPipe` Pose index
//! convention). This crate owns the part with actual logic:
//!
//! 1. Geometric analysis turning three plane points into an angle
//! 2. Per-frame posture evaluation for both arms
//! 3. The test state machine with its continuous-hold countdown
//! 4. A declarative overlay draw list for the external rendering backend
//!
//! Camera capture, landmark inference and the concrete 2D drawing API are
//! external collaborators; see [`source::FrameSource`] for the input
//! boundary and [`overlay::DrawList`] for the output one.
//!
//! # Examples
//!
//! ## Evaluating a single frame
//!
//! ```
//! use arm_hold_test::evaluator::PostureEvaluator;
//! use arm_hold_test::landmarks::{Landmark, LandmarkFrame};
//!
//! let mut landmarks = vec![Landmark::new(0.5, 0.5); 33];
//! landmarks[11] = Landmark::new(0.3, 0.5);  // left shoulder
//! landmarks[15] = Landmark::new(0.45, 0.3); // left wrist, raised at 45°
//! let frame = LandmarkFrame::new(landmarks);
//!
//! let evaluator = PostureEvaluator::new(640, 480);
//! let result = evaluator.evaluate(&frame);
//! assert!(result.in_position);
//! ```
//!
//! ## Driving a full test session
//!
//! ```no_run
//! use arm_hold_test::{app::ArmTestApp, config::Config, source::RecordedSource};
//!
//! # fn main() -> arm_hold_test::Result<()> {
//! let mut app = ArmTestApp::new(Config::default())?;
//! let mut source = RecordedSource::open("session.jsonl")?;
//! let report = app.run(&mut source)?;
//! println!("completed: {}", report.completed);
//! # Ok(())
//! # }
//! ```

/// Planar geometry for angle and elevation checks
pub mod geometry;

/// Landmark types and the pose topology
pub mod landmarks;

/// Per-frame posture evaluation
pub mod evaluator;

/// Test lifecycle state machine
pub mod session;

/// Overlay render contract
pub mod overlay;

/// Frame sources (recorded replay, synthetic)
pub mod source;

/// Application controller
pub mod app;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

/// Error types and result handling
pub mod error;

pub use error::{Error, Result};
