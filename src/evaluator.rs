//! Posture evaluation: turns one frame's landmark set into a pass/fail
//! "in target position" signal plus per-side diagnostics.
//!
//! The test asks the user to hold one arm at a fixed elevation angle above
//! shoulder level. Each frame, both arms are checked independently: a wrist
//! above its shoulder is scored by the angle between the shoulder-to-wrist
//! ray and the horizontal reference line through the shoulder; either arm
//! inside the tolerance band makes the frame count.

use crate::{
    constants::{ANGLE_TOLERANCE_DEGREES, TARGET_ANGLE_DEGREES},
    geometry::{angle_between, is_above, Point},
    landmarks::{LandmarkFrame, Side},
};
use log::trace;

/// Diagnostics for one evaluated side
#[derive(Debug, Clone, Copy)]
pub struct SideReport {
    pub side: Side,
    /// Shoulder position in surface pixel space
    pub shoulder: Point,
    /// Wrist position in surface pixel space
    pub wrist: Point,
    /// Whether the wrist is above the shoulder at all
    pub raised: bool,
    /// Elevation angle above horizontal, in `[0, 180]`; `None` while the
    /// limb is not raised or the geometry is degenerate
    pub angle: Option<f64>,
    /// Whether the angle lies strictly inside the tolerance band
    pub within_target: bool,
}

/// Strict tolerance check: true iff `angle` lies strictly inside
/// `(TARGET - TOLERANCE, TARGET + TOLERANCE)`; the bounds themselves fail
#[must_use]
pub fn is_within_target(angle: f64) -> bool {
    (angle - TARGET_ANGLE_DEGREES).abs() < ANGLE_TOLERANCE_DEGREES
}

impl SideReport {
    /// Signed deviation from the target angle, when scored
    #[must_use]
    pub fn deviation(&self) -> Option<f64> {
        self.angle.map(|a| a - TARGET_ANGLE_DEGREES)
    }
}

/// Aggregate result of evaluating one frame
#[derive(Debug, Clone, Default)]
pub struct PostureResult {
    /// Per-side diagnostics, only for sides whose joints were detected
    pub sides: Vec<SideReport>,
    /// True if either arm satisfied the target condition this frame
    pub in_position: bool,
}

/// Stateless per-frame evaluator, sized to the rendering surface.
///
/// Safe to call at the camera's native frame rate; it holds no history.
#[derive(Debug, Clone)]
pub struct PostureEvaluator {
    surface_width: f64,
    surface_height: f64,
}

impl PostureEvaluator {
    #[must_use]
    pub fn new(surface_width: u32, surface_height: u32) -> Self {
        Self {
            surface_width: f64::from(surface_width),
            surface_height: f64::from(surface_height),
        }
    }

    /// Evaluate one frame's landmarks.
    ///
    /// Sides with missing joints contribute no report; an empty frame
    /// yields `in_position = false`.
    #[must_use]
    pub fn evaluate(&self, frame: &LandmarkFrame) -> PostureResult {
        let mut result = PostureResult::default();

        for side in Side::BOTH {
            let (Some(shoulder), Some(wrist)) = (frame.get(side.shoulder()), frame.get(side.wrist()))
            else {
                continue;
            };

            // The target angle is measured against a horizontal reference
            // anchored at shoulder height, so work in surface pixels.
            let shoulder = Point::new(shoulder.x * self.surface_width, shoulder.y * self.surface_height);
            let wrist = Point::new(wrist.x * self.surface_width, wrist.y * self.surface_height);

            let mut report = SideReport {
                side,
                shoulder,
                wrist,
                raised: is_above(wrist, shoulder),
                angle: None,
                within_target: false,
            };

            if report.raised {
                let reference = Point::new(wrist.x, shoulder.y);
                let angle = angle_between(shoulder, wrist, reference);
                if angle.is_finite() {
                    report.angle = Some(angle);
                    report.within_target = is_within_target(angle);
                }
            }

            trace!(
                "side {:?}: raised={} angle={:?} within_target={}",
                side,
                report.raised,
                report.angle,
                report.within_target
            );

            result.in_position |= report.within_target;
            result.sides.push(report);
        }

        result
    }
}
