//! Overlay render contract: a declarative draw list describing what the
//! external 2D backend must paint over the video preview each frame.
//!
//! The list is ordered back to front. All coordinates are in surface pixel
//! space under the selfie-view mirror transform described by
//! [`DrawList::mirrored`]; the backend applies the transform once per frame
//! and restores it afterwards.

use crate::{
    constants::{
        ANGLE_LABEL_OFFSET, LABEL_COLOR, LIMB_FAIL_COLOR, LIMB_LINE_WIDTH, LIMB_PASS_COLOR,
        REFERENCE_LINE_COLOR, REFERENCE_LINE_WIDTH, SKELETON_COLOR, SKELETON_LINE_WIDTH,
        TARGET_ANGLE_DEGREES, TARGET_LABEL_OFFSET,
    },
    evaluator::PostureResult,
    geometry::Point,
    landmarks::{LandmarkFrame, PoseLandmark, SKELETON_CONNECTIONS},
};

/// One primitive the backend must draw
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Straight line segment
    Line {
        from: Point,
        to: Point,
        color: [u8; 4],
        width: f32,
    },
    /// Text label anchored at a point
    Text {
        at: Point,
        text: String,
        color: [u8; 4],
    },
}

/// Everything to paint for one frame, back to front
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    /// Surface width in pixels, the mirror axis for the transform below
    pub surface_width: f64,
    /// When true the backend draws in a horizontally mirrored space
    /// (increasing camera-frame x maps to decreasing screen x), so the
    /// overlay lines up with a mirrored video preview
    pub mirrored: bool,
    pub ops: Vec<DrawOp>,
}

/// Build the draw list for one evaluated frame
#[must_use]
pub fn build_draw_list(
    frame: &LandmarkFrame,
    result: &PostureResult,
    surface_width: u32,
    surface_height: u32,
) -> DrawList {
    let width = f64::from(surface_width);
    let height = f64::from(surface_height);
    let to_px = |lm: crate::landmarks::Landmark| Point::new(lm.x * width, lm.y * height);

    let mut list = DrawList {
        surface_width: width,
        mirrored: true,
        ops: Vec::new(),
    };

    // Skeleton context first, so the scoring lines draw over it
    for (from, to) in SKELETON_CONNECTIONS {
        if let (Some(a), Some(b)) = (frame.get(from), frame.get(to)) {
            list.ops.push(DrawOp::Line {
                from: to_px(a),
                to: to_px(b),
                color: SKELETON_COLOR,
                width: SKELETON_LINE_WIDTH,
            });
        }
    }

    // Shoulder-to-shoulder reference line
    if let (Some(left), Some(right)) = (
        frame.get(PoseLandmark::LeftShoulder),
        frame.get(PoseLandmark::RightShoulder),
    ) {
        list.ops.push(DrawOp::Line {
            from: to_px(left),
            to: to_px(right),
            color: REFERENCE_LINE_COLOR,
            width: REFERENCE_LINE_WIDTH,
        });
    }

    // Limb lines and angle labels for every eligible side
    for report in &result.sides {
        let Some(angle) = report.angle else { continue };

        list.ops.push(DrawOp::Line {
            from: report.shoulder,
            to: report.wrist,
            color: if report.within_target { LIMB_PASS_COLOR } else { LIMB_FAIL_COLOR },
            width: LIMB_LINE_WIDTH,
        });

        list.ops.push(DrawOp::Text {
            at: Point::new(
                report.wrist.x + ANGLE_LABEL_OFFSET.0,
                report.wrist.y + ANGLE_LABEL_OFFSET.1,
            ),
            text: format!("{}\u{b0}", angle.round() as i64),
            color: LABEL_COLOR,
        });

        if !report.within_target {
            list.ops.push(DrawOp::Text {
                at: Point::new(
                    report.wrist.x + TARGET_LABEL_OFFSET.0,
                    report.wrist.y + TARGET_LABEL_OFFSET.1,
                ),
                text: format!("Target: {}\u{b0}", TARGET_ANGLE_DEGREES as i64),
                color: LIMB_FAIL_COLOR,
            });
        }
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{evaluator::PostureEvaluator, landmarks::Landmark};

    fn frame_with_left_arm(wrist: (f64, f64)) -> LandmarkFrame {
        let mut landmarks = vec![Landmark::new(0.5, 0.5); crate::constants::NUM_POSE_LANDMARKS];
        landmarks[11] = Landmark::new(0.3, 0.5);
        landmarks[15] = Landmark::new(wrist.0, wrist.1);
        LandmarkFrame::new(landmarks)
    }

    fn evaluate_and_build(frame: &LandmarkFrame) -> (PostureResult, DrawList) {
        let result = PostureEvaluator::new(640, 480).evaluate(frame);
        let list = build_draw_list(frame, &result, 640, 480);
        (result, list)
    }

    #[test]
    fn test_draw_order() {
        let frame = frame_with_left_arm((0.5, 0.3));
        let (_, list) = evaluate_and_build(&frame);

        assert!(list.mirrored);
        assert_eq!(list.surface_width, 640.0);

        // Skeleton lines come first, then the reference line, then the limb
        let limb_idx = list
            .ops
            .iter()
            .position(|op| matches!(op, DrawOp::Line { width, .. } if *width == LIMB_LINE_WIDTH))
            .unwrap();
        let reference_idx = list
            .ops
            .iter()
            .position(|op| matches!(op, DrawOp::Line { color, .. } if *color == REFERENCE_LINE_COLOR))
            .unwrap();
        let skeleton_idx = list
            .ops
            .iter()
            .position(|op| matches!(op, DrawOp::Line { color, .. } if *color == SKELETON_COLOR))
            .unwrap();
        assert!(skeleton_idx < reference_idx);
        assert!(reference_idx < limb_idx);
    }

    #[test]
    fn test_failing_side_gets_target_label() {
        // Arm raised but nearly horizontal: scored, out of target
        let frame = frame_with_left_arm((0.6, 0.49));
        let (result, list) = evaluate_and_build(&frame);
        assert!(!result.in_position);

        let texts: Vec<&str> = list
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts.len(), 2);
        assert!(texts[1].starts_with("Target: 45"));
    }

    #[test]
    fn test_passing_side_has_single_label() {
        let frame = frame_with_left_arm((0.45, 0.3));
        let (result, list) = evaluate_and_build(&frame);
        assert!(result.in_position);

        let text_count = list
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { .. }))
            .count();
        assert_eq!(text_count, 1);

        let pass_line = list.ops.iter().any(
            |op| matches!(op, DrawOp::Line { color, .. } if *color == LIMB_PASS_COLOR),
        );
        assert!(pass_line);
    }

    #[test]
    fn test_empty_frame_draws_nothing() {
        let frame = LandmarkFrame::default();
        let (_, list) = evaluate_and_build(&frame);
        assert!(list.ops.is_empty());
    }

    #[test]
    fn test_unraised_arm_has_no_limb_line() {
        let frame = frame_with_left_arm((0.4, 0.8));
        let (_, list) = evaluate_and_build(&frame);
        let limb_lines = list
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { width, .. } if *width == LIMB_LINE_WIDTH))
            .count();
        assert_eq!(limb_lines, 0);
    }
}
