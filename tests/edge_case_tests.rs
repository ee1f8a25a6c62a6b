//! Edge case tests: degenerate geometry, partial detections and boundary
//! angles must degrade to "not in position", never panic or poison state.

use arm_hold_test::{
    app::ArmTestApp,
    config::Config,
    evaluator::{is_within_target, PostureEvaluator},
    geometry::{angle_between, Point},
    landmarks::{Landmark, LandmarkFrame},
    overlay::build_draw_list,
    session::TestSession,
    source::FrameRecord,
};

const NUM_LANDMARKS: usize = 33;

fn full_frame() -> Vec<Landmark> {
    vec![Landmark::new(0.5, 0.5); NUM_LANDMARKS]
}

#[test]
fn test_angle_stays_in_range_for_awkward_triples() {
    let triples = [
        (Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)),
        (Point::new(1e-12, 0.0), Point::new(0.0, 0.0), Point::new(0.0, 1e-12)),
        (Point::new(-1e6, 1e6), Point::new(0.0, 0.0), Point::new(1e6, 1e6)),
        (Point::new(640.0, 0.0), Point::new(0.0, 480.0), Point::new(640.0, 480.0)),
    ];
    for (a, b, c) in triples {
        let angle = angle_between(a, b, c);
        assert!((0.0..=180.0).contains(&angle), "angle {angle} out of range");
    }
}

#[test]
fn test_boundary_angles_rejected() {
    assert!(!is_within_target(35.0));
    assert!(!is_within_target(55.0));
    assert!(!is_within_target(f64::NAN));
    assert!(is_within_target(44.999));
}

#[test]
fn test_non_finite_landmark_does_not_pass() {
    let evaluator = PostureEvaluator::new(640, 480);

    let mut landmarks = full_frame();
    landmarks[11] = Landmark::new(f64::NAN, f64::NAN);
    landmarks[15] = Landmark::new(0.45, 0.3);
    let result = evaluator.evaluate(&LandmarkFrame::new(landmarks));
    assert!(!result.in_position);
}

#[test]
fn test_coincident_shoulder_and_wrist() {
    let evaluator = PostureEvaluator::new(640, 480);

    let mut landmarks = full_frame();
    landmarks[11] = Landmark::new(0.4, 0.4);
    landmarks[15] = Landmark::new(0.4, 0.4);
    let result = evaluator.evaluate(&LandmarkFrame::new(landmarks));
    assert!(!result.in_position);
}

#[test]
fn test_one_armed_detection_still_evaluates() {
    let evaluator = PostureEvaluator::new(640, 480);

    // Frame truncated after the left wrist: right wrist (index 16) missing
    let mut landmarks = full_frame();
    landmarks.truncate(16);
    landmarks[11] = Landmark::new(0.3, 0.5);
    landmarks[15] = Landmark::new(0.45, 0.3);
    let result = evaluator.evaluate(&LandmarkFrame::new(landmarks));

    assert_eq!(result.sides.len(), 1);
    assert!(result.in_position);
}

#[test]
fn test_empty_frame_is_out_of_position() {
    let evaluator = PostureEvaluator::new(640, 480);
    let result = evaluator.evaluate(&LandmarkFrame::default());
    assert!(!result.in_position);
    assert!(result.sides.is_empty());
}

#[test]
fn test_overlay_without_shoulders_has_no_reference_line() {
    let evaluator = PostureEvaluator::new(640, 480);

    // Head-only detection
    let frame = LandmarkFrame::new(vec![Landmark::new(0.5, 0.1); 9]);
    let result = evaluator.evaluate(&frame);
    let list = build_draw_list(&frame, &result, 640, 480);

    // Face connectors may draw, but nothing anchored on the shoulders
    assert!(list.ops.len() <= 4);
}

#[test]
fn test_session_survives_pathological_frame_sequence() {
    let mut session = TestSession::new();
    session.start();

    // Rapid alternation never lets the countdown move
    for _ in 0..100 {
        session.observe_frame(true);
        session.observe_frame(false);
    }
    assert_eq!(session.remaining_seconds(), 15);

    // Tokens harvested mid-churn are all stale by now
    session.observe_frame(true);
    let token = session.timer_token();
    session.observe_frame(false);
    for _ in 0..10 {
        assert!(!session.tick(token));
    }
    assert_eq!(session.remaining_seconds(), 15);
}

#[test]
fn test_app_handles_alternating_detection_dropouts() {
    let mut app = ArmTestApp::new(Config::default()).unwrap();
    app.start_test();

    let mut landmarks = full_frame();
    landmarks[11] = Landmark::new(0.3, 0.5);
    landmarks[15] = Landmark::new(0.45, 0.3);
    let good = FrameRecord {
        landmarks: Some(LandmarkFrame::new(landmarks)),
    };
    let dropout = FrameRecord { landmarks: None };

    for _ in 0..50 {
        let output = app.on_frame(&good);
        assert_eq!(output.remaining_seconds, 15);
        let output = app.on_frame(&dropout);
        assert_eq!(output.remaining_seconds, 15);
    }
}
