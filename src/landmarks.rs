//! Body landmark types and the pose topology used by the overlay.
//!
//! Landmarks follow the `MediaPipe` Pose 33-point index convention, so
//! recorded output of that engine can be fed in directly. This module only
//! names the joints the engine and overlay actually touch; the remaining
//! indices are still valid slots in a [`LandmarkFrame`].

use serde::{Deserialize, Serialize};

/// A single tracked body joint, normalized to the video frame.
///
/// Coordinates are image fractions in `[0,1]`, with y increasing downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
}

impl Landmark {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Named indices into the pose topology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum PoseLandmark {
    Nose = 0,
    LeftEye = 2,
    RightEye = 5,
    LeftEar = 7,
    RightEar = 8,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
}

/// Skeleton connection definitions (start joint, end joint)
pub const SKELETON_CONNECTIONS: [(PoseLandmark, PoseLandmark); 16] = [
    // Face
    (PoseLandmark::LeftEar, PoseLandmark::LeftEye),
    (PoseLandmark::LeftEye, PoseLandmark::Nose),
    (PoseLandmark::Nose, PoseLandmark::RightEye),
    (PoseLandmark::RightEye, PoseLandmark::RightEar),
    // Upper body
    (PoseLandmark::LeftShoulder, PoseLandmark::RightShoulder),
    (PoseLandmark::LeftShoulder, PoseLandmark::LeftElbow),
    (PoseLandmark::LeftElbow, PoseLandmark::LeftWrist),
    (PoseLandmark::RightShoulder, PoseLandmark::RightElbow),
    (PoseLandmark::RightElbow, PoseLandmark::RightWrist),
    // Torso
    (PoseLandmark::LeftShoulder, PoseLandmark::LeftHip),
    (PoseLandmark::RightShoulder, PoseLandmark::RightHip),
    (PoseLandmark::LeftHip, PoseLandmark::RightHip),
    // Lower body
    (PoseLandmark::LeftHip, PoseLandmark::LeftKnee),
    (PoseLandmark::LeftKnee, PoseLandmark::LeftAnkle),
    (PoseLandmark::RightHip, PoseLandmark::RightKnee),
    (PoseLandmark::RightKnee, PoseLandmark::RightAnkle),
];

/// Which limb pair is being evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Both sides, in evaluation order
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    #[must_use]
    pub fn shoulder(self) -> PoseLandmark {
        match self {
            Side::Left => PoseLandmark::LeftShoulder,
            Side::Right => PoseLandmark::RightShoulder,
        }
    }

    #[must_use]
    pub fn wrist(self) -> PoseLandmark {
        match self {
            Side::Left => PoseLandmark::LeftWrist,
            Side::Right => PoseLandmark::RightWrist,
        }
    }
}

/// One frame's landmark set, indexed by joint identity.
///
/// Created per camera frame and consumed immediately; joints past the end
/// of the underlying list are treated as missing, so partial detections
/// (one arm out of frame) degrade gracefully.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkFrame {
    landmarks: Vec<Landmark>,
}

impl LandmarkFrame {
    #[must_use]
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    /// Look up a joint by identity, `None` if it was not detected
    #[must_use]
    pub fn get(&self, joint: PoseLandmark) -> Option<Landmark> {
        self.landmarks.get(joint as usize).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }
}
