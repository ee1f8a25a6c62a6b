//! Constants used throughout the application

/// Number of landmarks in the pose topology (MediaPipe Pose convention)
pub const NUM_POSE_LANDMARKS: usize = 33;

/// Target elevation angle of the raised arm above horizontal, in degrees
pub const TARGET_ANGLE_DEGREES: f64 = 45.0;

/// Accepted deviation around the target angle, in degrees (exclusive bound)
pub const ANGLE_TOLERANCE_DEGREES: f64 = 10.0;

/// Duration the position must be held continuously to pass the test
pub const HOLD_DURATION_SECONDS: u32 = 15;

/// Interval between countdown ticks
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Default rendering surface dimensions, matching the camera preview
pub const DEFAULT_SURFACE_WIDTH: u32 = 640;
pub const DEFAULT_SURFACE_HEIGHT: u32 = 480;

/// Overlay colors (RGBA, 0-255)
pub const SKELETON_COLOR: [u8; 4] = [255, 255, 255, 128];
pub const REFERENCE_LINE_COLOR: [u8; 4] = [255, 235, 59, 204];
pub const LIMB_PASS_COLOR: [u8; 4] = [76, 175, 80, 204];
pub const LIMB_FAIL_COLOR: [u8; 4] = [255, 82, 82, 204];
pub const LABEL_COLOR: [u8; 4] = [0, 0, 0, 179];

/// Overlay line weights, in pixels
pub const SKELETON_LINE_WIDTH: f32 = 1.0;
pub const REFERENCE_LINE_WIDTH: f32 = 2.0;
pub const LIMB_LINE_WIDTH: f32 = 4.0;

/// Angle label offset from the wrist, in pixels
pub const ANGLE_LABEL_OFFSET: (f64, f64) = (-40.0, -10.0);

/// Target-angle hint label offset from the wrist, in pixels
pub const TARGET_LABEL_OFFSET: (f64, f64) = (-40.0, 20.0);
