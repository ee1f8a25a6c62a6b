//! Planar geometry used by the posture evaluator.
//!
//! All computation happens in the 2D projected image plane; inputs are
//! points in any consistent unit (here, pixel coordinates scaled from
//! normalized landmarks).

/// A point in rendering-surface pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Angle at vertex `b` formed by rays `b -> a` and `b -> c`, in degrees.
///
/// Computed from the two-argument arctangent of each ray direction and
/// folded into `[0, 180]`. The result is invariant under mirroring and
/// under swapping `a` and `c`. Coincident points yield NaN; callers that
/// feed unvalidated geometry must treat a non-finite result as unscorable.
#[must_use]
pub fn angle_between(a: Point, b: Point, c: Point) -> f64 {
    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let mut degrees = radians.to_degrees().abs();
    if degrees > 180.0 {
        degrees = 360.0 - degrees;
    }
    degrees
}

/// True if `a` sits above `b` on screen (smaller y is higher, image
/// coordinates grow downward)
#[must_use]
pub fn is_above(a: Point, b: Point) -> bool {
    a.y < b.y
}
