use crate::log;

use super::Point2;

/// Returns the length of the segment `p1 -> p2`.
#[must_use]
pub fn segment_length(p1: &Point2, p2: &Point2) -> f64 {
    (p2 - p1).norm()
}

/// Returns the midpoint of the segment `p1 -> p2`.
#[must_use]
pub fn midpoint(p1: &Point2, p2: &Point2) -> Point2 {
    nalgebra::center(p1, p2)
}

/// Returns `p1 + t * (p2 - p1)`.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate.
#[must_use]
pub fn point_at_ratio(p1: &Point2, p2: &Point2, t: f64) -> Point2 {
    p1 + (p2 - p1) * t
}

/// Walks `distance` from `p1` toward `p2`. Negative distances walk backwards.
///
/// A zero-length segment has no direction, so `p1` is returned.
#[must_use]
pub fn point_at_distance(p1: &Point2, p2: &Point2, distance: f64) -> Point2 {
    let dir = p2 - p1;
    let len = dir.norm();
    if len == 0.0 {
        log::trace!("zero-length segment, returning start point");
        return *p1;
    }
    p1 + dir * (distance / len)
}
