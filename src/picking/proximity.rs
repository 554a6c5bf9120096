//! Per-axis proximity matching.
//!
//! A candidate matches a target iff `|dx| <= t && |dy| <= t && |dz| <= t`.
//! This is a box test, not a Euclidean radius, and the *first* matching
//! candidate wins even when a later one is nearer.

use crate::frame::Point3D;

/// Tolerance for matching a raycast hit to a logical point. Hit
/// coordinates come back from rendered geometry and carry float noise.
pub const PICK_THRESHOLD: f64 = 0.01;

/// Tolerance for correlating an anomaly point with its source point. Both
/// come from the same generator output, so they must agree bit-for-bit.
pub const EXACT_THRESHOLD: f64 = 0.0;

/// Whether every axis of `a - b` is within `threshold`.
#[inline]
pub fn within_threshold(a: Point3D, b: Point3D, threshold: f64) -> bool {
    let d = (a - b).abs();
    d.x <= threshold && d.y <= threshold && d.z <= threshold
}

/// Index of the first candidate within `threshold` of `target` on every
/// axis, or `None` if no candidate matches.
pub fn find_closest_index(
    target: Point3D,
    candidates: &[Point3D],
    threshold: f64,
) -> Option<usize> {
    candidates
        .iter()
        .position(|&c| within_threshold(target, c, threshold))
}
