//! # Line-Line Intersection
//!
//! Closest-approach intersection of two finite segments.

use config::constants::EPSILON;

use super::Segment;

/// Intersects two segments.
///
/// The infinite carrier lines are intersected by closest approach. The hit
/// counts when the two closest points are within `tolerance` of each other
/// and both lie on their segments (endpoints included, up to `tolerance`).
///
/// # Arguments
///
/// * `a` - First segment
/// * `b` - Second segment
/// * `tolerance` - Distance tolerance
///
/// # Returns
///
/// The parameters `(ta, tb)` of the intersection on `a` and `b`, or `None`
/// for parallel, skew or non-overlapping segments.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use lattice_cell::geometry::{line_line_intersect, Segment};
///
/// let a = Segment::new(DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0));
/// let b = Segment::new(DVec3::new(1.0, -1.0, 0.0), DVec3::new(1.0, 1.0, 0.0));
/// let (ta, tb) = line_line_intersect(&a, &b, 1e-6).unwrap();
/// assert!((ta - 0.5).abs() < 1e-9);
/// assert!((tb - 0.5).abs() < 1e-9);
/// ```
pub fn line_line_intersect(a: &Segment, b: &Segment, tolerance: f64) -> Option<(f64, f64)> {
    let d1 = a.direction();
    let d2 = b.direction();
    let r = a.start - b.start;

    let aa = d1.dot(d1);
    let ee = d2.dot(d2);
    if aa < EPSILON || ee < EPSILON {
        return None;
    }

    let bb = d1.dot(d2);
    let cc = d1.dot(r);
    let ff = d2.dot(r);

    // Parallel (or collinear) carriers have no single crossing
    let denom = aa * ee - bb * bb;
    if denom <= EPSILON * aa * ee {
        return None;
    }

    let ta = (bb * ff - cc * ee) / denom;
    let tb = (aa * ff - bb * cc) / denom;

    let slack_a = tolerance / aa.sqrt();
    let slack_b = tolerance / ee.sqrt();
    if ta < -slack_a || ta > 1.0 + slack_a || tb < -slack_b || tb > 1.0 + slack_b {
        return None;
    }

    if a.point_at(ta).distance(b.point_at(tb)) > tolerance {
        return None;
    }

    Some((ta, tb))
}
