//! # Geometry Primitives
//!
//! Line segments, input curves, axes and the nearest-point queries shared by
//! every topology stage.
//!
//! All queries take the distance tolerance explicitly. Nothing in this
//! module reads a global tolerance.

mod intersect;

#[cfg(test)]
mod tests;

pub use intersect::line_line_intersect;

use config::constants::{approx_zero, EPSILON};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CellError;

// =============================================================================
// AXIS
// =============================================================================

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in x, y, z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of this axis in a `[x, y, z]` array.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Reads the component of `v` along this axis.
    #[inline]
    pub fn component(self, v: DVec3) -> f64 {
        v[self.index()]
    }

    /// Returns `v` with the component along this axis replaced.
    #[inline]
    pub fn with_component(self, mut v: DVec3, value: f64) -> DVec3 {
        v[self.index()] = value;
        v
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

// =============================================================================
// SEGMENT
// =============================================================================

/// A straight line segment between two points.
///
/// Parameter `t = 0` is `start`, `t = 1` is `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: DVec3,
    pub end: DVec3,
}

impl Segment {
    /// Creates a segment from two endpoints.
    #[inline]
    pub fn new(start: DVec3, end: DVec3) -> Self {
        Self { start, end }
    }

    /// Vector from start to end (not normalized).
    #[inline]
    pub fn direction(&self) -> DVec3 {
        self.end - self.start
    }

    /// Segment length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    /// Point at parameter `t`.
    #[inline]
    pub fn point_at(&self, t: f64) -> DVec3 {
        self.start + self.direction() * t
    }

    /// Splits the segment at parameter `t` into two pieces sharing the
    /// split point.
    pub fn split_at(&self, t: f64) -> (Segment, Segment) {
        let mid = self.point_at(t);
        (Segment::new(self.start, mid), Segment::new(mid, self.end))
    }

    /// True when both endpoints fall within `tolerance` of each other.
    #[inline]
    pub fn is_degenerate(&self, tolerance: f64) -> bool {
        self.length() < tolerance
    }

    /// True if `t` lies inside the segment and at least `tolerance` away
    /// (in distance) from both endpoints.
    pub fn is_interior_parameter(&self, t: f64, tolerance: f64) -> bool {
        let length = self.length();
        if approx_zero(length) {
            return false;
        }
        let margin = tolerance / length;
        t > margin && t < 1.0 - margin
    }
}

// =============================================================================
// INPUT CURVES
// =============================================================================

/// A curve handed over by the host.
///
/// Struts must be straight, so a polyline is only accepted when all of its
/// points are collinear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputCurve {
    /// A straight line.
    Line(Segment),
    /// An ordered point sequence.
    Polyline(Vec<DVec3>),
}

impl From<Segment> for InputCurve {
    fn from(segment: Segment) -> Self {
        Self::Line(segment)
    }
}

impl InputCurve {
    /// Reduces the curve to a segment.
    ///
    /// # Arguments
    ///
    /// * `index` - Position of the curve in the input list, used in errors
    /// * `tolerance` - Collinearity and zero-length tolerance
    ///
    /// # Errors
    ///
    /// [`CellError::NonLinearCurve`] if a polyline bends by more than
    /// `tolerance`; [`CellError::DegenerateCurve`] if the curve has no length.
    pub fn to_segment(&self, index: usize, tolerance: f64) -> Result<Segment, CellError> {
        let segment = match self {
            InputCurve::Line(segment) => *segment,
            InputCurve::Polyline(points) => {
                let (first, last) = match (points.first(), points.last()) {
                    (Some(first), Some(last)) if points.len() >= 2 => (*first, *last),
                    _ => return Err(CellError::DegenerateCurve { index }),
                };
                let chord = Segment::new(first, last);
                if chord.is_degenerate(tolerance) {
                    return Err(CellError::DegenerateCurve { index });
                }
                let bends = points
                    .iter()
                    .any(|p| distance_to_line(*p, &chord) > tolerance);
                if bends {
                    return Err(CellError::NonLinearCurve { index });
                }
                chord
            }
        };

        if segment.is_degenerate(tolerance) {
            return Err(CellError::DegenerateCurve { index });
        }
        Ok(segment)
    }
}

/// Converts every curve to a segment, failing on the first bad curve.
///
/// # Errors
///
/// [`CellError::EmptyInput`] for an empty list, otherwise the first error
/// from [`InputCurve::to_segment`].
pub fn curves_to_segments(curves: &[InputCurve], tolerance: f64) -> Result<Vec<Segment>, CellError> {
    if curves.is_empty() {
        return Err(CellError::EmptyInput);
    }
    curves
        .iter()
        .enumerate()
        .map(|(index, curve)| curve.to_segment(index, tolerance))
        .collect()
}

/// Distance from a point to the infinite line through a segment.
pub fn distance_to_line(point: DVec3, segment: &Segment) -> f64 {
    let dir = segment.direction();
    let len_sq = dir.length_squared();
    if len_sq < EPSILON * EPSILON {
        return point.distance(segment.start);
    }
    let t = (point - segment.start).dot(dir) / len_sq;
    point.distance(segment.start + dir * t)
}

// =============================================================================
// POINT QUERIES
// =============================================================================

/// Finds the point closest to `target`.
///
/// Returns `(index, distance)`, or `None` for an empty slice. Ties go to the
/// lowest index.
pub fn closest_point(points: &[DVec3], target: DVec3) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in points.iter().enumerate() {
        let dist = p.distance(target);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((i, dist)),
        }
    }
    best
}

/// Index of the closest point within `tolerance` of `target`, if any.
#[inline]
pub fn find_point(points: &[DVec3], target: DVec3, tolerance: f64) -> Option<usize> {
    closest_point(points, target)
        .filter(|&(_, dist)| dist < tolerance)
        .map(|(i, _)| i)
}

/// Computes the axis-aligned bounding box of a point set.
///
/// Returns `(min, max)`, or `None` when there are no points.
pub fn bounding_box(points: &[DVec3]) -> Option<(DVec3, DVec3)> {
    let (first, rest) = points.split_first()?;
    let mut min = *first;
    let mut max = *first;
    for p in rest {
        min = min.min(*p);
        max = max.max(*p);
    }
    Some((min, max))
}
