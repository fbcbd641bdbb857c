//! # Intersection Resolution
//!
//! Splits segments where they cross so that every crossing becomes a shared
//! endpoint.
//!
//! ## Algorithm
//!
//! Each pass:
//! 1. Intersect every pair `(a, b)` with `a < b` (in parallel)
//! 2. Walk the hits in `(a, b)` order and schedule the first interior
//!    split of each segment; later hits on an already scheduled segment
//!    wait for the next pass
//! 3. Append the two halves of every scheduled segment
//! 4. Remove the originals in descending index order
//!
//! Passes repeat until one schedules nothing.


use config::constants::MAX_INTERSECTION_PASSES;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::CellError;
use crate::geometry::{line_line_intersect, Segment};

/// A pending split: segment index and the parameter to split at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split {
    pub segment: usize,
    pub parameter: f64,
}

/// Resolves all internal intersections of a segment list.
///
/// # Arguments
///
/// * `segments` - Input segments, consumed
/// * `tolerance` - Distance tolerance for hits and endpoint exclusion
///
/// A hit splits a segment only if it lies at least `tolerance` away from
/// both endpoints, measured as a distance along the segment rather than as
/// a fraction of its length. On a short segment the excluded end zones are
/// therefore wider in parameter space.
///
/// # Returns
///
/// A segment list in which no segment crosses another away from an endpoint.
///
/// # Errors
///
/// [`CellError::UnresolvedIntersections`] if splitting has not settled
/// after [`MAX_INTERSECTION_PASSES`] passes.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use lattice_cell::geometry::Segment;
/// use lattice_cell::ops::resolve_intersections;
///
/// let lines = vec![
///     Segment::new(DVec3::ZERO, DVec3::new(1.0, 1.0, 0.0)),
///     Segment::new(DVec3::Y, DVec3::X),
/// ];
/// let resolved = resolve_intersections(lines, 1e-6).unwrap();
/// assert_eq!(resolved.len(), 4);
/// ```
pub fn resolve_intersections(
    mut segments: Vec<Segment>,
    tolerance: f64,
) -> Result<Vec<Segment>, CellError> {
    let input_count = segments.len();

    for pass in 0..MAX_INTERSECTION_PASSES {
        let splits = find_splits(&segments, tolerance);
        if splits.is_empty() {
            info!(
                "Resolved intersections in {} pass(es): {} -> {} segments",
                pass,
                input_count,
                segments.len()
            );
            return Ok(segments);
        }
        debug!("Pass {}: splitting {} segment(s)", pass, splits.len());
        apply_splits(&mut segments, &splits);
    }

    Err(CellError::UnresolvedIntersections {
        passes: MAX_INTERSECTION_PASSES,
    })
}

/// Finds the splits of one pass.
///
/// Returns at most one split per segment, sorted by segment index. The
/// result is identical to a sequential nested loop over `(a, b)`.
pub fn find_splits(segments: &[Segment], tolerance: f64) -> Vec<Split> {
    let n = segments.len();

    // Pair tests are independent; collect preserves index order
    let hits: Vec<Vec<(usize, f64, f64)>> = (0..n)
        .into_par_iter()
        .map(|a| {
            ((a + 1)..n)
                .filter_map(|b| {
                    line_line_intersect(&segments[a], &segments[b], tolerance)
                        .map(|(ta, tb)| (b, ta, tb))
                })
                .collect()
        })
        .collect();

    let mut scheduled: Vec<Option<f64>> = vec![None; n];
    for (a, row) in hits.iter().enumerate() {
        for &(b, ta, tb) in row {
            if scheduled[a].is_none() && segments[a].is_interior_parameter(ta, tolerance) {
                scheduled[a] = Some(ta);
            }
            if scheduled[b].is_none() && segments[b].is_interior_parameter(tb, tolerance) {
                scheduled[b] = Some(tb);
            }
        }
    }

    scheduled
        .into_iter()
        .enumerate()
        .filter_map(|(segment, t)| t.map(|parameter| Split { segment, parameter }))
        .collect()
}

/// Replaces every split segment by its two halves.
///
/// Halves are appended in split order; originals are then removed from the
/// highest index down so pending indices stay valid.
pub fn apply_splits(segments: &mut Vec<Segment>, splits: &[Split]) {
    for split in splits {
        let (left, right) = segments[split.segment].split_at(split.parameter);
        segments.push(left);
        segments.push(right);
    }

    let mut removal: Vec<usize> = splits.iter().map(|s| s.segment).collect();
    removal.sort_unstable_by(|a, b| b.cmp(a));
    removal.dedup();
    for index in removal {
        segments.remove(index);
    }
}
