//! # Sharp Junction Correction
//!
//! The convex hull at a node only meets each sleeve cleanly if every plate
//! is a face of that hull, which holds exactly when the rings of all other
//! plates stay behind the plate's plane. Acute junctions break this first.
//!
//! For plates `p` and `q` at a node, ring vertices of `q` reach along `a_p`
//! (the outward direction of `p`) by
//!
//! ```text
//! reach_q→p = d_q · (a_q · a_p) + extent of q's ring along a_p
//! ```
//!
//! The extent does not depend on the offsets, so it is computed once per
//! junction in a [`JunctionFrame`].

use config::constants::{MAX_CONVEXITY_ITERATIONS, SHARP_ANGLE_DEGREES};
use tracing::debug;

use super::FailureReason;
use crate::network::{Hull, StrutNetwork};

/// Offset-independent pair geometry of the plates at one hull.
#[derive(Debug, Clone)]
pub struct JunctionFrame {
    /// `cos[p][q] = a_p · a_q`
    cos: Vec<Vec<f64>>,
    /// `extent[q][p]`: how far ring `q` reaches from its centre along `a_p`
    extent: Vec<Vec<f64>>,
}

impl JunctionFrame {
    pub fn new(network: &StrutNetwork, hull: &Hull) -> Self {
        let plates: Vec<_> = hull.plates.iter().map(|&i| network.plate(i)).collect();
        let sides = network.sides();

        let cos = plates
            .iter()
            .map(|p| plates.iter().map(|q| p.direction.dot(q.direction)).collect())
            .collect();
        let extent = plates
            .iter()
            .map(|q| {
                plates
                    .iter()
                    .map(|p| q.ring_extent(p.direction, sides))
                    .collect()
            })
            .collect();

        Self { cos, extent }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cos.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cos.is_empty()
    }

    /// Farthest any other plate's ring reaches along `a_p`, measured from
    /// the node.
    pub fn reach(&self, offsets: &[f64], p: usize) -> f64 {
        (0..self.len())
            .filter(|&q| q != p)
            .map(|q| offsets[q] * self.cos[p][q] + self.extent[q][p])
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest angle between two plate directions, in radians.
    pub fn min_angle(&self) -> f64 {
        let mut max_cos = -1.0f64;
        for p in 0..self.len() {
            for q in (p + 1)..self.len() {
                max_cos = max_cos.max(self.cos[p][q]);
            }
        }
        max_cos.clamp(-1.0, 1.0).acos()
    }

    /// Plates whose plane has another ring less than `tolerance` behind it.
    pub fn violations(&self, offsets: &[f64], tolerance: f64) -> Vec<usize> {
        (0..self.len())
            .filter(|&p| offsets[p] < self.reach(offsets, p) + tolerance)
            .collect()
    }
}

/// True if the junction needs correction: an acute strut pair, or a plate
/// already crowded by another ring.
pub fn is_sharp(frame: &JunctionFrame, offsets: &[f64], tolerance: f64) -> bool {
    frame.len() >= 2
        && (frame.min_angle() < SHARP_ANGLE_DEGREES.to_radians()
            || !frame.violations(offsets, tolerance).is_empty())
}

/// Raises offsets until every ring sits at least `tolerance` behind every
/// other plate.
///
/// # Arguments
///
/// * `frame` - Pair geometry of the junction
/// * `offsets` - Current offsets, raised in place
/// * `limits` - Largest allowed offset per plate (half its strut)
/// * `struts` - Strut of each plate, for failure reports
/// * `tolerance` - Required clearance
///
/// # Returns
///
/// The number of rounds run.
///
/// # Errors
///
/// [`FailureReason::StrutTooShort`] as soon as an offset passes its limit,
/// [`FailureReason::NotConvex`] if the offsets have not settled after
/// [`MAX_CONVEXITY_ITERATIONS`] rounds.
pub fn correct_offsets(
    frame: &JunctionFrame,
    offsets: &mut [f64],
    limits: &[f64],
    struts: &[usize],
    tolerance: f64,
) -> Result<usize, FailureReason> {
    for round in 1..=MAX_CONVEXITY_ITERATIONS {
        let crowded = frame.violations(offsets, tolerance);
        if crowded.is_empty() {
            debug!("Junction convex after {} round(s)", round - 1);
            return Ok(round - 1);
        }

        // All reaches use the offsets from the start of the round
        let raised: Vec<(usize, f64)> = crowded
            .iter()
            .map(|&p| (p, frame.reach(offsets, p) + 2.0 * tolerance))
            .collect();
        for (p, offset) in raised {
            offsets[p] = offsets[p].max(offset);
        }

        check_limits(offsets, limits, struts)?;
    }

    if frame.violations(offsets, tolerance).is_empty() {
        return Ok(MAX_CONVEXITY_ITERATIONS);
    }
    Err(FailureReason::NotConvex {
        iterations: MAX_CONVEXITY_ITERATIONS,
    })
}

/// Fails on the first plate whose offset passes its limit.
pub fn check_limits(offsets: &[f64], limits: &[f64], struts: &[usize]) -> Result<(), FailureReason> {
    match offsets.iter().zip(limits).position(|(o, l)| o > l) {
        Some(p) => Err(FailureReason::StrutTooShort {
            strut: struts[p],
            offset: offsets[p],
            limit: limits[p],
        }),
        None => Ok(()),
    }
}
