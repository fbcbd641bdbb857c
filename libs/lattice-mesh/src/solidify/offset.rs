//! # Plate Offsets
//!
//! Pushes every plate at a junction out along its strut far enough that the
//! plates clear each other. Junctions are independent, so they are solved
//! in parallel and written back in hull order.

use config::constants::{EPSILON, MIN_PLATE_OFFSET_RATIO};
use rayon::prelude::*;
use tracing::{debug, warn};

use super::sharp::{check_limits, correct_offsets, is_sharp, JunctionFrame};
use super::{FailureReason, JunctionFailure};
use crate::network::{Hull, StrutNetwork};

/// Outcome of solving one junction.
#[derive(Debug, Clone, PartialEq)]
pub struct JunctionOffsets {
    /// One offset per hull plate, already clamped to the strut limits.
    pub offsets: Vec<f64>,
    pub failure: Option<FailureReason>,
}

/// Starting offsets of a junction's plates, in hull plate order.
///
/// Each plate gets at least `MIN_PLATE_OFFSET_RATIO · r_p`, and for every
/// other plate at angle θ at least `max(r_p, r_q) · cot(θ/2)`, which keeps
/// that pair apart when both use it. Parallel and anti-parallel pairs add
/// no term.
pub fn base_offsets(network: &StrutNetwork, hull: &Hull) -> Vec<f64> {
    let plates: Vec<_> = hull.plates.iter().map(|&i| network.plate(i)).collect();

    plates
        .iter()
        .enumerate()
        .map(|(p, plate)| {
            let mut offset = MIN_PLATE_OFFSET_RATIO * plate.radius;
            for (q, other) in plates.iter().enumerate() {
                if q == p {
                    continue;
                }
                let cos = plate.direction.dot(other.direction).clamp(-1.0, 1.0);
                let sin = (1.0 - cos * cos).sqrt();
                if sin < EPSILON.sqrt() {
                    continue;
                }
                let radius = plate.radius.max(other.radius);
                offset = offset.max(radius * (1.0 + cos) / sin);
            }
            offset
        })
        .collect()
}

/// Solves the offsets of one junction.
///
/// Hulls with fewer than two plates keep offset 0. On failure the offsets
/// are clamped to half of each strut so the sleeves stay valid.
pub fn junction_offsets(network: &StrutNetwork, hull: &Hull, tolerance: f64) -> JunctionOffsets {
    if hull.plates.len() < 2 {
        return JunctionOffsets {
            offsets: vec![0.0; hull.plates.len()],
            failure: None,
        };
    }

    let limits: Vec<f64> = hull
        .struts
        .iter()
        .map(|&s| network.strut_length(s) / 2.0)
        .collect();
    let mut offsets = base_offsets(network, hull);

    let result = check_limits(&offsets, &limits, &hull.struts).and_then(|_| {
        let frame = JunctionFrame::new(network, hull);
        if is_sharp(&frame, &offsets, tolerance) {
            debug!("Node {} is sharp, correcting offsets", hull.node);
            correct_offsets(&frame, &mut offsets, &limits, &hull.struts, tolerance)?;
        }
        Ok(())
    });

    let failure = result.err();
    if failure.is_some() {
        for (offset, limit) in offsets.iter_mut().zip(&limits) {
            *offset = offset.min(*limit);
        }
    }

    JunctionOffsets { offsets, failure }
}

/// Computes and stores the offsets of every plate in the network.
///
/// Returns the junctions that could not be made convex, ascending by node.
pub fn compute_offsets(network: &mut StrutNetwork, tolerance: f64) -> Vec<JunctionFailure> {
    let solved: Vec<JunctionOffsets> = network
        .hulls()
        .par_iter()
        .map(|hull| junction_offsets(network, hull, tolerance))
        .collect();

    let mut failures = Vec::new();
    for (node, solution) in solved.into_iter().enumerate() {
        let plates = network.hulls()[node].plates.clone();
        for (plate, offset) in plates.into_iter().zip(solution.offsets) {
            network.set_offset(plate, offset);
        }
        if let Some(reason) = solution.failure {
            warn!("Junction at node {} failed: {}", node, reason);
            failures.push(JunctionFailure { node, reason });
        }
    }

    failures
}
