//! # Periodicity Validation
//!
//! A cell tiles seamlessly only if every pair of opposing faces carries the
//! same node pattern. For each axis the validator collects the nodes on the
//! near plane (`= 0`) and the far plane (`= 1`) and checks that each one has
//! a counterpart at the mirrored coordinate on the other plane.

#[cfg(test)]
mod tests;

use glam::DVec3;
use tracing::{debug, warn};

use crate::cell::UnitCell;
use crate::error::CellError;
use crate::geometry::{find_point, Axis};

/// Outcome of [`validate_cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValidity {
    /// All three face pairs are populated and congruent.
    Valid,
    /// Some boundary node has no mirror on the opposite face.
    AsymmetricFaces { axis: Axis },
    /// A boundary plane has no nodes.
    EmptyFace { axis: Axis },
}

impl CellValidity {
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, CellValidity::Valid)
    }

    /// Converts the outcome into a `Result` carrying the matching error.
    pub fn into_result(self) -> Result<(), CellError> {
        match self {
            CellValidity::Valid => Ok(()),
            CellValidity::AsymmetricFaces { axis } => Err(CellError::AsymmetricFaces { axis }),
            CellValidity::EmptyFace { axis } => Err(CellError::EmptyFace { axis }),
        }
    }
}

/// Checks the periodicity of a normalized cell.
///
/// Empty faces are reported before asymmetry, scanning axes in x, y, z order.
///
/// # Example
///
/// ```rust
/// use lattice_cell::ops::{validate_cell, CellValidity};
/// use lattice_cell::UnitCell;
///
/// let validity = validate_cell(&UnitCell::new(), 1e-6);
/// assert!(matches!(validity, CellValidity::EmptyFace { .. }));
/// ```
pub fn validate_cell(cell: &UnitCell, tolerance: f64) -> CellValidity {
    let planes: Vec<(Axis, Vec<usize>, Vec<usize>)> = Axis::ALL
        .iter()
        .map(|&axis| {
            (
                axis,
                cell.nodes_on_plane(axis, 0.0, tolerance),
                cell.nodes_on_plane(axis, 1.0, tolerance),
            )
        })
        .collect();

    for (axis, near, far) in &planes {
        if near.is_empty() || far.is_empty() {
            warn!("Cell has an empty {} face", axis);
            return CellValidity::EmptyFace { axis: *axis };
        }
    }

    for (axis, near, far) in &planes {
        let near_ok = all_mirrored(cell.nodes(), near, *axis, 1.0, tolerance);
        let far_ok = all_mirrored(cell.nodes(), far, *axis, 0.0, tolerance);
        if !(near_ok && far_ok) {
            warn!("Cell faces along {} are not symmetric", axis);
            return CellValidity::AsymmetricFaces { axis: *axis };
        }
        debug!("{} faces: {} mirrored node pair(s)", axis, near.len());
    }

    CellValidity::Valid
}

/// True if every node in `on_plane`, moved to `target` along `axis`, lands
/// on some node.
fn all_mirrored(nodes: &[DVec3], on_plane: &[usize], axis: Axis, target: f64, tolerance: f64) -> bool {
    on_plane.iter().all(|&i| {
        let mirrored = axis.with_component(nodes[i], target);
        find_point(nodes, mirrored, tolerance).is_some()
    })
}
