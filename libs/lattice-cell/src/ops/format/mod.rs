//! # Cell Topology Formatting
//!
//! Prepares a normalized, valid cell for tiling.
//!
//! ## Node paths
//!
//! Nodes on the far planes `x = 1`, `y = 1`, `z = 1` are shared with the
//! neighbouring cells. Each node is classified, most specific first:
//!
//! | class    | far planes | mirror moves          |
//! |----------|------------|-----------------------|
//! | Corner   | 3          | x, y, z → 0           |
//! | Edge     | 2          | both flagged axes → 0 |
//! | Face     | 1          | flagged axis → 0      |
//! | Interior | 0          | none (self)           |
//!
//! ## Strut removal
//!
//! A strut with both endpoints on the same far plane lies in that plane and
//! is owned by the neighbouring cell; it is removed so tiling does not
//! produce it twice.

#[cfg(test)]
mod tests;

use tracing::{debug, info};

use crate::cell::{NodePath, UnitCell};
use crate::error::CellError;
use crate::geometry::{find_point, Axis};

/// Boundary classification of a node in a normalized cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryClass {
    /// On all three far planes: the `(1, 1, 1)` corner.
    Corner,
    /// On exactly two far planes.
    Edge(Axis, Axis),
    /// On exactly one far plane.
    Face(Axis),
    /// On no far plane.
    Interior,
}

impl BoundaryClass {
    /// Far-plane flags in `[x, y, z]` order.
    pub fn far_flags(self) -> [bool; 3] {
        let mut flags = [false; 3];
        match self {
            BoundaryClass::Corner => flags = [true; 3],
            BoundaryClass::Edge(a, b) => {
                flags[a.index()] = true;
                flags[b.index()] = true;
            }
            BoundaryClass::Face(a) => flags[a.index()] = true,
            BoundaryClass::Interior => {}
        }
        flags
    }
}

/// Classifies a point against the far planes.
pub fn classify_node(point: glam::DVec3, tolerance: f64) -> BoundaryClass {
    let on = |axis: Axis| (axis.component(point) - 1.0).abs() < tolerance;
    match (on(Axis::X), on(Axis::Y), on(Axis::Z)) {
        (true, true, true) => BoundaryClass::Corner,
        (true, true, false) => BoundaryClass::Edge(Axis::X, Axis::Y),
        (false, true, true) => BoundaryClass::Edge(Axis::Y, Axis::Z),
        (true, false, true) => BoundaryClass::Edge(Axis::Z, Axis::X),
        (true, false, false) => BoundaryClass::Face(Axis::X),
        (false, true, false) => BoundaryClass::Face(Axis::Y),
        (false, false, true) => BoundaryClass::Face(Axis::Z),
        (false, false, false) => BoundaryClass::Interior,
    }
}

/// Records node paths and removes far-plane struts.
///
/// Expects a normalized cell that passed validation.
///
/// # Errors
///
/// [`CellError::MissingMirror`] if a far-plane node has no counterpart on
/// the near side, which validation would have rejected.
pub fn format_topology(mut cell: UnitCell, tolerance: f64) -> Result<UnitCell, CellError> {
    let paths = node_paths(&cell, tolerance)?;

    let removal = far_plane_struts(&cell, &paths);
    for &index in removal.iter().rev() {
        cell.struts.remove(index);
    }

    let boundary = paths.iter().filter(|p| p.far_count() > 0).count();
    debug!("{} of {} nodes lie on far planes", boundary, paths.len());
    info!(
        "Formatted cell: removed {} far-plane strut(s), {} remain",
        removal.len(),
        cell.struts.len()
    );

    cell.node_paths = paths;
    Ok(cell)
}

/// Computes the path of every node.
pub fn node_paths(cell: &UnitCell, tolerance: f64) -> Result<Vec<NodePath>, CellError> {
    let nodes = cell.nodes();
    nodes
        .iter()
        .enumerate()
        .map(|(index, &point)| {
            let class = classify_node(point, tolerance);
            let far = class.far_flags();
            if class == BoundaryClass::Interior {
                return Ok(NodePath::interior(index));
            }

            let mut target = point;
            for axis in Axis::ALL {
                if far[axis.index()] {
                    target = axis.with_component(target, 0.0);
                }
            }
            let mirror = find_point(nodes, target, tolerance)
                .ok_or(CellError::MissingMirror { node: index })?;
            Ok(NodePath { far, mirror })
        })
        .collect()
}

/// Indices (ascending) of struts whose endpoints share a far plane.
fn far_plane_struts(cell: &UnitCell, paths: &[NodePath]) -> Vec<usize> {
    cell.struts()
        .iter()
        .enumerate()
        .filter(|(_, strut)| {
            let a = &paths[strut.start];
            let b = &paths[strut.end];
            Axis::ALL.iter().any(|&axis| a.is_far(axis) && b.is_far(axis))
        })
        .map(|(i, _)| i)
        .collect()
}
