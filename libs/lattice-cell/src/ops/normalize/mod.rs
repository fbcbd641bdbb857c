//! # Cell Normalization
//!
//! Maps a cell's bounding box onto the unit cube `[0, 1]³`.


use glam::DVec3;
use tracing::debug;

use crate::cell::UnitCell;
use crate::error::CellError;
use crate::geometry::{bounding_box, Axis};

/// Translates the cell so its bounding box starts at the origin, then scales
/// each axis independently so the box becomes the unit cube.
///
/// # Arguments
///
/// * `cell` - The cell to normalize, consumed
/// * `tolerance` - Extents below this count as zero
///
/// # Errors
///
/// * [`CellError::EmptyCell`] if the cell has no nodes
/// * [`CellError::DegenerateBoundingBox`] if all nodes share a coordinate on
///   some axis (a flat or linear cell cannot tile space)
pub fn normalize(mut cell: UnitCell, tolerance: f64) -> Result<UnitCell, CellError> {
    let (min, max) = bounding_box(&cell.nodes).ok_or(CellError::EmptyCell)?;
    let extent = max - min;

    for axis in Axis::ALL {
        if axis.component(extent) < tolerance {
            return Err(CellError::DegenerateBoundingBox { axis });
        }
    }

    let scale = DVec3::ONE / extent;
    for node in &mut cell.nodes {
        // Clamp away rounding just outside [0, 1]
        *node = ((*node - min) * scale).clamp(DVec3::ZERO, DVec3::ONE);
    }

    debug!(
        "Normalized {} nodes from extent ({:.4}, {:.4}, {:.4})",
        cell.nodes.len(),
        extent.x,
        extent.y,
        extent.z
    );
    Ok(cell)
}
