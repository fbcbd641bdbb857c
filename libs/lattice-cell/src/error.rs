//! # Cell Errors
//!
//! Error types for unit cell definition. Input problems are reported before
//! any topology work starts; periodicity problems carry the failing axis.

use config::constants::ConfigError;
use thiserror::Error;

use crate::geometry::Axis;
use crate::pipeline::Severity;

/// Errors that can occur while defining a unit cell.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CellError {
    /// No curves were supplied
    #[error("Input contains no curves")]
    EmptyInput,

    /// A curve is not a straight line
    #[error("Curve {index} is not linear")]
    NonLinearCurve { index: usize },

    /// A curve has coincident endpoints
    #[error("Curve {index} has zero length")]
    DegenerateCurve { index: usize },

    /// A cell was built with a strut referencing a missing node
    #[error("Strut {strut} references node {node}, but the cell has {node_count} nodes")]
    InvalidStrut {
        strut: usize,
        node: usize,
        node_count: usize,
    },

    /// Normalization was attempted on a cell without nodes
    #[error("Cell has no nodes")]
    EmptyCell,

    /// All nodes share one coordinate along an axis
    #[error("Cell has zero extent along the {axis} axis")]
    DegenerateBoundingBox { axis: Axis },

    /// A boundary plane carries no nodes
    #[error("Invalid cell: the {axis} boundary faces have no nodes")]
    EmptyFace { axis: Axis },

    /// Opposing boundary planes carry different node patterns
    #[error("Invalid cell: the {axis} boundary faces are not symmetric")]
    AsymmetricFaces { axis: Axis },

    /// A far-plane node has no counterpart on the near planes
    #[error("Node {node} has no mirror node on the opposite face")]
    MissingMirror { node: usize },

    /// Intersection splitting kept finding new splits
    #[error("Intersections still unresolved after {passes} passes")]
    UnresolvedIntersections { passes: usize },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl CellError {
    /// Severity to report to the host. Every cell error aborts the operation.
    pub fn severity(&self) -> Severity {
        Severity::Error
    }

    /// Returns true for the two periodicity failures.
    pub fn is_periodicity_error(&self) -> bool {
        matches!(self, Self::EmptyFace { .. } | Self::AsymmetricFaces { .. })
    }
}
