//! # Mesh Errors
//!
//! Error types for strut solidification. Per-junction problems are not
//! errors; they are reported as [`JunctionFailure`](crate::JunctionFailure)
//! alongside a mesh.

use std::fmt;

use config::constants::ConfigError;
use lattice_cell::{CellError, Severity};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which radius list a radius error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadiusList {
    Start,
    End,
}

impl fmt::Display for RadiusList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadiusList::Start => f.write_str("start"),
            RadiusList::End => f.write_str("end"),
        }
    }
}

/// Errors that abort solidification.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Curve or topology error from the cell layer
    #[error("{0}")]
    Cell(#[from] CellError),

    /// A radius list does not have one entry per curve
    #[error("The {list} radius list has {found} entries, expected {expected}")]
    RadiusCountMismatch {
        list: RadiusList,
        expected: usize,
        found: usize,
    },

    /// A radius is zero, negative or not finite
    #[error("The {list} radius at index {index} must be positive: {value}")]
    InvalidRadius {
        list: RadiusList,
        index: usize,
        value: f64,
    },

    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Invalid mesh topology
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Severity to report to the host.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Cell(err) => err.severity(),
            _ => Severity::Error,
        }
    }

    /// True for errors caused by the host's input rather than geometry.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::RadiusCountMismatch { .. }
                | Self::InvalidRadius { .. }
                | Self::Cell(CellError::EmptyInput)
                | Self::Cell(CellError::NonLinearCurve { .. })
                | Self::Cell(CellError::DegenerateCurve { .. })
                | Self::Config(_)
        )
    }
}
