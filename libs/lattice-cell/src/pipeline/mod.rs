//! # Unit Cell Definition
//!
//! Host-facing entry point that turns raw curves into a validated,
//! tiling-ready [`UnitCell`].
//!
//! ## Pipeline
//!
//! ```text
//! curves → segments → resolve → extract → normalize → validate → format
//! ```
//!
//! Validation runs on the normalized cell before formatting, because the
//! formatter relies on every far-plane node having a mirror.

#[cfg(test)]
mod tests;

use config::constants::LatticeConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cell::UnitCell;
use crate::error::CellError;
use crate::geometry::{curves_to_segments, InputCurve};
use crate::ops::{extract_topology, format_topology, normalize, resolve_intersections, validate_cell};

// =============================================================================
// DIAGNOSTICS
// =============================================================================

/// Severity reported back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A message for the host alongside a successful result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }
}

impl From<&CellError> for Diagnostic {
    fn from(err: &CellError) -> Self {
        Self::new(err.severity(), err.to_string())
    }
}

// =============================================================================
// PIPELINE
// =============================================================================

/// Curves making up one cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellInput {
    pub curves: Vec<InputCurve>,
}

impl CellInput {
    pub fn new(curves: Vec<InputCurve>) -> Self {
        Self { curves }
    }
}

impl<T: Into<InputCurve>> FromIterator<T> for CellInput {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// A defined cell and the messages produced while defining it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellDefinition {
    pub cell: UnitCell,
    pub diagnostics: Vec<Diagnostic>,
}

/// Defines a periodic unit cell from curves.
///
/// # Errors
///
/// * Input errors ([`CellError::EmptyInput`], [`CellError::NonLinearCurve`],
///   [`CellError::DegenerateCurve`]) before any topology work
/// * [`CellError::DegenerateBoundingBox`] for flat input
/// * [`CellError::EmptyFace`] / [`CellError::AsymmetricFaces`] when the cell
///   cannot tile
///
/// # Example
///
/// ```rust
/// use config::constants::LatticeConfig;
/// use lattice_cell::{define_unit_cell, CellInput, CellPreset};
///
/// let input: CellInput = CellPreset::BodyCentered.lines().into_iter().collect();
/// let definition = define_unit_cell(&input, &LatticeConfig::default()).unwrap();
/// assert_eq!(definition.cell.node_count(), 9);
/// ```
pub fn define_unit_cell(input: &CellInput, config: &LatticeConfig) -> Result<CellDefinition, CellError> {
    config.validate()?;
    let tolerance = config.tolerance;

    let segments = curves_to_segments(&input.curves, tolerance)?;
    let segments = resolve_intersections(segments, tolerance)?;
    let cell = extract_topology(&segments, tolerance);
    let cell = normalize(cell, tolerance)?;
    validate_cell(&cell, tolerance).into_result()?;
    let cell = format_topology(cell, tolerance)?;

    info!(
        "Defined unit cell: {} nodes, {} struts",
        cell.node_count(),
        cell.strut_count()
    );

    Ok(CellDefinition {
        cell,
        diagnostics: vec![Diagnostic::info("cell is valid")],
    })
}
