//! # Solidification
//!
//! Turns a strut wireframe into one closed triangle mesh.
//!
//! ## Pipeline
//!
//! ```text
//! curves + radii ─▶ extract ─▶ StrutNetwork ─▶ offsets ─▶ sleeves ─┐
//!                                                  │               ├─▶ assemble
//!                                                  └─▶ junctions ──┘
//! ```
//!
//! Junctions that cannot be made convex do not abort the run: their hull is
//! left out, their sleeves keep clamped offsets, and the node is reported in
//! [`SolidMesh::failures`].

pub mod junction;
pub mod offset;
pub mod sharp;
pub mod sleeve;


use std::collections::HashSet;

use config::constants::{LatticeConfig, DEFAULT_STRUT_RADIUS};
use lattice_cell::geometry::curves_to_segments;
use lattice_cell::ops::extract_with_sources;
use lattice_cell::{Diagnostic, InputCurve};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::error::{MeshError, RadiusList};
use crate::mesh::Mesh;
use crate::network::{StrutNetwork, StrutRadii};

pub use junction::{end_cap, junction_mesh};
pub use offset::{base_offsets, compute_offsets, junction_offsets, JunctionOffsets};
pub use sharp::{correct_offsets, is_sharp, JunctionFrame};
pub use sleeve::sleeve_mesh;

// =============================================================================
// INPUT AND OUTPUT
// =============================================================================

/// Wireframe and radii handed over by the host.
///
/// Radius lists hold one entry per curve. Without a start list every strut
/// gets [`DEFAULT_STRUT_RADIUS`]; without an end list the start radii are
/// reused.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolidifyInput {
    pub curves: Vec<InputCurve>,
    pub start_radii: Option<Vec<f64>>,
    pub end_radii: Option<Vec<f64>>,
}

impl SolidifyInput {
    pub fn new(curves: Vec<InputCurve>) -> Self {
        Self {
            curves,
            start_radii: None,
            end_radii: None,
        }
    }

    /// Same radius on every strut.
    pub fn with_radius(self, radius: f64) -> Self {
        let radii = vec![radius; self.curves.len()];
        self.with_start_radii(radii)
    }

    pub fn with_start_radii(mut self, radii: Vec<f64>) -> Self {
        self.start_radii = Some(radii);
        self
    }

    pub fn with_end_radii(mut self, radii: Vec<f64>) -> Self {
        self.end_radii = Some(radii);
        self
    }

    /// Resolves the radius pair of every curve.
    ///
    /// # Errors
    ///
    /// [`MeshError::RadiusCountMismatch`] if a list does not have one entry
    /// per curve, [`MeshError::InvalidRadius`] for a radius that is not a
    /// positive finite number.
    pub fn curve_radii(&self) -> Result<Vec<StrutRadii>, MeshError> {
        let count = self.curves.len();
        let start = match &self.start_radii {
            Some(list) => checked_radii(list, count, RadiusList::Start)?,
            None => vec![DEFAULT_STRUT_RADIUS; count],
        };
        let end = match &self.end_radii {
            Some(list) => checked_radii(list, count, RadiusList::End)?,
            None => start.clone(),
        };
        Ok(start
            .into_iter()
            .zip(end)
            .map(|(s, e)| StrutRadii::new(s, e))
            .collect())
    }
}

fn checked_radii(list: &[f64], expected: usize, which: RadiusList) -> Result<Vec<f64>, MeshError> {
    if list.len() != expected {
        return Err(MeshError::RadiusCountMismatch {
            list: which,
            expected,
            found: list.len(),
        });
    }
    if let Some((index, &value)) = list
        .iter()
        .enumerate()
        .find(|(_, r)| !(r.is_finite() && **r > 0.0))
    {
        return Err(MeshError::InvalidRadius {
            list: which,
            index,
            value,
        });
    }
    Ok(list.to_vec())
}

/// Why a junction was left out of the mesh.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum FailureReason {
    /// A plate had to move past the middle of its strut
    #[error("strut {strut} is too short: plate offset {offset:.4} exceeds {limit:.4}")]
    StrutTooShort { strut: usize, offset: f64, limit: f64 },

    /// Offsets kept growing
    #[error("plates still overlap after {iterations} correction rounds")]
    NotConvex { iterations: usize },

    /// The hull solver rejected the plate rings
    #[error("junction hull failed: {message}")]
    HullFailed { message: String },
}

/// A junction that could not be meshed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JunctionFailure {
    pub node: usize,
    pub reason: FailureReason,
}

impl From<&JunctionFailure> for Diagnostic {
    fn from(failure: &JunctionFailure) -> Self {
        Diagnostic::warning(format!(
            "Junction at node {} was not meshed: {}",
            failure.node, failure.reason
        ))
    }
}

/// The assembled mesh and everything reported while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct SolidMesh {
    pub mesh: Mesh,
    /// The network with final plate offsets.
    pub network: StrutNetwork,
    /// Failed junctions, ascending by node.
    pub failures: Vec<JunctionFailure>,
    /// One warning per failed junction.
    pub diagnostics: Vec<Diagnostic>,
}

impl SolidMesh {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

// =============================================================================
// PIPELINE
// =============================================================================

/// Builds a solid mesh around a strut wireframe.
///
/// # Errors
///
/// Input errors abort before any meshing: bad curves
/// ([`MeshError::Cell`]), radius lists ([`MeshError::RadiusCountMismatch`],
/// [`MeshError::InvalidRadius`]) and configuration ([`MeshError::Config`]).
/// Junction problems are reported in [`SolidMesh::failures`] instead.
///
/// # Example
///
/// ```rust
/// use config::constants::LatticeConfig;
/// use glam::DVec3;
/// use lattice_cell::{InputCurve, Segment};
/// use lattice_mesh::{solidify, SolidifyInput};
///
/// let strut = Segment::new(DVec3::ZERO, DVec3::new(0.0, 0.0, 2.0));
/// let input = SolidifyInput::new(vec![InputCurve::Line(strut)]).with_radius(0.2);
/// let solid = solidify(&input, &LatticeConfig::default()).unwrap();
/// assert!(solid.mesh.is_watertight());
/// ```
pub fn solidify(input: &SolidifyInput, config: &LatticeConfig) -> Result<SolidMesh, MeshError> {
    config.validate()?;
    let tolerance = config.tolerance;

    let segments = curves_to_segments(&input.curves, tolerance)?;
    let curve_radii = input.curve_radii()?;

    let topology = extract_with_sources(&segments, tolerance);
    let radii: Vec<StrutRadii> = topology.sources.iter().map(|&s| curve_radii[s]).collect();
    let mut network = StrutNetwork::new(&topology.cell, &radii, config.sides)?;

    let mut failures = compute_offsets(&mut network, tolerance);
    let skipped: HashSet<usize> = failures.iter().map(|f| f.node).collect();

    let sleeves: Vec<Mesh> = network
        .sleeves()
        .par_iter()
        .map(|sleeve| sleeve_mesh(&network, sleeve))
        .collect();
    let junctions: Vec<(usize, Result<Mesh, FailureReason>)> = network
        .hulls()
        .par_iter()
        .filter(|hull| !skipped.contains(&hull.node))
        .map(|hull| (hull.node, junction_mesh(&network, hull)))
        .collect();

    let mut parts = sleeves;
    for (node, result) in junctions {
        match result {
            Ok(mesh) => parts.push(mesh),
            Err(reason) => {
                tracing::warn!("Junction at node {} failed: {}", node, reason);
                failures.push(JunctionFailure { node, reason });
            }
        }
    }
    failures.sort_by_key(|f| f.node);

    let mesh = assemble(&parts, tolerance);
    info!(
        "Solidified {} struts: {} vertices, {} triangles, {} failed junction(s)",
        network.sleeves().len(),
        mesh.vertex_count(),
        mesh.triangle_count(),
        failures.len()
    );

    let diagnostics = failures.iter().map(Diagnostic::from).collect();
    Ok(SolidMesh {
        mesh,
        network,
        failures,
        diagnostics,
    })
}

/// Merges the parts into one mesh, welds coincident vertices, drops
/// collapsed triangles, unifies orientation and recomputes normals.
pub fn assemble(parts: &[Mesh], tolerance: f64) -> Mesh {
    let vertices = parts.iter().map(Mesh::vertex_count).sum();
    let triangles = parts.iter().map(Mesh::triangle_count).sum();
    let mut mesh = Mesh::with_capacity(vertices, triangles);
    for part in parts {
        mesh.merge(part);
    }

    mesh.weld_vertices(tolerance);
    mesh.remove_degenerate_triangles();
    mesh.unify_orientation();
    mesh.compute_normals();
    mesh
}
