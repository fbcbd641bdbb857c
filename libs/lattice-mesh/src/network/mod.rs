//! # Strut Network
//!
//! The solidification model: every strut becomes a [`Sleeve`], every node a
//! [`Hull`], and each strut end a [`Plate`] where the sleeve meets the
//! junction.
//!
//! All cross-references are indices into the network's arenas:
//!
//! ```text
//! Sleeve ──plates[0], plates[1]──▶ Plate ◀──plates[..]── Hull
//!   │                                │                     │
//!   └── strut ──▶ Strut ◀── strut ───┘         node ──▶ node
//! ```
//!
//! Both plates of a sleeve share one cross-section basis, so ring vertex
//! `i` at the start lines up with ring vertex `i` at the end.

#[cfg(test)]
mod tests;

use std::f64::consts::TAU;

use config::constants::approx_zero;
use glam::DVec3;
use lattice_cell::{Strut, UnitCell};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MeshError;

/// Start and end radius of one strut.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrutRadii {
    pub start: f64,
    pub end: f64,
}

impl StrutRadii {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Equal radius at both ends.
    pub fn uniform(radius: f64) -> Self {
        Self::new(radius, radius)
    }
}

/// Which end of its strut a plate sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrutEnd {
    Start,
    End,
}

/// The polygon where a sleeve meets a junction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plate {
    pub strut: usize,
    pub node: usize,
    pub end: StrutEnd,
    /// Position of the node.
    pub origin: DVec3,
    /// Unit vector from the node into the strut.
    pub direction: DVec3,
    pub radius: f64,
    /// Distance from the node to the plate centre along `direction`.
    pub offset: f64,
    /// Cross-section basis shared with the plate at the other strut end.
    pub basis: [DVec3; 2],
}

impl Plate {
    /// Centre of the plate ring.
    #[inline]
    pub fn center(&self) -> DVec3 {
        self.origin + self.direction * self.offset
    }

    /// Unit vector from the centre to ring vertex `i` of `sides`.
    fn spoke(&self, i: u32, sides: u32) -> DVec3 {
        let angle = TAU * f64::from(i) / f64::from(sides);
        self.basis[0] * angle.cos() + self.basis[1] * angle.sin()
    }

    /// Ring vertices, counter-clockwise about the strut's start-to-end axis.
    pub fn ring(&self, sides: u32) -> Vec<DVec3> {
        let center = self.center();
        (0..sides)
            .map(|i| center + self.spoke(i, sides) * self.radius)
            .collect()
    }

    /// How far the ring reaches from its centre along `axis`.
    pub fn ring_extent(&self, axis: DVec3, sides: u32) -> f64 {
        (0..sides)
            .map(|i| self.spoke(i, sides).dot(axis) * self.radius)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// The tube along one strut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sleeve {
    pub strut: usize,
    pub radii: StrutRadii,
    /// Start and end plate indices.
    pub plates: [usize; 2],
}

/// The junction at one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hull {
    pub node: usize,
    /// Incident struts, ascending.
    pub struts: Vec<usize>,
    /// One plate per incident strut, in `struts` order.
    pub plates: Vec<usize>,
}

impl Hull {
    /// True if the node ends a single strut and gets an end cap.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.plates.len() == 1
    }
}

/// Nodes, struts and the sleeve/hull/plate arenas built over them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrutNetwork {
    nodes: Vec<DVec3>,
    struts: Vec<Strut>,
    sleeves: Vec<Sleeve>,
    hulls: Vec<Hull>,
    plates: Vec<Plate>,
    sides: u32,
}

impl StrutNetwork {
    /// Builds the network over an extracted cell.
    ///
    /// # Arguments
    ///
    /// * `cell` - Nodes and struts (node paths are ignored)
    /// * `radii` - One entry per strut
    /// * `sides` - Polygon resolution of every plate ring
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidTopology`] if `radii` does not match the strut
    /// count; [`MeshError::DegenerateGeometry`] for a zero-length strut.
    pub fn new(cell: &UnitCell, radii: &[StrutRadii], sides: u32) -> Result<Self, MeshError> {
        if radii.len() != cell.strut_count() {
            return Err(MeshError::invalid_topology(format!(
                "{} radius pairs for {} struts",
                radii.len(),
                cell.strut_count()
            )));
        }

        let nodes = cell.nodes().to_vec();
        let struts = cell.struts().to_vec();
        let mut plates = Vec::with_capacity(struts.len() * 2);
        let mut sleeves = Vec::with_capacity(struts.len());

        for (index, (strut, r)) in struts.iter().zip(radii).enumerate() {
            let start = nodes[strut.start];
            let end = nodes[strut.end];
            let length = start.distance(end);
            if approx_zero(length) {
                return Err(MeshError::degenerate(format!("strut {index} has zero length")));
            }
            let axis = (end - start) / length;
            let basis = perpendicular_basis(axis);

            let first = plates.len();
            plates.push(Plate {
                strut: index,
                node: strut.start,
                end: StrutEnd::Start,
                origin: start,
                direction: axis,
                radius: r.start,
                offset: 0.0,
                basis,
            });
            plates.push(Plate {
                strut: index,
                node: strut.end,
                end: StrutEnd::End,
                origin: end,
                direction: -axis,
                radius: r.end,
                offset: 0.0,
                basis,
            });
            sleeves.push(Sleeve {
                strut: index,
                radii: *r,
                plates: [first, first + 1],
            });
        }

        let mut hulls: Vec<Hull> = (0..nodes.len())
            .map(|node| Hull {
                node,
                struts: Vec::new(),
                plates: Vec::new(),
            })
            .collect();
        for sleeve in &sleeves {
            for &plate in &sleeve.plates {
                let hull = &mut hulls[plates[plate].node];
                hull.struts.push(sleeve.strut);
                hull.plates.push(plate);
            }
        }

        debug!(
            "Built strut network: {} nodes, {} sleeves, {} plates",
            nodes.len(),
            sleeves.len(),
            plates.len()
        );

        Ok(Self {
            nodes,
            struts,
            sleeves,
            hulls,
            plates,
            sides,
        })
    }

    #[inline]
    pub fn nodes(&self) -> &[DVec3] {
        &self.nodes
    }

    #[inline]
    pub fn struts(&self) -> &[Strut] {
        &self.struts
    }

    #[inline]
    pub fn sleeves(&self) -> &[Sleeve] {
        &self.sleeves
    }

    #[inline]
    pub fn hulls(&self) -> &[Hull] {
        &self.hulls
    }

    #[inline]
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    #[inline]
    pub fn plate(&self, index: usize) -> &Plate {
        &self.plates[index]
    }

    #[inline]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Length of a strut between its node centres.
    pub fn strut_length(&self, strut: usize) -> f64 {
        let s = self.struts[strut];
        self.nodes[s.start].distance(self.nodes[s.end])
    }

    /// Ring vertices of a plate at the network's resolution.
    pub fn plate_ring(&self, plate: usize) -> Vec<DVec3> {
        self.plates[plate].ring(self.sides)
    }

    pub(crate) fn set_offset(&mut self, plate: usize, offset: f64) {
        self.plates[plate].offset = offset;
    }
}

/// Two unit vectors `[u, v]` with `v = axis × u`, both perpendicular to
/// `axis`.
pub fn perpendicular_basis(axis: DVec3) -> [DVec3; 2] {
    let up = if axis.x.abs() < 0.9 { DVec3::X } else { DVec3::Y };
    let u = axis.cross(up).normalize();
    let v = axis.cross(u);
    [u, v]
}
