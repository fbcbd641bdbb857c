//! # Preset Unit Cells
//!
//! Line sets for common strut-based cells, laid out in the unit cube. Each
//! preset is a valid periodic cell once run through
//! [`define_unit_cell`](crate::pipeline::define_unit_cell); crossings are
//! left in place for the intersection resolver to split.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::geometry::Segment;

/// Standard cell topologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellPreset {
    /// The 12 edges of the cube.
    Grid,
    /// The 4 body diagonals ("X").
    BodyCentered,
    /// Three axis-parallel struts through the center.
    Cross,
    /// Body diagonals plus the cross.
    Star,
    /// Edges joining the centers of adjacent faces.
    Octahedron,
    /// Both diagonals of every face.
    FaceCentered,
    /// Cube edges plus body diagonals.
    GridBodyCentered,
}

impl CellPreset {
    pub const ALL: [CellPreset; 7] = [
        CellPreset::Grid,
        CellPreset::BodyCentered,
        CellPreset::Cross,
        CellPreset::Star,
        CellPreset::Octahedron,
        CellPreset::FaceCentered,
        CellPreset::GridBodyCentered,
    ];

    /// The preset's line geometry.
    pub fn lines(self) -> Vec<Segment> {
        match self {
            CellPreset::Grid => grid(),
            CellPreset::BodyCentered => body_diagonals(),
            CellPreset::Cross => cross(),
            CellPreset::Star => [body_diagonals(), cross()].concat(),
            CellPreset::Octahedron => octahedron(),
            CellPreset::FaceCentered => face_diagonals(),
            CellPreset::GridBodyCentered => [grid(), body_diagonals()].concat(),
        }
    }
}

fn corner(x: u8, y: u8, z: u8) -> DVec3 {
    DVec3::new(f64::from(x), f64::from(y), f64::from(z))
}

fn grid() -> Vec<Segment> {
    let mut lines = Vec::with_capacity(12);
    for a in 0..2 {
        for b in 0..2 {
            lines.push(Segment::new(corner(0, a, b), corner(1, a, b)));
            lines.push(Segment::new(corner(a, 0, b), corner(a, 1, b)));
            lines.push(Segment::new(corner(a, b, 0), corner(a, b, 1)));
        }
    }
    lines
}

fn body_diagonals() -> Vec<Segment> {
    vec![
        Segment::new(corner(0, 0, 0), corner(1, 1, 1)),
        Segment::new(corner(1, 0, 0), corner(0, 1, 1)),
        Segment::new(corner(0, 1, 0), corner(1, 0, 1)),
        Segment::new(corner(1, 1, 0), corner(0, 0, 1)),
    ]
}

fn cross() -> Vec<Segment> {
    vec![
        Segment::new(DVec3::new(0.0, 0.5, 0.5), DVec3::new(1.0, 0.5, 0.5)),
        Segment::new(DVec3::new(0.5, 0.0, 0.5), DVec3::new(0.5, 1.0, 0.5)),
        Segment::new(DVec3::new(0.5, 0.5, 0.0), DVec3::new(0.5, 0.5, 1.0)),
    ]
}

fn face_centers() -> [DVec3; 6] {
    [
        DVec3::new(0.0, 0.5, 0.5),
        DVec3::new(1.0, 0.5, 0.5),
        DVec3::new(0.5, 0.0, 0.5),
        DVec3::new(0.5, 1.0, 0.5),
        DVec3::new(0.5, 0.5, 0.0),
        DVec3::new(0.5, 0.5, 1.0),
    ]
}

fn octahedron() -> Vec<Segment> {
    let centers = face_centers();
    let mut lines = Vec::with_capacity(12);
    for i in 0..centers.len() {
        // Faces 2k and 2k + 1 are opposite each other
        for j in (i + 1)..centers.len() {
            if i / 2 != j / 2 {
                lines.push(Segment::new(centers[i], centers[j]));
            }
        }
    }
    lines
}

fn face_diagonals() -> Vec<Segment> {
    let mut lines = Vec::with_capacity(12);
    for side in 0..2 {
        lines.push(Segment::new(corner(side, 0, 0), corner(side, 1, 1)));
        lines.push(Segment::new(corner(side, 1, 0), corner(side, 0, 1)));
        lines.push(Segment::new(corner(0, side, 0), corner(1, side, 1)));
        lines.push(Segment::new(corner(1, side, 0), corner(0, side, 1)));
        lines.push(Segment::new(corner(0, 0, side), corner(1, 1, side)));
        lines.push(Segment::new(corner(1, 0, side), corner(0, 1, side)));
    }
    lines
}
