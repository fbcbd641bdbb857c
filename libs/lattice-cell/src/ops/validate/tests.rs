//! # Validation Tests

use super::*;
use crate::cell::Strut;

const TOL: f64 = 1e-6;

fn cube_corners() -> Vec<DVec3> {
    let mut corners = Vec::new();
    for z in [0.0, 1.0] {
        for y in [0.0, 1.0] {
            for x in [0.0, 1.0] {
                corners.push(DVec3::new(x, y, z));
            }
        }
    }
    corners
}

/// The 12 edges of the unit cube over its 8 corners.
fn cube_edge_cell(nodes: Vec<DVec3>) -> UnitCell {
    let mut struts = Vec::new();
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            if (nodes[i].distance(nodes[j]) - 1.0).abs() < TOL {
                struts.push(Strut::new(i, j));
            }
        }
    }
    UnitCell::from_parts(nodes, struts).unwrap()
}

#[test]
fn test_cube_edges_are_valid() {
    let cell = cube_edge_cell(cube_corners());
    assert_eq!(cell.strut_count(), 12);
    assert_eq!(validate_cell(&cell, TOL), CellValidity::Valid);
    assert!(validate_cell(&cell, TOL).into_result().is_ok());
}

#[test]
fn test_missing_corner_breaks_symmetry() {
    let nodes: Vec<DVec3> = cube_corners()
        .into_iter()
        .filter(|c| *c != DVec3::ONE)
        .collect();
    let cell = cube_edge_cell(nodes);

    let validity = validate_cell(&cell, TOL);
    assert!(!validity.is_valid());
    assert_eq!(validity, CellValidity::AsymmetricFaces { axis: Axis::X });
}

#[test]
fn test_face_without_nodes_is_empty() {
    let nodes = vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(0.5, 1.0, 1.0),
    ];
    let cell = UnitCell::from_parts(nodes, vec![Strut::new(0, 1)]).unwrap();
    assert_eq!(
        validate_cell(&cell, TOL),
        CellValidity::EmptyFace { axis: Axis::X }
    );
    assert_eq!(
        validate_cell(&cell, TOL).into_result(),
        Err(CellError::EmptyFace { axis: Axis::X })
    );
}

#[test]
fn test_body_diagonals_are_valid() {
    let mut nodes = cube_corners();
    nodes.push(DVec3::splat(0.5));
    let struts = (0..8).map(|i| Strut::new(i, 8)).collect();
    let cell = UnitCell::from_parts(nodes, struts).unwrap();
    assert!(validate_cell(&cell, TOL).is_valid());
}

#[test]
fn test_off_center_face_node_is_asymmetric() {
    let mut nodes = cube_corners();
    // A node on y = 0 with no partner on y = 1
    nodes.push(DVec3::new(0.5, 0.0, 0.5));
    let cell = cube_edge_cell(nodes);
    assert_eq!(
        validate_cell(&cell, TOL),
        CellValidity::AsymmetricFaces { axis: Axis::Y }
    );
}
