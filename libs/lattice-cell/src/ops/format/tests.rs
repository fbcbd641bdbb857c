//! # Formatting Tests

use super::*;
use crate::cell::Strut;
use glam::DVec3;

const TOL: f64 = 1e-6;

fn cube_edge_cell() -> UnitCell {
    let mut nodes = Vec::new();
    for z in [0.0, 1.0] {
        for y in [0.0, 1.0] {
            for x in [0.0, 1.0] {
                nodes.push(DVec3::new(x, y, z));
            }
        }
    }
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
fn test_classification_priority() {
    assert_eq!(classify_node(DVec3::ONE, TOL), BoundaryClass::Corner);
    assert_eq!(
        classify_node(DVec3::new(1.0, 1.0, 0.3), TOL),
        BoundaryClass::Edge(Axis::X, Axis::Y)
    );
    assert_eq!(
        classify_node(DVec3::new(0.2, 1.0, 1.0), TOL),
        BoundaryClass::Edge(Axis::Y, Axis::Z)
    );
    assert_eq!(
        classify_node(DVec3::new(1.0, 0.0, 0.5), TOL),
        BoundaryClass::Face(Axis::X)
    );
    assert_eq!(classify_node(DVec3::ZERO, TOL), BoundaryClass::Interior);
    assert_eq!(
        BoundaryClass::Edge(Axis::Z, Axis::X).far_flags(),
        [true, false, true]
    );
}

#[test]
fn test_cube_keeps_only_origin_edges() {
    let cell = format_topology(cube_edge_cell(), TOL).unwrap();

    assert!(cell.is_formatted());
    assert_eq!(cell.strut_count(), 3);
    for strut in cell.struts() {
        let touches_origin = [strut.start, strut.end]
            .iter()
            .any(|&n| cell.nodes()[n] == DVec3::ZERO);
        assert!(touches_origin, "unexpected strut {strut:?}");
    }
}

#[test]
fn test_no_strut_left_on_a_far_plane() {
    let cell = format_topology(cube_edge_cell(), TOL).unwrap();
    let paths = cell.node_paths();
    for strut in cell.struts() {
        for axis in Axis::ALL {
            assert!(
                !(paths[strut.start].is_far(axis) && paths[strut.end].is_far(axis)),
                "strut {strut:?} lies on the far {axis} plane"
            );
        }
    }
}

#[test]
fn test_mirrors_point_at_near_side_nodes() {
    let cell = format_topology(cube_edge_cell(), TOL).unwrap();
    let nodes = cell.nodes();

    for (i, path) in cell.node_paths().iter().enumerate() {
        let mut expected = nodes[i];
        for axis in Axis::ALL {
            if path.is_far(axis) {
                expected = axis.with_component(expected, 0.0);
            }
        }
        assert!(
            nodes[path.mirror].distance(expected) < TOL,
            "node {i} mirrors to {} instead of {expected:?}",
            path.mirror
        );
    }

    // Every corner collapses onto the origin's representative
    let corner = nodes.iter().position(|n| *n == DVec3::ONE).unwrap();
    let origin = nodes.iter().position(|n| *n == DVec3::ZERO).unwrap();
    assert_eq!(cell.node_paths()[corner].as_tuple(), [1, 1, 1, origin]);
    assert_eq!(cell.node_paths()[origin].as_tuple(), [0, 0, 0, origin]);
}

#[test]
fn test_missing_mirror_is_reported() {
    let nodes = vec![DVec3::new(0.0, 0.5, 0.5), DVec3::new(1.0, 0.2, 0.2)];
    let cell = UnitCell::from_parts(nodes, vec![Strut::new(0, 1)]).unwrap();
    assert_eq!(
        format_topology(cell, TOL),
        Err(CellError::MissingMirror { node: 1 })
    );
}

#[test]
fn test_interior_struts_survive() {
    let nodes = vec![
        DVec3::new(0.0, 0.5, 0.5),
        DVec3::new(1.0, 0.5, 0.5),
        DVec3::splat(0.5),
    ];
    let struts = vec![Strut::new(0, 2), Strut::new(2, 1)];
    let cell = UnitCell::from_parts(nodes, struts).unwrap();
    let cell = format_topology(cell, TOL).unwrap();
    assert_eq!(cell.strut_count(), 2);
    assert_eq!(cell.node_paths()[1].as_tuple(), [1, 0, 0, 0]);
}
