//! # Strut Network Tests

use super::*;
use approx::assert_relative_eq;
use lattice_cell::Strut;

/// An L of two struts meeting at the origin.
fn elbow() -> UnitCell {
    UnitCell::from_parts(
        vec![DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0), DVec3::new(0.0, 3.0, 0.0)],
        vec![Strut::new(0, 1), Strut::new(2, 0)],
    )
    .unwrap()
}

#[test]
fn test_network_arenas() {
    let radii = [StrutRadii::uniform(0.2), StrutRadii::new(0.1, 0.3)];
    let network = StrutNetwork::new(&elbow(), &radii, 6).unwrap();

    assert_eq!(network.sleeves().len(), 2);
    assert_eq!(network.plates().len(), 4);
    assert_eq!(network.hulls().len(), 3);

    let junction = &network.hulls()[0];
    assert_eq!(junction.struts, vec![0, 1]);
    assert_eq!(junction.plates, vec![0, 3]);
    assert!(network.hulls()[1].is_terminal());

    // Strut 1 runs from node 2 to node 0, so its end plate sits at the origin
    let plate = network.plate(3);
    assert_eq!(plate.end, StrutEnd::End);
    assert_eq!(plate.node, 0);
    assert_relative_eq!(plate.radius, 0.3);
    assert_relative_eq!(plate.direction.y, 1.0);
    assert_relative_eq!(network.strut_length(1), 3.0);
}

#[test]
fn test_plate_rings_align_along_sleeve() {
    let network = StrutNetwork::new(&elbow(), &[StrutRadii::uniform(0.25); 2], 8).unwrap();
    let [start, end] = network.sleeves()[0].plates;

    let a = network.plate_ring(start);
    let b = network.plate_ring(end);
    assert_eq!(a.len(), 8);
    for (p, q) in a.iter().zip(&b) {
        // Matching vertices differ only along the strut axis
        let d = *q - *p;
        assert_relative_eq!(d.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(d.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(d.z, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.distance(DVec3::ZERO), 0.25, epsilon = 1e-12);
    }
}

#[test]
fn test_ring_extent_and_offset() {
    let mut network = StrutNetwork::new(&elbow(), &[StrutRadii::uniform(0.5); 2], 4).unwrap();
    network.set_offset(0, 0.7);

    let plate = network.plate(0);
    assert_relative_eq!(plate.center().x, 0.7);
    assert!(plate.ring_extent(DVec3::Y, 4) <= 0.5 + 1e-12);
    assert_relative_eq!(plate.ring_extent(DVec3::X, 4), 0.0, epsilon = 1e-12);
}

#[test]
fn test_perpendicular_basis_is_right_handed() {
    for axis in [DVec3::X, DVec3::Y, DVec3::new(1.0, 2.0, -3.0).normalize()] {
        let [u, v] = perpendicular_basis(axis);
        assert_relative_eq!(u.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(v.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(u.dot(axis), 0.0, epsilon = 1e-12);
        assert_relative_eq!(u.cross(v).dot(axis), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_radius_count_must_match_struts() {
    let err = StrutNetwork::new(&elbow(), &[StrutRadii::uniform(0.2)], 6).unwrap_err();
    assert!(matches!(err, MeshError::InvalidTopology { .. }));
}

#[test]
fn test_coincident_strut_ends_are_degenerate() {
    let cell = UnitCell::from_parts(
        vec![DVec3::ZERO, DVec3::splat(1e-12)],
        vec![Strut::new(0, 1)],
    )
    .unwrap();
    let err = StrutNetwork::new(&cell, &[StrutRadii::uniform(0.1)], 6).unwrap_err();
    assert!(matches!(err, MeshError::DegenerateGeometry { .. }));
}
