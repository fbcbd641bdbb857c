//! # Junction Meshing
//!
//! Closes the sleeves at every node:
//!
//! - one plate: a flat fan over the ring (end cap)
//! - two or more plates: the convex hull of all rings, minus the faces that
//!   lie in a plate, leaving one hole per plate where its sleeve attaches

use tracing::debug;

use super::FailureReason;
use crate::mesh::Mesh;
use crate::network::{Hull, StrutEnd, StrutNetwork};
use crate::ops::hull::convex_hull_faces;

/// Meshes the junction of one hull.
///
/// # Errors
///
/// [`FailureReason::HullFailed`] if the hull cannot be built, or does not
/// leave exactly the plate rings open.
pub fn junction_mesh(network: &StrutNetwork, hull: &Hull) -> Result<Mesh, FailureReason> {
    match hull.plates.as_slice() {
        [] => Ok(Mesh::new()),
        [plate] => Ok(end_cap(network, *plate)),
        plates => hull_mesh(network, plates),
    }
}

/// Fan over a single plate ring, facing away from the strut.
pub fn end_cap(network: &StrutNetwork, plate: usize) -> Mesh {
    let ring = network.plate_ring(plate);
    let sides = ring.len() as u32;

    let mut mesh = Mesh::with_capacity(ring.len(), ring.len().saturating_sub(2));
    for p in &ring {
        mesh.add_vertex(*p);
    }

    // The ring winds counter-clockwise about the start-to-end axis, which
    // points into the strut at its start and out of it at its end
    let at_start = network.plate(plate).end == StrutEnd::Start;
    for k in 1..sides.saturating_sub(1) {
        if at_start {
            mesh.add_triangle(0, k + 1, k);
        } else {
            mesh.add_triangle(0, k, k + 1);
        }
    }

    mesh
}

fn hull_mesh(network: &StrutNetwork, plates: &[usize]) -> Result<Mesh, FailureReason> {
    let mut points = Vec::new();
    let mut owner = Vec::new();
    for (slot, &plate) in plates.iter().enumerate() {
        let ring = network.plate_ring(plate);
        owner.extend(std::iter::repeat(slot).take(ring.len()));
        points.extend(ring);
    }

    let faces = convex_hull_faces(&points).map_err(|err| FailureReason::HullFailed {
        message: err.to_string(),
    })?;
    let total = faces.len();
    let faces: Vec<[usize; 3]> = faces
        .into_iter()
        .filter(|f| !(owner[f[0]] == owner[f[1]] && owner[f[1]] == owner[f[2]]))
        .collect();
    debug!("Junction hull: {} faces, {} inside plates", total, total - faces.len());

    let mut vertex_map = vec![u32::MAX; points.len()];
    let mut mesh = Mesh::with_capacity(points.len(), faces.len());
    for [a, b, c] in faces {
        let mut index = |v: usize| {
            if vertex_map[v] == u32::MAX {
                vertex_map[v] = mesh.add_vertex(points[v]);
            }
            vertex_map[v]
        };
        let (a, b, c) = (index(a), index(b), index(c));
        mesh.add_triangle(a, b, c);
    }

    let expected = points.len();
    let open = mesh.boundary_edge_count();
    if open != expected {
        return Err(FailureReason::HullFailed {
            message: format!("hull leaves {open} open edges, expected {expected}"),
        });
    }

    Ok(mesh)
}
