//! # Sleeve Meshing
//!
//! Side wall of the tube between a strut's two plates. The rings share one
//! basis, so vertex `i` at the start pairs with vertex `i` at the end; with
//! different radii the wall is a frustum. Sleeves carry no caps, since the
//! junction hulls and end caps close them.

use crate::mesh::Mesh;
use crate::network::{Sleeve, StrutNetwork};

/// Builds the side wall of one sleeve, wound outward.
pub fn sleeve_mesh(network: &StrutNetwork, sleeve: &Sleeve) -> Mesh {
    let start = network.plate_ring(sleeve.plates[0]);
    let end = network.plate_ring(sleeve.plates[1]);
    let sides = start.len() as u32;

    let mut mesh = Mesh::with_capacity(start.len() * 2, start.len() * 2);
    for p in start.iter().chain(&end) {
        mesh.add_vertex(*p);
    }

    // Rings run counter-clockwise about the start-to-end axis
    for j in 0..sides {
        let j_next = (j + 1) % sides;

        let s0 = j;
        let s1 = j_next;
        let e0 = sides + j;
        let e1 = sides + j_next;

        mesh.add_triangle(s0, s1, e1);
        mesh.add_triangle(s0, e1, e0);
    }

    mesh
}
