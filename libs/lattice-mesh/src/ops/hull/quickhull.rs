//! # QuickHull Algorithm
//!
//! 3D convex hull computation using the QuickHull algorithm.
//! Based on the original algorithm by Barber, Dobkin, and Huhdanpaa.
//!
//! ## Algorithm Steps
//!
//! 1. Find 6 extreme points (min/max on each axis)
//! 2. Build initial tetrahedron from 4 non-coplanar points
//! 3. Assign remaining points to faces they're outside of
//! 4. For each face with outside points:
//!    a. Find farthest point
//!    b. Find horizon edges (boundary of visible faces)
//!    c. Create new faces from horizon to farthest point
//!    d. Reassign outside points to new faces
//! 5. Repeat until no faces have outside points
//!
//! Faces are reported as indices into the caller's point slice, so the
//! caller can tell which input each hull corner came from.

use std::collections::HashMap;

use config::constants::EPSILON;
use glam::DVec3;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Computes the convex hull of a set of 3D points as a mesh.
///
/// The mesh holds the hull corners in ascending input order.
///
/// # Errors
///
/// [`MeshError::DegenerateGeometry`] for fewer than 4 distinct points or a
/// collinear/coplanar point set.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use lattice_mesh::ops::hull::convex_hull;
///
/// let points = vec![
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
///     DVec3::new(0.0, 0.0, 1.0),
/// ];
/// let hull = convex_hull(&points).unwrap();
/// assert_eq!(hull.triangle_count(), 4);
/// ```
pub fn convex_hull(points: &[DVec3]) -> Result<Mesh, MeshError> {
    let faces = convex_hull_faces(points)?;

    let mut used = vec![false; points.len()];
    for face in &faces {
        for &v in face {
            used[v] = true;
        }
    }

    let mut vertex_map = vec![u32::MAX; points.len()];
    let mut mesh = Mesh::with_capacity(used.iter().filter(|u| **u).count(), faces.len());
    for (i, p) in points.iter().enumerate() {
        if used[i] {
            vertex_map[i] = mesh.add_vertex(*p);
        }
    }
    for [a, b, c] in faces {
        mesh.add_triangle(vertex_map[a], vertex_map[b], vertex_map[c]);
    }

    Ok(mesh)
}

/// Computes the convex hull as triangles indexing into `points`.
///
/// Triangles wind counter-clockwise seen from outside. Of several
/// coincident input points only the first is referenced.
///
/// # Errors
///
/// Same as [`convex_hull`].
pub fn convex_hull_faces(points: &[DVec3]) -> Result<Vec<[usize; 3]>, MeshError> {
    if points.len() < 4 {
        return Err(MeshError::degenerate("Convex hull requires at least 4 points"));
    }

    let (unique_points, origin) = remove_duplicates(points);
    if unique_points.len() < 4 {
        return Err(MeshError::degenerate(
            "Convex hull requires at least 4 unique points",
        ));
    }

    let (initial_faces, interior) = build_initial_simplex(&unique_points)?;
    let final_faces = quickhull_iterate(initial_faces, interior, &unique_points);

    Ok(final_faces
        .iter()
        .map(|face| face.vertices.map(|v| origin[v]))
        .collect())
}

/// A face of the convex hull (triangle).
#[derive(Debug, Clone)]
struct HullFace {
    /// Indices of the three vertices
    vertices: [usize; 3],
    /// Outward-pointing unit normal
    normal: DVec3,
    /// Distance from origin along normal
    distance: f64,
    /// Points outside this face
    outside_points: Vec<usize>,
}

impl HullFace {
    fn new(v0: usize, v1: usize, v2: usize, points: &[DVec3]) -> Self {
        let p0 = points[v0];
        let normal = (points[v1] - p0).cross(points[v2] - p0).normalize_or_zero();

        Self {
            vertices: [v0, v1, v2],
            normal,
            distance: normal.dot(p0),
            outside_points: Vec::new(),
        }
    }

    fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.distance
    }

    fn is_outside(&self, point: DVec3) -> bool {
        self.signed_distance(point) > EPSILON
    }

    /// Farthest outside point; ties go to the first in the outside set.
    fn farthest_point(&self, points: &[DVec3]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &idx in &self.outside_points {
            let dist = self.signed_distance(points[idx]);
            match best {
                Some((_, best_dist)) if dist <= best_dist => {}
                _ => best = Some((idx, dist)),
            }
        }
        best.map(|(idx, _)| idx)
    }
}

/// Removes points within EPSILON of an earlier point.
///
/// Returns the unique points and, for each, its index in the input.
fn remove_duplicates(points: &[DVec3]) -> (Vec<DVec3>, Vec<usize>) {
    let mut unique: Vec<DVec3> = Vec::with_capacity(points.len());
    let mut origin = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        if !unique.iter().any(|u| u.distance(*p) < EPSILON) {
            unique.push(*p);
            origin.push(i);
        }
    }
    (unique, origin)
}

/// Builds the initial tetrahedron from extreme points.
///
/// Returns the four faces, with outside sets filled, and the tetrahedron's
/// centroid, which stays strictly inside the hull for the whole run.
fn build_initial_simplex(points: &[DVec3]) -> Result<(Vec<HullFace>, DVec3), MeshError> {
    let mut extremes = [0usize; 6];
    for (i, p) in points.iter().enumerate() {
        for axis in 0..3 {
            if p[axis] < points[extremes[2 * axis]][axis] {
                extremes[2 * axis] = i;
            }
            if p[axis] > points[extremes[2 * axis + 1]][axis] {
                extremes[2 * axis + 1] = i;
            }
        }
    }

    let (p0, p1) = find_farthest_pair(&extremes, points);
    let p2 = find_farthest_from_line(p0, p1, points)?;
    let p3 = find_farthest_from_plane(p0, p1, p2, points)?;

    let interior = (points[p0] + points[p1] + points[p2] + points[p3]) / 4.0;
    let mut faces = vec![
        create_face_outward(p0, p1, p2, interior, points),
        create_face_outward(p0, p2, p3, interior, points),
        create_face_outward(p0, p3, p1, interior, points),
        create_face_outward(p1, p3, p2, interior, points),
    ];

    let simplex = [p0, p1, p2, p3];
    for idx in (0..points.len()).filter(|i| !simplex.contains(i)) {
        assign_to_face(&mut faces, idx, points);
    }

    Ok((faces, interior))
}

/// Adds a point to the outside set of the first face it lies in front of.
/// Points behind every face are inside the hull and dropped.
fn assign_to_face(faces: &mut [HullFace], idx: usize, points: &[DVec3]) {
    if let Some(face) = faces.iter_mut().find(|f| f.is_outside(points[idx])) {
        face.outside_points.push(idx);
    }
}

fn find_farthest_pair(indices: &[usize], points: &[DVec3]) -> (usize, usize) {
    let mut max_dist = 0.0;
    let mut best = (indices[0], indices[1]);

    for (i, &a) in indices.iter().enumerate() {
        for &b in indices.iter().skip(i + 1) {
            let dist = points[a].distance_squared(points[b]);
            if dist > max_dist {
                max_dist = dist;
                best = (a, b);
            }
        }
    }
    best
}

fn find_farthest_from_line(p0: usize, p1: usize, points: &[DVec3]) -> Result<usize, MeshError> {
    let line_dir = (points[p1] - points[p0]).normalize_or_zero();
    let mut max_dist = EPSILON;
    let mut best = None;

    for (i, p) in points.iter().enumerate() {
        if i == p0 || i == p1 {
            continue;
        }
        let v = *p - points[p0];
        let dist = (v - v.dot(line_dir) * line_dir).length();
        if dist > max_dist {
            max_dist = dist;
            best = Some(i);
        }
    }

    best.ok_or_else(|| MeshError::degenerate("All hull points are collinear"))
}

fn find_farthest_from_plane(
    p0: usize,
    p1: usize,
    p2: usize,
    points: &[DVec3],
) -> Result<usize, MeshError> {
    let normal = (points[p1] - points[p0])
        .cross(points[p2] - points[p0])
        .normalize_or_zero();

    let mut max_dist = EPSILON;
    let mut best = None;

    for (i, p) in points.iter().enumerate() {
        if i == p0 || i == p1 || i == p2 {
            continue;
        }
        let dist = normal.dot(*p - points[p0]).abs();
        if dist > max_dist {
            max_dist = dist;
            best = Some(i);
        }
    }

    best.ok_or_else(|| MeshError::degenerate("All hull points are coplanar"))
}

/// Creates a face whose normal points away from `interior`.
fn create_face_outward(v0: usize, v1: usize, v2: usize, interior: DVec3, points: &[DVec3]) -> HullFace {
    let face = HullFace::new(v0, v1, v2, points);
    if face.signed_distance(interior) > 0.0 {
        HullFace::new(v0, v2, v1, points)
    } else {
        face
    }
}

/// Main QuickHull iteration.
fn quickhull_iterate(mut faces: Vec<HullFace>, interior: DVec3, points: &[DVec3]) -> Vec<HullFace> {
    // Every round moves one point onto the hull
    let max_iterations = points.len() * 2;

    for _ in 0..max_iterations {
        let Some(face_idx) = faces.iter().position(|f| !f.outside_points.is_empty()) else {
            break;
        };
        let Some(farthest) = faces[face_idx].farthest_point(points) else {
            break;
        };
        let apex = points[farthest];

        let visible: Vec<usize> = faces
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_outside(apex))
            .map(|(i, _)| i)
            .collect();

        let horizon = find_horizon_edges(&faces, &visible);

        let mut reassign: Vec<usize> = Vec::new();
        for &idx in &visible {
            reassign.extend(&faces[idx].outside_points);
        }
        reassign.retain(|&p| p != farthest);

        // Descending order keeps swap_remove from disturbing pending indices
        for &idx in visible.iter().rev() {
            faces.swap_remove(idx);
        }

        for (e0, e1) in horizon {
            faces.push(create_face_outward(e0, e1, farthest, interior, points));
        }

        for idx in reassign {
            assign_to_face(&mut faces, idx, points);
        }
    }

    faces
}

/// Edges of the visible region's boundary, in the visible faces' winding.
fn find_horizon_edges(faces: &[HullFace], visible: &[usize]) -> Vec<(usize, usize)> {
    let mut edge_count: HashMap<(usize, usize), usize> = HashMap::new();
    let edges_of = |idx: usize| {
        let v = faces[idx].vertices;
        [(v[0], v[1]), (v[1], v[2]), (v[2], v[0])]
    };

    for &idx in visible {
        for (a, b) in edges_of(idx) {
            *edge_count.entry((a.min(b), a.max(b))).or_insert(0) += 1;
        }
    }

    // An edge seen once borders a face that stays
    visible
        .iter()
        .flat_map(|&idx| edges_of(idx))
        .filter(|&(a, b)| edge_count[&(a.min(b), a.max(b))] == 1)
        .collect()
}
