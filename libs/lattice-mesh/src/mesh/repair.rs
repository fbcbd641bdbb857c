//! # Mesh Repair
//!
//! Clean-up passes run on an assembled mesh: vertex welding, removal of
//! collapsed triangles and orientation unification.

use std::collections::{HashMap, VecDeque};

use config::constants::approx_zero;
use glam::DVec3;
use tracing::debug;

use super::Mesh;

impl Mesh {
    /// Merges vertices closer than `tolerance` and compacts the vertex list.
    ///
    /// Each vertex is matched against its 3×3×3 spatial-hash neighbourhood
    /// and merged into the lowest-index vertex in range. Triangles that
    /// collapse onto a repeated vertex are dropped, as are vertices no
    /// triangle references.
    ///
    /// Returns the number of vertices merged away.
    pub fn weld_vertices(&mut self, tolerance: f64) -> usize {
        let count = self.vertices.len();
        if count == 0 || tolerance <= 0.0 {
            return 0;
        }

        let cell_size = tolerance * 2.0;
        let mut grid: HashMap<(i64, i64, i64), Vec<u32>> = HashMap::new();
        for (idx, v) in self.vertices.iter().enumerate() {
            grid.entry(grid_cell(*v, cell_size)).or_default().push(idx as u32);
        }

        let mut remap: Vec<u32> = (0..count as u32).collect();
        let mut merged = 0usize;

        for idx in 0..count {
            if remap[idx] != idx as u32 {
                continue;
            }
            let position = self.vertices[idx];
            let (cx, cy, cz) = grid_cell(position, cell_size);

            for dx in -1..=1 {
                for dy in -1..=1 {
                    for dz in -1..=1 {
                        let Some(candidates) = grid.get(&(cx + dx, cy + dy, cz + dz)) else {
                            continue;
                        };
                        for &other in candidates {
                            let o = other as usize;
                            if o <= idx || remap[o] != other {
                                continue;
                            }
                            if position.distance(self.vertices[o]) < tolerance {
                                remap[o] = idx as u32;
                                merged += 1;
                            }
                        }
                    }
                }
            }
        }

        for tri in &mut self.triangles {
            for v in tri.iter_mut() {
                *v = remap[*v as usize];
            }
        }
        self.triangles
            .retain(|&[a, b, c]| a != b && b != c && a != c);
        self.compact_vertices();

        if merged > 0 {
            debug!("Welded {} vertices ({} remain)", merged, self.vertices.len());
        }
        merged
    }

    /// Drops vertices no triangle references, keeping the order of the rest.
    fn compact_vertices(&mut self) {
        let mut used = vec![false; self.vertices.len()];
        for tri in &self.triangles {
            for &v in tri {
                used[v as usize] = true;
            }
        }

        let mut new_index = vec![u32::MAX; self.vertices.len()];
        let mut vertices = Vec::with_capacity(self.vertices.len());
        for (i, v) in self.vertices.iter().enumerate() {
            if used[i] {
                new_index[i] = vertices.len() as u32;
                vertices.push(*v);
            }
        }

        for tri in &mut self.triangles {
            for v in tri.iter_mut() {
                *v = new_index[*v as usize];
            }
        }
        self.vertices = vertices;
        self.normals = None;
    }

    /// Removes triangles with (near) zero area.
    ///
    /// Returns the number of triangles removed.
    pub fn remove_degenerate_triangles(&mut self) -> usize {
        let before = self.triangles.len();
        let vertices = &self.vertices;
        self.triangles.retain(|&[a, b, c]| {
            let v0 = vertices[a as usize];
            let v1 = vertices[b as usize];
            let v2 = vertices[c as usize];
            !approx_zero((v1 - v0).cross(v2 - v0).length())
        });
        let removed = before - self.triangles.len();
        if removed > 0 {
            self.normals = None;
        }
        removed
    }

    /// Makes triangle winding consistent and outward.
    ///
    /// Walks each edge-connected component breadth-first and flips any
    /// neighbour that traverses a shared edge in the same direction as the
    /// current triangle. Only edges with exactly two triangles link faces.
    /// A component whose signed volume comes out negative is then flipped
    /// as a whole.
    ///
    /// Returns the number of triangle flips performed.
    pub fn unify_orientation(&mut self) -> usize {
        let edges = self.edge_faces();
        let face_count = self.triangles.len();
        let mut component = vec![usize::MAX; face_count];
        let mut components: Vec<Vec<usize>> = Vec::new();
        let mut flips = 0usize;

        for seed in 0..face_count {
            if component[seed] != usize::MAX {
                continue;
            }
            let id = components.len();
            let mut members = vec![seed];
            component[seed] = id;
            let mut queue = VecDeque::from([seed]);

            while let Some(face) = queue.pop_front() {
                let tri = self.triangles[face];
                for i in 0..3 {
                    let a = tri[i];
                    let b = tri[(i + 1) % 3];
                    let key = if a < b { (a, b) } else { (b, a) };
                    let Some(neighbours) = edges.get(&key) else {
                        continue;
                    };
                    if neighbours.len() != 2 {
                        continue;
                    }
                    for &other in neighbours {
                        if other == face || component[other] != usize::MAX {
                            continue;
                        }
                        if has_directed_edge(self.triangles[other], a, b) {
                            self.triangles[other].swap(1, 2);
                            flips += 1;
                        }
                        component[other] = id;
                        members.push(other);
                        queue.push_back(other);
                    }
                }
            }
            components.push(members);
        }

        for members in &components {
            if self.signed_volume_of(members.iter().copied()) < 0.0 {
                for &face in members {
                    self.triangles[face].swap(1, 2);
                }
                flips += members.len();
            }
        }

        if flips > 0 {
            self.normals = None;
            debug!(
                "Flipped {} triangle(s) across {} component(s)",
                flips,
                components.len()
            );
        }
        flips
    }
}

fn grid_cell(p: DVec3, cell_size: f64) -> (i64, i64, i64) {
    (
        (p.x / cell_size).floor() as i64,
        (p.y / cell_size).floor() as i64,
        (p.z / cell_size).floor() as i64,
    )
}

/// True if the triangle walks from `a` to `b` along one of its edges.
fn has_directed_edge(tri: [u32; 3], a: u32, b: u32) -> bool {
    (0..3).any(|i| tri[i] == a && tri[(i + 1) % 3] == b)
}
