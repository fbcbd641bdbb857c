//! # Convex Hull
//!
//! QuickHull algorithm for computing 3D convex hulls.
//!
//! ## Algorithm Overview
//!
//! QuickHull is a divide-and-conquer algorithm:
//! 1. Find extreme points to form initial simplex (tetrahedron)
//! 2. For each face, find the farthest point outside
//! 3. Create new faces from that point to the horizon edges
//! 4. Repeat until no points remain outside
//!
//! Junction meshing hulls the plate rings of every strut meeting at a node
//! and needs to know which ring each hull corner belongs to, hence
//! [`convex_hull_faces`].

mod quickhull;


pub use quickhull::{convex_hull, convex_hull_faces};
