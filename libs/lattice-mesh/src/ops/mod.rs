//! # Mesh Operations
//!
//! Geometry services used by the solidifier.

pub mod hull;

pub use hull::{convex_hull, convex_hull_faces};
