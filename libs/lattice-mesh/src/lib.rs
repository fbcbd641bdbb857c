//! # Lattice Mesh
//!
//! Junction meshing for strut lattices: wraps every strut of a wireframe in
//! a polygonal sleeve and closes the nodes with convex hulls, producing one
//! closed triangle [`Mesh`].
//!
//! ## Architecture
//!
//! ```text
//! InputCurve + radii → StrutNetwork → plate offsets → sleeves + hulls → Mesh
//! ```
//!
//! - [`network`] - Sleeve/hull/plate arenas over an extracted cell
//! - [`solidify`](mod@solidify) - Offsets, sharp-junction correction and assembly
//! - [`ops::hull`] - QuickHull used for junction hulls
//! - [`mesh`] - Indexed triangle mesh with welding and orientation repair
//!
//! A junction that cannot be made convex is reported as a
//! [`JunctionFailure`] and left open; the rest of the mesh is still built.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::LatticeConfig;
//! use glam::DVec3;
//! use lattice_cell::{InputCurve, Segment};
//! use lattice_mesh::{solidify, SolidifyInput};
//!
//! let tips = [DVec3::X, DVec3::Y, DVec3::Z];
//! let curves = tips
//!     .iter()
//!     .map(|&tip| InputCurve::Line(Segment::new(DVec3::ZERO, tip)))
//!     .collect();
//!
//! let input = SolidifyInput::new(curves).with_radius(0.1);
//! let solid = solidify(&input, &LatticeConfig::default()).unwrap();
//! assert!(solid.is_complete());
//! assert!(solid.mesh.is_watertight());
//! ```

pub mod error;
pub mod mesh;
pub mod network;
pub mod ops;
pub mod solidify;

pub use error::{MeshError, RadiusList};
pub use mesh::Mesh;
pub use network::{Hull, Plate, Sleeve, StrutEnd, StrutNetwork, StrutRadii};
pub use solidify::{solidify, FailureReason, JunctionFailure, SolidMesh, SolidifyInput};
