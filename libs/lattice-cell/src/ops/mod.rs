//! # Cell Operations
//!
//! The stages of the unit cell pipeline. Each takes its input by value or
//! reference and returns a fresh result; none keeps state between calls.

pub mod extract;
pub mod format;
pub mod normalize;
pub mod resolve;
pub mod validate;

pub use extract::{extract_topology, extract_with_sources, ExtractedTopology};
pub use format::{classify_node, format_topology, BoundaryClass};
pub use normalize::normalize;
pub use resolve::resolve_intersections;
pub use validate::{validate_cell, CellValidity};
