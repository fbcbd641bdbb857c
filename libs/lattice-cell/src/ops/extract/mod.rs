//! # Topology Extraction
//!
//! Turns a list of segments into a deduplicated node/strut graph.
//!
//! Each endpoint is matched against the nodes found so far by
//! nearest-neighbour search; a match within tolerance reuses the node,
//! otherwise the endpoint becomes a new node. Struts that collapse onto a
//! single node, or repeat an existing strut in either direction, are
//! dropped.


use std::collections::HashSet;

use glam::DVec3;
use tracing::{debug, info};

use crate::cell::{Strut, UnitCell};
use crate::geometry::{find_point, Segment};

/// Result of extraction that remembers where every strut came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedTopology {
    /// The node/strut graph.
    pub cell: UnitCell,
    /// For each strut, the index of the first input segment that produced it.
    pub sources: Vec<usize>,
}

/// Extracts a unit cell from segments.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use lattice_cell::geometry::Segment;
/// use lattice_cell::ops::extract_topology;
///
/// let lines = vec![
///     Segment::new(DVec3::ZERO, DVec3::X),
///     Segment::new(DVec3::X, DVec3::ZERO), // same strut, reversed
/// ];
/// let cell = extract_topology(&lines, 1e-6);
/// assert_eq!(cell.node_count(), 2);
/// assert_eq!(cell.strut_count(), 1);
/// ```
pub fn extract_topology(segments: &[Segment], tolerance: f64) -> UnitCell {
    extract_with_sources(segments, tolerance).cell
}

/// Extracts a unit cell and records each strut's source segment.
pub fn extract_with_sources(segments: &[Segment], tolerance: f64) -> ExtractedTopology {
    let mut nodes: Vec<DVec3> = Vec::new();
    let mut struts: Vec<Strut> = Vec::with_capacity(segments.len());
    let mut sources: Vec<usize> = Vec::with_capacity(segments.len());
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut dropped = 0usize;

    for (index, segment) in segments.iter().enumerate() {
        let start = node_index(&mut nodes, segment.start, tolerance);
        let end = node_index(&mut nodes, segment.end, tolerance);
        let strut = Strut::new(start, end);

        if strut.is_loop() || !seen.insert(strut.key()) {
            dropped += 1;
            continue;
        }
        struts.push(strut);
        sources.push(index);
    }

    if dropped > 0 {
        debug!("Dropped {} duplicate or zero-length strut(s)", dropped);
    }
    info!(
        "Extracted {} nodes and {} struts from {} segments",
        nodes.len(),
        struts.len(),
        segments.len()
    );

    ExtractedTopology {
        cell: UnitCell {
            nodes,
            struts,
            node_paths: Vec::new(),
        },
        sources,
    }
}

/// Returns the index of the node at `point`, appending it if none is within
/// `tolerance`.
fn node_index(nodes: &mut Vec<DVec3>, point: DVec3, tolerance: f64) -> usize {
    match find_point(nodes, point, tolerance) {
        Some(index) => index,
        None => {
            nodes.push(point);
            nodes.len() - 1
        }
    }
}
