//! # Unit Cell
//!
//! The node/strut graph of a single periodic cell.
//!
//! Nodes live in a flat arena and every cross-reference (strut endpoints,
//! mirror targets) is an index into it. Stages take a cell by value and hand
//! back the next snapshot, so a cell is never shared while it is mutated.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::CellError;
use crate::geometry::{Axis, Segment};

/// A strut between two nodes, stored as an index pair.
///
/// Topologically `(i, j)` and `(j, i)` are the same strut; the stored order
/// is kept because sleeve generation follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Strut {
    pub start: usize,
    pub end: usize,
}

impl Strut {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Order-independent key, smaller index first.
    #[inline]
    pub fn key(&self) -> (usize, usize) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }

    /// True if both struts connect the same two nodes in either direction.
    #[inline]
    pub fn same_nodes(&self, other: &Strut) -> bool {
        self.key() == other.key()
    }

    /// True if the strut starts and ends at the same node.
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.start == self.end
    }

    /// The endpoint opposite `node`, if `node` is an endpoint.
    pub fn other(&self, node: usize) -> Option<usize> {
        if node == self.start {
            Some(self.end)
        } else if node == self.end {
            Some(self.start)
        } else {
            None
        }
    }
}

/// Where a node sits relative to the far boundary planes, and which node it
/// stands in for when cells are tiled.
///
/// `far[axis]` is set when the node lies on the plane `axis = 1`. `mirror`
/// is the node reached by moving every flagged coordinate to 0, which is
/// the node the neighbouring cell owns. Nodes on no far plane mirror to
/// themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodePath {
    pub far: [bool; 3],
    pub mirror: usize,
}

impl NodePath {
    /// A path for a node that is not on any far plane.
    #[inline]
    pub fn interior(node: usize) -> Self {
        Self {
            far: [false; 3],
            mirror: node,
        }
    }

    /// True if the node lies on the far plane of `axis`.
    #[inline]
    pub fn is_far(&self, axis: Axis) -> bool {
        self.far[axis.index()]
    }

    /// Number of far planes the node lies on.
    #[inline]
    pub fn far_count(&self) -> usize {
        self.far.iter().filter(|&&f| f).count()
    }

    /// The classic `[fx, fy, fz, mirror]` tuple, flags as 0/1.
    pub fn as_tuple(&self) -> [usize; 4] {
        [
            usize::from(self.far[0]),
            usize::from(self.far[1]),
            usize::from(self.far[2]),
            self.mirror,
        ]
    }
}

/// A unit cell: deduplicated nodes, struts and (after formatting) node paths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitCell {
    pub(crate) nodes: Vec<DVec3>,
    pub(crate) struts: Vec<Strut>,
    pub(crate) node_paths: Vec<NodePath>,
}

impl UnitCell {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cell from explicit nodes and struts.
    ///
    /// # Errors
    ///
    /// [`CellError::InvalidStrut`] if a strut references a missing node.
    pub fn from_parts(nodes: Vec<DVec3>, struts: Vec<Strut>) -> Result<Self, CellError> {
        let node_count = nodes.len();
        for (i, strut) in struts.iter().enumerate() {
            for node in [strut.start, strut.end] {
                if node >= node_count {
                    return Err(CellError::InvalidStrut {
                        strut: i,
                        node,
                        node_count,
                    });
                }
            }
        }
        Ok(Self {
            nodes,
            struts,
            node_paths: Vec::new(),
        })
    }

    #[inline]
    pub fn nodes(&self) -> &[DVec3] {
        &self.nodes
    }

    #[inline]
    pub fn struts(&self) -> &[Strut] {
        &self.struts
    }

    /// Node paths, one per node. Empty until the cell is formatted.
    #[inline]
    pub fn node_paths(&self) -> &[NodePath] {
        &self.node_paths
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn strut_count(&self) -> usize {
        self.struts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True once node paths have been recorded.
    #[inline]
    pub fn is_formatted(&self) -> bool {
        !self.nodes.is_empty() && self.node_paths.len() == self.nodes.len()
    }

    /// The geometry of one strut.
    pub fn strut_segment(&self, strut: usize) -> Segment {
        let s = self.struts[strut];
        Segment::new(self.nodes[s.start], self.nodes[s.end])
    }

    /// Line geometry of every strut, in strut order.
    pub fn strut_segments(&self) -> Vec<Segment> {
        (0..self.struts.len()).map(|i| self.strut_segment(i)).collect()
    }

    /// Indices of nodes whose `axis` coordinate is within `tolerance` of
    /// `value`.
    pub fn nodes_on_plane(&self, axis: Axis, value: f64, tolerance: f64) -> Vec<usize> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, p)| (axis.component(**p) - value).abs() < tolerance)
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of nodes on either boundary plane of `axis`, near plane first.
    pub fn boundary_nodes(&self, axis: Axis, tolerance: f64) -> Vec<usize> {
        let mut nodes = self.nodes_on_plane(axis, 0.0, tolerance);
        nodes.extend(self.nodes_on_plane(axis, 1.0, tolerance));
        nodes
    }

    /// Indices of struts touching `node`.
    pub fn struts_at(&self, node: usize) -> Vec<usize> {
        self.struts
            .iter()
            .enumerate()
            .filter(|(_, s)| s.start == node || s.end == node)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strut_key_is_order_independent() {
        assert!(Strut::new(3, 1).same_nodes(&Strut::new(1, 3)));
        assert_eq!(Strut::new(3, 1).key(), (1, 3));
        assert_eq!(Strut::new(3, 1).other(1), Some(3));
        assert_eq!(Strut::new(3, 1).other(2), None);
    }

    #[test]
    fn test_from_parts_rejects_dangling_strut() {
        let err = UnitCell::from_parts(vec![DVec3::ZERO], vec![Strut::new(0, 1)]).unwrap_err();
        assert_eq!(
            err,
            CellError::InvalidStrut {
                strut: 0,
                node: 1,
                node_count: 1
            }
        );
    }

    #[test]
    fn test_node_path_tuple() {
        let path = NodePath {
            far: [true, false, true],
            mirror: 7,
        };
        assert_eq!(path.as_tuple(), [1, 0, 1, 7]);
        assert_eq!(path.far_count(), 2);
        assert!(path.is_far(Axis::Z));
        assert_eq!(NodePath::interior(4).as_tuple(), [0, 0, 0, 4]);
    }

    #[test]
    fn test_plane_queries() {
        let cell = UnitCell::from_parts(
            vec![DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0)],
            vec![Strut::new(0, 1), Strut::new(1, 2)],
        )
        .unwrap();
        assert_eq!(cell.nodes_on_plane(Axis::X, 1.0, 1e-6), vec![1, 2]);
        assert_eq!(cell.boundary_nodes(Axis::Y, 1e-6), vec![0, 1, 2]);
        assert_eq!(cell.struts_at(1), vec![0, 1]);
        assert_eq!(cell.strut_segment(1).end, DVec3::new(1.0, 1.0, 0.0));
        assert!(!cell.is_formatted());
    }
}
