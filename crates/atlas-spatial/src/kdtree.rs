//! Balanced kd-tree over `(NodeId, GeoPoint)` entries.
//!
//! # Build
//!
//! Recursive median construction: sort the remaining entries by the level's
//! axis (longitude on even depths, latitude on odd), take the median element
//! as this node's data, recurse on the two halves.  Expected depth is
//! O(log n), which bounds both query time and build stack depth.
//!
//! # Query
//!
//! Depth-first descent: the child whose half-space contains the target is
//! visited first; the sibling is visited only if its half-box could still
//! hold something closer than the current best (squared point-to-box
//! distance against the current best squared distance).  Each node's
//! half-boxes come from splitting the box passed down at the node's axis
//! value.

use atlas_core::{Axis, BoundingBox, GeoPoint, NodeId};

struct KdNode {
    axis:  Axis,
    id:    NodeId,
    point: GeoPoint,
    left:  Option<Box<KdNode>>,
    right: Option<Box<KdNode>>,
}

/// Immutable nearest-point index.  Build once with [`KdTree::build`].
pub struct KdTree {
    root:   Option<Box<KdNode>>,
    bounds: BoundingBox,
    len:    usize,
}

impl KdTree {
    /// Build the index from a set of entries.
    ///
    /// Entries are sorted by id before partitioning, so the same point set
    /// always produces the same tree regardless of input order — queries on
    /// identical data are fully deterministic, ties included.
    pub fn build(mut entries: Vec<(NodeId, GeoPoint)>) -> KdTree {
        if entries.is_empty() {
            return KdTree {
                root:   None,
                bounds: BoundingBox::from_corners(0.0, 0.0, 0.0, 0.0),
                len:    0,
            };
        }

        entries.sort_unstable_by_key(|&(id, _)| id);

        let mut bounds = BoundingBox::new(entries[0].1, entries[0].1);
        for &(_, p) in &entries {
            bounds.ul.lon = bounds.ul.lon.min(p.lon);
            bounds.lr.lon = bounds.lr.lon.max(p.lon);
            bounds.ul.lat = bounds.ul.lat.max(p.lat);
            bounds.lr.lat = bounds.lr.lat.min(p.lat);
        }

        let len = entries.len();
        KdTree {
            root: build_node(&mut entries, 0),
            bounds,
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bounding box of all indexed points.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Return the id of the indexed point nearest to `target` by squared
    /// Euclidean distance.
    ///
    /// Ties are broken by descent order: the first candidate found is kept
    /// unless a strictly closer one turns up.  Returns `None` only on an
    /// empty index — callers treat that as a fatal precondition violation,
    /// since the index is built at startup from a non-empty node set.
    pub fn nearest(&self, target: GeoPoint) -> Option<NodeId> {
        let root = self.root.as_deref()?;
        let mut best = Best { id: root.id, d2: f64::INFINITY };
        nearest_in(root, self.bounds, target, &mut best);
        Some(best.id)
    }
}

struct Best {
    id: NodeId,
    d2: f64,
}

fn build_node(entries: &mut [(NodeId, GeoPoint)], depth: usize) -> Option<Box<KdNode>> {
    if entries.is_empty() {
        return None;
    }

    let axis = Axis::at_depth(depth);
    entries.sort_by(|a, b| a.1.coord(axis).total_cmp(&b.1.coord(axis)));

    let median = entries.len() / 2;
    let (id, point) = entries[median];
    let (lower, rest) = entries.split_at_mut(median);
    let upper = &mut rest[1..];

    Some(Box::new(KdNode {
        axis,
        id,
        point,
        left:  build_node(lower, depth + 1),
        right: build_node(upper, depth + 1),
    }))
}

fn nearest_in(node: &KdNode, bounds: BoundingBox, target: GeoPoint, best: &mut Best) {
    let d2 = target.distance2(node.point);
    if d2 < best.d2 {
        best.id = node.id;
        best.d2 = d2;
    }

    let split = node.point.coord(node.axis);
    let (lower_box, upper_box) = bounds.split(node.axis, split);

    // Near side first: the half-space containing the target.
    let (near, near_box, far, far_box) = if target.coord(node.axis) <= split {
        (&node.left, lower_box, &node.right, upper_box)
    } else {
        (&node.right, upper_box, &node.left, lower_box)
    };

    if let Some(child) = near {
        nearest_in(child, near_box, target, best);
    }
    if let Some(child) = far {
        if far_box.distance2_to_point(target) <= best.d2 {
            nearest_in(child, far_box, target, best);
        }
    }
}
