//! `atlas-spatial` — nearest-point spatial index.
//!
//! A balanced 2-d binary space partition (kd-tree) over map nodes, built
//! once at startup and immutable thereafter.  Used to snap query lon/lat
//! pairs to graph nodes before routing.
//!
//! The index stores only `(NodeId, GeoPoint)` pairs; it does not own graph
//! nodes.  Callers resolve the returned id against their own node storage.

pub mod kdtree;


pub use kdtree::KdTree;
