//! Road network representation and builder.
//!
//! # Data layout
//!
//! The graph is a node store (`NodeId` → [`MapNode`]) plus a symmetric
//! adjacency relation (`NodeId` → neighbor set).  Both are `FxHashMap`s:
//! integer-keyed, read-heavy, and — because FxHash carries no per-process
//! random state — iteration order is reproducible for a given build, which
//! keeps downstream tie-breaking deterministic.
//!
//! # Lifecycle
//!
//! [`RoadGraphBuilder`] accepts nodes and undirected edges in any order.
//! `build()` runs the cleanup pass: nodes that ended up with no neighbors
//! are pruned, so every retained node is guaranteed at least one edge
//! (which does not guarantee global connectivity, only the absence of
//! guaranteed-unreachable singletons).  The built graph is immutable for
//! the process lifetime and safe for unlimited concurrent reads.

use rustc_hash::{FxHashMap, FxHashSet};

use atlas_core::{GeoPoint, NodeId};

use crate::error::{GraphError, GraphResult};
use crate::node::MapNode;

/// Immutable undirected road graph.  Construct via [`RoadGraphBuilder`].
pub struct RoadGraph {
    nodes:     FxHashMap<NodeId, MapNode>,
    adjacency: FxHashMap<NodeId, FxHashSet<NodeId>>,
}

impl RoadGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total undirected edge count (each edge counted once).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(FxHashSet::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&MapNode> {
        self.nodes.get(&id)
    }

    /// Like [`node`](Self::node) but with a typed error for query paths.
    pub fn require_node(&self, id: NodeId) -> GraphResult<&MapNode> {
        self.nodes.get(&id).ok_or(GraphError::NodeNotFound(id))
    }

    /// Position of a node, for distance computations on hot paths.
    #[inline]
    pub fn position(&self, id: NodeId) -> Option<GeoPoint> {
        self.nodes.get(&id).map(|n| n.pos)
    }

    /// Iterator over the neighbors of `id`.  Empty for unknown ids — the
    /// cleanup pass guarantees known ids have at least one neighbor.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.get(&id).into_iter().flatten().copied()
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.adjacency.get(&id).map_or(0, FxHashSet::len)
    }

    /// Iterator over all nodes, in storage order.
    pub fn nodes(&self) -> impl Iterator<Item = &MapNode> + '_ {
        self.nodes.values()
    }
}

/// Construct a [`RoadGraph`] incrementally, then call [`build`](Self::build).
pub struct RoadGraphBuilder {
    nodes:     FxHashMap<NodeId, MapNode>,
    adjacency: FxHashMap<NodeId, FxHashSet<NodeId>>,
}

impl RoadGraphBuilder {
    pub fn new() -> Self {
        Self { nodes: FxHashMap::default(), adjacency: FxHashMap::default() }
    }

    /// Pre-allocate for the expected node count when bulk-loading.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes:     FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
            adjacency: FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
        }
    }

    /// Add (or replace) a node.
    pub fn add_node(&mut self, node: MapNode) -> NodeId {
        let id = node.id;
        self.nodes.insert(id, node);
        id
    }

    /// Add the undirected edge `a`–`b`: `b` joins `a`'s neighbor set and
    /// `a` joins `b`'s.  Self-loops are ignored.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if either endpoint was never added.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> GraphResult<()> {
        if !self.nodes.contains_key(&a) {
            return Err(GraphError::NodeNotFound(a));
        }
        if !self.nodes.contains_key(&b) {
            return Err(GraphError::NodeNotFound(b));
        }
        if a == b {
            return Ok(());
        }
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Consume the builder and produce a [`RoadGraph`].
    ///
    /// Runs the cleanup pass: every node with an empty neighbor set is
    /// dropped.  Typical map extracts leave large numbers of isolated
    /// nodes (crossings of excluded ways, stranded points); none of them
    /// can ever appear in a route or a snap result worth returning.
    pub fn build(mut self) -> RoadGraph {
        let before = self.nodes.len();
        self.nodes
            .retain(|id, _| self.adjacency.get(id).is_some_and(|n| !n.is_empty()));
        self.adjacency.retain(|id, _| self.nodes.contains_key(id));

        let pruned = before - self.nodes.len();
        if pruned > 0 {
            log::info!("road graph cleanup: pruned {pruned} isolated nodes, {} retained", self.nodes.len());
        }

        RoadGraph { nodes: self.nodes, adjacency: self.adjacency }
    }
}

impl Default for RoadGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
