//! `MapDb` — the queryable map database.
//!
//! Owns the finalized [`RoadGraph`] plus the two indices derived from it:
//! the kd-tree over node positions and the trie over cleaned location
//! names, together with the cleaned-name → node-ids table that maps trie
//! output back to real locations.  Everything is built once in
//! [`MapDb::build`] and immutable afterwards.

use rustc_hash::FxHashMap;

use atlas_core::{BoundingBox, GeoPoint, NodeId};
use atlas_search::{Trie, clean};
use atlas_spatial::KdTree;

use crate::graph::RoadGraph;
use crate::node::MapNode;

/// One resolved location: the row returned by name lookups.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub id:   NodeId,
    pub lon:  f64,
    pub lat:  f64,
    pub name: String,
}

/// Immutable map database: graph + spatial index + name index.
pub struct MapDb {
    graph:   RoadGraph,
    spatial: KdTree,
    names:   Trie,
    by_name: FxHashMap<String, Vec<NodeId>>,
}

impl MapDb {
    /// Build all indices from a finalized graph.
    ///
    /// Several locations may share one cleaned name ("peets coffee"
    /// appears more than once in any real extract); each cleaned name maps
    /// to every node carrying it, in ascending id order.
    pub fn build(graph: RoadGraph) -> MapDb {
        let entries: Vec<(NodeId, GeoPoint)> =
            graph.nodes().map(|n| (n.id, n.pos)).collect();
        let spatial = KdTree::build(entries);

        let mut names = Trie::new();
        let mut by_name: FxHashMap<String, Vec<NodeId>> = FxHashMap::default();
        for node in graph.nodes() {
            let Some(name) = &node.name else { continue };
            let cleaned = clean(name);
            if cleaned.is_empty() {
                continue;
            }
            names.insert(&cleaned);
            by_name.entry(cleaned).or_default().push(node.id);
        }
        for ids in by_name.values_mut() {
            ids.sort_unstable();
        }

        log::info!(
            "map db built: {} nodes indexed, {} distinct cleaned names",
            spatial.len(),
            names.len()
        );

        MapDb { graph, spatial, names, by_name }
    }

    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }

    /// Bounding box of every indexed node position.
    pub fn bounds(&self) -> BoundingBox {
        self.spatial.bounds()
    }

    /// Snap a point to the nearest graph node.
    ///
    /// Returns `None` only when the graph is empty — the index is built at
    /// startup from a non-empty node set, so callers treat `None` as a
    /// fatal precondition violation rather than a routine miss.
    pub fn nearest_node(&self, p: GeoPoint) -> Option<&MapNode> {
        let id = self.spatial.nearest(p)?;
        self.graph.node(id)
    }

    /// Cleaned-string completions for a prefix, lexicographically ordered.
    ///
    /// The prefix is cleaned before matching, so case and punctuation in
    /// the query are irrelevant.  No match → empty vec.
    pub fn suggest_prefix(&self, text: &str) -> Vec<String> {
        self.names.suggest(&clean(text))
    }

    /// Every location whose cleaned name equals the cleaned query, in
    /// ascending id order.
    pub fn locations_by_name(&self, name: &str) -> Vec<Location> {
        let cleaned = clean(name);
        let Some(ids) = self.by_name.get(&cleaned) else {
            return Vec::new();
        };
        ids.iter()
            .filter_map(|id| self.graph.node(*id))
            .map(|node| Location {
                id:   node.id,
                lon:  node.pos.lon,
                lat:  node.pos.lat,
                name: node.name.clone().unwrap_or_default(),
            })
            .collect()
    }
}
