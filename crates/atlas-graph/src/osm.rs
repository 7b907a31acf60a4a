//! OSM PBF loader — enabled with the `osm` Cargo feature.
//!
//! # Usage
//!
//! ```ignore
//! use std::path::Path;
//! use atlas_graph::osm::load_osm_pbf;
//!
//! let graph = load_osm_pbf(Path::new("berkeley.osm.pbf"))?;
//! ```
//!
//! # What is loaded
//!
//! Only `highway=*` ways contribute edges; buildings, POI ways, and
//! relations are ignored.  Nodes referenced by a way whose classification
//! is in the allowed set are flagged routable.  Node `name` tags are kept
//! for the search index.  All edges are undirected — the road graph models
//! reachability for map routing, not lane-level traffic rules.
//!
//! # Memory note
//!
//! The loader buffers all OSM nodes in a first pass (ways reference node
//! IDs that may appear later in the file), then copies only way-referenced
//! nodes into the builder; the cleanup pass in `build()` drops whatever
//! remains isolated.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use osmpbf::{Element, ElementReader};

use atlas_core::{GeoPoint, NodeId};

use crate::error::{GraphError, GraphResult};
use crate::graph::{RoadGraph, RoadGraphBuilder};
use crate::node::MapNode;

// ── Public entry point ────────────────────────────────────────────────────────

/// Load a road graph from an OSM PBF file.
///
/// # Errors
///
/// Returns [`GraphError::Osm`] on parse errors, [`GraphError::Io`] on file
/// errors.
pub fn load_osm_pbf(path: &Path) -> GraphResult<RoadGraph> {
    // ── Phase 1: collect all nodes + highway ways in one sequential pass ──
    let reader = ElementReader::from_path(path)?;

    let mut all_nodes: HashMap<i64, (GeoPoint, Option<String>)> = HashMap::new();
    let mut ways: Vec<HighwayWay> = Vec::new();

    reader
        .for_each(|elem| match elem {
            Element::Node(n) => {
                let tags: Vec<(&str, &str)> = n.tags().collect();
                let name = tag_value(&tags, "name").map(str::to_owned);
                all_nodes.insert(n.id(), (GeoPoint::new(n.lon(), n.lat()), name));
            }
            Element::DenseNode(n) => {
                let tags: Vec<(&str, &str)> = n.tags().collect();
                let name = tag_value(&tags, "name").map(str::to_owned);
                all_nodes.insert(n.id(), (GeoPoint::new(n.lon(), n.lat()), name));
            }
            Element::Way(w) => {
                let tags: Vec<(&str, &str)> = w.tags().collect();
                if let Some(class) = tag_value(&tags, "highway") {
                    ways.push(HighwayWay {
                        refs:     w.refs().collect(),
                        routable: is_allowed_highway(class),
                    });
                }
            }
            _ => {}
        })
        .map_err(|e| GraphError::Osm(e.to_string()))?;

    // ── Phase 2: identify way-referenced node IDs ─────────────────────────
    let way_node_ids: HashSet<i64> = ways
        .iter()
        .flat_map(|w| w.refs.iter().copied())
        .collect();
    // A node on any allowed-class way is routable, whatever else crosses it.
    let routable_ids: HashSet<i64> = ways
        .iter()
        .filter(|w| w.routable)
        .flat_map(|w| w.refs.iter().copied())
        .collect();

    let mut builder = RoadGraphBuilder::with_capacity(way_node_ids.len());
    for osm_id in &way_node_ids {
        let Some((pos, name)) = all_nodes.get(osm_id) else { continue };
        let mut node = MapNode::new(NodeId(*osm_id as u64), *pos);
        node.name = name.clone();
        node.routable = routable_ids.contains(osm_id);
        builder.add_node(node);
    }
    drop(all_nodes);

    // ── Phase 3: add undirected edges along each way's node sequence ──────
    for way in &ways {
        for window in way.refs.windows(2) {
            let (a, b) = (NodeId(window[0] as u64), NodeId(window[1] as u64));
            // Ways referencing nodes absent from the extract are common at
            // extract borders; skip those segments.
            let _ = builder.add_edge(a, b);
        }
    }

    Ok(builder.build())
}

// ── Internal types ────────────────────────────────────────────────────────────

struct HighwayWay {
    refs:     Vec<i64>,
    routable: bool,
}

// ── Tag helpers ───────────────────────────────────────────────────────────────

fn tag_value<'a>(tags: &[(&'a str, &'a str)], key: &str) -> Option<&'a str> {
    tags.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Road classifications whose nodes count as routable: non-service motor
/// roads.  Pedestrian streets, footways, and service alleys stay on the
/// map but are never snapped to as route endpoints by callers that filter
/// on the flag.
fn is_allowed_highway(class: &str) -> bool {
    matches!(
        class,
        "motorway"
            | "trunk"
            | "primary"
            | "secondary"
            | "tertiary"
            | "unclassified"
            | "residential"
            | "living_street"
            | "motorway_link"
            | "trunk_link"
            | "primary_link"
            | "secondary_link"
            | "tertiary_link"
    )
}
