//! `atlas-engine` — the map engine facade.
//!
//! One `MapEngine` per process: built once at startup from a finalized
//! road graph and a tile manifest, then shared read-only across every
//! in-flight request.  The engine exposes exactly the operations the API
//! gateway consumes:
//!
//! | Operation                  | Backing component                       |
//! |----------------------------|-----------------------------------------|
//! | [`MapEngine::nearest_node`]      | kd-tree (atlas-spatial via atlas-graph) |
//! | [`MapEngine::shortest_path`]     | A* (atlas-route)                        |
//! | [`MapEngine::select_tiles`]      | quadtree (atlas-tiles)                  |
//! | [`MapEngine::suggest_prefix`]    | trie (atlas-search via atlas-graph)     |
//! | [`MapEngine::locations_by_name`] | name index (atlas-graph)                |
//! | [`MapEngine::raster`]            | compositor (atlas-raster)               |
//!
//! The "active route" drawn on rasters is an explicit parameter of
//! [`MapEngine::raster`], not engine state — its lifecycle (set on a
//! successful route query, cleared on request, overwritten by the next
//! query) belongs to the gateway.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use atlas_engine::EngineBuilder;
//! use atlas_tiles::TileManifest;
//!
//! let engine = EngineBuilder::new(graph, manifest).build()?;
//! let node = engine.nearest_node(-122.26, 37.87)?;
//! let path = engine.shortest_path(node.id, other.id)?;
//! ```

pub mod builder;
pub mod engine;
pub mod error;

#[cfg(test)]
mod tests;

pub use builder::EngineBuilder;
pub use engine::MapEngine;
pub use error::{EngineError, EngineResult};
