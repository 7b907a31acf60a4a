//! `atlas-graph` — the road network and its query facade.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`node`]  | `MapNode` (id, position, optional name, routable flag)    |
//! | [`graph`] | `RoadGraph` (undirected adjacency), `RoadGraphBuilder`    |
//! | [`db`]    | `MapDb` — graph + spatial index + name index, `Location`  |
//! | [`osm`]   | `load_osm_pbf` (feature = `"osm"` only)                   |
//! | [`error`] | `GraphError`, `GraphResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `osm`   | Enables OSM PBF loading via the `osmpbf` crate.         |
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.      |

pub mod db;
pub mod error;
pub mod graph;
pub mod node;

#[cfg(feature = "osm")]
pub mod osm;


pub use db::{Location, MapDb};
pub use error::{GraphError, GraphResult};
pub use graph::{RoadGraph, RoadGraphBuilder};
pub use node::MapNode;
