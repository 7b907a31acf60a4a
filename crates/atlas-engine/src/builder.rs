//! Fluent builder for constructing a [`MapEngine`].

use atlas_graph::{MapDb, RoadGraph};
use atlas_route::{AStarRouter, Router};
use atlas_tiles::{TileIndex, TileManifest};

use crate::engine::MapEngine;
use crate::error::EngineResult;

/// Fluent builder for [`MapEngine<R>`].
///
/// # Required inputs
///
/// - [`RoadGraph`] — the finalized road network from the ingestion
///   collaborator.
/// - [`TileManifest`] — the pyramid description from the tile-rendering
///   collaborator.
///
/// # Optional inputs (have defaults)
///
/// | Method       | Default         |
/// |--------------|-----------------|
/// | `.router(r)` | [`AStarRouter`] |
///
/// # Example
///
/// ```rust,ignore
/// let engine = EngineBuilder::new(graph, manifest)
///     .router(MyContractionRouter::new())
///     .build()?;
/// ```
pub struct EngineBuilder<R: Router = AStarRouter> {
    graph:    RoadGraph,
    manifest: TileManifest,
    router:   R,
}

impl EngineBuilder<AStarRouter> {
    /// Create a builder with all required inputs and the default router.
    pub fn new(graph: RoadGraph, manifest: TileManifest) -> Self {
        Self { graph, manifest, router: AStarRouter }
    }
}

impl<R: Router> EngineBuilder<R> {
    /// Swap the routing implementation.
    pub fn router<R2: Router>(self, router: R2) -> EngineBuilder<R2> {
        EngineBuilder {
            graph:    self.graph,
            manifest: self.manifest,
            router,
        }
    }

    /// Build every index and produce the immutable engine.
    ///
    /// # Errors
    ///
    /// Fails only on a malformed tile manifest (boxes that straddle
    /// quadrant boundaries).
    pub fn build(self) -> EngineResult<MapEngine<R>> {
        let tiles = TileIndex::from_manifest(&self.manifest)?;
        let db = MapDb::build(self.graph);

        log::info!(
            "map engine built: {} graph nodes, {} tiles (root {})",
            db.graph().node_count(),
            tiles.len(),
            self.manifest.root,
        );

        Ok(MapEngine::from_parts(db, tiles, self.router))
    }
}
