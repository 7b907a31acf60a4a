//! The engine facade: clamping policy + delegation to the components.

use atlas_core::{BoundingBox, GeoPoint, NodeId};
use atlas_graph::{Location, MapDb, MapNode};
use atlas_raster::{ComposeOptions, Raster, TileStore, compose};
use atlas_route::{AStarRouter, Router};
use atlas_tiles::{TileHit, TileIndex};

use crate::error::{EngineError, EngineResult};

/// Immutable query engine.  Construct via
/// [`EngineBuilder`](crate::EngineBuilder); share by reference across
/// request handlers — every operation takes `&self` and allocates only
/// per-query state.
pub struct MapEngine<R: Router = AStarRouter> {
    db:     MapDb,
    tiles:  TileIndex,
    router: R,
}

impl<R: Router> MapEngine<R> {
    pub(crate) fn from_parts(db: MapDb, tiles: TileIndex, router: R) -> Self {
        Self { db, tiles, router }
    }

    pub fn db(&self) -> &MapDb {
        &self.db
    }

    /// The root tile's bounding box — the extent all query coordinates are
    /// clamped into.
    pub fn root_bounds(&self) -> Option<BoundingBox> {
        self.tiles.root_bounds()
    }

    // ── Core public operations ────────────────────────────────────────────

    /// Snap a lon/lat pair to the nearest graph node.
    ///
    /// Out-of-range coordinates are clamped to the root bounding box
    /// before the index query — documented policy, not an error.
    ///
    /// # Errors
    ///
    /// [`EngineError::IndexNotBuilt`] when the graph has no nodes.
    pub fn nearest_node(&self, lon: f64, lat: f64) -> EngineResult<&MapNode> {
        let mut query = GeoPoint::new(lon, lat);
        if let Some(root) = self.tiles.root_bounds() {
            query = root.clamp(query);
        }
        self.db.nearest_node(query).ok_or(EngineError::IndexNotBuilt)
    }

    /// Shortest path between two graph nodes, as node ids in path order.
    ///
    /// Empty means "no route": unreachable target, or `source == target`.
    pub fn shortest_path(&self, source: NodeId, target: NodeId) -> EngineResult<Vec<NodeId>> {
        let route = self.router.route(self.db.graph(), source, target)?;
        Ok(route.nodes)
    }

    /// Tiles covering `viewport` at the coarsest resolution whose
    /// distance-per-pixel is within `max_dpp`, row-major.  The viewport is
    /// clamped to the root box first.
    pub fn select_tiles(&self, viewport: &BoundingBox, max_dpp: f64) -> Vec<TileHit> {
        let clamped = match self.tiles.root_bounds() {
            Some(root) => root.clamped(viewport),
            None => *viewport,
        };
        self.tiles.select_tiles(&clamped, max_dpp)
    }

    /// Cleaned-name completions for a prefix; empty when nothing matches.
    pub fn suggest_prefix(&self, text: &str) -> Vec<String> {
        self.db.suggest_prefix(text)
    }

    /// Every location matching a (cleaned) name.
    pub fn locations_by_name(&self, name: &str) -> Vec<Location> {
        self.db.locations_by_name(name)
    }

    /// Compose the raster for a viewport `width_px` pixels wide, drawing
    /// `route` (a node-id path, typically the gateway's active route) over
    /// it when present.
    ///
    /// The requested distance-per-pixel is derived from the *raw* viewport
    /// and width; clamping to the root box happens after, so a viewport
    /// hanging off the map edge still renders at its requested zoom.
    pub fn raster<S: TileStore + ?Sized>(
        &self,
        viewport: &BoundingBox,
        width_px: u32,
        route: Option<&[NodeId]>,
        store: &S,
    ) -> EngineResult<Raster> {
        let max_dpp = viewport.width() / width_px as f64;
        let hits = self.select_tiles(viewport, max_dpp);

        let route_points = match route {
            Some(ids) => Some(self.resolve_positions(ids)?),
            None => None,
        };

        let opts = ComposeOptions {
            tile_size: self.tiles.tile_size(),
            ..ComposeOptions::default()
        };
        let raster = compose(&hits, store, route_points.as_deref(), &opts)?;
        Ok(raster)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn resolve_positions(&self, ids: &[NodeId]) -> EngineResult<Vec<GeoPoint>> {
        ids.iter()
            .map(|&id| {
                self.db
                    .graph()
                    .require_node(id)
                    .map(|n| n.pos)
                    .map_err(EngineError::from)
            })
            .collect()
    }
}
