//! End-to-end tests for atlas-engine: one engine, every public operation.

#[cfg(test)]
mod helpers {
    use image::{Rgba, RgbaImage};

    use atlas_core::{BoundingBox, GeoPoint, NodeId};
    use atlas_graph::{MapNode, RoadGraph, RoadGraphBuilder};
    use atlas_raster::MemoryTileStore;
    use atlas_tiles::TileManifest;

    use crate::{EngineBuilder, MapEngine};

    pub const TILE_PX: u32 = 8;

    /// Root box: lon 0..4, lat 0..4, depth-2 pyramid.
    pub fn manifest() -> TileManifest {
        TileManifest::new(BoundingBox::from_corners(0.0, 4.0, 4.0, 0.0), TILE_PX, 2)
    }

    /// The T-shaped downtown: A(1,1)—B(2,1)—C(3,1), B—D(2,2).
    /// C is named "Corner Cafe", D "Depot".
    pub fn graph() -> RoadGraph {
        let mut b = RoadGraphBuilder::new();
        let a = b.add_node(MapNode::new(NodeId(1), GeoPoint::new(1.0, 1.0)).routable());
        let bb = b.add_node(MapNode::new(NodeId(2), GeoPoint::new(2.0, 1.0)).routable());
        let c = b.add_node(
            MapNode::new(NodeId(3), GeoPoint::new(3.0, 1.0))
                .with_name("Corner Cafe")
                .routable(),
        );
        let d = b.add_node(
            MapNode::new(NodeId(4), GeoPoint::new(2.0, 2.0)).with_name("Depot"),
        );
        b.add_edge(a, bb).unwrap();
        b.add_edge(bb, c).unwrap();
        b.add_edge(bb, d).unwrap();
        b.build()
    }

    pub fn engine() -> MapEngine {
        EngineBuilder::new(graph(), manifest()).build().unwrap()
    }

    /// A store holding a solid-white image for every tile in the pyramid.
    pub fn full_store() -> MemoryTileStore {
        let mut store = MemoryTileStore::new();
        for (id, _) in manifest().tiles() {
            store.insert(id, RgbaImage::from_pixel(TILE_PX, TILE_PX, Rgba([255; 4])));
        }
        store
    }
}

// ── Snapping ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod snapping {
    use atlas_core::NodeId;
    use atlas_graph::RoadGraphBuilder;
    use crate::{EngineBuilder, EngineError};

    #[test]
    fn nearest_node_basic() {
        let engine = super::helpers::engine();
        assert_eq!(engine.nearest_node(2.9, 0.8).unwrap().id, NodeId(3));
    }

    #[test]
    fn out_of_range_coordinates_are_clamped() {
        let engine = super::helpers::engine();
        // Far north-east of the root box: clamps to (4, 4); nearest node
        // to that corner is D(2,2).
        assert_eq!(engine.nearest_node(700.0, 700.0).unwrap().id, NodeId(4));
        // Far west: clamps to (0, lat); nearest is A(1,1).
        assert_eq!(engine.nearest_node(-700.0, 1.0).unwrap().id, NodeId(1));
    }

    #[test]
    fn empty_graph_is_a_precondition_violation() {
        let engine = EngineBuilder::new(
            RoadGraphBuilder::new().build(),
            super::helpers::manifest(),
        )
        .build()
        .unwrap();
        let err = engine.nearest_node(1.0, 1.0).unwrap_err();
        assert!(matches!(err, EngineError::IndexNotBuilt));
    }
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use atlas_core::NodeId;
    use crate::EngineError;

    #[test]
    fn shortest_path_in_order() {
        let engine = super::helpers::engine();
        let path = engine.shortest_path(NodeId(1), NodeId(3)).unwrap();
        assert_eq!(path, vec![NodeId(1), NodeId(2), NodeId(3)]);
    }

    #[test]
    fn same_node_means_no_route() {
        let engine = super::helpers::engine();
        assert!(engine.shortest_path(NodeId(2), NodeId(2)).unwrap().is_empty());
    }

    #[test]
    fn unknown_id_is_an_error() {
        let engine = super::helpers::engine();
        let err = engine.shortest_path(NodeId(1), NodeId(42)).unwrap_err();
        assert!(matches!(err, EngineError::Route(_)));
    }
}

// ── Tile selection ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tiles {
    use atlas_core::BoundingBox;

    #[test]
    fn viewport_is_clamped_to_root() {
        let engine = super::helpers::engine();
        // Viewport reaching far west of the map: the west edge clamps to
        // the root, so selection still succeeds.
        let viewport = BoundingBox::from_corners(-100.0, 3.0, 1.0, 2.0);
        let leaf_dpp = 1.0 / super::helpers::TILE_PX as f64;
        let hits = engine.select_tiles(&viewport, leaf_dpp);
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|h| h.bounds.ul.lon >= 0.0));
    }

    #[test]
    fn fully_disjoint_viewport_selects_nothing() {
        let engine = super::helpers::engine();
        let viewport = BoundingBox::from_corners(100.0, 3.0, 101.0, 2.0);
        assert!(engine.select_tiles(&viewport, 0.1).is_empty());
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use atlas_core::NodeId;

    #[test]
    fn suggest_and_resolve() {
        let engine = super::helpers::engine();
        assert_eq!(engine.suggest_prefix("cor"), vec!["corner cafe"]);
        assert!(engine.suggest_prefix("xyz").is_empty());

        let locations = engine.locations_by_name("corner cafe");
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].id, NodeId(3));
        assert_eq!(locations[0].name, "Corner Cafe");
    }
}

// ── Raster ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod raster {
    use atlas_core::{BoundingBox, NodeId};
    use atlas_raster::{MemoryTileStore, RasterError, ROUTE_STROKE_COLOR};
    use crate::EngineError;

    #[test]
    fn raster_covers_viewport_with_metadata() {
        let engine = super::helpers::engine();
        let store = super::helpers::full_store();
        // Middle of the map at leaf resolution: 1°-wide viewport rendered
        // 8 px wide → dpp = 1/8 = the depth-2 tile dpp.
        let viewport = BoundingBox::from_corners(1.4, 2.6, 2.4, 1.6);
        let raster = engine.raster(&viewport, 8, None, &store).unwrap();

        assert!(raster.complete);
        assert_eq!(raster.depth, 2);
        // The tile union contains the viewport.
        assert!(raster.bounds.ul.lon <= 1.4 && raster.bounds.lr.lon >= 2.4);
        assert!(raster.bounds.ul.lat >= 2.6 && raster.bounds.lr.lat <= 1.6);
        // 2×2 tiles of 8 px.
        assert_eq!((raster.width, raster.height), (16, 16));
    }

    #[test]
    fn raster_with_route_overlay() {
        let engine = super::helpers::engine();
        let store = super::helpers::full_store();
        let path = engine.shortest_path(NodeId(1), NodeId(3)).unwrap();

        let viewport = BoundingBox::from_corners(0.5, 1.5, 3.5, 0.5);
        let raster = engine
            .raster(&viewport, 32, Some(&path), &store)
            .unwrap();

        // Some pixel along lat=1 carries the stroke color.
        let stroked = raster
            .image
            .pixels()
            .any(|p| *p == ROUTE_STROKE_COLOR);
        assert!(stroked);
    }

    #[test]
    fn route_with_unknown_node_fails_before_composing() {
        let engine = super::helpers::engine();
        let store = super::helpers::full_store();
        let viewport = BoundingBox::from_corners(0.5, 1.5, 3.5, 0.5);
        let err = engine
            .raster(&viewport, 32, Some(&[NodeId(1), NodeId(42)]), &store)
            .unwrap_err();
        assert!(matches!(err, EngineError::Graph(_)));
    }

    #[test]
    fn missing_tiles_degrade_not_fail() {
        let engine = super::helpers::engine();
        let store = MemoryTileStore::new(); // nothing in it
        let viewport = BoundingBox::from_corners(1.4, 2.6, 2.4, 1.6);
        let raster = engine.raster(&viewport, 8, None, &store).unwrap();
        assert!(!raster.complete);
    }

    #[test]
    fn disjoint_viewport_raster_is_an_error() {
        let engine = super::helpers::engine();
        let store = super::helpers::full_store();
        let viewport = BoundingBox::from_corners(100.0, 3.0, 101.0, 2.0);
        let err = engine.raster(&viewport, 8, None, &store).unwrap_err();
        assert!(matches!(err, EngineError::Raster(RasterError::EmptyTileSet)));
    }
}
