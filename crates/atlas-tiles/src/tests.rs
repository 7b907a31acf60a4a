//! Unit tests for atlas-tiles.

#[cfg(test)]
mod helpers {
    use atlas_core::BoundingBox;
    use crate::TileManifest;

    /// A 4°×4° extent at (0..4) lon, (0..4) lat — round numbers keep the
    /// quadrant midpoints exact and easy to assert against.
    pub fn square_manifest(depth: u32) -> TileManifest {
        TileManifest::new(BoundingBox::from_corners(0.0, 4.0, 4.0, 0.0), 256, depth)
    }
}

// ── Manifest enumeration ──────────────────────────────────────────────────────

#[cfg(test)]
mod manifest {
    use atlas_core::Quadrant;
    use crate::TileId;

    #[test]
    fn pyramid_tile_counts() {
        assert_eq!(super::helpers::square_manifest(0).tile_count(), 1);
        assert_eq!(super::helpers::square_manifest(1).tile_count(), 5);
        assert_eq!(super::helpers::square_manifest(2).tile_count(), 21);
        assert_eq!(super::helpers::square_manifest(2).tiles().len(), 21);
    }

    #[test]
    fn parents_enumerate_before_children() {
        let tiles = super::helpers::square_manifest(2).tiles();
        for (i, (id, _)) in tiles.iter().enumerate() {
            if id.is_root() {
                continue;
            }
            let parent = TileId::new(&id.as_str()[..id.as_str().len() - 1]);
            let parent = if parent.as_str().is_empty() { TileId::root() } else { parent };
            let parent_at = tiles.iter().position(|(t, _)| *t == parent).unwrap();
            assert!(parent_at < i, "{id} enumerated before its parent");
        }
    }

    #[test]
    fn quadrant_digit_naming() {
        let root = TileId::root();
        assert_eq!(root.child(Quadrant::NorthWest).as_str(), "1");
        assert_eq!(root.child(Quadrant::SouthEast).as_str(), "4");
        let se_nw = root.child(Quadrant::SouthEast).child(Quadrant::NorthWest);
        assert_eq!(se_nw.as_str(), "41");
        assert_eq!(se_nw.depth(), 2);
        assert_eq!(root.depth(), 0);
    }
}

// ── Insertion ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod insert {
    use atlas_core::BoundingBox;
    use crate::{TileError, TileId, TileIndex};

    #[test]
    fn from_manifest_inserts_everything() {
        let manifest = super::helpers::square_manifest(3);
        let index = TileIndex::from_manifest(&manifest).unwrap();
        assert_eq!(index.len(), manifest.tile_count());
        assert_eq!(index.root_bounds(), Some(manifest.root));
    }

    #[test]
    fn straddling_box_is_rejected() {
        let manifest = super::helpers::square_manifest(1);
        let mut index = TileIndex::from_manifest(&manifest).unwrap();
        // Spans the longitude midline of the root.
        let straddler = BoundingBox::from_corners(1.0, 4.0, 3.0, 2.0);
        let err = index.insert(straddler, TileId::new("bogus")).unwrap_err();
        assert!(matches!(err, TileError::QuadrantStraddle { .. }));
    }

    #[test]
    fn box_outside_root_is_rejected() {
        let manifest = super::helpers::square_manifest(1);
        let mut index = TileIndex::from_manifest(&manifest).unwrap();
        let outside = BoundingBox::from_corners(10.0, 4.0, 12.0, 2.0);
        let err = index.insert(outside, TileId::new("bogus")).unwrap_err();
        assert!(matches!(err, TileError::OutsideParent { .. }));
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod select {
    use atlas_core::BoundingBox;
    use crate::{TileHit, TileIndex};

    /// dpp of a depth-`d` tile in the 4°-wide, 256-px square fixture.
    fn dpp_at(depth: u32) -> f64 {
        (4.0 / 2f64.powi(depth as i32)) / 256.0
    }

    #[test]
    fn coarse_request_returns_root_only() {
        let index = TileIndex::from_manifest(&super::helpers::square_manifest(2)).unwrap();
        let viewport = BoundingBox::from_corners(0.5, 3.5, 3.5, 0.5);
        let hits = index.select_tiles(&viewport, dpp_at(0));
        assert_eq!(hits.len(), 1);
        assert!(hits[0].tile.is_root());
    }

    #[test]
    fn full_extent_viewport_selects_a_whole_level() {
        let manifest = super::helpers::square_manifest(2);
        let index = TileIndex::from_manifest(&manifest).unwrap();
        let hits = index.select_tiles(&manifest.root, dpp_at(2));
        // Whole extent at depth 2 → all 16 leaves.
        assert_eq!(hits.len(), 16);
        assert!(hits.iter().all(|h| h.tile.depth() == 2));
    }

    #[test]
    fn selection_covers_viewport_exactly() {
        let manifest = super::helpers::square_manifest(2);
        let index = TileIndex::from_manifest(&manifest).unwrap();
        // Viewport inside the NE area, overlapping four depth-2 tiles.
        let viewport = BoundingBox::from_corners(2.5, 3.5, 3.5, 2.5);
        let hits = index.select_tiles(&viewport, dpp_at(2));
        assert_eq!(hits.len(), 4);

        // Union covers the viewport…
        let ul_lon = hits.iter().map(|h| h.bounds.ul.lon).fold(f64::MAX, f64::min);
        let ul_lat = hits.iter().map(|h| h.bounds.ul.lat).fold(f64::MIN, f64::max);
        let lr_lon = hits.iter().map(|h| h.bounds.lr.lon).fold(f64::MIN, f64::max);
        let lr_lat = hits.iter().map(|h| h.bounds.lr.lat).fold(f64::MAX, f64::min);
        assert!(ul_lon <= viewport.ul.lon && ul_lat >= viewport.ul.lat);
        assert!(lr_lon >= viewport.lr.lon && lr_lat <= viewport.lr.lat);

        // …with no interior overlap between any two selected tiles.
        for (i, a) in hits.iter().enumerate() {
            for b in &hits[i + 1..] {
                let overlap_lon = a.bounds.ul.lon.max(b.bounds.ul.lon)
                    < a.bounds.lr.lon.min(b.bounds.lr.lon);
                let overlap_lat = a.bounds.lr.lat.max(b.bounds.lr.lat)
                    < a.bounds.ul.lat.min(b.bounds.ul.lat);
                assert!(!(overlap_lon && overlap_lat), "{} overlaps {}", a.tile, b.tile);
            }
        }
    }

    #[test]
    fn coarsest_sufficient_level_is_chosen() {
        let manifest = super::helpers::square_manifest(3);
        let index = TileIndex::from_manifest(&manifest).unwrap();
        let viewport = BoundingBox::from_corners(0.1, 3.9, 3.9, 0.1);

        // A dpp between level 1 and level 2 must select level 2 (the
        // coarsest that still satisfies the constraint).
        let between = (dpp_at(1) + dpp_at(2)) / 2.0;
        let hits = index.select_tiles(&viewport, between);
        assert!(hits.iter().all(|h| h.tile.depth() == 2));

        // Exactly level 1's dpp is satisfied by level 1 itself.
        let hits = index.select_tiles(&viewport, dpp_at(1));
        assert!(hits.iter().all(|h| h.tile.depth() == 1));
    }

    #[test]
    fn demand_finer_than_leaves_returns_leaves() {
        let manifest = super::helpers::square_manifest(1);
        let index = TileIndex::from_manifest(&manifest).unwrap();
        let hits = index.select_tiles(&manifest.root, dpp_at(10));
        assert_eq!(hits.len(), 4);
        assert!(hits.iter().all(|h| h.tile.depth() == 1));
    }

    #[test]
    fn row_major_ordering() {
        let manifest = super::helpers::square_manifest(1);
        let index = TileIndex::from_manifest(&manifest).unwrap();
        let hits = index.select_tiles(&manifest.root, dpp_at(1));
        let names: Vec<&str> = hits.iter().map(|h| h.tile.as_str()).collect();
        // North row west→east, then south row: 1, 2, 3, 4.
        assert_eq!(names, ["1", "2", "3", "4"]);

        // Latitudes descend row by row, longitudes ascend within a row.
        let rows: Vec<&[TileHit]> = hits.chunks(2).collect();
        assert!(rows[0][0].bounds.ul.lat > rows[1][0].bounds.ul.lat);
        assert!(rows[0][0].bounds.ul.lon < rows[0][1].bounds.ul.lon);
    }

    #[test]
    fn disjoint_viewport_selects_nothing() {
        let index = TileIndex::from_manifest(&super::helpers::square_manifest(2)).unwrap();
        let far_away = BoundingBox::from_corners(40.0, 44.0, 44.0, 40.0);
        assert!(index.select_tiles(&far_away, dpp_at(2)).is_empty());
    }
}
