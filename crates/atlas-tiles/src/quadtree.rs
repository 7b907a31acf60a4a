//! Quadtree over tile metadata and viewport tile selection.

use atlas_core::{BoundingBox, Quadrant};

use crate::error::{TileError, TileResult};
use crate::manifest::{TileId, TileManifest};

struct QuadNode {
    bounds:   BoundingBox,
    tile:     TileId,
    children: [Option<Box<QuadNode>>; 4],
}

impl QuadNode {
    fn new(bounds: BoundingBox, tile: TileId) -> QuadNode {
        QuadNode { bounds, tile, children: [None, None, None, None] }
    }

    fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}

/// One selected tile: its id and geographic box.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileHit {
    pub tile:   TileId,
    pub bounds: BoundingBox,
}

/// Immutable four-way spatial partition over pre-rendered tile metadata.
///
/// Built once from a [`TileManifest`] at startup; [`select_tiles`]
/// (`&self`) is the only query.
///
/// [`select_tiles`]: TileIndex::select_tiles
pub struct TileIndex {
    root:      Option<QuadNode>,
    tile_size: u32,
    len:       usize,
}

impl TileIndex {
    /// An index with no tiles.  The first [`insert`](Self::insert) becomes
    /// the root (whole-extent) tile.
    pub fn new(tile_size: u32) -> TileIndex {
        TileIndex { root: None, tile_size, len: 0 }
    }

    /// Build the full index from a manifest.
    pub fn from_manifest(manifest: &TileManifest) -> TileResult<TileIndex> {
        let mut index = TileIndex::new(manifest.tile_size);
        for (id, bounds) in manifest.tiles() {
            index.insert(bounds, id)?;
        }
        Ok(index)
    }

    /// Number of tiles inserted.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Edge length of every tile image, in pixels.
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Bounding box of the root tile, if any tile has been inserted.
    pub fn root_bounds(&self) -> Option<BoundingBox> {
        self.root.as_ref().map(|n| n.bounds)
    }

    /// Insert a tile whose box lies within exactly one quadrant of an
    /// existing node (or covers the whole extent, for the first insert).
    ///
    /// # Errors
    ///
    /// [`TileError::QuadrantStraddle`] / [`TileError::OutsideParent`] when
    /// the box does not fit a single quadrant — a malformed manifest, since
    /// well-formed pyramids insert parents first with exact quadrant boxes.
    pub fn insert(&mut self, bounds: BoundingBox, tile: TileId) -> TileResult<()> {
        match self.root {
            None => self.root = Some(QuadNode::new(bounds, tile)),
            Some(ref mut root) => insert_into(root, bounds, tile)?,
        }
        self.len += 1;
        Ok(())
    }

    /// All tiles at the coarsest resolution satisfying `max_dpp` whose
    /// boxes intersect `viewport`, sorted row-major: upper-left latitude
    /// descending, ties by longitude ascending — the order the compositor
    /// consumes directly.
    ///
    /// A node is emitted once its own longitudinal distance-per-pixel is
    /// within `max_dpp`, or when no finer child exists.
    pub fn select_tiles(&self, viewport: &BoundingBox, max_dpp: f64) -> Vec<TileHit> {
        let mut hits = Vec::new();
        if let Some(root) = &self.root {
            select_into(root, viewport, max_dpp, self.tile_size, &mut hits);
        }
        hits.sort_by(|a, b| {
            b.bounds
                .ul
                .lat
                .total_cmp(&a.bounds.ul.lat)
                .then(a.bounds.ul.lon.total_cmp(&b.bounds.ul.lon))
        });
        hits
    }
}

fn insert_into(node: &mut QuadNode, bounds: BoundingBox, tile: TileId) -> TileResult<()> {
    let outside = bounds.ul.lon < node.bounds.ul.lon
        || bounds.lr.lon > node.bounds.lr.lon
        || bounds.ul.lat > node.bounds.ul.lat
        || bounds.lr.lat < node.bounds.lr.lat;
    if outside {
        return Err(TileError::OutsideParent { node: node.bounds, tile: bounds });
    }

    let mid_lon = node.bounds.mid_lon();
    let mid_lat = node.bounds.mid_lat();

    let west = bounds.lr.lon <= mid_lon;
    let east = bounds.ul.lon >= mid_lon;
    let north = bounds.lr.lat >= mid_lat;
    let south = bounds.ul.lat <= mid_lat;

    let quadrant = match (west, east, north, south) {
        (true, _, true, _) => Quadrant::NorthWest,
        (_, true, true, _) => Quadrant::NorthEast,
        (true, _, _, true) => Quadrant::SouthWest,
        (_, true, _, true) => Quadrant::SouthEast,
        _ => return Err(TileError::QuadrantStraddle { node: node.bounds, tile: bounds }),
    };

    match &mut node.children[quadrant.index()] {
        Some(child) => insert_into(child, bounds, tile),
        slot @ None => {
            *slot = Some(Box::new(QuadNode::new(bounds, tile)));
            Ok(())
        }
    }
}

fn select_into(
    node: &QuadNode,
    viewport: &BoundingBox,
    max_dpp: f64,
    tile_size: u32,
    hits: &mut Vec<TileHit>,
) {
    if !node.bounds.intersects(viewport) {
        return;
    }

    let dpp = node.bounds.width() / tile_size as f64;
    if node.is_leaf() || dpp <= max_dpp {
        hits.push(TileHit { tile: node.tile.clone(), bounds: node.bounds });
        return;
    }

    for child in node.children.iter().flatten() {
        select_into(child, viewport, max_dpp, tile_size, hits);
    }
}
