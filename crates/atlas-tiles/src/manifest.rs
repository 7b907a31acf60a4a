//! Tile naming and the fixed-depth pyramid manifest.

use std::fmt;

use atlas_core::{BoundingBox, Quadrant};

/// Name of one pre-rendered tile image.
///
/// The root tile is `"root"`; every other tile appends one quadrant digit
/// per zoom level to its parent's name (1 = NW, 2 = NE, 3 = SW, 4 = SE),
/// so `"41"` is the north-west child of the south-east child of the root.
/// The digit count is therefore the tile's zoom depth.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileId(String);

const ROOT_NAME: &str = "root";

impl TileId {
    pub fn new(name: impl Into<String>) -> TileId {
        TileId(name.into())
    }

    /// The whole-extent tile.
    pub fn root() -> TileId {
        TileId(ROOT_NAME.to_owned())
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT_NAME
    }

    /// The name of this tile's child in `quadrant`.
    pub fn child(&self, quadrant: Quadrant) -> TileId {
        let digit = match quadrant {
            Quadrant::NorthWest => '1',
            Quadrant::NorthEast => '2',
            Quadrant::SouthWest => '3',
            Quadrant::SouthEast => '4',
        };
        if self.is_root() {
            TileId(digit.to_string())
        } else {
            let mut name = self.0.clone();
            name.push(digit);
            TileId(name)
        }
    }

    /// Zoom depth: number of quadrant digits (root = 0).
    pub fn depth(&self) -> u32 {
        if self.is_root() { 0 } else { self.0.len() as u32 }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Description of a complete tile pyramid: root extent, tile pixel size,
/// and the number of zoom levels below the root.
///
/// This is the input contract with the tile-rendering collaborator — the
/// engine never looks at image bytes to learn the pyramid shape.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileManifest {
    /// Bounding box of the root tile (and of every zoom level's union).
    pub root: BoundingBox,
    /// Edge length of every tile image, in pixels.
    pub tile_size: u32,
    /// Zoom levels below the root; depth 0 is a root-only pyramid.
    pub depth: u32,
}

impl TileManifest {
    pub fn new(root: BoundingBox, tile_size: u32, depth: u32) -> TileManifest {
        TileManifest { root, tile_size, depth }
    }

    /// Total tile count: 4⁰ + 4¹ + … + 4^depth.
    pub fn tile_count(&self) -> usize {
        (0..=self.depth).map(|d| 4usize.pow(d)).sum()
    }

    /// Enumerate every `(TileId, BoundingBox)` of the pyramid, parents
    /// before children — the order `TileIndex::from_manifest` requires.
    pub fn tiles(&self) -> Vec<(TileId, BoundingBox)> {
        let mut out = Vec::with_capacity(self.tile_count());
        push_tile(TileId::root(), self.root, self.depth, &mut out);
        out
    }
}

fn push_tile(id: TileId, bounds: BoundingBox, levels_left: u32, out: &mut Vec<(TileId, BoundingBox)>) {
    out.push((id.clone(), bounds));
    if levels_left == 0 {
        return;
    }
    for quadrant in Quadrant::ALL {
        push_tile(
            id.child(quadrant),
            bounds.quadrant(quadrant),
            levels_left - 1,
            out,
        );
    }
}
