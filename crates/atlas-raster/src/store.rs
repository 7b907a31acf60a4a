//! Tile image storage abstraction.

use std::path::PathBuf;

use image::RgbaImage;
use rustc_hash::FxHashMap;

use atlas_tiles::TileId;

use crate::error::{RasterError, RasterResult};

/// Source of tile pixels, keyed by tile id.
///
/// Implementations must be `Send + Sync`: with the `parallel` feature the
/// compositor fetches from worker threads, and even without it the store
/// is shared across concurrent raster requests.
pub trait TileStore: Send + Sync {
    /// Fetch the pixels for one tile.
    fn fetch(&self, id: &TileId) -> RasterResult<RgbaImage>;
}

/// Tile store reading `<root>/<id>.png` from disk.
///
/// The conventional on-disk layout for a scraped pyramid: `root.png`,
/// `1.png` … `4444444.png` in one directory.
pub struct DirTileStore {
    root: PathBuf,
}

impl DirTileStore {
    pub fn new(root: impl Into<PathBuf>) -> DirTileStore {
        DirTileStore { root: root.into() }
    }
}

impl TileStore for DirTileStore {
    fn fetch(&self, id: &TileId) -> RasterResult<RgbaImage> {
        let path = self.root.join(format!("{id}.png"));
        Ok(image::open(path)?.to_rgba8())
    }
}

/// In-memory tile store, for tests and pre-warmed caches.
#[derive(Default)]
pub struct MemoryTileStore {
    tiles: FxHashMap<TileId, RgbaImage>,
}

impl MemoryTileStore {
    pub fn new() -> MemoryTileStore {
        MemoryTileStore::default()
    }

    pub fn insert(&mut self, id: TileId, pixels: RgbaImage) {
        self.tiles.insert(id, pixels);
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl TileStore for MemoryTileStore {
    fn fetch(&self, id: &TileId) -> RasterResult<RgbaImage> {
        self.tiles
            .get(id)
            .cloned()
            .ok_or_else(|| RasterError::TileNotFound(id.clone()))
    }
}
