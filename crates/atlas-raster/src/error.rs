//! Raster-subsystem error type.

use thiserror::Error;

use atlas_tiles::TileId;

/// Errors produced by `atlas-raster`.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The tile selection does not form a complete rectangular grid — a
    /// defect in tile selection, surfaced rather than patched over.
    #[error("tile selection is not a rectangular grid: {tiles} tiles across {rows} rows")]
    NonRectangularGrid { tiles: usize, rows: usize },

    /// Composition was asked to render zero tiles.
    #[error("no tiles selected for composition")]
    EmptyTileSet,

    #[error("tile {0} not present in store")]
    TileNotFound(TileId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type RasterResult<T> = Result<T, RasterError>;
