//! Tile-index error type.

use thiserror::Error;

use atlas_core::BoundingBox;

/// Errors produced by `atlas-tiles`.
///
/// Both variants indicate a malformed manifest — programmer error at
/// manifest-generation time, never a user-query error.
#[derive(Debug, Error)]
pub enum TileError {
    #[error("tile box {tile} straddles a quadrant boundary of {node}")]
    QuadrantStraddle { node: BoundingBox, tile: BoundingBox },

    #[error("tile box {tile} lies outside its parent {node}")]
    OutsideParent { node: BoundingBox, tile: BoundingBox },
}

pub type TileResult<T> = Result<T, TileError>;
