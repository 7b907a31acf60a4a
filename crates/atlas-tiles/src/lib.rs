//! `atlas-tiles` — hierarchical tile index.
//!
//! Pre-rendered map tiles form a fixed-depth quadtree pyramid: one root
//! tile covering the whole extent, each tile split into four quadrant
//! children at the next zoom level.  This crate answers the one question
//! the raster path needs: *which leaf tiles at the coarsest sufficient
//! resolution intersect this viewport?*
//!
//! # Crate layout
//!
//! | Module       | Contents                                     |
//! |--------------|----------------------------------------------|
//! | [`manifest`] | `TileId`, `TileManifest` (pyramid description) |
//! | [`quadtree`] | `TileIndex`, `TileHit`, selection            |
//! | [`error`]    | `TileError`, `TileResult<T>`                 |

pub mod error;
pub mod manifest;
pub mod quadtree;

#[cfg(test)]
mod tests;

pub use error::{TileError, TileResult};
pub use manifest::{TileId, TileManifest};
pub use quadtree::{TileHit, TileIndex};
