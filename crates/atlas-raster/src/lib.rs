//! `atlas-raster` — composing selected tiles into one image.
//!
//! The compositor takes the row-major tile selection produced by
//! `atlas-tiles`, fetches each tile's pixels from a [`TileStore`], and
//! assembles a single canvas, optionally overlaying the active route as a
//! stroked polyline.
//!
//! # Degradation
//!
//! A tile that fails to fetch becomes a blank cell and flags the result as
//! incomplete — one missing image must not sink a whole viewport.  A
//! selection that does not form a rectangular grid, by contrast, is a bug
//! in tile selection and fails loudly.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `parallel` | Fetches tiles on Rayon's thread pool.               |

pub mod compositor;
pub mod error;
pub mod store;


pub use compositor::{ComposeOptions, Raster, ROUTE_STROKE_COLOR, ROUTE_STROKE_WIDTH_PX, compose};
pub use error::{RasterError, RasterResult};
pub use store::{DirTileStore, MemoryTileStore, TileStore};
