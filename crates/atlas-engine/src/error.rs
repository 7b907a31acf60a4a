//! Engine error type, aggregating the sub-crate errors.

use thiserror::Error;

use atlas_graph::GraphError;
use atlas_raster::RasterError;
use atlas_route::RouteError;
use atlas_tiles::TileError;

/// Errors produced by `atlas-engine`.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A positional query arrived before any node was indexed.  The
    /// indices are built at startup from a non-empty node set, so this is
    /// a fatal precondition violation, not a routine condition.
    #[error("spatial index not built (empty node set)")]
    IndexNotBuilt,

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Tile(#[from] TileError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Raster(#[from] RasterError),
}

pub type EngineResult<T> = Result<T, EngineError>;
