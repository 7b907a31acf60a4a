//! Route-search error type.
//!
//! An unreachable target is *not* an error — it is an empty [`Route`]
//! (callers render "no route found").  Errors are reserved for queries the
//! graph cannot even pose, like unknown node ids.
//!
//! [`Route`]: crate::Route

use thiserror::Error;

use atlas_core::NodeId;

/// Errors produced by `atlas-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),
}

pub type RouteResult<T> = Result<T, RouteError>;
