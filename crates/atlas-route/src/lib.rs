//! `atlas-route` — shortest-path search over the road graph.
//!
//! # Pluggability
//!
//! The engine calls routing via the [`Router`] trait, so applications can
//! swap in custom implementations (contraction hierarchies, turn-cost
//! models) without touching the rest of the workspace.  The default
//! [`AStarRouter`] is the reference algorithm: A* with a straight-line
//! heuristic over planar coordinates.
//!
//! # Cost metric
//!
//! Edge costs and the heuristic are both plain Euclidean distance over
//! `(lon, lat)` — the heuristic therefore never overestimates and is
//! consistent, which guarantees the first arrival at the target is optimal.

pub mod error;
pub mod router;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use router::{AStarRouter, Route, Router};
