//! `atlas-core` — foundational types for the `rust_atlas` map engine.
//!
//! This crate is a dependency of every other `atlas-*` crate.  It
//! intentionally has no `atlas-*` dependencies and no mandatory external
//! ones (only optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                             |
//! |----------|------------------------------------------------------|
//! | [`ids`]  | `NodeId`                                             |
//! | [`geo`]  | `GeoPoint`, `Axis`, planar distance                  |
//! | [`bbox`] | `BoundingBox`, `Quadrant`, intersection & clamping   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod bbox;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bbox::{BoundingBox, Quadrant};
pub use geo::{Axis, GeoPoint};
pub use ids::NodeId;
