//! Strongly typed node identifier.
//!
//! `NodeId` is `Copy + Ord + Hash` so it can be used as a map key and sorted
//! collection element without ceremony.  The inner integer is `pub` because
//! it is the ingestion-assigned id (an OSM node id in practice) and callers
//! routinely need to serialize it as a plain number.

use std::fmt;

/// Identifier of a map graph node.
///
/// Assigned by the ingestion collaborator; unique within a `RoadGraph`.
/// Two nodes are the same node iff their ids match.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u64);

impl NodeId {
    /// Sentinel meaning "no valid ID" — equivalent to `u64::MAX`.
    pub const INVALID: NodeId = NodeId(u64::MAX);
}

impl Default for NodeId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<u64> for NodeId {
    #[inline(always)]
    fn from(raw: u64) -> Self {
        NodeId(raw)
    }
}
