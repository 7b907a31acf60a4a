//! Map graph node.

use std::hash::{Hash, Hasher};

use atlas_core::{GeoPoint, NodeId};

/// One node of the road graph: a geographic position with an identity.
///
/// Equality and hashing go by id alone — two `MapNode`s are the same node
/// iff their ids match, whatever their other fields say.  Positions and
/// names are ingestion data, not identity.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapNode {
    pub id:  NodeId,
    pub pos: GeoPoint,
    /// Display name, when the map data names this location.
    pub name: Option<String>,
    /// `true` when the node lies on an allowed road classification.
    pub routable: bool,
}

impl MapNode {
    pub fn new(id: NodeId, pos: GeoPoint) -> MapNode {
        MapNode { id, pos, name: None, routable: false }
    }

    /// Builder-style name attachment, for ingestion code.
    pub fn with_name(mut self, name: impl Into<String>) -> MapNode {
        self.name = Some(name.into());
        self
    }

    pub fn routable(mut self) -> MapNode {
        self.routable = true;
        self
    }
}

impl PartialEq for MapNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MapNode {}

impl Hash for MapNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
