//! Unit tests for atlas-route.
//!
//! Fixtures are tiny hand-built graphs with exact integer coordinates so
//! expected costs are exact.

#[cfg(test)]
mod helpers {
    use atlas_core::{GeoPoint, NodeId};
    use atlas_graph::{MapNode, RoadGraph, RoadGraphBuilder};

    /// A(0,0) — B(1,0) — C(2,0), with D(1,1) hanging off B.
    ///
    /// Shortest A→C is the straight line through B (cost 2.0); shortest
    /// A→D goes A→B→D (cost 1 + 1 = 2.0).
    pub fn t_graph() -> RoadGraph {
        let mut b = RoadGraphBuilder::new();
        let a = b.add_node(MapNode::new(NodeId(1), GeoPoint::new(0.0, 0.0)));
        let bb = b.add_node(MapNode::new(NodeId(2), GeoPoint::new(1.0, 0.0)));
        let c = b.add_node(MapNode::new(NodeId(3), GeoPoint::new(2.0, 0.0)));
        let d = b.add_node(MapNode::new(NodeId(4), GeoPoint::new(1.0, 1.0)));
        b.add_edge(a, bb).unwrap();
        b.add_edge(bb, c).unwrap();
        b.add_edge(bb, d).unwrap();
        b.build()
    }

    /// Five nodes in a straight line at unit spacing.
    pub fn line_graph() -> RoadGraph {
        let mut b = RoadGraphBuilder::new();
        let ids: Vec<NodeId> = (0..5)
            .map(|i| b.add_node(MapNode::new(NodeId(i), GeoPoint::new(i as f64, 0.0))))
            .collect();
        for pair in ids.windows(2) {
            b.add_edge(pair[0], pair[1]).unwrap();
        }
        b.build()
    }

    /// Two separate components: 1–2 and 10–11.
    pub fn split_graph() -> RoadGraph {
        let mut b = RoadGraphBuilder::new();
        let a = b.add_node(MapNode::new(NodeId(1), GeoPoint::new(0.0, 0.0)));
        let c = b.add_node(MapNode::new(NodeId(2), GeoPoint::new(1.0, 0.0)));
        let x = b.add_node(MapNode::new(NodeId(10), GeoPoint::new(5.0, 5.0)));
        let y = b.add_node(MapNode::new(NodeId(11), GeoPoint::new(6.0, 5.0)));
        b.add_edge(a, c).unwrap();
        b.add_edge(x, y).unwrap();
        b.build()
    }

    /// A triangle with exact 3-4-5 legs: A(0,0), M(3,4), T(6,0).
    /// Direct A–T costs 6; the detour through M costs 5 + 5 = 10.
    pub fn detour_graph() -> RoadGraph {
        let mut b = RoadGraphBuilder::new();
        let a = b.add_node(MapNode::new(NodeId(1), GeoPoint::new(0.0, 0.0)));
        let m = b.add_node(MapNode::new(NodeId(3), GeoPoint::new(3.0, 4.0)));
        let t = b.add_node(MapNode::new(NodeId(4), GeoPoint::new(6.0, 0.0)));
        b.add_edge(a, m).unwrap();
        b.add_edge(m, t).unwrap();
        b.add_edge(a, t).unwrap();
        b.build()
    }
}

// ── Shortest paths ────────────────────────────────────────────────────────────

#[cfg(test)]
mod shortest {
    use atlas_core::NodeId;
    use crate::{AStarRouter, Router};

    #[test]
    fn line_path_in_order_with_exact_length() {
        let g = super::helpers::line_graph();
        let route = AStarRouter.route(&g, NodeId(0), NodeId(4)).unwrap();
        let ids: Vec<u64> = route.nodes.iter().map(|n| n.0).collect();
        assert_eq!(ids, [0, 1, 2, 3, 4]);
        assert_eq!(route.total_distance, 4.0);
    }

    #[test]
    fn t_graph_fixtures() {
        let g = super::helpers::t_graph();

        let ac = AStarRouter.route(&g, NodeId(1), NodeId(3)).unwrap();
        let ids: Vec<u64> = ac.nodes.iter().map(|n| n.0).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(ac.total_distance, 2.0);

        let ad = AStarRouter.route(&g, NodeId(1), NodeId(4)).unwrap();
        let ids: Vec<u64> = ad.nodes.iter().map(|n| n.0).collect();
        assert_eq!(ids, [1, 2, 4]);
        assert_eq!(ad.total_distance, 2.0);
    }

    #[test]
    fn reverse_direction_mirrors_forward() {
        let g = super::helpers::t_graph();
        let ca = AStarRouter.route(&g, NodeId(3), NodeId(1)).unwrap();
        let ids: Vec<u64> = ca.nodes.iter().map(|n| n.0).collect();
        assert_eq!(ids, [3, 2, 1]);
        assert_eq!(ca.total_distance, 2.0);
    }

    #[test]
    fn direct_edge_beats_longer_detour() {
        // A(0,0)–T(6,0) direct costs 6; A→M(3,4)→T costs 5 + 5 = 10.
        let g = super::helpers::detour_graph();
        let route = AStarRouter.route(&g, NodeId(1), NodeId(4)).unwrap();
        let ids: Vec<u64> = route.nodes.iter().map(|n| n.0).collect();
        assert_eq!(ids, [1, 4]);
        assert_eq!(route.total_distance, 6.0);
    }

    #[test]
    fn optimal_matches_exhaustive_search() {
        // Every simple path in the T graph from A, checked by hand: the
        // router must return the cheapest one for each target.
        let g = super::helpers::t_graph();
        for (target, want_cost) in [(2u64, 1.0), (3, 2.0), (4, 2.0)] {
            let route = AStarRouter.route(&g, NodeId(1), NodeId(target)).unwrap();
            assert_eq!(route.total_distance, want_cost, "target {target}");
        }
    }
}

// ── Edge cases ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod edge_cases {
    use atlas_core::NodeId;
    use crate::{AStarRouter, RouteError, Router};

    #[test]
    fn same_source_and_target_is_empty() {
        let g = super::helpers::t_graph();
        let route = AStarRouter.route(&g, NodeId(2), NodeId(2)).unwrap();
        assert!(route.is_empty());
        assert_eq!(route.total_distance, 0.0);
    }

    #[test]
    fn disconnected_components_yield_empty() {
        let g = super::helpers::split_graph();
        let route = AStarRouter.route(&g, NodeId(1), NodeId(10)).unwrap();
        assert!(route.is_empty());
    }

    #[test]
    fn unknown_node_is_an_error() {
        let g = super::helpers::t_graph();
        let err = AStarRouter.route(&g, NodeId(1), NodeId(777)).unwrap_err();
        assert!(matches!(err, RouteError::NodeNotFound(NodeId(777))));
        let err = AStarRouter.route(&g, NodeId(777), NodeId(1)).unwrap_err();
        assert!(matches!(err, RouteError::NodeNotFound(NodeId(777))));
    }

    #[test]
    fn repeated_queries_are_deterministic() {
        let g = super::helpers::t_graph();
        let first = AStarRouter.route(&g, NodeId(1), NodeId(3)).unwrap();
        for _ in 0..5 {
            let again = AStarRouter.route(&g, NodeId(1), NodeId(3)).unwrap();
            assert_eq!(again.nodes, first.nodes);
        }
    }
}
