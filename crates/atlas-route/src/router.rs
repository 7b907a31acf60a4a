//! Routing trait and the A* implementation.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use atlas_core::{GeoPoint, NodeId};
use atlas_graph::RoadGraph;

use crate::error::{RouteError, RouteResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: node ids from source to target inclusive,
/// plus the total path length.
///
/// An empty `nodes` list means "no route": the target is unreachable, or
/// source and target snapped to the same node.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Nodes to visit in order, from source to target.
    pub nodes: Vec<NodeId>,
    /// Total Euclidean path length in degrees.
    pub total_distance: f64,
}

impl Route {
    /// The "no route" value.
    pub fn empty() -> Route {
        Route::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: the graph is immutable after
/// build, so any number of in-flight requests may route concurrently.
pub trait Router: Send + Sync {
    /// Compute a shortest route from `from` to `to`.
    ///
    /// Returns an empty [`Route`] when no path exists or `from == to`;
    /// returns [`RouteError::NodeNotFound`] when either id is not in the
    /// graph.
    fn route(&self, graph: &RoadGraph, from: NodeId, to: NodeId) -> RouteResult<Route>;
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

/// A* over the undirected road graph with the straight-line heuristic.
///
/// The frontier is a duplicate-tolerant min-heap: improving a node's cost
/// re-pushes it, and stale entries are discarded on pop via the closed set.
/// Tie-breaking is by `NodeId`, so equal-priority pops are deterministic.
pub struct AStarRouter;

impl Router for AStarRouter {
    fn route(&self, graph: &RoadGraph, from: NodeId, to: NodeId) -> RouteResult<Route> {
        astar(graph, from, to)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// `f64` priority with a total order, for use inside `BinaryHeap`.
#[derive(Copy, Clone, PartialEq, Debug)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Per-query search bookkeeping, allocated fresh per call and never shared.
///
/// Node lifecycle: absent from all maps → open (`g_score` set, in the
/// frontier) → closed (finalized, never relaxed again).
struct SearchState {
    g_score:   FxHashMap<NodeId, f64>,
    came_from: FxHashMap<NodeId, NodeId>,
    closed:    FxHashSet<NodeId>,
}

impl SearchState {
    fn new() -> SearchState {
        SearchState {
            g_score:   FxHashMap::default(),
            came_from: FxHashMap::default(),
            closed:    FxHashSet::default(),
        }
    }

    fn g(&self, id: NodeId) -> f64 {
        self.g_score.get(&id).copied().unwrap_or(f64::INFINITY)
    }
}

fn astar(graph: &RoadGraph, from: NodeId, to: NodeId) -> RouteResult<Route> {
    let from_pos = graph
        .node(from)
        .ok_or(RouteError::NodeNotFound(from))?
        .pos;
    let target_pos = graph
        .node(to)
        .ok_or(RouteError::NodeNotFound(to))?
        .pos;

    if from == to {
        return Ok(Route::empty());
    }

    // Straight-line estimate of remaining cost; never overestimates since
    // edge costs use the same metric.
    let heuristic = |pos: GeoPoint| pos.distance(target_pos);

    let mut state = SearchState::new();
    state.g_score.insert(from, 0.0);

    // Min-heap: Reverse makes BinaryHeap (max) behave as min-heap.
    // Secondary key NodeId ensures deterministic tie-breaking.
    let mut open: BinaryHeap<Reverse<(Cost, NodeId)>> = BinaryHeap::new();
    open.push(Reverse((Cost(heuristic(from_pos)), from)));

    while let Some(Reverse((_, node))) = open.pop() {
        if node == to {
            return Ok(reconstruct(&state, from, to));
        }

        // Skip stale frontier entries for already-finalized nodes.
        if !state.closed.insert(node) {
            continue;
        }

        let node_pos = match graph.position(node) {
            Some(p) => p,
            None => continue,
        };
        let node_g = state.g(node);

        for neighbor in graph.neighbors(node) {
            if state.closed.contains(&neighbor) {
                continue;
            }
            let Some(neighbor_pos) = graph.position(neighbor) else { continue };

            let tentative = node_g + node_pos.distance(neighbor_pos);
            if tentative < state.g(neighbor) {
                state.g_score.insert(neighbor, tentative);
                state.came_from.insert(neighbor, node);
                let f = tentative + heuristic(neighbor_pos);
                open.push(Reverse((Cost(f), neighbor)));
            }
        }
    }

    // Frontier exhausted without reaching the target: disconnected.
    Ok(Route::empty())
}

fn reconstruct(state: &SearchState, from: NodeId, to: NodeId) -> Route {
    let mut nodes = vec![to];
    let mut current = to;
    while current != from {
        // Every node past the source has a predecessor by construction.
        match state.came_from.get(&current) {
            Some(&prev) => {
                nodes.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    nodes.reverse();

    Route { nodes, total_distance: state.g(to) }
}
