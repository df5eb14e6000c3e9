//! Dijkstra shortest-path solver over a frozen [`GraphModel`].
//!
//! Runs after discovery finishes: tentative distances keyed in a binary
//! heap, outgoing edges of the closest vertex relaxed, and the search stops
//! early once the exit vertex pops (an optimization; correctness does not
//! depend on it).
//!
//! The graph may have vertices whose forward edges were never recorded
//! (per-request timeouts drop adjacency), so an exit that discovery reached
//! can still be unreachable in the recorded graph. That case returns an
//! explicit unreachable result instead of panicking.

// ============================================================================
// Imports
// ============================================================================

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use crate::graph::GraphModel;
use crate::identifiers::VertexId;

// ============================================================================
// Constants
// ============================================================================

/// Sentinel distance for vertices the entry cannot reach.
pub const UNREACHABLE: u64 = u64::MAX;

// ============================================================================
// DijkstraResult
// ============================================================================

/// Distances, predecessors and the reconstructed entry-to-exit path.
#[derive(Debug, Clone)]
pub struct DijkstraResult {
    /// Final distance per settled vertex; entry maps to 0. Vertices never
    /// settled are absent and count as [`UNREACHABLE`].
    pub distances: FxHashMap<VertexId, u64>,

    /// Predecessor on the shortest path; the entry has none.
    pub predecessors: FxHashMap<VertexId, VertexId>,

    /// Ordered path from entry to exit, empty when the exit is unreachable.
    pub path: Vec<VertexId>,

    /// Distance from entry to exit, [`UNREACHABLE`] when no path exists.
    pub distance: u64,
}

impl DijkstraResult {
    /// Returns `true` if the exit was reached.
    #[inline]
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.distance != UNREACHABLE
    }

    /// Final distance to `vertex`, [`UNREACHABLE`] if never settled.
    #[inline]
    #[must_use]
    pub fn distance_to(&self, vertex: VertexId) -> u64 {
        self.distances.get(&vertex).copied().unwrap_or(UNREACHABLE)
    }
}

// ============================================================================
// Solver
// ============================================================================

/// Computes the minimum-weight path from `entry` to `exit`.
///
/// Stops as soon as `exit` is settled. `entry == exit` yields the
/// single-element path `[entry]` with distance 0, even when the entry was
/// never recorded in the graph.
#[must_use]
pub fn shortest_path(graph: &GraphModel, entry: VertexId, exit: VertexId) -> DijkstraResult {
    let mut distances: FxHashMap<VertexId, u64> = FxHashMap::default();
    let mut predecessors: FxHashMap<VertexId, VertexId> = FxHashMap::default();
    let mut heap: BinaryHeap<Reverse<(u64, VertexId)>> = BinaryHeap::new();

    distances.insert(entry, 0);
    heap.push(Reverse((0, entry)));

    let mut exit_settled = entry == exit;

    while let Some(Reverse((dist, vertex))) = heap.pop() {
        // Stale heap entry: a shorter route was already settled.
        if dist > distances.get(&vertex).copied().unwrap_or(UNREACHABLE) {
            continue;
        }

        if vertex == exit {
            exit_settled = true;
            break;
        }

        let Some(edges) = graph.neighbors_of(vertex) else {
            // Forward edges never recorded (skipped vertex or frontier leaf).
            continue;
        };

        for (&neighbor, &weight) in edges {
            let candidate = dist.saturating_add(weight);
            if candidate < distances.get(&neighbor).copied().unwrap_or(UNREACHABLE) {
                distances.insert(neighbor, candidate);
                predecessors.insert(neighbor, vertex);
                heap.push(Reverse((candidate, neighbor)));
            }
        }
    }

    let distance = if exit_settled {
        distances.get(&exit).copied().unwrap_or(UNREACHABLE)
    } else {
        UNREACHABLE
    };

    let path = if distance == UNREACHABLE {
        Vec::new()
    } else {
        reconstruct(&predecessors, entry, exit)
    };

    DijkstraResult {
        distances,
        predecessors,
        path,
        distance,
    }
}

/// Walks the predecessor mapping backward from exit to entry, then reverses.
fn reconstruct(
    predecessors: &FxHashMap<VertexId, VertexId>,
    entry: VertexId,
    exit: VertexId,
) -> Vec<VertexId> {
    let mut path = vec![exit];
    let mut cursor = exit;

    while cursor != entry {
        match predecessors.get(&cursor) {
            Some(&prev) => {
                path.push(prev);
                cursor = prev;
            }
            // Broken chain: treat as unreachable rather than loop forever.
            None => return Vec::new(),
        }
    }

    path.reverse();
    path
}

// ============================================================================
// Tests
// ============================================================================
