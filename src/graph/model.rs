//! Mutable adjacency structure built incrementally during discovery.
//!
//! Edges are directed (origin → neighbor) and inserted only as a side effect
//! of a successfully decoded navigation reply. The discovery protocol reports
//! adjacency lists without weights, so every edge defaults to weight 1.
//!
//! # Invariant
//!
//! A vertex id appears as a *key* only after it has been visited (its own
//! adjacency observed); it may appear as a *neighbor* of an earlier vertex
//! before that. There is no removal operation: the model is append-only for
//! the lifetime of its owning session, and since exactly one session ever
//! touches it, no interior synchronization is needed.

// ============================================================================
// Imports
// ============================================================================

use rustc_hash::FxHashMap;

use crate::identifiers::VertexId;

// ============================================================================
// Constants
// ============================================================================

/// Weight assigned to every discovered edge.
const DEFAULT_EDGE_WEIGHT: u64 = 1;

// ============================================================================
// GraphModel
// ============================================================================

/// Directed graph keyed by vertex id, edge weights attached per neighbor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphModel {
    /// vertex → (neighbor → weight)
    adjacency: FxHashMap<VertexId, FxHashMap<VertexId, u64>>,
}

impl GraphModel {
    /// Creates an empty graph.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the observed adjacency of `vertex`, each edge with weight 1.
    ///
    /// Overwrites any previous record for the same vertex, so replaying an
    /// identical reply is idempotent.
    pub fn record_adjacency(&mut self, vertex: VertexId, neighbors: &[VertexId]) {
        let edges = neighbors
            .iter()
            .map(|&n| (n, DEFAULT_EDGE_WEIGHT))
            .collect();
        self.adjacency.insert(vertex, edges);
    }

    /// Returns `true` if `vertex` has been visited (its adjacency recorded).
    #[inline]
    #[must_use]
    pub fn has_vertex(&self, vertex: VertexId) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    /// Returns the outgoing edges of `vertex`, if it has been visited.
    #[inline]
    #[must_use]
    pub fn neighbors_of(&self, vertex: VertexId) -> Option<&FxHashMap<VertexId, u64>> {
        self.adjacency.get(&vertex)
    }

    /// Returns `true` if `from → to` is a recorded edge.
    #[inline]
    #[must_use]
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.adjacency
            .get(&from)
            .is_some_and(|edges| edges.contains_key(&to))
    }

    /// Number of visited vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` if nothing has been recorded yet.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterates over visited vertex ids.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }
}

// ============================================================================
// Tests
// ============================================================================
