//! One discovery session: breadth-first frontier expansion over a live
//! connection.
//!
//! # State Machine
//!
//! ```text
//! Idle → Connecting → Exploring → ExitFound          → Closed
//!                               → FrontierExhausted  → Closed
//!                               → IdleTimeout        → Closed
//!                               → Failed             → Closed
//! ```
//!
//! The frontier is FIFO, so vertices are discovered in non-decreasing hop
//! distance from the entry. A per-request timeout is recoverable (the
//! vertex's adjacency is simply never recorded); a decode failure or a peer
//! disconnect is session-fatal. The idle watchdog is enforced alongside the
//! per-request timeout: if no inbound frame of any kind arrives for the
//! whole idle window, the session sends a terminal notice and ends.
//!
//! On `ExitFound` the session freezes its graph and runs the shortest-path
//! solver; no other terminal state invokes it.

// ============================================================================
// Imports
// ============================================================================

use std::collections::VecDeque;
use std::sync::Arc;

use rustc_hash::FxHashSet;
use tracing::{debug, error, info, warn};

use crate::config::ExplorerConfig;
use crate::error::{Error, Result};
use crate::graph::{GraphModel, shortest_path};
use crate::identifiers::VertexId;
use crate::protocol::{decode_reply, encode_move};
use crate::transport::{Connection, connect_with_retry};

// ============================================================================
// SolvedMaze
// ============================================================================

/// Result of a session that found the exit.
#[derive(Debug, Clone)]
pub struct SolvedMaze {
    /// Entry vertex the session was seeded with.
    pub entry: VertexId,
    /// Exit vertex discovered.
    pub exit: VertexId,
    /// Minimum-weight path from entry to exit; empty if the recorded graph
    /// lost the connecting edges to skipped vertices.
    pub path: Vec<VertexId>,
    /// Path weight, [`UNREACHABLE`](crate::graph::UNREACHABLE) when `path`
    /// is empty.
    pub distance: u64,
    /// Number of vertices the session visited.
    pub visited: usize,
}

// ============================================================================
// SessionOutcome
// ============================================================================

/// Terminal state of one discovery session.
#[derive(Debug)]
pub enum SessionOutcome {
    /// An exit vertex was visited; carries the solved path.
    ExitFound(SolvedMaze),

    /// The frontier emptied without an exit. A valid terminal outcome,
    /// not an error.
    FrontierExhausted {
        /// Number of vertices the session visited.
        visited: usize,
    },

    /// No inbound traffic for the whole idle window.
    IdleTimeout,

    /// A session-fatal error: connection exhausted, parse failure,
    /// disconnect or transport error.
    Failed(Error),
}

impl SessionOutcome {
    /// Short label for logs and reports.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::ExitFound(_) => "exit-found",
            Self::FrontierExhausted { .. } => "frontier-exhausted",
            Self::IdleTimeout => "idle-timeout",
            Self::Failed(_) => "failed",
        }
    }
}

// ============================================================================
// ExplorationState
// ============================================================================

/// Session-local BFS bookkeeping: visited set plus FIFO frontier.
///
/// Owned exclusively by one [`Explorer`]; created empty at session start
/// and discarded at session end.
#[derive(Debug, Default)]
struct ExplorationState {
    /// Vertices whose move command has been sent (at most once each).
    visited: FxHashSet<VertexId>,
    /// Vertices ever enqueued, to keep the frontier duplicate-free.
    queued: FxHashSet<VertexId>,
    /// Pending vertices in discovery order.
    frontier: VecDeque<VertexId>,
}

impl ExplorationState {
    /// Seeds the frontier with the entry vertex.
    fn seeded(entry: VertexId) -> Self {
        let mut state = Self::default();
        state.enqueue([entry]);
        state
    }

    /// Pops the next pending vertex.
    fn next(&mut self) -> Option<VertexId> {
        self.frontier.pop_front()
    }

    /// Marks `vertex` visited; returns `false` if it already was.
    fn mark_visited(&mut self, vertex: VertexId) -> bool {
        self.visited.insert(vertex)
    }

    /// Enqueues every neighbor not yet visited and not already queued.
    fn enqueue(&mut self, neighbors: impl IntoIterator<Item = VertexId>) {
        for neighbor in neighbors {
            if !self.visited.contains(&neighbor) && self.queued.insert(neighbor) {
                self.frontier.push_back(neighbor);
            }
        }
    }

    fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

// ============================================================================
// Explorer
// ============================================================================

/// Drives one discovery session over one connection.
pub struct Explorer {
    config: Arc<ExplorerConfig>,
}

impl Explorer {
    /// Creates an explorer for one session of the given run.
    #[inline]
    #[must_use]
    pub fn new(config: Arc<ExplorerConfig>) -> Self {
        Self { config }
    }

    /// Runs the session to a terminal state.
    ///
    /// Never returns an error: every failure is folded into
    /// [`SessionOutcome::Failed`] so the caller (the pool) treats all
    /// sessions uniformly. The connection is closed on every path.
    pub async fn run(self) -> SessionOutcome {
        let mut connection = match connect_with_retry(
            &self.config.url,
            self.config.connect_retries,
            self.config.connect_delay,
        )
        .await
        {
            Ok(connection) => connection,
            Err(err) => {
                error!(url = %self.config.url, error = %err, "Session could not connect");
                return SessionOutcome::Failed(err);
            }
        };

        let outcome = self.explore(&mut connection).await;

        match &outcome {
            SessionOutcome::IdleTimeout => connection.close_with_notice("idle timeout").await,
            _ => connection.close().await,
        }

        debug!(outcome = outcome.label(), "Session closed");
        outcome
    }

    /// The `Exploring` state: BFS frontier expansion until a terminal state.
    async fn explore(&self, connection: &mut Connection) -> SessionOutcome {
        let entry = self.config.entry;
        let variant = self.config.variant;

        let mut graph = GraphModel::new();
        let mut state = ExplorationState::seeded(entry);

        info!(entry = %entry, %variant, "Starting maze discovery");

        let exit = loop {
            let Some(vertex) = state.next() else {
                info!(visited = state.visited_count(), "Frontier exhausted, no exit found");
                return SessionOutcome::FrontierExhausted {
                    visited: state.visited_count(),
                };
            };

            if !state.mark_visited(vertex) {
                continue;
            }

            match self.visit(connection, &mut graph, &mut state, vertex).await {
                Ok(Some(exit)) => break exit,
                Ok(None) => {}
                Err(err) if err.is_session_fatal() => {
                    if matches!(err, Error::IdleTimeout { .. }) {
                        warn!(idle_ms = self.config.idle_timeout.as_millis() as u64,
                              "Session idle window elapsed");
                        return SessionOutcome::IdleTimeout;
                    }
                    error!(vertex = %vertex, error = %err, "Session aborted");
                    return SessionOutcome::Failed(err);
                }
                Err(err) => {
                    // Per-request timeout: this vertex's adjacency is lost,
                    // discovery continues with the rest of the frontier.
                    warn!(vertex = %vertex, error = %err, "No reply for vertex, skipping");
                }
            }
        };

        let solved = self.solve(&graph, entry, exit, state.visited_count());
        SessionOutcome::ExitFound(solved)
    }

    /// Sends the move command for `vertex` and applies the reply.
    ///
    /// Returns `Ok(Some(exit))` when the visited vertex is the exit.
    async fn visit(
        &self,
        connection: &mut Connection,
        graph: &mut GraphModel,
        state: &mut ExplorationState,
        vertex: VertexId,
    ) -> Result<Option<VertexId>> {
        let command = encode_move(self.config.variant, vertex)?;
        connection.send_text(command).await?;
        debug!(vertex = %vertex, "Moved to vertex");

        let raw = self.recv_bounded(connection).await?;
        let reply = decode_reply(self.config.variant, vertex, &raw)?;

        // Structured profile implies the current vertex from our command.
        let current = reply.current.unwrap_or(vertex);
        graph.record_adjacency(current, &reply.adjacency);
        debug!(vertex = %current, adjacency = ?reply.adjacency, "Recorded adjacency");

        if reply.kind.is_exit() {
            info!(exit = %current, "Exit vertex found");
            return Ok(Some(current));
        }

        state.enqueue(reply.adjacency.iter().copied());
        Ok(None)
    }

    /// Waits for the next reply, honoring both the per-request timeout and
    /// the session idle window.
    async fn recv_bounded(&self, connection: &mut Connection) -> Result<String> {
        let idle_remaining = self.config.idle_timeout.saturating_sub(connection.idle_for());
        if idle_remaining.is_zero() {
            return Err(Error::idle_timeout(self.config.idle_timeout.as_millis() as u64));
        }

        let wait = self.config.request_timeout.min(idle_remaining);
        match connection.recv_text(wait).await {
            Err(Error::ResponseTimeout { .. })
                if connection.idle_for() >= self.config.idle_timeout =>
            {
                Err(Error::idle_timeout(self.config.idle_timeout.as_millis() as u64))
            }
            other => other,
        }
    }

    /// Hands the frozen graph to the shortest-path solver.
    fn solve(
        &self,
        graph: &GraphModel,
        entry: VertexId,
        exit: VertexId,
        visited: usize,
    ) -> SolvedMaze {
        let result = shortest_path(graph, entry, exit);

        if result.is_reachable() {
            info!(
                entry = %entry,
                exit = %exit,
                distance = result.distance,
                hops = result.path.len(),
                "Shortest path computed"
            );
        } else {
            // Possible when timed-out vertices left holes in the graph.
            warn!(entry = %entry, exit = %exit, "Exit found but not reachable in recorded graph");
        }

        SolvedMaze {
            entry,
            exit,
            path: result.path,
            distance: result.distance,
            visited,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
