//! Discovery sessions and the bounded-concurrency worker pool.
//!
//! An [`Explorer`] drives exactly one session: one connection, one
//! [`GraphModel`](crate::graph::GraphModel), one exploration state, nothing
//! shared. The [`WorkerPool`] launches many of them and bounds the number
//! of concurrently open connections with a counting permit, the single
//! synchronization point in the whole system.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `session` | One discovery session (BFS state machine) |
//! | `pool` | Bounded-concurrency session launcher |

// ============================================================================
// Submodules
// ============================================================================

/// One discovery session.
pub mod session;

/// Bounded-concurrency session launcher.
pub mod pool;

#[cfg(test)]
pub(crate) mod testserver;

// ============================================================================
// Re-exports
// ============================================================================

pub use pool::{RunReport, WorkerPool};
pub use session::{Explorer, SessionOutcome, SolvedMaze};
