//! Maze Explorer - Concurrent maze discovery and shortest-path client.
//!
//! This library discovers the topology of server-hosted mazes over a
//! WebSocket request/response protocol and solves them for a shortest
//! entry-to-exit path.
//!
//! # Architecture
//!
//! The client follows a session-per-connection model:
//!
//! - **Session ([`Explorer`])**: one connection, one graph, one BFS frontier
//! - **Pool ([`WorkerPool`])**: launches many sessions, bounds open
//!   connections with a counting permit
//! - **Protocol**: strictly synchronous - one move command, one reply
//!
//! Key design principles:
//!
//! - Sessions share nothing; the pool permit is the only synchronization
//! - One recoverable error kind (per-request timeout); everything else ends
//!   the session without touching siblings
//! - Wire profile is part of the configuration, never sniffed off the wire
//!
//! # Quick Start
//!
//! ```no_run
//! use maze_explorer::{ExplorerConfig, Result, VertexId, WorkerPool};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ExplorerConfig::new("ws://localhost:8000/ws/maze/0", VertexId::new(0))
//!         .with_sessions(100)
//!         .with_permits(10);
//!
//!     let report = WorkerPool::new(config).run().await;
//!     if let Some(solved) = report.best {
//!         println!("exit {} at distance {}", solved.exit, solved.distance);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`admin`] | Administrative HTTP API client |
//! | [`config`] | Run configuration and defaults |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`explorer`] | Discovery sessions and the worker pool |
//! | [`graph`] | Discovered-graph model and shortest-path solver |
//! | [`identifiers`] | Type-safe ID wrappers |
//! | [`protocol`] | Wire profiles and the move/reply codec |
//! | [`transport`] | WebSocket connection and retry supervisor |

// ============================================================================
// Modules
// ============================================================================

/// Administrative HTTP API client.
///
/// Group registration, maze listing and challenge bootstrap.
pub mod admin;

/// Run configuration.
///
/// [`ExplorerConfig`] with builder-style setters and the default knobs.
pub mod config;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Discovery sessions and the bounded-concurrency worker pool.
pub mod explorer;

/// Discovered-graph model and shortest-path solver.
pub mod graph;

/// Type-safe identifiers for maze entities.
///
/// Newtype wrappers prevent mixing incompatible IDs at compile time.
pub mod identifiers;

/// Wire profiles and the move/reply codec.
pub mod protocol;

/// WebSocket transport layer.
///
/// Single-owner connection plus the fixed-delay retry supervisor.
pub mod transport;

// ============================================================================
// Re-exports
// ============================================================================

// Administrative API types
pub use admin::{AdminClient, MazeInfo};

// Configuration
pub use config::ExplorerConfig;

// Error types
pub use error::{Error, Result};

// Explorer types
pub use explorer::{Explorer, RunReport, SessionOutcome, SolvedMaze, WorkerPool};

// Graph types
pub use graph::{DijkstraResult, GraphModel, UNREACHABLE, shortest_path};

// Identifier types
pub use identifiers::{GroupId, MazeId, VertexId};

// Protocol types
pub use protocol::{NavigationReply, ProtocolVariant, VertexKind};

// Transport types
pub use transport::{Connection, connect_with_retry};
