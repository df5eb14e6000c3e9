//! WebSocket transport layer.
//!
//! One [`Connection`] per discovery session, opened against the navigation
//! service URL (`scheme://host:port/ws/{group}/{maze}`). The protocol has no
//! pipelining: within a session every exchange is strictly synchronous, so a
//! received frame is always attributable to the immediately preceding
//! command and the connection is plain owned state with no locking.
//!
//! # Connection Lifecycle
//!
//! 1. [`connect_with_retry`] — bounded attempts with a fixed inter-attempt delay
//! 2. [`Connection::send_text`] / [`Connection::recv_text`] — one command, one reply
//! 3. [`Connection::close`] — graceful shutdown on every session exit path
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `connection` | WebSocket client connection |
//! | `supervisor` | Retry policy for establishing connections |

// ============================================================================
// Submodules
// ============================================================================

/// WebSocket client connection.
pub mod connection;

/// Retry policy for establishing connections.
pub mod supervisor;

// ============================================================================
// Re-exports
// ============================================================================

pub use connection::Connection;
pub use supervisor::connect_with_retry;
