//! Incremental maze graph and shortest-path solver.
//!
//! A [`GraphModel`] is built one vertex at a time from decoded navigation
//! replies and owned exclusively by one discovery session; once the session
//! freezes it, [`shortest_path`] consumes it to produce the entry-to-exit
//! route.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `model` | Adjacency structure built during discovery |
//! | `dijkstra` | Minimum-weight path solver over a frozen graph |

// ============================================================================
// Submodules
// ============================================================================

/// Adjacency structure built during discovery.
pub mod model;

/// Minimum-weight path solver.
pub mod dijkstra;

// ============================================================================
// Re-exports
// ============================================================================

pub use dijkstra::{DijkstraResult, UNREACHABLE, shortest_path};
pub use model::GraphModel;
