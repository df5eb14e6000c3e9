//! Type-safe identifiers for maze entities.
//!
//! Newtype wrappers prevent mixing incompatible IDs at compile time:
//! a vertex id is only meaningful within one maze instance, a maze id
//! within one administrative service, and a group id is a service-issued
//! UUID.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// VertexId
// ============================================================================

/// Identifier of a vertex within one maze instance.
///
/// Non-negative, unique within one maze; carries no identity across mazes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct VertexId(u32);

impl VertexId {
    /// Creates a vertex id from its raw value.
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VertexId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}

// ============================================================================
// MazeId
// ============================================================================

/// Identifier of a maze registered with the administrative service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MazeId(u32);

impl MazeId {
    /// Creates a maze id from its raw value.
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MazeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MazeId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}

// ============================================================================
// GroupId
// ============================================================================

/// Identifier of a registered group, issued by the administrative service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(Uuid);

impl GroupId {
    /// Wraps a service-issued UUID.
    #[inline]
    #[must_use]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying UUID.
    #[inline]
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for GroupId {
    #[inline]
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id_display() {
        assert_eq!(VertexId::new(7).to_string(), "7");
    }

    #[test]
    fn test_vertex_id_ordering() {
        assert!(VertexId::new(1) < VertexId::new(2));
    }

    #[test]
    fn test_vertex_id_serde_transparent() {
        let id = VertexId::new(42);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "42");

        let back: VertexId = serde_json::from_str("42").expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn test_group_id_roundtrip() {
        let uuid = Uuid::new_v4();
        let id = GroupId::new(uuid);
        assert_eq!(id.as_uuid(), &uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[test]
    fn test_maze_id_from_u32() {
        let id: MazeId = 3.into();
        assert_eq!(id.as_u32(), 3);
    }
}
