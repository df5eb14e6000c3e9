//! Explorer configuration.
//!
//! One [`ExplorerConfig`] describes a whole discovery run: the service URL,
//! the wire profile, and the concurrency/timeout knobs. Defaults mirror the
//! deployed clients: 100 sessions behind 10 connection permits, 5 connection
//! attempts 2s apart, 10s per request and a 60s idle window.
//!
//! # Example
//!
//! ```ignore
//! use maze_explorer::{ExplorerConfig, ProtocolVariant, VertexId};
//!
//! let config = ExplorerConfig::new("ws://localhost:8000/ws/g/0", VertexId::new(0))
//!     .with_variant(ProtocolVariant::Compact)
//!     .with_sessions(20)
//!     .with_permits(4);
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use crate::identifiers::VertexId;
use crate::protocol::ProtocolVariant;

// ============================================================================
// Defaults
// ============================================================================

/// Default number of independent discovery sessions (`K`).
pub const DEFAULT_SESSIONS: usize = 100;

/// Default number of connection permits (`P`).
pub const DEFAULT_PERMITS: usize = 10;

/// Default number of connection attempts per session.
pub const DEFAULT_CONNECT_RETRIES: u32 = 5;

/// Default fixed delay between connection attempts.
pub const DEFAULT_CONNECT_DELAY: Duration = Duration::from_secs(2);

/// Default per-request response timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Default per-session idle timeout.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(60);

// ============================================================================
// ExplorerConfig
// ============================================================================

/// Configuration for one discovery run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    /// Navigation service URL (`scheme://host:port/ws/{group}/{maze}`).
    pub url: String,

    /// Entry vertex id, supplied by the administrative service.
    pub entry: VertexId,

    /// Wire profile to speak. Never auto-detected.
    pub variant: ProtocolVariant,

    /// Number of independent sessions to launch (`K`).
    pub sessions: usize,

    /// Maximum concurrently open connections (`P`).
    pub permits: usize,

    /// Connection attempts before a session gives up.
    pub connect_retries: u32,

    /// Fixed delay between connection attempts.
    pub connect_delay: Duration,

    /// Per-request response timeout.
    pub request_timeout: Duration,

    /// Per-session idle timeout.
    pub idle_timeout: Duration,
}

// ============================================================================
// Constructors
// ============================================================================

impl ExplorerConfig {
    /// Creates a configuration with default knobs.
    #[must_use]
    pub fn new(url: impl Into<String>, entry: VertexId) -> Self {
        Self {
            url: url.into(),
            entry,
            variant: ProtocolVariant::default(),
            sessions: DEFAULT_SESSIONS,
            permits: DEFAULT_PERMITS,
            connect_retries: DEFAULT_CONNECT_RETRIES,
            connect_delay: DEFAULT_CONNECT_DELAY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
        }
    }
}

// ============================================================================
// Builder Methods
// ============================================================================

impl ExplorerConfig {
    /// Sets the entry vertex.
    #[inline]
    #[must_use]
    pub fn with_entry(mut self, entry: VertexId) -> Self {
        self.entry = entry;
        self
    }

    /// Sets the wire profile.
    #[inline]
    #[must_use]
    pub fn with_variant(mut self, variant: ProtocolVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the number of sessions (`K`).
    #[inline]
    #[must_use]
    pub fn with_sessions(mut self, sessions: usize) -> Self {
        self.sessions = sessions;
        self
    }

    /// Sets the connection permit count (`P`).
    #[inline]
    #[must_use]
    pub fn with_permits(mut self, permits: usize) -> Self {
        self.permits = permits;
        self
    }

    /// Sets the connection retry count.
    #[inline]
    #[must_use]
    pub fn with_connect_retries(mut self, retries: u32) -> Self {
        self.connect_retries = retries;
        self
    }

    /// Sets the fixed delay between connection attempts.
    #[inline]
    #[must_use]
    pub fn with_connect_delay(mut self, delay: Duration) -> Self {
        self.connect_delay = delay;
        self
    }

    /// Sets the per-request response timeout.
    #[inline]
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the per-session idle timeout.
    #[inline]
    #[must_use]
    pub fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
