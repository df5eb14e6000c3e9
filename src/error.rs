//! Error types for the maze discovery client.
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`].
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`] |
//! | Connection | [`Error::Connection`], [`Error::ConnectionExhausted`], [`Error::Disconnected`] |
//! | Protocol | [`Error::Parse`] |
//! | Timeouts | [`Error::ResponseTimeout`], [`Error::IdleTimeout`] |
//! | Administrative | [`Error::Admin`] |
//! | External | [`Error::Io`], [`Error::Json`], [`Error::WebSocket`], [`Error::Http`] |
//!
//! # Propagation Policy
//!
//! Every error is session-local. A session maps its own failure into a
//! terminal [`SessionOutcome`](crate::explorer::SessionOutcome); nothing here
//! ever crosses to a sibling session or prevents the pool from completing.

// ============================================================================
// Imports
// ============================================================================

use std::io::Error as IoError;
use std::result::Result as StdResult;

use thiserror::Error;
use tokio_tungstenite::tungstenite::Error as WsError;

use crate::identifiers::VertexId;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
///
/// Each variant includes relevant context for per-session diagnostics.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when the explorer configuration is invalid, e.g. a service
    /// URL that does not parse.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    // ========================================================================
    // Connection Errors
    // ========================================================================
    /// A single connection attempt failed.
    #[error("Connection failed: {message}")]
    Connection {
        /// Description of the connection error.
        message: String,
    },

    /// All connection attempts failed.
    ///
    /// Raised by the connection supervisor after the configured number of
    /// consecutive failures. Session-fatal; siblings are unaffected.
    #[error("Connection exhausted after {attempts} attempts: {url}")]
    ConnectionExhausted {
        /// Number of attempts made.
        attempts: u32,
        /// The service URL that could not be reached.
        url: String,
    },

    /// The peer closed the connection.
    ///
    /// The session ends gracefully; discovery made so far is discarded.
    #[error("Connection closed by peer")]
    Disconnected,

    // ========================================================================
    // Timeout Errors
    // ========================================================================
    /// No response arrived within the per-request window.
    ///
    /// Recoverable: the affected vertex's adjacency is never recorded and
    /// discovery continues with the next frontier entry.
    #[error("No response within {timeout_ms}ms")]
    ResponseTimeout {
        /// Milliseconds waited before giving up on this request.
        timeout_ms: u64,
    },

    /// No inbound message of any kind within the session idle window.
    ///
    /// The session sends a terminal notice and ends; treated as a normal
    /// terminal outcome, not a failure.
    #[error("Session idle for {timeout_ms}ms")]
    IdleTimeout {
        /// Milliseconds of inactivity before the watchdog fired.
        timeout_ms: u64,
    },

    // ========================================================================
    // Protocol Errors
    // ========================================================================
    /// Malformed or unexpected server response.
    ///
    /// Session-fatal: once a frame cannot be decoded the discovery state can
    /// no longer be trusted.
    #[error("Parse error at vertex {vertex}: {message}")]
    Parse {
        /// Vertex whose response failed to decode.
        vertex: VertexId,
        /// Description of the decode failure.
        message: String,
    },

    // ========================================================================
    // Administrative API Errors
    // ========================================================================
    /// The administrative service answered with a non-success status.
    #[error("Admin API error ({status}): {message}")]
    Admin {
        /// HTTP status code.
        status: u16,
        /// Response body or status text.
        message: String,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// WebSocket error.
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] WsError),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[inline]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a connection-exhausted error.
    #[inline]
    pub fn connection_exhausted(attempts: u32, url: impl Into<String>) -> Self {
        Self::ConnectionExhausted {
            attempts,
            url: url.into(),
        }
    }

    /// Creates a per-request response timeout error.
    #[inline]
    pub fn response_timeout(timeout_ms: u64) -> Self {
        Self::ResponseTimeout { timeout_ms }
    }

    /// Creates a session idle timeout error.
    #[inline]
    pub fn idle_timeout(timeout_ms: u64) -> Self {
        Self::IdleTimeout { timeout_ms }
    }

    /// Creates a parse error for a vertex response.
    #[inline]
    pub fn parse(vertex: VertexId, message: impl Into<String>) -> Self {
        Self::Parse {
            vertex,
            message: message.into(),
        }
    }

    /// Creates an administrative API error.
    #[inline]
    pub fn admin(status: u16, message: impl Into<String>) -> Self {
        Self::Admin {
            status,
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is a timeout error.
    #[inline]
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::ResponseTimeout { .. } | Self::IdleTimeout { .. }
        )
    }

    /// Returns `true` if this is a connection error.
    #[inline]
    #[must_use]
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            Self::Connection { .. }
                | Self::ConnectionExhausted { .. }
                | Self::Disconnected
                | Self::WebSocket(_)
        )
    }

    /// Returns `true` if this error must terminate the owning session.
    ///
    /// [`Error::ResponseTimeout`] is the one recoverable kind: the explorer
    /// skips the affected vertex and keeps going. Everything else ends the
    /// session.
    #[inline]
    #[must_use]
    pub fn is_session_fatal(&self) -> bool {
        !matches!(self, Self::ResponseTimeout { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::ErrorKind;

    #[test]
    fn test_error_display() {
        let err = Error::connection("refused");
        assert_eq!(err.to_string(), "Connection failed: refused");
    }

    #[test]
    fn test_connection_exhausted_display() {
        let err = Error::connection_exhausted(5, "ws://localhost:8000/ws/g/0");
        assert_eq!(
            err.to_string(),
            "Connection exhausted after 5 attempts: ws://localhost:8000/ws/g/0"
        );
    }

    #[test]
    fn test_parse_error_carries_vertex() {
        let err = Error::parse(VertexId::new(7), "missing field `Adjacencia`");
        assert!(err.to_string().contains("vertex 7"));
    }

    #[test]
    fn test_is_timeout() {
        assert!(Error::response_timeout(10_000).is_timeout());
        assert!(Error::idle_timeout(60_000).is_timeout());
        assert!(!Error::Disconnected.is_timeout());
    }

    #[test]
    fn test_is_connection_error() {
        assert!(Error::connection("x").is_connection_error());
        assert!(Error::connection_exhausted(5, "url").is_connection_error());
        assert!(Error::Disconnected.is_connection_error());
        assert!(!Error::config("x").is_connection_error());
    }

    #[test]
    fn test_response_timeout_is_recoverable() {
        assert!(!Error::response_timeout(10_000).is_session_fatal());
        assert!(Error::parse(VertexId::new(0), "bad").is_session_fatal());
        assert!(Error::Disconnected.is_session_fatal());
        assert!(Error::idle_timeout(60_000).is_session_fatal());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = IoError::new(ErrorKind::ConnectionRefused, "refused");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<String>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
