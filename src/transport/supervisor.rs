//! Retry policy for establishing a session connection.
//!
//! Attempts are bounded and separated by a **fixed** delay, not exponential
//! backoff. The delay curve is observable behavior the service counts on.

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::transport::Connection;

// ============================================================================
// Supervisor
// ============================================================================

/// Obtains a live connection, retrying up to `retries` times.
///
/// Each failed attempt is followed by the fixed `delay` before the next
/// one. An invalid URL fails immediately: it can never heal through
/// retrying.
///
/// # Errors
///
/// - [`Error::Config`] if the URL does not parse
/// - [`Error::ConnectionExhausted`] after `retries` consecutive failures
pub async fn connect_with_retry(url: &str, retries: u32, delay: Duration) -> Result<Connection> {
    for attempt in 1..=retries {
        match Connection::open(url).await {
            Ok(connection) => {
                debug!(url, attempt, "Connection established");
                return Ok(connection);
            }
            Err(err @ Error::Config { .. }) => return Err(err),
            Err(err) => {
                warn!(
                    url,
                    attempt,
                    retries,
                    error = %err,
                    delay_ms = delay.as_millis() as u64,
                    "Connection attempt failed, retrying after fixed delay"
                );
                sleep(delay).await;
            }
        }
    }

    Err(Error::connection_exhausted(retries, url))
}

// ============================================================================
// Tests
// ============================================================================
