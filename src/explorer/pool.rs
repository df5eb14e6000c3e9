//! Bounded-concurrency launcher for independent discovery sessions.
//!
//! Launches `K` sessions and caps the number of concurrently open
//! connections at `P` with a counting semaphore. The permit is the only
//! synchronization point in the system: sessions share no mutable state,
//! each owns its connection, graph and exploration state outright.
//!
//! A permit is acquired *before* a session attempts to connect and released
//! by RAII on every exit path, so neither success, failure, timeout nor a
//! task panic can leak one. The run completes only after every launched
//! session reached a terminal state.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::config::ExplorerConfig;
use crate::error::Error;
use crate::explorer::{Explorer, SessionOutcome, SolvedMaze};

// ============================================================================
// RunReport
// ============================================================================

/// Aggregate outcome of one pool run: per-terminal-state session counts
/// and the best solve found.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Sessions that found an exit.
    pub exit_found: usize,
    /// Sessions whose frontier emptied without an exit.
    pub frontier_exhausted: usize,
    /// Sessions ended by the idle watchdog.
    pub idle_timeout: usize,
    /// Sessions ended by a session-fatal error.
    pub failed: usize,
    /// Shortest-distance solve across all successful sessions.
    pub best: Option<SolvedMaze>,
}

impl RunReport {
    /// Total number of sessions that reached a terminal state.
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.exit_found + self.frontier_exhausted + self.idle_timeout + self.failed
    }

    /// Folds one session outcome into the report.
    fn record(&mut self, outcome: SessionOutcome) {
        match outcome {
            SessionOutcome::ExitFound(solved) => {
                self.exit_found += 1;
                let better = self
                    .best
                    .as_ref()
                    .is_none_or(|best| solved.distance < best.distance);
                if better {
                    self.best = Some(solved);
                }
            }
            SessionOutcome::FrontierExhausted { .. } => self.frontier_exhausted += 1,
            SessionOutcome::IdleTimeout => self.idle_timeout += 1,
            SessionOutcome::Failed(err) => {
                debug!(error = %err, "Recording failed session");
                self.failed += 1;
            }
        }
    }
}

// ============================================================================
// WorkerPool
// ============================================================================

/// Launches many independent [`Explorer`] sessions against one service URL.
pub struct WorkerPool {
    config: Arc<ExplorerConfig>,
}

impl WorkerPool {
    /// Creates a pool for the given run configuration.
    #[inline]
    #[must_use]
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Runs all sessions to completion and aggregates their outcomes.
    ///
    /// One session's failure never blocks siblings: every outcome, including
    /// errors, is folded into the [`RunReport`].
    pub async fn run(&self) -> RunReport {
        let semaphore = Arc::new(Semaphore::new(self.config.permits));
        let mut sessions: JoinSet<SessionOutcome> = JoinSet::new();

        info!(
            sessions = self.config.sessions,
            permits = self.config.permits,
            url = %self.config.url,
            "Launching discovery sessions"
        );

        for session in 0..self.config.sessions {
            let config = Arc::clone(&self.config);
            let semaphore = Arc::clone(&semaphore);

            sessions.spawn(async move {
                // Held for the whole session; dropped on every exit path.
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(closed) => {
                        return SessionOutcome::Failed(Error::connection(closed.to_string()));
                    }
                };

                debug!(session, "Permit acquired, session starting");
                Explorer::new(config).run().await
            });
        }

        let mut report = RunReport::default();
        while let Some(joined) = sessions.join_next().await {
            match joined {
                Ok(outcome) => report.record(outcome),
                Err(join_err) => {
                    error!(error = %join_err, "Session task aborted");
                    report.failed += 1;
                }
            }
        }

        info!(
            exit_found = report.exit_found,
            frontier_exhausted = report.frontier_exhausted,
            idle_timeout = report.idle_timeout,
            failed = report.failed,
            "Discovery run complete"
        );

        report
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::Ordering;
    use std::time::Duration;

    use crate::explorer::testserver::{MazeScript, TestServer};
    use crate::identifiers::VertexId;
    use crate::protocol::ProtocolVariant;

    fn solvable_script() -> MazeScript {
        MazeScript::new()
            .vertex(0, &[1, 2], false)
            .vertex(1, &[3], false)
            .vertex(2, &[], true)
            .vertex(3, &[], false)
    }

    fn pool_config(url: &str, sessions: usize, permits: usize) -> ExplorerConfig {
        ExplorerConfig::new(url, VertexId::new(0))
            .with_variant(ProtocolVariant::Structured)
            .with_sessions(sessions)
            .with_permits(permits)
            .with_connect_retries(3)
            .with_connect_delay(Duration::from_millis(10))
            .with_request_timeout(Duration::from_millis(300))
            .with_idle_timeout(Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_permit_discipline() {
        let server = TestServer::spawn(solvable_script()).await;
        let pool = WorkerPool::new(pool_config(&server.url, 20, 3));

        let report = pool.run().await;

        assert_eq!(report.total(), 20);
        assert_eq!(report.exit_found, 20);
        assert!(
            server.max_concurrent.load(Ordering::SeqCst) <= 3,
            "observed {} simultaneous connections with 3 permits",
            server.max_concurrent.load(Ordering::SeqCst)
        );
    }

    #[tokio::test]
    async fn test_best_solve_is_kept() {
        let server = TestServer::spawn(solvable_script()).await;
        let pool = WorkerPool::new(pool_config(&server.url, 5, 2));

        let report = pool.run().await;

        let best = report.best.expect("at least one solve");
        assert_eq!(best.path, vec![VertexId::new(0), VertexId::new(2)]);
        assert_eq!(best.distance, 1);
    }

    #[tokio::test]
    async fn test_exitless_maze_exhausts_every_session() {
        let script = MazeScript::new()
            .vertex(0, &[1], false)
            .vertex(1, &[0], false);
        let server = TestServer::spawn(script).await;
        let pool = WorkerPool::new(pool_config(&server.url, 8, 4));

        let report = pool.run().await;

        assert_eq!(report.frontier_exhausted, 8);
        assert_eq!(report.exit_found, 0);
        assert!(report.best.is_none());
    }

    #[tokio::test]
    async fn test_failing_sessions_do_not_affect_siblings() {
        // Every third connection is dropped mid-session; those sessions fail,
        // the rest still solve, and all of them reach a terminal state.
        let server = TestServer::spawn(solvable_script().drop_every(3)).await;
        let pool = WorkerPool::new(pool_config(&server.url, 12, 4));

        let report = pool.run().await;

        assert_eq!(report.total(), 12);
        assert!(report.failed >= 1, "expected some dropped sessions");
        assert!(report.exit_found >= 1, "expected surviving sessions to solve");
        assert_eq!(report.idle_timeout, 0);
    }

    #[tokio::test]
    async fn test_unreachable_service_fails_all_sessions() {
        let config = pool_config("ws://127.0.0.1:9", 4, 2)
            .with_connect_retries(2)
            .with_connect_delay(Duration::from_millis(10));
        let report = WorkerPool::new(config).run().await;

        assert_eq!(report.total(), 4);
        assert_eq!(report.failed, 4);
    }
}
