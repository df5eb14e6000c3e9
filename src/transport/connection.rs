//! WebSocket client connection to the navigation service.
//!
//! The navigation protocol is strictly request/response, so the connection
//! is a single owned stream: the session sends one text frame and waits for
//! the next text frame with a bounded timeout. Control frames (ping, pong)
//! and binary frames are consumed and skipped, but they still count as
//! inbound traffic for the session idle watchdog.

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::time::{Instant, timeout};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, trace};
use url::Url;

use crate::error::{Error, Result};

// ============================================================================
// Types
// ============================================================================

/// Client-side WebSocket stream, possibly TLS-wrapped.
type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

// ============================================================================
// Connection
// ============================================================================

/// One live WebSocket connection, owned exclusively by one session.
///
/// Not shared and not `Clone`: the exchange discipline (send, then await the
/// matching reply) only holds while a single owner drives the stream.
#[derive(Debug)]
pub struct Connection {
    /// Underlying WebSocket stream.
    stream: WsStream,
    /// Service URL, kept for diagnostics.
    url: String,
    /// Time of the last inbound frame of any kind.
    last_inbound: Instant,
}

impl Connection {
    /// Opens a connection to the navigation service.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if `url` does not parse as a URL
    /// - [`Error::Connection`] if the WebSocket handshake fails
    pub async fn open(url: &str) -> Result<Self> {
        Url::parse(url).map_err(|e| Error::config(format!("Invalid service URL `{url}`: {e}")))?;

        let (stream, _response) = connect_async(url)
            .await
            .map_err(|e| Error::connection(e.to_string()))?;

        debug!(url, "WebSocket connection established");

        Ok(Self {
            stream,
            url: url.to_string(),
            last_inbound: Instant::now(),
        })
    }

    /// Returns the service URL this connection was opened against.
    #[inline]
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Time elapsed since the last inbound frame of any kind.
    ///
    /// Drives the session idle watchdog, independently of per-request
    /// timeouts.
    #[inline]
    #[must_use]
    pub fn idle_for(&self) -> Duration {
        self.last_inbound.elapsed()
    }

    /// Sends one text frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WebSocket`] if the frame cannot be written.
    pub async fn send_text(&mut self, text: String) -> Result<()> {
        trace!(frame = %text, "Sending frame");
        self.stream.send(Message::Text(text.into())).await?;
        Ok(())
    }

    /// Waits up to `wait` for the next inbound text frame.
    ///
    /// Non-text frames are skipped without resetting the deadline; any
    /// inbound frame refreshes the idle clock.
    ///
    /// # Errors
    ///
    /// - [`Error::ResponseTimeout`] if no text frame arrives within `wait`
    /// - [`Error::Disconnected`] if the peer closes or the stream ends
    /// - [`Error::WebSocket`] on a transport error
    pub async fn recv_text(&mut self, wait: Duration) -> Result<String> {
        let deadline = Instant::now() + wait;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());

            match timeout(remaining, self.stream.next()).await {
                Err(_) => return Err(Error::response_timeout(wait.as_millis() as u64)),
                Ok(None) => return Err(Error::Disconnected),
                Ok(Some(Err(e))) => return Err(Error::WebSocket(e)),
                Ok(Some(Ok(message))) => {
                    self.last_inbound = Instant::now();

                    match message {
                        Message::Text(text) => return Ok(text.to_string()),
                        Message::Close(_) => {
                            debug!(url = %self.url, "Peer closed the connection");
                            return Err(Error::Disconnected);
                        }
                        // Ping, Pong, Binary, Frame: inbound but not a reply.
                        _ => {}
                    }
                }
            }
        }
    }

    /// Closes the connection gracefully.
    ///
    /// Close errors are swallowed: the session is terminating and the peer
    /// may already be gone.
    pub async fn close(&mut self) {
        if let Err(e) = self.stream.close(None).await {
            trace!(url = %self.url, error = %e, "Close failed");
        }
    }

    /// Closes the connection with a terminal notice in the close frame.
    ///
    /// Used by the idle watchdog so the peer sees why the session ended.
    pub async fn close_with_notice(&mut self, reason: &str) {
        let frame = CloseFrame {
            code: CloseCode::Normal,
            reason: reason.to_string().into(),
        };

        if let Err(e) = self.stream.close(Some(frame)).await {
            trace!(url = %self.url, error = %e, "Close with notice failed");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::net::TcpListener;

    /// Binds a one-shot local WebSocket server; `script` drives the server
    /// side of the accepted connection.
    async fn serve_once<F, Fut>(script: F) -> String
    where
        F: FnOnce(WebSocketStream<TcpStream>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let port = listener.local_addr().expect("addr").port();

        tokio::spawn(async move {
            let (stream, _) = listener.accept().await.expect("accept");
            let ws = tokio_tungstenite::accept_async(stream)
                .await
                .expect("handshake");
            script(ws).await;
        });

        format!("ws://127.0.0.1:{port}")
    }

    #[tokio::test]
    async fn test_open_rejects_invalid_url() {
        let err = Connection::open("not a url").await.expect_err("must fail");
        assert!(matches!(err, Error::Config { .. }));
    }

    #[tokio::test]
    async fn test_send_and_recv() {
        let url = serve_once(|mut ws| async move {
            let msg = ws.next().await.expect("frame").expect("ok");
            assert_eq!(msg.into_text().expect("text").as_str(), "ir:0");
            ws.send(Message::Text(r#"{"ok":true}"#.into()))
                .await
                .expect("send");
        })
        .await;

        let mut conn = Connection::open(&url).await.expect("connect");
        conn.send_text("ir:0".to_string()).await.expect("send");

        let reply = conn
            .recv_text(Duration::from_secs(1))
            .await
            .expect("reply");
        assert_eq!(reply, r#"{"ok":true}"#);

        conn.close().await;
    }

    #[tokio::test]
    async fn test_recv_timeout() {
        let url = serve_once(|mut ws| async move {
            // Consume the command, never answer.
            let _ = ws.next().await;
            tokio::time::sleep(Duration::from_secs(2)).await;
        })
        .await;

        let mut conn = Connection::open(&url).await.expect("connect");
        conn.send_text("ir:7".to_string()).await.expect("send");

        let err = conn
            .recv_text(Duration::from_millis(100))
            .await
            .expect_err("must time out");
        assert!(matches!(err, Error::ResponseTimeout { .. }));
        assert!(!err.is_session_fatal());
    }

    #[tokio::test]
    async fn test_recv_skips_ping_frames() {
        let url = serve_once(|mut ws| async move {
            ws.send(Message::Ping(vec![1].into())).await.expect("ping");
            ws.send(Message::Text("after-ping".into()))
                .await
                .expect("send");
        })
        .await;

        let mut conn = Connection::open(&url).await.expect("connect");
        let reply = conn
            .recv_text(Duration::from_secs(1))
            .await
            .expect("reply");
        assert_eq!(reply, "after-ping");
    }

    #[tokio::test]
    async fn test_peer_close_is_disconnected() {
        let url = serve_once(|mut ws| async move {
            ws.close(None).await.expect("close");
        })
        .await;

        let mut conn = Connection::open(&url).await.expect("connect");
        let err = conn
            .recv_text(Duration::from_secs(1))
            .await
            .expect_err("must disconnect");
        assert!(matches!(err, Error::Disconnected));
        assert!(err.is_session_fatal());
    }

    #[tokio::test]
    async fn test_idle_clock_resets_on_inbound() {
        let url = serve_once(|mut ws| async move {
            ws.send(Message::Text("hello".into())).await.expect("send");
            tokio::time::sleep(Duration::from_millis(500)).await;
        })
        .await;

        let mut conn = Connection::open(&url).await.expect("connect");
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(conn.idle_for() >= Duration::from_millis(40));

        let _ = conn.recv_text(Duration::from_secs(1)).await.expect("reply");
        assert!(conn.idle_for() < Duration::from_millis(40));
    }
}
