//! Scripted in-process navigation server for explorer and pool tests.
//!
//! Serves a fixed maze over real WebSocket connections on a random local
//! port, speaking either wire profile. Per-vertex behavior can be scripted:
//! a vertex can stay silent (no reply) and whole connections can be dropped
//! mid-session. The server also tracks the high-water mark of simultaneous
//! connections, which the pool tests use to verify permit discipline.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures_util::{SinkExt, StreamExt};
use rustc_hash::{FxHashMap, FxHashSet};
use serde_json::json;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::WebSocketStream;
use tokio_tungstenite::tungstenite::Message;

use crate::protocol::ProtocolVariant;

// ============================================================================
// MazeScript
// ============================================================================

/// Scripted maze and server behavior.
#[derive(Debug, Clone)]
pub(crate) struct MazeScript {
    /// vertex → (adjacency, is_exit)
    vertices: FxHashMap<u32, (Vec<u32>, bool)>,
    /// Vertices whose replies are withheld.
    silent: FxHashSet<u32>,
    /// Wire profile the server speaks.
    variant: ProtocolVariant,
    /// Reply with undecodable free text instead of JSON.
    garbage: bool,
    /// Drop every Nth accepted connection after its first reply.
    drop_every: Option<usize>,
}

impl MazeScript {
    pub(crate) fn new() -> Self {
        Self {
            vertices: FxHashMap::default(),
            silent: FxHashSet::default(),
            variant: ProtocolVariant::Structured,
            garbage: false,
            drop_every: None,
        }
    }

    pub(crate) fn vertex(mut self, id: u32, adjacency: &[u32], is_exit: bool) -> Self {
        self.vertices.insert(id, (adjacency.to_vec(), is_exit));
        self
    }

    pub(crate) fn silent(mut self, id: u32) -> Self {
        self.silent.insert(id);
        self
    }

    pub(crate) fn with_variant(mut self, variant: ProtocolVariant) -> Self {
        self.variant = variant;
        self
    }

    pub(crate) fn garbage(mut self) -> Self {
        self.garbage = true;
        self
    }

    pub(crate) fn drop_every(mut self, nth: usize) -> Self {
        self.drop_every = Some(nth);
        self
    }
}

// ============================================================================
// TestServer
// ============================================================================

/// Handle to a running scripted server.
pub(crate) struct TestServer {
    /// WebSocket URL of the server.
    pub(crate) url: String,
    /// High-water mark of simultaneously open connections.
    pub(crate) max_concurrent: Arc<AtomicUsize>,
}

impl TestServer {
    /// Binds a random local port and starts serving `script`.
    pub(crate) async fn spawn(script: MazeScript) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let port = listener.local_addr().expect("addr").port();

        let script = Arc::new(script);
        let open = Arc::new(AtomicUsize::new(0));
        let max_concurrent = Arc::new(AtomicUsize::new(0));
        let accepted = Arc::new(AtomicUsize::new(0));

        let max_clone = Arc::clone(&max_concurrent);
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };

                let index = accepted.fetch_add(1, Ordering::SeqCst);
                let script = Arc::clone(&script);
                let open = Arc::clone(&open);
                let max = Arc::clone(&max_clone);

                tokio::spawn(async move {
                    let now = open.fetch_add(1, Ordering::SeqCst) + 1;
                    max.fetch_max(now, Ordering::SeqCst);

                    if let Ok(ws) = tokio_tungstenite::accept_async(stream).await {
                        serve_connection(ws, &script, index).await;
                    }

                    open.fetch_sub(1, Ordering::SeqCst);
                });
            }
        });

        Self {
            url: format!("ws://127.0.0.1:{port}"),
            max_concurrent,
        }
    }
}

// ============================================================================
// Connection Handling
// ============================================================================

async fn serve_connection(
    mut ws: WebSocketStream<TcpStream>,
    script: &MazeScript,
    connection_index: usize,
) {
    let doomed = script
        .drop_every
        .is_some_and(|nth| nth > 0 && connection_index % nth == 0);
    let mut replied = false;

    while let Some(Ok(message)) = ws.next().await {
        let Message::Text(text) = message else {
            continue;
        };

        let Some(vertex) = parse_command(script.variant, text.as_str()) else {
            continue;
        };

        if script.silent.contains(&vertex) {
            continue;
        }

        if script.garbage {
            let _ = ws
                .send(Message::Text(
                    format!("Vértice atual: {vertex}, Adjacentes: []").into(),
                ))
                .await;
            continue;
        }

        let (adjacency, is_exit) = script
            .vertices
            .get(&vertex)
            .cloned()
            .unwrap_or((Vec::new(), false));

        let reply = render_reply(script.variant, vertex, &adjacency, is_exit);
        if ws.send(Message::Text(reply.into())).await.is_err() {
            break;
        }
        replied = true;

        // Simulate a peer that vanishes mid-session.
        if doomed && replied {
            return;
        }
    }
}

fn parse_command(variant: ProtocolVariant, text: &str) -> Option<u32> {
    match variant {
        ProtocolVariant::Structured => {
            let value: serde_json::Value = serde_json::from_str(text).ok()?;
            value.get("VerticeId")?.as_u64().map(|v| v as u32)
        }
        ProtocolVariant::Compact => text.strip_prefix("ir:")?.trim().parse().ok(),
    }
}

fn render_reply(variant: ProtocolVariant, vertex: u32, adjacency: &[u32], is_exit: bool) -> String {
    let tipo = i32::from(is_exit);
    let body = match variant {
        ProtocolVariant::Structured => json!({
            "Adjacencia": adjacency,
            "Tipo": tipo,
        }),
        ProtocolVariant::Compact => json!({
            "IdLabirinto": vertex,
            "Adjacencia": adjacency,
            "Tipo": tipo,
        }),
    };
    body.to_string()
}
