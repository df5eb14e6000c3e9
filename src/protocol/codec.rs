//! Command encoding and response decoding for both wire profiles.
//!
//! One code path per [`ProtocolVariant`]; the decoded shape is normalized
//! into [`NavigationReply`] so the explorer never branches on the variant.
//!
//! Decoding is strict about required fields: a frame that is missing
//! `Adjacencia`, `Tipo` or (for the compact profile) `IdLabirinto` fails
//! with a parse error, which the explorer treats as session-fatal.

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::identifiers::VertexId;

use super::ProtocolVariant;

// ============================================================================
// Wire Constants
// ============================================================================

/// Event name carried by every structured-profile command.
const MOVE_EVENT: &str = "Ir";

/// Command prefix for the compact profile.
const MOVE_PREFIX: &str = "ir:";

/// `Tipo` value marking the exit vertex (both profiles).
const TIPO_EXIT: i64 = 1;

// ============================================================================
// VertexKind
// ============================================================================

/// Vertex classification reported by the server.
///
/// Discovered from the response `Tipo` field, never declared upfront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexKind {
    /// Ordinary vertex.
    Normal,
    /// Designated terminal vertex; discovery stops when one is visited.
    Exit,
}

impl VertexKind {
    /// Maps the wire `Tipo` value.
    ///
    /// Only `1` signals the exit; every other value is an ordinary vertex,
    /// matching the deployed clients which test `Tipo == 1` and nothing else.
    #[inline]
    #[must_use]
    const fn from_tipo(tipo: i64) -> Self {
        if tipo == TIPO_EXIT {
            Self::Exit
        } else {
            Self::Normal
        }
    }

    /// Returns `true` for the exit vertex.
    #[inline]
    #[must_use]
    pub const fn is_exit(self) -> bool {
        matches!(self, Self::Exit)
    }
}

// ============================================================================
// NavigationReply
// ============================================================================

/// Decoded server response, normalized across wire profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationReply {
    /// Current vertex id echoed by the server.
    ///
    /// `None` under the structured profile, where the current vertex is
    /// implied by the command that elicited this reply.
    pub current: Option<VertexId>,

    /// Outgoing adjacency of the current vertex, in server order.
    pub adjacency: Vec<VertexId>,

    /// Classification of the current vertex.
    pub kind: VertexKind,
}

// ============================================================================
// Wire Shapes
// ============================================================================

/// Structured-profile command: `{"Evento":"Ir","VerticeId":v}`.
#[derive(Debug, Serialize)]
struct MoveEvent {
    #[serde(rename = "Evento")]
    evento: &'static str,
    #[serde(rename = "VerticeId")]
    vertice_id: u32,
}

/// Structured-profile response body.
#[derive(Debug, Deserialize)]
struct StructuredReply {
    #[serde(rename = "Adjacencia")]
    adjacencia: Vec<u32>,
    #[serde(rename = "Tipo")]
    tipo: i64,
}

/// Compact-profile response body.
#[derive(Debug, Deserialize)]
struct CompactReply {
    #[serde(rename = "IdLabirinto")]
    id_labirinto: u32,
    #[serde(rename = "Adjacencia")]
    adjacencia: Vec<u32>,
    #[serde(rename = "Tipo")]
    tipo: i64,
}

// ============================================================================
// Encoding
// ============================================================================

/// Encodes a move command for `vertex` under the given profile.
///
/// # Errors
///
/// Returns [`Error::Json`] if structured-profile serialization fails
/// (practically unreachable for this fixed shape).
pub fn encode_move(variant: ProtocolVariant, vertex: VertexId) -> Result<String> {
    match variant {
        ProtocolVariant::Structured => {
            let event = MoveEvent {
                evento: MOVE_EVENT,
                vertice_id: vertex.as_u32(),
            };
            Ok(serde_json::to_string(&event)?)
        }
        ProtocolVariant::Compact => Ok(format!("{MOVE_PREFIX}{vertex}")),
    }
}

// ============================================================================
// Decoding
// ============================================================================

/// Decodes a raw server frame received after moving to `requested`.
///
/// `requested` is only used for error attribution; the reply's own current
/// vertex (when the profile echoes one) is what lands in the result.
///
/// # Errors
///
/// Returns [`Error::Parse`] when required fields are missing or of the
/// wrong shape. The caller must treat this as session-fatal.
pub fn decode_reply(
    variant: ProtocolVariant,
    requested: VertexId,
    raw: &str,
) -> Result<NavigationReply> {
    match variant {
        ProtocolVariant::Structured => {
            let reply: StructuredReply = serde_json::from_str(raw)
                .map_err(|e| Error::parse(requested, e.to_string()))?;

            Ok(NavigationReply {
                current: None,
                adjacency: reply.adjacencia.into_iter().map(VertexId::new).collect(),
                kind: VertexKind::from_tipo(reply.tipo),
            })
        }
        ProtocolVariant::Compact => {
            let reply: CompactReply = serde_json::from_str(raw)
                .map_err(|e| Error::parse(requested, e.to_string()))?;

            Ok(NavigationReply {
                current: Some(VertexId::new(reply.id_labirinto)),
                adjacency: reply.adjacencia.into_iter().map(VertexId::new).collect(),
                kind: VertexKind::from_tipo(reply.tipo),
            })
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
