//! Wire protocol for the maze navigation service.
//!
//! The remote service has been observed speaking two incompatible wire
//! contracts. Both are modeled as explicit, named profiles behind
//! [`ProtocolVariant`]; the caller picks one, nothing is auto-detected.
//!
//! | Direction | [`Structured`](ProtocolVariant::Structured) (A) | [`Compact`](ProtocolVariant::Compact) (B) |
//! |-----------|-------------------------------------------------|-------------------------------------------|
//! | Client → Server | JSON `{"Evento":"Ir","VerticeId":<int>}` | text `ir:<int>` |
//! | Server → Client | JSON `Adjacencia`, `Tipo` | JSON `IdLabirinto`, `Adjacencia`, `Tipo` |
//! | Current vertex | implied by the last command | echoed as `IdLabirinto` |
//! | Exit signal | `Tipo == 1` | `Tipo == 1` |
//!
//! Which profile the production server actually speaks is an open contract
//! question (the service's own handler has been seen replying free text
//! matching neither); deployments must pin the variant explicitly.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `codec` | Command encoding and response decoding |
//! | `variant` | Protocol profile selector |

// ============================================================================
// Submodules
// ============================================================================

/// Command encoding and response decoding.
pub mod codec;

/// Protocol profile selector.
pub mod variant;

// ============================================================================
// Re-exports
// ============================================================================

pub use codec::{NavigationReply, VertexKind, decode_reply, encode_move};
pub use variant::ProtocolVariant;
