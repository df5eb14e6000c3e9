//! Protocol profile selector.
//!
//! Two incompatible wire contracts exist for the same navigation service.
//! They are never auto-detected or merged: every session carries one
//! [`ProtocolVariant`] chosen at configuration time.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

// ============================================================================
// ProtocolVariant
// ============================================================================

/// Named wire-format profile for one navigation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProtocolVariant {
    /// Variant A: structured JSON command `{"Evento":"Ir","VerticeId":v}`.
    ///
    /// Responses carry `Adjacencia` and `Tipo`; the current vertex id is
    /// implied by the preceding command, not echoed.
    #[default]
    Structured,

    /// Variant B: plain-text command `ir:<v>`.
    ///
    /// Responses carry `IdLabirinto` (echoed current vertex), `Adjacencia`
    /// and `Tipo`.
    Compact,
}

impl ProtocolVariant {
    /// Returns `true` if responses echo the current vertex id.
    #[inline]
    #[must_use]
    pub const fn echoes_current(self) -> bool {
        matches!(self, Self::Compact)
    }
}

impl fmt::Display for ProtocolVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structured => write!(f, "structured"),
            Self::Compact => write!(f, "compact"),
        }
    }
}

impl FromStr for ProtocolVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "structured" | "a" => Ok(Self::Structured),
            "compact" | "b" => Ok(Self::Compact),
            other => Err(Error::config(format!(
                "Unknown protocol variant: {other} (expected `structured` or `compact`)"
            ))),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!(
            "structured".parse::<ProtocolVariant>().expect("parse"),
            ProtocolVariant::Structured
        );
        assert_eq!(
            "B".parse::<ProtocolVariant>().expect("parse"),
            ProtocolVariant::Compact
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("auto".parse::<ProtocolVariant>().is_err());
    }

    #[test]
    fn test_echoes_current() {
        assert!(!ProtocolVariant::Structured.echoes_current());
        assert!(ProtocolVariant::Compact.echoes_current());
    }

    #[test]
    fn test_display_roundtrip() {
        for variant in [ProtocolVariant::Structured, ProtocolVariant::Compact] {
            let back: ProtocolVariant = variant.to_string().parse().expect("roundtrip");
            assert_eq!(back, variant);
        }
    }
}
