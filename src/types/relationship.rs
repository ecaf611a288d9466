//! Relationship results produced by the resolver.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of a resolved relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    /// Related by descent from a shared ancestor.
    Blood,
    /// Related by marriage.
    Affinal,
    /// No direct relation, or the chain could not be classified.
    ///
    /// The two cases share this tag; callers distinguish them via the
    /// explanation string.
    None,
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blood => write!(f, "blood"),
            Self::Affinal => write!(f, "affinal"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Error parsing a [`RelationKind`] from its wire form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown relation kind: {0}")]
pub struct RelationKindParseError(pub String);

impl FromStr for RelationKind {
    type Err = RelationKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blood" => Ok(Self::Blood),
            "affinal" => Ok(Self::Affinal),
            "none" => Ok(Self::None),
            other => Err(RelationKindParseError(other.to_string())),
        }
    }
}

/// Resolved relationship for one step chain.
///
/// Every field is derived deterministically from the input sequence; there
/// is no error variant. The `canonical` field is the stable, human-readable
/// dump of the structural counters for debugging and replay comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Canonical English kinship label, e.g. "first cousin 1 time removed".
    pub label: String,
    /// Blood / affinal / none classification.
    #[serde(rename = "type")]
    pub kind: RelationKind,
    /// Human-readable sentence describing how the label was derived.
    pub explanation: String,
    /// Serialized structural summary (up, down, lateral, affinal).
    pub canonical: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_kind_wire_form() {
        assert_eq!(serde_json::to_string(&RelationKind::Blood).unwrap(), "\"blood\"");
        assert_eq!(serde_json::to_string(&RelationKind::Affinal).unwrap(), "\"affinal\"");
        assert_eq!(serde_json::to_string(&RelationKind::None).unwrap(), "\"none\"");
    }

    #[test]
    fn test_relation_kind_from_str() {
        assert_eq!("blood".parse::<RelationKind>().unwrap(), RelationKind::Blood);
        assert_eq!("none".parse::<RelationKind>().unwrap(), RelationKind::None);
        assert!("cousinly".parse::<RelationKind>().is_err());
    }

    #[test]
    fn test_relationship_serializes_kind_as_type() {
        let rel = Relationship {
            label: "mother".to_string(),
            kind: RelationKind::Blood,
            explanation: "Direct ancestor.".to_string(),
            canonical: "{}".to_string(),
        };
        let json = serde_json::to_value(&rel).unwrap();
        assert_eq!(json["type"], "blood");
        assert!(json.get("kind").is_none());
    }
}
