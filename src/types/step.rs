//! Step tokens for kinship chains.

use std::fmt;

/// Gender carried by a step token.
///
/// Only the most recently scanned gendered token determines the wording of
/// the final label; gender-neutral tokens reset the signal to unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Masculine wording (father, son, brother, husband).
    Male,
    /// Feminine wording (mother, daughter, sister, wife).
    Female,
}

/// One atomic kinship relation in a chain.
///
/// The canonical vocabulary is finite; anything outside it is carried as
/// [`Step::Unrecognized`], which is structurally inert but still occupies a
/// sequence position (the last step in a chain is inspected by the
/// classifier even when inert).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// One generation up, feminine.
    Mother,
    /// One generation up, masculine.
    Father,
    /// One generation up, neutral.
    Parent,
    /// One generation down, masculine.
    Son,
    /// One generation down, feminine.
    Daughter,
    /// One generation down, neutral.
    Child,
    /// Lateral hop via a shared parent, masculine.
    Brother,
    /// Lateral hop via a shared parent, feminine.
    Sister,
    /// Lateral hop via a shared parent, neutral.
    Sibling,
    /// Marriage edge, neutral.
    Spouse,
    /// Marriage edge, masculine.
    Husband,
    /// Marriage edge, feminine.
    Wife,
    /// Token outside the vocabulary; consumed but contributes nothing.
    Unrecognized(String),
}

impl Step {
    /// Gender signal carried by this step, if any.
    ///
    /// Returns `None` for both neutral tokens (parent, child, sibling,
    /// spouse) and unrecognized tokens; the accumulator distinguishes the
    /// two cases.
    pub fn gender(&self) -> Option<Gender> {
        match self {
            Self::Father | Self::Son | Self::Brother | Self::Husband => Some(Gender::Male),
            Self::Mother | Self::Daughter | Self::Sister | Self::Wife => Some(Gender::Female),
            _ => None,
        }
    }

    /// True for parent-type steps (one generation up).
    pub fn is_parental(&self) -> bool {
        matches!(self, Self::Mother | Self::Father | Self::Parent)
    }

    /// True for child-type steps (one generation down).
    pub fn is_filial(&self) -> bool {
        matches!(self, Self::Son | Self::Daughter | Self::Child)
    }

    /// True for sibling-type steps.
    pub fn is_sibling(&self) -> bool {
        matches!(self, Self::Brother | Self::Sister | Self::Sibling)
    }

    /// True for marriage-edge steps.
    pub fn is_spousal(&self) -> bool {
        matches!(self, Self::Spouse | Self::Husband | Self::Wife)
    }

    /// True when the token is outside the canonical vocabulary.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized(_))
    }

    /// Canonical surface form of the step.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Mother => "mother",
            Self::Father => "father",
            Self::Parent => "parent",
            Self::Son => "son",
            Self::Daughter => "daughter",
            Self::Child => "child",
            Self::Brother => "brother",
            Self::Sister => "sister",
            Self::Sibling => "sibling",
            Self::Spouse => "spouse",
            Self::Husband => "husband",
            Self::Wife => "wife",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Parse a canonical surface form. Aliases are resolved by
    /// [`crate::Vocabulary::normalize`], not here.
    pub fn from_canonical(s: &str) -> Option<Self> {
        match s {
            "mother" => Some(Self::Mother),
            "father" => Some(Self::Father),
            "parent" => Some(Self::Parent),
            "son" => Some(Self::Son),
            "daughter" => Some(Self::Daughter),
            "child" => Some(Self::Child),
            "brother" => Some(Self::Brother),
            "sister" => Some(Self::Sister),
            "sibling" => Some(Self::Sibling),
            "spouse" => Some(Self::Spouse),
            "husband" => Some(Self::Husband),
            "wife" => Some(Self::Wife),
            _ => None,
        }
    }

    /// All canonical (recognized) steps, in declaration order.
    pub fn canonical_vocabulary() -> [Step; 12] {
        [
            Self::Mother,
            Self::Father,
            Self::Parent,
            Self::Son,
            Self::Daughter,
            Self::Child,
            Self::Brother,
            Self::Sister,
            Self::Sibling,
            Self::Spouse,
            Self::Husband,
            Self::Wife,
        ]
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
