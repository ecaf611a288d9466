//! Core types for the kinship kernel.

pub mod relationship;
pub mod step;

pub use relationship::{RelationKind, RelationKindParseError, Relationship};
pub use step::{Gender, Step};
