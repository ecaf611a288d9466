//! # kinship-kernel
//!
//! Deterministic resolution of kinship step chains.
//!
//! The kernel answers one question:
//!
//! > Given an ordered chain of atomic kinship steps ("mother", "son",
//! > "spouse", ...), what is the canonical English name for the resulting
//! > relationship?
//!
//! ## Core Contract
//!
//! 1. Normalize each raw token through the alias table (mom → mother, ...)
//! 2. Scan the chain once, accumulating generations up/down, sibling hops,
//!    and a marriage flag
//! 3. Apply an ordered set of classification rules to produce a label, a
//!    blood/affinal/none tag, an explanation, and a canonical structural dump
//!
//! ## Architecture
//!
//! ```text
//! Raw tokens → Vocabulary → Step chain → PathScan → Classifier → Relationship
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same step chain → identical result, every time
//! - The resolver is total: every input (empty and nonsense included) maps
//!   to a well-formed result, never an error
//! - The `canonical` field is a byte-stable dump of the structural counters

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod accumulator;
pub mod canonical;
pub mod resolver;
pub mod types;
pub mod vocabulary;

#[cfg(feature = "service")]
pub mod service;

// Re-exports
pub use accumulator::{scan, PathScan, PathSummary};
pub use canonical::{canonical_hash_hex, to_canonical_bytes, to_canonical_string};
pub use resolver::RelationshipResolver;
pub use types::{Gender, RelationKind, RelationKindParseError, Relationship, Step};
pub use vocabulary::{ordinal, pluralize, Vocabulary};

// Service re-exports (when service feature is enabled)
#[cfg(feature = "service")]
pub use service::{create_router, ServiceState};

/// Schema version for relationship result types.
/// Increment on breaking changes to any schema type.
pub const KINSHIP_SCHEMA_VERSION: &str = "1.0.0";

/// Version of the built-in token vocabulary.
/// Increment when aliases or canonical tokens change.
pub const VOCABULARY_VERSION: &str = "1.0.0";
