//! Byte-stable serialization for the `canonical` result field and the
//! vocabulary fingerprint.
//!
//! Both consumers require that the same value always serializes to the same
//! bytes, across runs and across processes. That holds as long as the input
//! types keep a stable serialization order: struct fields in declaration
//! order, vectors in index order, and `BTreeMap` (never `HashMap`) for any
//! map that feeds a fingerprint.

use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

/// Serialize a value to canonical JSON bytes.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).expect("Canonical serialization failed")
}

/// Serialize a value to its canonical JSON string, as exposed in the
/// `canonical` field of a resolution result.
pub fn to_canonical_string<T: Serialize>(value: &T) -> String {
    String::from_utf8(to_canonical_bytes(value)).expect("Canonical JSON is valid UTF-8")
}

/// Fingerprint a serializable value as a 16-digit hex string (xxh64 over the
/// canonical bytes).
pub fn canonical_hash_hex<T: Serialize>(value: &T) -> String {
    format!("{:016x}", xxh64(&to_canonical_bytes(value), 0))
}
