//! Token vocabulary: alias table and ordinal names.
//!
//! The vocabulary is static, read-only lookup data. It is built once at
//! process start and shared freely across concurrent resolutions; it carries
//! a fingerprint (xxh64 of its canonical serialization) so that deployments
//! can confirm which table a running service was built with.

use std::collections::BTreeMap;

use crate::canonical::canonical_hash_hex;
use crate::types::Step;

/// Ordinal names for cousin degrees 1-6. Higher degrees fall back to the
/// "{n}th" form.
const ORDINAL_NAMES: [&str; 6] = ["first", "second", "third", "fourth", "fifth", "sixth"];

/// English ordinal name for a cousin degree.
pub fn ordinal(degree: u32) -> String {
    match degree {
        1..=6 => ORDINAL_NAMES[(degree - 1) as usize].to_string(),
        n => format!("{}th", n),
    }
}

/// Pluralize a base noun by count ("time" / "times").
pub fn pluralize(base: &str, n: u32) -> String {
    if n == 1 {
        base.to_string()
    } else {
        format!("{}s", base)
    }
}

/// Immutable token vocabulary with alias resolution.
///
/// The table maps every accepted surface form (canonical names plus informal
/// aliases) to its canonical [`Step`]. Lookup trims whitespace and lowercases
/// first; anything unmapped passes through as [`Step::Unrecognized`] carrying
/// the lowercased, trimmed text.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    table: BTreeMap<String, Step>,
    fingerprint: String,
}

impl Vocabulary {
    /// Build the built-in vocabulary.
    pub fn builtin() -> Self {
        let mut table = BTreeMap::new();

        // Canonical forms map to themselves.
        for step in Step::canonical_vocabulary() {
            table.insert(step.as_str().to_string(), step);
        }

        // Informal / alternate surface forms.
        table.insert("mom".to_string(), Step::Mother);
        table.insert("mum".to_string(), Step::Mother);
        table.insert("dad".to_string(), Step::Father);
        table.insert("boy".to_string(), Step::Son);
        table.insert("girl".to_string(), Step::Daughter);
        table.insert("man".to_string(), Step::Husband);
        table.insert("woman".to_string(), Step::Wife);
        table.insert("bro".to_string(), Step::Brother);
        table.insert("sis".to_string(), Step::Sister);
        table.insert("parents".to_string(), Step::Parent);
        table.insert("kids".to_string(), Step::Child);

        let fingerprint = Self::compute_fingerprint(&table);
        Self { table, fingerprint }
    }

    /// Normalize one raw token into a [`Step`].
    ///
    /// Total: every string produces a step, possibly inert. Idempotent on
    /// canonical forms.
    pub fn normalize(&self, raw: &str) -> Step {
        let t = raw.trim().to_lowercase();
        match self.table.get(&t) {
            Some(step) => step.clone(),
            None => Step::Unrecognized(t),
        }
    }

    /// Normalize an ordered chain of raw tokens, preserving sequence order.
    pub fn normalize_chain<S: AsRef<str>>(&self, raw: &[S]) -> Vec<Step> {
        raw.iter().map(|s| self.normalize(s.as_ref())).collect()
    }

    /// Fingerprint of the table contents.
    ///
    /// Changes whenever an alias or canonical mapping changes.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Number of accepted surface forms (canonical names plus aliases).
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn compute_fingerprint(table: &BTreeMap<String, Step>) -> String {
        // BTreeMap iteration order is sorted, so the serialization is stable.
        let pairs: BTreeMap<&str, &str> = table
            .iter()
            .map(|(surface, step)| (surface.as_str(), step.as_str()))
            .collect();
        canonical_hash_hex(&pairs)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_lookup() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.normalize("mom"), Step::Mother);
        assert_eq!(vocab.normalize("mum"), Step::Mother);
        assert_eq!(vocab.normalize("dad"), Step::Father);
        assert_eq!(vocab.normalize("bro"), Step::Brother);
        assert_eq!(vocab.normalize("man"), Step::Husband);
        assert_eq!(vocab.normalize("kids"), Step::Child);
    }

    #[test]
    fn test_lookup_trims_and_lowercases() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.normalize("  MOM "), Step::Mother);
        assert_eq!(vocab.normalize("Father"), Step::Father);
        assert_eq!(
            vocab.normalize("  Stranger "),
            Step::Unrecognized("stranger".to_string())
        );
    }

    #[test]
    fn test_normalization_idempotent() {
        let vocab = Vocabulary::builtin();
        for step in Step::canonical_vocabulary() {
            assert_eq!(vocab.normalize(step.as_str()), step);
        }
        // Normalizing an alias once or twice lands on the same step.
        let once = vocab.normalize("sis");
        let twice = vocab.normalize(once.as_str());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_fingerprint_stable() {
        let v1 = Vocabulary::builtin();
        let v2 = Vocabulary::builtin();
        assert_eq!(v1.fingerprint(), v2.fingerprint());
        assert!(!v1.fingerprint().is_empty());
    }

    #[test]
    fn test_ordinal_table() {
        assert_eq!(ordinal(1), "first");
        assert_eq!(ordinal(6), "sixth");
        assert_eq!(ordinal(7), "7th");
        assert_eq!(ordinal(12), "12th");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("time", 1), "time");
        assert_eq!(pluralize("time", 2), "times");
        assert_eq!(pluralize("time", 0), "times");
    }
}
