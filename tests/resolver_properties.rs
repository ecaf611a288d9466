//! Property tests for the resolver.
//!
//! The central contract is totality: every input chain, arbitrary garbage
//! included, resolves to a well-formed result.

use proptest::prelude::*;

use kinship_kernel::{PathSummary, RelationshipResolver, Step, Vocabulary};

/// Any canonical token surface form.
fn canonical_token() -> impl Strategy<Value = String> {
    prop::sample::select(
        Step::canonical_vocabulary()
            .iter()
            .map(|s| s.as_str().to_string())
            .collect::<Vec<_>>(),
    )
}

/// Canonical tokens, aliases, and arbitrary garbage mixed together.
fn any_token() -> impl Strategy<Value = String> {
    prop_oneof![
        canonical_token(),
        prop::sample::select(vec![
            "mom".to_string(),
            "DAD".to_string(),
            " Bro ".to_string(),
            "kids".to_string(),
        ]),
        ".*",
    ]
}

proptest! {
    #[test]
    fn resolve_is_total(chain in prop::collection::vec(any_token(), 0..16)) {
        let resolver = RelationshipResolver::default();
        let rel = resolver.resolve(&chain);

        prop_assert!(!rel.label.is_empty());
        prop_assert!(!rel.explanation.is_empty());

        // The canonical dump always parses back into a summary.
        let summary: PathSummary = serde_json::from_str(&rel.canonical).unwrap();
        prop_assert_eq!(summary.canonical_string(), rel.canonical);
    }

    #[test]
    fn resolve_is_deterministic(chain in prop::collection::vec(any_token(), 0..16)) {
        let resolver = RelationshipResolver::default();
        prop_assert_eq!(resolver.resolve(&chain), resolver.resolve(&chain));
    }

    #[test]
    fn normalization_is_idempotent(raw in ".*") {
        let vocab = Vocabulary::builtin();
        let once = vocab.normalize(&raw);
        let twice = vocab.normalize(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn counters_match_token_classes(chain in prop::collection::vec(canonical_token(), 0..16)) {
        let resolver = RelationshipResolver::default();
        let rel = resolver.resolve(&chain);
        let summary: PathSummary = serde_json::from_str(&rel.canonical).unwrap();

        let vocab = Vocabulary::builtin();
        let steps = vocab.normalize_chain(&chain);

        let parental = steps.iter().filter(|s| s.is_parental()).count() as u32;
        let filial = steps.iter().filter(|s| s.is_filial()).count() as u32;
        let sibling = steps.iter().filter(|s| s.is_sibling()).count() as u32;
        let spousal = steps.iter().any(|s| s.is_spousal());

        prop_assert_eq!(summary.up, parental + sibling);
        prop_assert_eq!(summary.down, filial + sibling);
        prop_assert_eq!(summary.lateral, sibling);
        prop_assert_eq!(summary.affinal, spousal);
    }
}
