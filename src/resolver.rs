//! Relationship resolver: classification and labeling.
//!
//! Maps an accumulated [`PathScan`] to a [`Relationship`] through an ordered
//! sequence of guarded branches. The order is load-bearing: conditions
//! overlap, and the first match wins. The decision depends only on the
//! counters, the final gender, the chain length, and the last step.
//!
//! The resolver is total: every input chain, empty and nonsense included,
//! produces a well-formed result. Unclassifiable chains fall through to an
//! explicit "unknown / ambiguous" result rather than an error.

use std::sync::Arc;

use crate::accumulator::{scan, PathScan};
use crate::types::{Gender, RelationKind, Relationship};
use crate::vocabulary::{ordinal, pluralize, Vocabulary};

/// Stateless resolver over a shared, read-only vocabulary.
///
/// Cheap to clone; safe to share across concurrent requests.
#[derive(Debug, Clone)]
pub struct RelationshipResolver {
    vocabulary: Arc<Vocabulary>,
}

impl RelationshipResolver {
    /// Create a resolver over the given vocabulary.
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self { vocabulary }
    }

    /// The vocabulary this resolver normalizes against.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Resolve an ordered chain of raw step tokens into a relationship.
    ///
    /// Normalizes each token, scans the chain once, then classifies.
    pub fn resolve<S: AsRef<str>>(&self, raw_steps: &[S]) -> Relationship {
        let steps = self.vocabulary.normalize_chain(raw_steps);
        let path = scan(&steps);
        let result = classify(&path);

        tracing::debug!(
            up = path.summary.up,
            down = path.summary.down,
            lateral = path.summary.lateral,
            affinal = path.summary.affinal,
            label = %result.label,
            kind = %result.kind,
            "resolved kinship chain"
        );

        result
    }
}

impl Default for RelationshipResolver {
    fn default() -> Self {
        Self::new(Arc::new(Vocabulary::builtin()))
    }
}

/// Select a label form by final gender, falling back to the neutral form.
fn gendered(gender: Option<Gender>, masculine: &str, feminine: &str, neutral: &str) -> String {
    match gender {
        Some(Gender::Male) => masculine.to_string(),
        Some(Gender::Female) => feminine.to_string(),
        None => neutral.to_string(),
    }
}

/// Repeat the "great-" prefix.
fn greats(n: u32) -> String {
    "great-".repeat(n as usize)
}

fn result(path: &PathScan, label: String, kind: RelationKind, explanation: &str) -> Relationship {
    Relationship {
        label,
        kind,
        explanation: explanation.to_string(),
        canonical: path.summary.canonical_string(),
    }
}

/// Apply the ordered classification rules to a scanned chain.
fn classify(path: &PathScan) -> Relationship {
    let s = path.summary;
    let g = path.final_gender;

    // Direct spouse: a single spousal step.
    if path.is_direct_spouse() {
        return result(
            path,
            gendered(g, "husband", "wife", "spouse"),
            RelationKind::Affinal,
            "Direct marital relation.",
        );
    }

    // Pure ancestor chain.
    if s.down == 0 && s.up > 0 && !s.affinal {
        let label = match s.up {
            1 => gendered(g, "father", "mother", "parent"),
            2 => gendered(g, "grandfather", "grandmother", "grandparent"),
            n => {
                let prefix = greats(n - 2);
                gendered(
                    g,
                    &format!("{prefix}grandfather"),
                    &format!("{prefix}grandmother"),
                    &format!("{prefix}grandparent"),
                )
            }
        };
        return result(path, label, RelationKind::Blood, "Direct ancestor.");
    }

    // Pure descendant chain.
    if s.up == 0 && s.down > 0 && !s.affinal {
        let label = match s.down {
            1 => gendered(g, "son", "daughter", "child"),
            2 => gendered(g, "grandson", "granddaughter", "grandchild"),
            n => {
                let prefix = greats(n - 2);
                gendered(
                    g,
                    &format!("{prefix}grandson"),
                    &format!("{prefix}granddaughter"),
                    &format!("{prefix}grandchild"),
                )
            }
        };
        return result(path, label, RelationKind::Blood, "Direct descendant.");
    }

    // Sibling.
    if s.up == 1 && s.down == 1 && s.lateral >= 1 && !s.affinal {
        return result(
            path,
            gendered(g, "brother", "sister", "sibling"),
            RelationKind::Blood,
            "Child of your parent (not you).",
        );
    }

    // Ancestor's sibling (aunts/uncles and their great- chain).
    if s.up >= 2 && s.down == 1 && !s.affinal {
        let gen = s.up - 1;
        let label = if gen == 1 {
            gendered(g, "uncle", "aunt", "aunt/uncle")
        } else {
            let prefix = greats(gen - 1);
            gendered(
                g,
                &format!("{prefix}granduncle"),
                &format!("{prefix}grandaunt"),
                &format!("{prefix}grand-aunt/uncle"),
            )
        };
        return result(path, label, RelationKind::Blood, "Sibling of an ancestor.");
    }

    // Sibling's descendant (nieces/nephews and their great- chain).
    if s.up == 1 && s.down >= 2 && !s.affinal {
        let gen = s.down - 1;
        let label = match gen {
            1 => gendered(g, "nephew", "niece", "niece/nephew"),
            2 => gendered(g, "grandnephew", "grandniece", "grandniece/nephew"),
            n => format!(
                "{}{}",
                greats(n - 2),
                gendered(g, "grandnephew", "grandniece", "grandniece/nephew")
            ),
        };
        return result(path, label, RelationKind::Blood, "Descendant of your sibling.");
    }

    // Cousins: up to a shared ancestor, down a different branch.
    if s.up >= 2 && s.down >= 2 && !s.affinal {
        let degree = s.up.min(s.down) - 1;
        let removal = s.up.abs_diff(s.down);
        let core = format!("{} cousin", ordinal(degree));
        let label = if removal == 0 {
            core
        } else {
            format!("{} {} {} removed", core, removal, pluralize("time", removal))
        };
        return result(
            path,
            label,
            RelationKind::Blood,
            "Descended from a shared ancestor on a different branch.",
        );
    }

    // Affinal branch.
    if s.affinal {
        // Chain ends on a sibling step.
        if path.ends_on_sibling() {
            return result(
                path,
                gendered(g, "brother-in-law", "sister-in-law", "sibling-in-law"),
                RelationKind::Affinal,
                "Sibling of your spouse OR spouse of your sibling.",
            );
        }
        // Ancestor of the spouse.
        if s.up >= 1 && s.down == 0 {
            let label = match s.up {
                1 => gendered(g, "father-in-law", "mother-in-law", "parent-in-law"),
                2 => gendered(
                    g,
                    "grandfather-in-law",
                    "grandmother-in-law",
                    "grandparent-in-law",
                ),
                n => {
                    let prefix = greats(n - 2);
                    gendered(
                        g,
                        &format!("{prefix}grandfather-in-law"),
                        &format!("{prefix}grandmother-in-law"),
                        &format!("{prefix}grandparent-in-law"),
                    )
                }
            };
            return result(path, label, RelationKind::Affinal, "Ancestor of your spouse.");
        }
        // Descendant of the spouse (step-children).
        if s.up == 0 && s.down >= 1 {
            let label = match s.down {
                1 => gendered(g, "stepson", "stepdaughter", "stepchild"),
                2 => gendered(g, "step-grandson", "step-granddaughter", "step-grandchild"),
                n => {
                    let prefix = greats(n - 2);
                    gendered(
                        g,
                        &format!("step-{prefix}grandson"),
                        &format!("step-{prefix}granddaughter"),
                        &format!("step-{prefix}grandchild"),
                    )
                }
            };
            return result(
                path,
                label,
                RelationKind::Affinal,
                "Descendant of your spouse (not biologically yours).",
            );
        }
        // Multi-hop affinal dead end (e.g. your brother's wife's brother).
        return result(
            path,
            "no direct relation".to_string(),
            RelationKind::None,
            "Related only by marriage through multiple links (e.g., your brother's wife's brother).",
        );
    }

    // A parent step then a child step lands on a sibling or back on
    // yourself; no sibling hop occurred, so the sibling branch above
    // did not catch it.
    if s.up == 1 && s.down == 1 && !s.affinal {
        return result(
            path,
            "sibling (or self via parent)".to_string(),
            RelationKind::Blood,
            "Ambiguous path interpreted as sibling.",
        );
    }

    // Nothing matched.
    result(
        path,
        "unknown / ambiguous".to_string(),
        RelationKind::None,
        "The selected path doesn't map to a common English kinship term.",
    )
}
