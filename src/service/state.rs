//! Shared service state.

use std::sync::Arc;

use crate::resolver::RelationshipResolver;
use crate::vocabulary::Vocabulary;

/// Shared state handed to every route handler.
///
/// The resolver holds no cross-request state and the vocabulary is
/// read-only, so the whole state is freely cloneable and needs no locking.
#[derive(Debug, Clone)]
pub struct ServiceState {
    /// The relationship resolver shared across requests.
    pub resolver: RelationshipResolver,
}

impl ServiceState {
    /// Create service state over a vocabulary.
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self {
            resolver: RelationshipResolver::new(vocabulary),
        }
    }

    /// Create service state with the built-in vocabulary.
    pub fn with_builtin_vocabulary() -> Self {
        Self::new(Arc::new(Vocabulary::builtin()))
    }

    /// The vocabulary backing the resolver.
    pub fn vocabulary(&self) -> &Vocabulary {
        self.resolver.vocabulary()
    }
}

impl Default for ServiceState {
    fn default() -> Self {
        Self::with_builtin_vocabulary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_shares_one_vocabulary() {
        let vocab = Arc::new(Vocabulary::builtin());
        let state = ServiceState::new(Arc::clone(&vocab));
        assert_eq!(state.vocabulary().fingerprint(), vocab.fingerprint());
    }

    #[test]
    fn test_clones_resolve_identically() {
        let state = ServiceState::default();
        let clone = state.clone();
        let chain = ["mother", "brother"];
        assert_eq!(state.resolver.resolve(&chain), clone.resolver.resolve(&chain));
    }
}
