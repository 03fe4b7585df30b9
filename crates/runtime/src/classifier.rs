//! Applicability classification with per-kind memoization.

use std::collections::BTreeSet;
use std::sync::Arc;

use enchant_core::{EnchantmentTarget, ItemKind};
use moka::sync::Cache;
use tracing::debug;

use crate::host::TargetOracle;

/// Derives and memoizes the applicability set for item kinds.
///
/// Classification is deterministic and the kind space is small and finite, so
/// entries live for the process lifetime. Concurrent misses for the same kind
/// converge on a single computation.
pub struct TargetClassifier {
    oracle: Arc<dyn TargetOracle>,
    cache: Cache<ItemKind, Arc<BTreeSet<EnchantmentTarget>>>,
}

impl TargetClassifier {
    pub fn new(oracle: Arc<dyn TargetOracle>) -> Self {
        Self {
            oracle,
            cache: Cache::builder().build(),
        }
    }

    /// Applicability categories for `kind`.
    pub fn classify(&self, kind: &ItemKind) -> Arc<BTreeSet<EnchantmentTarget>> {
        self.cache
            .get_with_by_ref(kind, || Arc::new(self.classify_uncached(kind)))
    }

    fn classify_uncached(&self, kind: &ItemKind) -> BTreeSet<EnchantmentTarget> {
        let mut targets = BTreeSet::new();
        for target in EnchantmentTarget::all() {
            if self.oracle.includes(kind, target) {
                targets.insert(target);
            }
        }
        // Axes carry weapon enchantments even though the host does not
        // classify them as weapons.
        if kind.is_axe() {
            targets.insert(EnchantmentTarget::Weapon);
        }
        debug!(kind = %kind, count = targets.len(), "classified item kind");
        targets
    }
}
