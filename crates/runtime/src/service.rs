//! The enchantment service and the bound item aggregate.

use std::collections::BTreeSet;
use std::sync::Arc;

use enchant_core::{
    EnchantKey, EnchantState, EnchantmentDefinition, EnchantmentRegistry, EnchantmentTarget,
    ItemFingerprint, parse_state, render_souls, render_state,
};
use tracing::debug;

use crate::cache::{CacheMetrics, StateCache};
use crate::classifier::TargetClassifier;
use crate::config::{CueStrategyKind, RuntimeConfig};
use crate::cue::{NativeFlagCue, PassthroughCue, VisualCueStrategy};
use crate::host::{MetaWrite, NativeItem, TargetOracle};

/// Process-scoped entry point: derives, caches, and publishes enchantment
/// state for host items.
///
/// Construct one service at startup and share it by reference; every
/// component inside is safe for concurrent use.
pub struct EnchantService {
    registry: Arc<EnchantmentRegistry>,
    classifier: TargetClassifier,
    cache: StateCache,
    cue: Box<dyn VisualCueStrategy>,
}

impl EnchantService {
    pub fn new(
        registry: Arc<EnchantmentRegistry>,
        oracle: Arc<dyn TargetOracle>,
        config: RuntimeConfig,
    ) -> Self {
        let cue: Box<dyn VisualCueStrategy> = match config.cue {
            CueStrategyKind::NativeFlags => Box::new(NativeFlagCue),
            CueStrategyKind::Passthrough => Box::new(PassthroughCue),
        };
        Self {
            registry,
            classifier: TargetClassifier::new(oracle),
            cache: StateCache::new(config.cache_idle),
            cue,
        }
    }

    pub fn registry(&self) -> &EnchantmentRegistry {
        &self.registry
    }

    pub fn metrics(&self) -> &CacheMetrics {
        self.cache.metrics()
    }

    /// Read-only derivation, for permission checks and effect handlers.
    ///
    /// Cache hits return the previously derived state; misses parse once and
    /// store the result under the item's fingerprint.
    pub fn derive<I: NativeItem>(&self, item: &I) -> EnchantState {
        let kind = item.kind();
        let targets = self.classifier.classify(&kind);
        let meta = item.meta().unwrap_or_default();
        let fingerprint = ItemFingerprint::compute(&meta.enchantments, &meta.lore, &targets);

        self.cache.get_or_derive(fingerprint, || {
            debug!(kind = %kind, fingerprint = %fingerprint, "deriving enchantment state");
            parse_state(
                &self.registry,
                (*targets).clone(),
                &meta.enchantments,
                &meta.lore,
            )
        })
    }

    /// Presents an item and returns the bound aggregate. A cache hit rebinds
    /// the prior state to this item; a miss parses it first.
    pub fn observe<'a, I: NativeItem>(&'a self, item: &'a mut I) -> EnchantableItem<'a, I> {
        let state = self.derive(&*item);
        EnchantableItem {
            service: self,
            item,
            state,
        }
    }
}

/// One host item bound to its derived state.
///
/// Mutations produce a fresh state snapshot, rewrite the item's metadata
/// through the cue strategy, and re-register the result in the state cache.
/// The publish step is part of every setter; callers expect the item and the
/// cache to stay consistent.
pub struct EnchantableItem<'a, I: NativeItem> {
    service: &'a EnchantService,
    item: &'a mut I,
    state: EnchantState,
}

impl<'a, I: NativeItem> EnchantableItem<'a, I> {
    pub fn state(&self) -> &EnchantState {
        &self.state
    }

    pub fn targets(&self) -> &BTreeSet<EnchantmentTarget> {
        self.state.targets()
    }

    pub fn level(&self, key: &EnchantKey) -> Option<u32> {
        self.state.level(key)
    }

    pub fn has_enchantment(&self, key: &EnchantKey) -> bool {
        self.state.has_enchantment(key)
    }

    pub fn souls(&self) -> u32 {
        self.state.souls()
    }

    /// Sets one enchantment level and publishes.
    pub fn set_enchantment_level(&mut self, key: EnchantKey, level: u32) {
        self.state = self.state.with_enchantment(key, level);
        self.rewrite_meta();
    }

    /// Sets several enchantment levels in one rewrite.
    pub fn set_enchantment_levels(&mut self, levels: impl IntoIterator<Item = (EnchantKey, u32)>) {
        self.state = self.state.with_enchantments(levels);
        self.rewrite_meta();
    }

    /// Adds an enchantment at its minimum level.
    pub fn add_enchantment(&mut self, def: &EnchantmentDefinition) {
        self.set_enchantment_level(def.key(), def.min_level);
    }

    /// Adds several enchantments at their minimum levels in one rewrite.
    pub fn add_enchantments<'d>(
        &mut self,
        defs: impl IntoIterator<Item = &'d EnchantmentDefinition>,
    ) {
        self.state = self
            .state
            .with_enchantments(defs.into_iter().map(|def| (def.key(), def.min_level)));
        self.rewrite_meta();
    }

    /// Removes one enchantment and publishes.
    pub fn remove_enchantment(&mut self, key: &EnchantKey) {
        self.state = self.state.without_enchantment(key);
        self.rewrite_meta();
    }

    /// Removes several enchantments in one rewrite.
    pub fn remove_enchantments<'k>(&mut self, keys: impl IntoIterator<Item = &'k EnchantKey>) {
        let mut state = self.state.clone();
        for key in keys {
            state = state.without_enchantment(key);
        }
        self.state = state;
        self.rewrite_meta();
    }

    /// Sets the soul counter; unchanged values skip the rewrite.
    pub fn set_souls(&mut self, souls: u32) {
        if souls == self.state.souls() {
            return;
        }
        self.state = self.state.with_souls(souls);
        self.rewrite_souls();
    }

    /// Full rewrite: cue reconciliation, rebuilt lore, forced native writes,
    /// commit, cache re-registration.
    fn rewrite_meta(&mut self) {
        let Some(meta) = self.item.meta() else {
            return;
        };
        debug!(kind = %self.item.kind(), "rewriting enchantment metadata");

        let (state, flags) = self.service.cue.reconcile(self.state.clone());
        self.state = state;

        let rendered = render_state(
            &self.service.registry,
            &self.state,
            &meta.lore,
            &meta.enchantments,
        );
        self.item.write_meta(&MetaWrite::new(rendered, flags));
        self.recache();
    }

    /// Souls-only rewrite: enchantment lore is left untouched.
    fn rewrite_souls(&mut self) {
        let Some(meta) = self.item.meta() else {
            return;
        };
        debug!(kind = %self.item.kind(), souls = self.state.souls(), "rewriting soul metadata");

        let (state, flags) = self.service.cue.reconcile(self.state.clone());
        self.state = state;

        let rendered = render_souls(&self.state, &meta.lore, &meta.enchantments);
        self.item.write_meta(&MetaWrite::new(rendered, flags));
        self.recache();
    }

    fn recache(&self) {
        let Some(meta) = self.item.meta() else {
            return;
        };
        let fingerprint =
            ItemFingerprint::compute(&meta.enchantments, &meta.lore, self.state.targets());
        self.service.cache.force(fingerprint, self.state.clone());
    }
}
