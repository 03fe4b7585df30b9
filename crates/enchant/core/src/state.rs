//! Derived enchantment state for a single item.
//!
//! The aggregate is a value type: mutation methods return a fresh snapshot
//! and the caller performs the explicit publish step (metadata rewrite plus
//! cache re-registration), so side effects stay visible and testable.

use std::collections::{BTreeMap, BTreeSet};

use crate::definition::{EnchantKey, EnchantmentDefinition, EnchantmentId, NativeEnchant};
use crate::target::EnchantmentTarget;

/// Applicability set, enchantment levels, and soul count derived from one
/// item's native properties and descriptive text.
///
/// Level 0 is a legal state: it marks the hidden placeholder entry the glint
/// reconciliation maintains. Iteration order is deterministic (BTree) so
/// serialization output is stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnchantState {
    targets: BTreeSet<EnchantmentTarget>,
    levels: BTreeMap<EnchantKey, u32>,
    souls: u32,
}

impl EnchantState {
    /// Empty state with the given applicability set.
    pub fn new(targets: BTreeSet<EnchantmentTarget>) -> Self {
        Self {
            targets,
            levels: BTreeMap::new(),
            souls: 0,
        }
    }

    pub(crate) fn from_parts(
        targets: BTreeSet<EnchantmentTarget>,
        levels: BTreeMap<EnchantKey, u32>,
        souls: u32,
    ) -> Self {
        Self {
            targets,
            levels,
            souls,
        }
    }

    /// Categories the item kind satisfies. Derived, not independently mutable.
    pub fn targets(&self) -> &BTreeSet<EnchantmentTarget> {
        &self.targets
    }

    /// All enchantment entries in key order.
    pub fn enchantments(&self) -> impl Iterator<Item = (&EnchantKey, u32)> {
        self.levels.iter().map(|(key, level)| (key, *level))
    }

    /// Native-backed entries only.
    pub fn native_levels(&self) -> impl Iterator<Item = (&NativeEnchant, u32)> {
        self.levels.iter().filter_map(|(key, level)| match key {
            EnchantKey::Native(native) => Some((native, *level)),
            EnchantKey::Custom(_) => None,
        })
    }

    /// Custom entries only.
    pub fn custom_levels(&self) -> impl Iterator<Item = (EnchantmentId, u32)> {
        self.levels.iter().filter_map(|(key, level)| match key {
            EnchantKey::Custom(id) => Some((*id, *level)),
            EnchantKey::Native(_) => None,
        })
    }

    pub fn level(&self, key: &EnchantKey) -> Option<u32> {
        self.levels.get(key).copied()
    }

    pub fn has_enchantment(&self, key: &EnchantKey) -> bool {
        self.levels.contains_key(key)
    }

    pub fn souls(&self) -> u32 {
        self.souls
    }

    /// Whether the item's applicability set satisfies at least one of the
    /// definition's targets. Conflict and level-bound enforcement is an open
    /// product question and intentionally not part of this check.
    pub fn accepts(&self, def: &EnchantmentDefinition) -> bool {
        def.targets.iter().any(|target| self.targets.contains(target))
    }

    /// Snapshot with one entry set.
    pub fn with_enchantment(&self, key: EnchantKey, level: u32) -> Self {
        let mut next = self.clone();
        next.levels.insert(key, level);
        next
    }

    /// Snapshot with every entry in the iterator set.
    pub fn with_enchantments(&self, entries: impl IntoIterator<Item = (EnchantKey, u32)>) -> Self {
        let mut next = self.clone();
        next.levels.extend(entries);
        next
    }

    /// Snapshot with one entry removed.
    pub fn without_enchantment(&self, key: &EnchantKey) -> Self {
        let mut next = self.clone();
        next.levels.remove(key);
        next
    }

    /// Snapshot with the soul counter set.
    pub fn with_souls(&self, souls: u32) -> Self {
        let mut next = self.clone();
        next.souls = souls;
        next
    }
}
