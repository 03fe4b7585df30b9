//! Content fingerprint for cache keying.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use sha2::{Digest, Sha256};

use crate::definition::NativeEnchant;
use crate::target::EnchantmentTarget;

/// Digest over an item's enchantment-relevant content: native levels,
/// descriptive text, and the applicability set.
///
/// Equal inputs produce equal fingerprints. Fields are domain-separated and
/// length-prefixed so concatenation ambiguities cannot collide.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemFingerprint([u8; 32]);

impl ItemFingerprint {
    pub fn compute(
        native: &BTreeMap<NativeEnchant, u32>,
        lore: &[String],
        targets: &BTreeSet<EnchantmentTarget>,
    ) -> Self {
        let mut hasher = Sha256::new();

        hasher.update(b"native");
        hasher.update((native.len() as u64).to_le_bytes());
        for (enchant, level) in native {
            update_str(&mut hasher, enchant.name());
            hasher.update(level.to_le_bytes());
        }

        hasher.update(b"lore");
        hasher.update((lore.len() as u64).to_le_bytes());
        for line in lore {
            update_str(&mut hasher, line);
        }

        hasher.update(b"targets");
        hasher.update((targets.len() as u64).to_le_bytes());
        for target in targets {
            update_str(&mut hasher, target.as_ref());
        }

        Self(hasher.finalize().into())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

fn update_str(hasher: &mut Sha256, text: &str) {
    hasher.update((text.len() as u64).to_le_bytes());
    hasher.update(text.as_bytes());
}

/// Compact 8-byte hex form for logging.
impl fmt::Display for ItemFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0[..8] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ItemFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemFingerprint({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (
        BTreeMap<NativeEnchant, u32>,
        Vec<String>,
        BTreeSet<EnchantmentTarget>,
    ) {
        (
            BTreeMap::from([(NativeEnchant::new("sharpness"), 3)]),
            vec!["§7Stillness I".to_owned()],
            BTreeSet::from([EnchantmentTarget::Weapon]),
        )
    }

    #[test]
    fn equal_inputs_yield_equal_fingerprints() {
        let (native, lore, targets) = sample();
        let a = ItemFingerprint::compute(&native, &lore, &targets);
        let b = ItemFingerprint::compute(&native, &lore, &targets);
        assert_eq!(a, b);
    }

    #[test]
    fn each_input_contributes() {
        let (native, lore, targets) = sample();
        let base = ItemFingerprint::compute(&native, &lore, &targets);

        let other_native = BTreeMap::from([(NativeEnchant::new("sharpness"), 4)]);
        assert_ne!(base, ItemFingerprint::compute(&other_native, &lore, &targets));

        let other_lore = vec!["§7Stillness II".to_owned()];
        assert_ne!(base, ItemFingerprint::compute(&native, &other_lore, &targets));

        let other_targets = BTreeSet::from([EnchantmentTarget::Tool]);
        assert_ne!(base, ItemFingerprint::compute(&native, &lore, &other_targets));
    }

    #[test]
    fn field_boundaries_are_unambiguous() {
        let targets = BTreeSet::new();
        let a = ItemFingerprint::compute(&BTreeMap::new(), &["ab".to_owned(), "c".to_owned()], &targets);
        let b = ItemFingerprint::compute(&BTreeMap::new(), &["a".to_owned(), "bc".to_owned()], &targets);
        assert_ne!(a, b);
    }

    #[test]
    fn displays_as_compact_hex() {
        let (native, lore, targets) = sample();
        let fingerprint = ItemFingerprint::compute(&native, &lore, &targets);
        let shown = fingerprint.to_string();
        assert_eq!(shown.len(), 16);
        assert_eq!(shown, hex::encode(&fingerprint.as_bytes()[..8]));
    }
}
