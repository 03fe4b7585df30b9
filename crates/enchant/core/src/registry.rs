//! Process-wide catalog of enchantment definitions.
//!
//! The registry is populated once at startup (built-in catalog plus the
//! host's wrapped native enchantments) and is read-only afterwards, so it can
//! be shared across threads behind an `Arc` without locking.

use std::collections::{BTreeMap, HashMap};

use crate::definition::{EnchantmentDefinition, EnchantmentId, NativeEnchant};
use crate::error::RegistryError;

/// Read-only lookup over registered enchantment definitions.
pub struct EnchantmentRegistry {
    by_id: BTreeMap<EnchantmentId, EnchantmentDefinition>,
    by_name: HashMap<String, EnchantmentId>,
    by_native: HashMap<NativeEnchant, EnchantmentId>,
}

impl EnchantmentRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Looks up a definition by id.
    pub fn get(&self, id: EnchantmentId) -> Option<&EnchantmentDefinition> {
        self.by_id.get(&id)
    }

    /// Looks up a definition by canonical or display name.
    ///
    /// Case-insensitive; whitespace runs fold to underscores, so both
    /// `misfortune_curse` and `Misfortune Curse` resolve.
    pub fn by_name(&self, name: &str) -> Option<&EnchantmentDefinition> {
        self.by_name
            .get(&normalize(name))
            .and_then(|id| self.by_id.get(id))
    }

    /// Looks up the definition wrapping a native enchantment, if one was
    /// registered.
    pub fn by_native(&self, native: &NativeEnchant) -> Option<&EnchantmentDefinition> {
        self.by_native
            .get(native)
            .and_then(|id| self.by_id.get(id))
    }

    /// Iterates all definitions in id order.
    pub fn iter(&self) -> impl Iterator<Item = &EnchantmentDefinition> {
        self.by_id.values()
    }

    /// Resolves a definition's conflict set to registered definitions.
    pub fn conflicts_of(&self, id: EnchantmentId) -> Vec<&EnchantmentDefinition> {
        self.get(id)
            .map(|def| {
                def.conflicts
                    .iter()
                    .filter_map(|conflict| self.get(*conflict))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Accumulates definitions and validates them before the registry is sealed.
#[derive(Default)]
pub struct RegistryBuilder {
    by_id: BTreeMap<EnchantmentId, EnchantmentDefinition>,
    by_name: HashMap<String, EnchantmentId>,
    by_native: HashMap<NativeEnchant, EnchantmentId>,
}

impl RegistryBuilder {
    /// Registers one definition.
    pub fn register(mut self, def: EnchantmentDefinition) -> Result<Self, RegistryError> {
        if def.min_level < 1 || def.min_level > def.max_level {
            return Err(RegistryError::InvalidLevels {
                name: def.name.clone(),
                min: def.min_level,
                max: def.max_level,
            });
        }
        if self.by_id.contains_key(&def.id) {
            return Err(RegistryError::DuplicateId(def.id));
        }

        // Canonical and display spellings may collapse to the same key for
        // one definition, but never across definitions.
        for key in [normalize(&def.name), normalize(&def.display_name)] {
            match self.by_name.get(&key) {
                Some(existing) if *existing != def.id => {
                    return Err(RegistryError::DuplicateName(key));
                }
                _ => {
                    self.by_name.insert(key, def.id);
                }
            }
        }

        if let crate::definition::EnchantmentBacking::Native(native) = &def.backing {
            if self.by_native.contains_key(native) {
                return Err(RegistryError::DuplicateNative(native.clone()));
            }
            self.by_native.insert(native.clone(), def.id);
        }

        self.by_id.insert(def.id, def);
        Ok(self)
    }

    /// Registers every definition in the iterator.
    pub fn register_all(
        self,
        defs: impl IntoIterator<Item = EnchantmentDefinition>,
    ) -> Result<Self, RegistryError> {
        defs.into_iter().try_fold(self, RegistryBuilder::register)
    }

    /// Seals the registry.
    pub fn build(self) -> EnchantmentRegistry {
        EnchantmentRegistry {
            by_id: self.by_id,
            by_name: self.by_name,
            by_native: self.by_native,
        }
    }
}

fn normalize(name: &str) -> String {
    name.split_whitespace()
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<String>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::EnchantmentBacking;

    fn sample() -> EnchantmentRegistry {
        EnchantmentRegistry::builder()
            .register(EnchantmentDefinition::custom(
                EnchantmentId::new(1),
                "misfortune_curse",
                "Misfortune Curse",
            ))
            .unwrap()
            .register(EnchantmentDefinition::native(
                EnchantmentId::new(2),
                NativeEnchant::new("unbreaking"),
                3,
            ))
            .unwrap()
            .build()
    }

    #[test]
    fn looks_up_by_canonical_and_display_name() {
        let registry = sample();
        let id = EnchantmentId::new(1);
        assert_eq!(registry.by_name("misfortune_curse").map(|d| d.id), Some(id));
        assert_eq!(registry.by_name("Misfortune Curse").map(|d| d.id), Some(id));
        assert_eq!(registry.by_name("MISFORTUNE  CURSE").map(|d| d.id), Some(id));
        assert!(registry.by_name("fortune").is_none());
    }

    #[test]
    fn looks_up_wrapped_natives() {
        let registry = sample();
        let def = registry.by_native(&NativeEnchant::new("UNBREAKING")).unwrap();
        assert_eq!(def.backing, EnchantmentBacking::Native(NativeEnchant::new("unbreaking")));
    }

    #[test]
    fn rejects_duplicate_names() {
        let result = EnchantmentRegistry::builder()
            .register(EnchantmentDefinition::custom(
                EnchantmentId::new(1),
                "stillness",
                "Stillness",
            ))
            .unwrap()
            .register(EnchantmentDefinition::custom(
                EnchantmentId::new(2),
                "stillness",
                "Stillness II",
            ));
        assert_eq!(
            result.err(),
            Some(RegistryError::DuplicateName("stillness".into()))
        );
    }

    #[test]
    fn rejects_duplicate_ids_and_natives() {
        let id = EnchantmentId::new(1);
        let result = EnchantmentRegistry::builder()
            .register(EnchantmentDefinition::custom(id, "a", "A"))
            .unwrap()
            .register(EnchantmentDefinition::custom(id, "b", "B"));
        assert_eq!(result.err(), Some(RegistryError::DuplicateId(id)));

        let native = NativeEnchant::new("sharpness");
        let result = EnchantmentRegistry::builder()
            .register(EnchantmentDefinition::native(
                EnchantmentId::new(1),
                native.clone(),
                5,
            ))
            .unwrap()
            .register(EnchantmentDefinition::native(
                EnchantmentId::new(2),
                native.clone(),
                5,
            ));
        assert_eq!(result.err(), Some(RegistryError::DuplicateNative(native)));
    }

    #[test]
    fn rejects_inverted_level_bounds() {
        let result = EnchantmentRegistry::builder().register(
            EnchantmentDefinition::custom(EnchantmentId::new(1), "a", "A").levels(3, 1),
        );
        assert!(matches!(result, Err(RegistryError::InvalidLevels { .. })));
    }
}
