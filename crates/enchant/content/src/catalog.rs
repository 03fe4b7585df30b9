//! Built-in custom enchantment catalog.
//!
//! Ids are stable constants; config files and conflict sets reference them,
//! so renumbering an existing entry is a breaking change. Wrapped-native
//! definitions are assigned ids from a reserved range at startup and never
//! collide with this catalog.

use enchant_core::{EnchantmentDefinition, EnchantmentId, EnchantmentTarget};

pub const STILLNESS: EnchantmentId = EnchantmentId::new(1);
pub const SMELTING: EnchantmentId = EnchantmentId::new(2);
pub const EXPLOSIVE: EnchantmentId = EnchantmentId::new(3);
pub const CHARGING: EnchantmentId = EnchantmentId::new(4);
pub const DISARMING: EnchantmentId = EnchantmentId::new(5);
pub const MISFORTUNE_CURSE: EnchantmentId = EnchantmentId::new(6);

/// Returns the built-in custom enchantment definitions.
pub fn builtin_enchantments() -> Vec<EnchantmentDefinition> {
    vec![
        EnchantmentDefinition::custom(STILLNESS, "stillness", "Stillness")
            .target(EnchantmentTarget::Tool)
            .conflicts_with([SMELTING, MISFORTUNE_CURSE]),
        EnchantmentDefinition::custom(SMELTING, "smelting", "Smelting")
            .target(EnchantmentTarget::Tool)
            .conflicts_with([STILLNESS, MISFORTUNE_CURSE]),
        EnchantmentDefinition::custom(EXPLOSIVE, "explosive", "Explosive")
            .target(EnchantmentTarget::Tool)
            .levels(1, 5),
        EnchantmentDefinition::custom(CHARGING, "charging", "Charging")
            .target(EnchantmentTarget::Weapon)
            .levels(1, 3),
        EnchantmentDefinition::custom(DISARMING, "disarming", "Disarming")
            .target(EnchantmentTarget::Weapon)
            .levels(1, 5),
        EnchantmentDefinition::custom(MISFORTUNE_CURSE, "misfortune_curse", "Misfortune Curse")
            .curse()
            .target(EnchantmentTarget::Tool)
            .conflicts_with([STILLNESS, SMELTING]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use enchant_core::EnchantmentRegistry;
    use std::collections::BTreeSet;

    #[test]
    fn catalog_registers_cleanly() {
        let registry = EnchantmentRegistry::builder()
            .register_all(builtin_enchantments())
            .unwrap()
            .build();
        assert_eq!(registry.len(), builtin_enchantments().len());
    }

    #[test]
    fn ids_and_names_are_unique() {
        let catalog = builtin_enchantments();
        let ids: BTreeSet<_> = catalog.iter().map(|def| def.id).collect();
        let names: BTreeSet<_> = catalog.iter().map(|def| def.name.clone()).collect();
        assert_eq!(ids.len(), catalog.len());
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn conflicts_reference_registered_definitions() {
        let registry = EnchantmentRegistry::builder()
            .register_all(builtin_enchantments())
            .unwrap()
            .build();

        for def in registry.iter() {
            let resolved = registry.conflicts_of(def.id);
            assert_eq!(resolved.len(), def.conflicts.len(), "dangling conflict on {}", def.name);
        }
    }

    #[test]
    fn the_only_curse_is_misfortune() {
        let curses: Vec<_> = builtin_enchantments()
            .into_iter()
            .filter(|def| def.curse)
            .collect();
        assert_eq!(curses.len(), 1);
        assert_eq!(curses[0].id, MISFORTUNE_CURSE);
    }
}
