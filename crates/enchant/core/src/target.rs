//! Applicability categories and item-kind identity.

use std::fmt;

/// Native target categories an item kind can satisfy.
///
/// Mirrors the host platform's own target taxonomy; definitions reference
/// these to declare what they can be applied to, and the classifier derives
/// the set an item kind satisfies.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EnchantmentTarget {
    All,
    Armor,
    ArmorFeet,
    ArmorLegs,
    ArmorTorso,
    ArmorHead,
    Weapon,
    Tool,
    Bow,
    FishingRod,
    Breakable,
    Wearable,
    Trident,
    Crossbow,
    Vanishable,
}

impl EnchantmentTarget {
    /// Total number of target categories.
    pub const COUNT: usize = 15;

    /// Returns all target categories in declaration order.
    pub const fn all() -> [EnchantmentTarget; Self::COUNT] {
        [
            EnchantmentTarget::All,
            EnchantmentTarget::Armor,
            EnchantmentTarget::ArmorFeet,
            EnchantmentTarget::ArmorLegs,
            EnchantmentTarget::ArmorTorso,
            EnchantmentTarget::ArmorHead,
            EnchantmentTarget::Weapon,
            EnchantmentTarget::Tool,
            EnchantmentTarget::Bow,
            EnchantmentTarget::FishingRod,
            EnchantmentTarget::Breakable,
            EnchantmentTarget::Wearable,
            EnchantmentTarget::Trident,
            EnchantmentTarget::Crossbow,
            EnchantmentTarget::Vanishable,
        ]
    }
}

/// Identifier for a host item kind (e.g. `DIAMOND_AXE`).
///
/// Kind names are uppercased on construction so cache keys and the axe
/// override are insensitive to the host's casing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemKind(String);

impl ItemKind {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_ascii_uppercase())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Axe-type tools carry weapon enchantments even though the host does not
    /// classify them as weapons.
    pub fn is_axe(&self) -> bool {
        self.0.ends_with("_AXE")
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_uppercased() {
        assert_eq!(ItemKind::new(" diamond_axe ").name(), "DIAMOND_AXE");
    }

    #[test]
    fn axe_detection_uses_the_name_suffix() {
        assert!(ItemKind::new("golden_axe").is_axe());
        assert!(!ItemKind::new("PICKAXE").is_axe());
        assert!(!ItemKind::new("DIAMOND_SWORD").is_axe());
    }

    #[test]
    fn targets_render_snake_case() {
        assert_eq!(EnchantmentTarget::FishingRod.to_string(), "fishing_rod");
        assert_eq!(EnchantmentTarget::ArmorTorso.as_ref(), "armor_torso");
    }
}
