//! Enchantment identity and definitions.
//!
//! Definitions come in two kinds: *wrapped-native* (backed by an enchantment
//! the host platform understands) and *custom* (defined purely by this
//! system, persisted only in descriptive text). Both share the same fields
//! and are dispatched by the [`EnchantmentBacking`] tag.

use std::collections::BTreeSet;
use std::fmt;

use crate::target::EnchantmentTarget;

/// Stable identity for a registered enchantment definition.
///
/// Built-in catalog ids are fixed constants; wrapped-native ids are assigned
/// from a reserved range at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnchantmentId(u32);

impl EnchantmentId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

/// Host-side identifier for a native enchantment (e.g. `unbreaking`).
///
/// Normalized lowercase so host casing never splits identities.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NativeEnchant(String);

impl NativeEnchant {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_ascii_lowercase())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NativeEnchant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key of the level mapping on an item.
///
/// Native entries are authoritative host data and need no registered
/// definition; custom entries resolve through the registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnchantKey {
    Native(NativeEnchant),
    Custom(EnchantmentId),
}

/// Where a definition's levels are stored on the item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnchantmentBacking {
    /// Backed by a host-native enchantment; levels live in native storage.
    Native(NativeEnchant),
    /// No native counterpart; levels live in descriptive text.
    Custom,
}

/// An enchantment definition. Immutable once registered.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnchantmentDefinition {
    pub id: EnchantmentId,
    /// Canonical lowercase name used for config and lookup.
    pub name: String,
    /// Presentation name written into descriptive text.
    pub display_name: String,
    /// Curses render in a distinct color and usually conflict with their
    /// beneficial counterparts.
    pub curse: bool,
    pub min_level: u32,
    pub max_level: u32,
    /// Item categories this enchantment can be applied to.
    pub targets: BTreeSet<EnchantmentTarget>,
    /// Conflicting definitions. Enforcement policy is an open product
    /// question; the data is carried so callers can implement one.
    pub conflicts: BTreeSet<EnchantmentId>,
    pub backing: EnchantmentBacking,
}

impl EnchantmentDefinition {
    /// Creates a custom definition with level bounds 1..=1 and no targets.
    pub fn custom(
        id: EnchantmentId,
        name: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            display_name: display_name.into(),
            curse: false,
            min_level: 1,
            max_level: 1,
            targets: BTreeSet::new(),
            conflicts: BTreeSet::new(),
            backing: EnchantmentBacking::Custom,
        }
    }

    /// Wraps a host-native enchantment into a definition.
    ///
    /// The display name is title-cased from the native name
    /// (`fire_aspect` becomes `Fire Aspect`); adjust the field directly when
    /// the host uses a different presentation.
    pub fn native(id: EnchantmentId, native: NativeEnchant, max_level: u32) -> Self {
        Self {
            id,
            name: native.name().to_owned(),
            display_name: title_case(native.name()),
            curse: false,
            min_level: 1,
            max_level,
            targets: BTreeSet::new(),
            conflicts: BTreeSet::new(),
            backing: EnchantmentBacking::Native(native),
        }
    }

    /// Marks the definition as a curse.
    pub fn curse(mut self) -> Self {
        self.curse = true;
        self
    }

    /// Sets inclusive level bounds.
    pub fn levels(mut self, min: u32, max: u32) -> Self {
        self.min_level = min;
        self.max_level = max;
        self
    }

    /// Adds an applicability target.
    pub fn target(mut self, target: EnchantmentTarget) -> Self {
        self.targets.insert(target);
        self
    }

    /// Records conflicting definition ids.
    pub fn conflicts_with(mut self, ids: impl IntoIterator<Item = EnchantmentId>) -> Self {
        self.conflicts.extend(ids);
        self
    }

    pub fn is_custom(&self) -> bool {
        matches!(self.backing, EnchantmentBacking::Custom)
    }

    pub fn is_native(&self) -> bool {
        !self.is_custom()
    }

    /// The level-mapping key this definition stores under.
    pub fn key(&self) -> EnchantKey {
        match &self.backing {
            EnchantmentBacking::Native(native) => EnchantKey::Native(native.clone()),
            EnchantmentBacking::Custom => EnchantKey::Custom(self.id),
        }
    }
}

fn title_case(name: &str) -> String {
    name.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_enchants_are_lowercased() {
        assert_eq!(NativeEnchant::new("FIRE_ASPECT").name(), "fire_aspect");
    }

    #[test]
    fn wrapped_native_definitions_title_case_their_display_name() {
        let def = EnchantmentDefinition::native(
            EnchantmentId::new(9),
            NativeEnchant::new("fire_aspect"),
            2,
        );
        assert_eq!(def.display_name, "Fire Aspect");
        assert_eq!(def.name, "fire_aspect");
        assert!(def.is_native());
    }

    #[test]
    fn custom_definitions_default_to_single_level() {
        let def = EnchantmentDefinition::custom(EnchantmentId::new(1), "stillness", "Stillness");
        assert_eq!((def.min_level, def.max_level), (1, 1));
        assert!(def.is_custom());
        assert_eq!(def.key(), EnchantKey::Custom(EnchantmentId::new(1)));
    }

    #[test]
    fn native_definitions_key_by_their_backing() {
        let native = NativeEnchant::new("sharpness");
        let def = EnchantmentDefinition::native(EnchantmentId::new(7), native.clone(), 5);
        assert_eq!(def.key(), EnchantKey::Native(native));
    }
}
