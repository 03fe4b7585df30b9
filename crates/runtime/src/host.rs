//! Collaborator traits implemented by the embedding host.
//!
//! The codec never owns the underlying item storage; it derives state from a
//! metadata snapshot and publishes updates through an explicit write. Hosts
//! adapt their item API once and everything else in this crate works against
//! these traits.

use std::collections::{BTreeMap, BTreeSet};

use enchant_core::{
    EnchantmentDefinition, EnchantmentId, EnchantmentTarget, ItemFlags, ItemKind, NativeEnchant,
    RenderedMeta,
};

/// First id of the range reserved for wrapped-native definitions, above the
/// built-in custom catalog.
pub const NATIVE_ID_BASE: u32 = 0x1000;

/// The host's target-inclusion predicate.
pub trait TargetOracle: Send + Sync {
    /// Whether `kind` belongs to the native target category.
    fn includes(&self, kind: &ItemKind, target: EnchantmentTarget) -> bool;
}

/// Read/write access to one concrete host item.
pub trait NativeItem {
    /// The host's kind identifier for this item.
    fn kind(&self) -> ItemKind;

    /// Current metadata, or `None` when the host cannot supply it. Reads
    /// against a missing snapshot degrade to empty state and writes become
    /// no-ops.
    fn meta(&self) -> Option<ItemMetaSnapshot>;

    /// Commits rebuilt metadata back to host storage.
    ///
    /// Native levels must be written verbatim, bypassing any host-side
    /// applicability or level validation; the codec is authoritative here.
    fn write_meta(&mut self, write: &MetaWrite);
}

/// Point-in-time copy of the metadata the codec derives from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemMetaSnapshot {
    pub enchantments: BTreeMap<NativeEnchant, u32>,
    pub lore: Vec<String>,
    pub flags: ItemFlags,
}

/// One committed metadata update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaWrite {
    /// Rebuilt descriptive text.
    pub lore: Vec<String>,
    /// Native levels to force-write.
    pub set_enchantments: BTreeMap<NativeEnchant, u32>,
    /// Native entries to delete.
    pub remove_enchantments: BTreeSet<NativeEnchant>,
    /// Presentation flag state after the write.
    pub flags: ItemFlags,
}

impl MetaWrite {
    pub(crate) fn new(rendered: RenderedMeta, flags: ItemFlags) -> Self {
        Self {
            lore: rendered.lore,
            set_enchantments: rendered.native_levels,
            remove_enchantments: rendered.native_removals,
            flags,
        }
    }
}

/// Wraps the host's native enchantment listing into registrable definitions.
///
/// Ids are assigned sequentially from [`NATIVE_ID_BASE`]. Hosts with cursed
/// native enchantments can mark them afterwards through the returned
/// definitions.
pub fn wrap_native_enchantments(
    natives: impl IntoIterator<Item = (NativeEnchant, u32)>,
) -> Vec<EnchantmentDefinition> {
    natives
        .into_iter()
        .enumerate()
        .map(|(i, (native, max_level))| {
            EnchantmentDefinition::native(
                EnchantmentId::new(NATIVE_ID_BASE + i as u32),
                native,
                max_level,
            )
        })
        .collect()
}
