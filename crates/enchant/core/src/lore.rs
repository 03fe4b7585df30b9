//! Descriptive-text codec: recovering state from lore lines and rebuilding
//! them.
//!
//! The text channel is shared with other systems, so parsing is tolerant by
//! construction: any line that is not a well-formed encoded entry is foreign
//! text and passes through every rewrite verbatim and in order. Native
//! enchantments never round-trip through text; the host's own storage is
//! authoritative for them.

use std::collections::{BTreeMap, BTreeSet};

use crate::definition::{EnchantKey, NativeEnchant};
use crate::numerals;
use crate::registry::EnchantmentRegistry;
use crate::state::EnchantState;
use crate::target::EnchantmentTarget;

/// First token of the soul-counter line.
pub const SOUL_MARKER: &str = "Souls:";

/// Host color-code escape character.
const COLOR_CHAR: char = '§';
const GRAY: &str = "§7";
const RED: &str = "§c";

/// Removes `§x` presentation codes from a line.
pub fn strip_formatting(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c == COLOR_CHAR {
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}

fn split_line(line: &str) -> Vec<String> {
    strip_formatting(line)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Derives state from native enchantment levels and descriptive text.
///
/// Native entries are accepted unconditionally. Custom entries are recovered
/// from lines of the form `<display name> <numerals>`; a failed name lookup
/// or numeral decode skips the line silently. Later duplicates overwrite
/// earlier ones. The soul counter comes from the first `Souls:` line whose
/// numeral decodes.
pub fn parse_state(
    registry: &EnchantmentRegistry,
    targets: BTreeSet<EnchantmentTarget>,
    native: &BTreeMap<NativeEnchant, u32>,
    lore: &[String],
) -> EnchantState {
    let mut levels: BTreeMap<EnchantKey, u32> = native
        .iter()
        .map(|(enchant, level)| (EnchantKey::Native(enchant.clone()), *level))
        .collect();

    for line in lore {
        let tokens = split_line(line);
        if tokens.len() < 2 {
            continue;
        }

        let name = tokens[..tokens.len() - 1].join(" ");
        let Some(def) = registry.by_name(&name) else {
            continue;
        };
        // Native-backed entries are read from native storage, never from text.
        if !def.is_custom() {
            continue;
        }
        let Some(level) = numerals::decode(&tokens[tokens.len() - 1]) else {
            continue;
        };

        levels.insert(def.key(), level);
    }

    EnchantState::from_parts(targets, levels, parse_souls(lore))
}

fn parse_souls(lore: &[String]) -> u32 {
    for line in lore {
        let tokens = split_line(line);
        if tokens.len() < 2 || tokens[0] != SOUL_MARKER {
            continue;
        }
        if let Some(souls) = numerals::decode(&tokens[tokens.len() - 1]) {
            return souls;
        }
    }
    0
}

/// Text and native writes produced by [`render_state`] and [`render_souls`].
///
/// The caller owns the commit: applying the patch to host storage and
/// re-registering the item in the state cache.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedMeta {
    /// Rebuilt descriptive text, unrelated lines preserved in order.
    pub lore: Vec<String>,
    /// Native levels to force-write, bypassing host validation.
    pub native_levels: BTreeMap<NativeEnchant, u32>,
    /// Native entries on the item that are gone from the state.
    pub native_removals: BTreeSet<NativeEnchant>,
}

/// Rebuilds the full text block and native writes for the current state.
///
/// Previously encoded enchantment and soul lines are reclaimed, custom
/// entries are re-emitted (`§7` gray, `§c` red for curses), and the soul line
/// is appended when the counter is positive.
pub fn render_state(
    registry: &EnchantmentRegistry,
    state: &EnchantState,
    prior_lore: &[String],
    prior_native: &BTreeMap<NativeEnchant, u32>,
) -> RenderedMeta {
    let mut lore = strip_encoded_lines(registry, prior_lore);

    for (id, level) in state.custom_levels() {
        // Ids without a registered definition have no display name to write.
        if let Some(def) = registry.get(id) {
            let color = if def.curse { RED } else { GRAY };
            lore.push(format!(
                "{color}{} {}",
                def.display_name,
                numerals::encode(level)
            ));
        }
    }

    if state.souls() > 0 {
        lore.push(soul_line(state.souls()));
    }

    let (native_levels, native_removals) = native_writes(state, prior_native);
    RenderedMeta {
        lore,
        native_levels,
        native_removals,
    }
}

/// Souls-only rewrite: reclaims just the soul line and re-appends it,
/// leaving enchantment lore untouched.
pub fn render_souls(
    state: &EnchantState,
    prior_lore: &[String],
    prior_native: &BTreeMap<NativeEnchant, u32>,
) -> RenderedMeta {
    let mut lore = strip_soul_lines(prior_lore);
    if state.souls() > 0 {
        lore.push(soul_line(state.souls()));
    }

    let (native_levels, native_removals) = native_writes(state, prior_native);
    RenderedMeta {
        lore,
        native_levels,
        native_removals,
    }
}

fn soul_line(souls: u32) -> String {
    format!("{GRAY}{SOUL_MARKER} {}", numerals::encode(souls))
}

fn native_writes(
    state: &EnchantState,
    prior_native: &BTreeMap<NativeEnchant, u32>,
) -> (BTreeMap<NativeEnchant, u32>, BTreeSet<NativeEnchant>) {
    let levels: BTreeMap<NativeEnchant, u32> = state
        .native_levels()
        .map(|(enchant, level)| (enchant.clone(), level))
        .collect();
    let removals = prior_native
        .keys()
        .filter(|enchant| !levels.contains_key(*enchant))
        .cloned()
        .collect();
    (levels, removals)
}

/// Drops previously encoded enchantment lines and the soul line, keeping
/// everything else in order. Matching is by name alone, so a line with a
/// corrupted numeral is still reclaimed rather than duplicated.
fn strip_encoded_lines(registry: &EnchantmentRegistry, lore: &[String]) -> Vec<String> {
    lore.iter()
        .filter(|line| {
            let tokens = split_line(line);
            if tokens.len() < 2 {
                return true;
            }
            if tokens[0] == SOUL_MARKER {
                return false;
            }
            let name = tokens[..tokens.len() - 1].join(" ");
            !registry.by_name(&name).is_some_and(|def| def.is_custom())
        })
        .cloned()
        .collect()
}

/// Drops only the soul line.
fn strip_soul_lines(lore: &[String]) -> Vec<String> {
    lore.iter()
        .filter(|line| {
            let tokens = split_line(line);
            tokens.len() < 2 || tokens[0] != SOUL_MARKER
        })
        .cloned()
        .collect()
}
