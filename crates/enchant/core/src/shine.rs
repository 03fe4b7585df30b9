//! Glint-cue reconciliation.
//!
//! The host only renders the enchanted glint when a native enchantment is
//! present and the hide flags allow it. Custom entries and the soul counter
//! live in text and would leave the item visually plain, so a zero-level
//! native placeholder stands in for them while the hide flags keep it
//! invisible to the player.

use crate::definition::{EnchantKey, NativeEnchant};
use crate::state::EnchantState;

bitflags::bitflags! {
    /// Presentation flags mirrored onto the host item.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        const HIDE_ENCHANTS = 1;
        const HIDE_POTION_EFFECTS = 1 << 1;
    }
}

/// Native enchantment used purely as a rendering trigger.
pub fn placeholder() -> NativeEnchant {
    NativeEnchant::new("unbreaking")
}

/// Reconciles the placeholder entry and hide flags with the current state.
///
/// - Genuine native entries present: the placeholder is dropped and both
///   hide flags cleared; real data drives the glint.
/// - Custom entries or souls without genuine native entries: the placeholder
///   is kept at level 0 and HIDE_ENCHANTS set so the glint shows without a
///   visible entry.
/// - Neither: placeholder dropped, default flags restored.
///
/// Idempotent: reconciling an already reconciled state changes nothing.
pub fn reconcile(state: &EnchantState) -> (EnchantState, ItemFlags) {
    let marker = EnchantKey::Native(placeholder());
    let marker_present = state.level(&marker) == Some(0);

    let has_genuine_native = state.enchantments().any(|(key, level)| {
        matches!(key, EnchantKey::Native(_)) && !(*key == marker && level == 0)
    });
    let needs_cue = state.souls() > 0
        || state
            .enchantments()
            .any(|(key, _)| matches!(key, EnchantKey::Custom(_)));

    if has_genuine_native {
        let next = if marker_present {
            state.without_enchantment(&marker)
        } else {
            state.clone()
        };
        (next, ItemFlags::empty())
    } else if needs_cue {
        let next = if marker_present {
            state.clone()
        } else {
            state.with_enchantment(marker, 0)
        };
        (next, ItemFlags::HIDE_ENCHANTS)
    } else {
        let next = if marker_present {
            state.without_enchantment(&marker)
        } else {
            state.clone()
        };
        (next, ItemFlags::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::EnchantmentId;

    fn custom_key() -> EnchantKey {
        EnchantKey::Custom(EnchantmentId::new(1))
    }

    #[test]
    fn custom_only_state_gains_the_hidden_placeholder() {
        let state = EnchantState::default().with_enchantment(custom_key(), 1);
        let (next, flags) = reconcile(&state);

        assert_eq!(next.level(&EnchantKey::Native(placeholder())), Some(0));
        assert_eq!(flags, ItemFlags::HIDE_ENCHANTS);
    }

    #[test]
    fn souls_alone_also_force_the_cue() {
        let state = EnchantState::default().with_souls(3);
        let (next, flags) = reconcile(&state);

        assert_eq!(next.level(&EnchantKey::Native(placeholder())), Some(0));
        assert_eq!(flags, ItemFlags::HIDE_ENCHANTS);
    }

    #[test]
    fn genuine_native_entries_evict_the_placeholder() {
        let state = EnchantState::default()
            .with_enchantment(EnchantKey::Native(placeholder()), 0)
            .with_enchantment(EnchantKey::Native(NativeEnchant::new("sharpness")), 2)
            .with_enchantment(custom_key(), 1);
        let (next, flags) = reconcile(&state);

        assert!(!next.has_enchantment(&EnchantKey::Native(placeholder())));
        assert_eq!(flags, ItemFlags::empty());
    }

    #[test]
    fn a_real_placeholder_level_is_genuine() {
        // unbreaking at a positive level is a real enchantment, not a marker.
        let state = EnchantState::default()
            .with_enchantment(EnchantKey::Native(placeholder()), 2);
        let (next, flags) = reconcile(&state);

        assert_eq!(next.level(&EnchantKey::Native(placeholder())), Some(2));
        assert_eq!(flags, ItemFlags::empty());
    }

    #[test]
    fn empty_state_drops_the_placeholder_and_flags() {
        let state = EnchantState::default().with_enchantment(EnchantKey::Native(placeholder()), 0);
        let (next, flags) = reconcile(&state);

        assert_eq!(next.enchantments().count(), 0);
        assert_eq!(flags, ItemFlags::empty());
    }

    #[test]
    fn reconciliation_is_idempotent() {
        let states = [
            EnchantState::default(),
            EnchantState::default().with_enchantment(custom_key(), 1),
            EnchantState::default().with_souls(5),
            EnchantState::default()
                .with_enchantment(EnchantKey::Native(NativeEnchant::new("sharpness")), 1),
            EnchantState::default()
                .with_enchantment(custom_key(), 1)
                .with_enchantment(EnchantKey::Native(NativeEnchant::new("sharpness")), 1),
        ];

        for state in states {
            let (once, flags_once) = reconcile(&state);
            let (twice, flags_twice) = reconcile(&once);
            assert_eq!(once, twice);
            assert_eq!(flags_once, flags_twice);
        }
    }
}
