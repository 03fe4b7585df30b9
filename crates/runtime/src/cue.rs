//! Glint-cue strategies.

use enchant_core::{EnchantState, ItemFlags, shine};

/// How the serializer guarantees the enchanted glint for state the host
/// cannot see (custom entries, souls).
pub trait VisualCueStrategy: Send + Sync {
    /// Adjusts state and desired flags before commit. Must be idempotent.
    fn reconcile(&self, state: EnchantState) -> (EnchantState, ItemFlags);
}

/// Default strategy: a hidden zero-level native placeholder forces the glint
/// while the hide flags keep it invisible.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeFlagCue;

impl VisualCueStrategy for NativeFlagCue {
    fn reconcile(&self, state: EnchantState) -> (EnchantState, ItemFlags) {
        shine::reconcile(&state)
    }
}

/// Leaves state untouched and writes default flags, for hosts that drive the
/// glint through a dedicated rendering hook instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassthroughCue;

impl VisualCueStrategy for PassthroughCue {
    fn reconcile(&self, state: EnchantState) -> (EnchantState, ItemFlags) {
        (state, ItemFlags::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enchant_core::{EnchantKey, EnchantmentId};

    #[test]
    fn passthrough_never_touches_state() {
        let state = EnchantState::default()
            .with_enchantment(EnchantKey::Custom(EnchantmentId::new(1)), 1)
            .with_souls(4);

        let (next, flags) = PassthroughCue.reconcile(state.clone());
        assert_eq!(next, state);
        assert_eq!(flags, ItemFlags::empty());
    }

    #[test]
    fn native_flag_cue_inserts_the_placeholder() {
        let state = EnchantState::default().with_souls(4);
        let (next, flags) = NativeFlagCue.reconcile(state);

        assert_eq!(
            next.level(&EnchantKey::Native(shine::placeholder())),
            Some(0)
        );
        assert_eq!(flags, ItemFlags::HIDE_ENCHANTS);
    }
}
