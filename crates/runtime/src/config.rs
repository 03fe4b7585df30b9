//! Runtime configuration.

use std::time::Duration;

/// Which glint strategy the serializer applies at commit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CueStrategyKind {
    /// Hidden zero-level placeholder plus hide flags.
    #[default]
    NativeFlags,
    /// No reconciliation; the host renders its own cue.
    Passthrough,
}

/// Tunables for [`crate::EnchantService`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Idle period after which unobserved derived state is evicted.
    pub cache_idle: Duration,
    /// Glint strategy selection.
    pub cue: CueStrategyKind,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            cache_idle: Duration::from_secs(5 * 60),
            cue: CueStrategyKind::NativeFlags,
        }
    }
}
