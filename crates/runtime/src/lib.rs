//! Host-facing runtime for the enchantment codec.
//!
//! This crate wires the pure `enchant-core` transformations to a concrete
//! host platform: the collaborator traits the host implements, the memoizing
//! target classifier, the idle-evicting state cache, and the
//! [`EnchantService`] entry point embedders drive. Consumers construct one
//! service at startup and present items to it; all mutation flows through the
//! bound [`EnchantableItem`] aggregate.
//!
//! Modules are organized by responsibility:
//! - [`host`] declares the collaborator traits implemented by the host
//! - [`classifier`] memoizes applicability classification per item kind
//! - [`cache`] keys derived state by content fingerprint
//! - [`cue`] selects how the enchanted glint is simulated
//! - [`service`] exposes [`EnchantService`] and [`EnchantableItem`]
pub mod cache;
pub mod classifier;
pub mod config;
pub mod cue;
pub mod host;
pub mod service;

pub use cache::{CacheMetrics, StateCache};
pub use classifier::TargetClassifier;
pub use config::{CueStrategyKind, RuntimeConfig};
pub use cue::{NativeFlagCue, PassthroughCue, VisualCueStrategy};
pub use host::{
    ItemMetaSnapshot, MetaWrite, NativeItem, TargetOracle, wrap_native_enchantments,
};
pub use service::{EnchantService, EnchantableItem};
