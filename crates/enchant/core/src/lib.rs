//! Deterministic enchantment-state codec shared across host integrations.
//!
//! `enchant-core` defines the canonical model (definitions, registry, derived
//! state) and the pure transformations over it: the Roman-numeral level codec,
//! the descriptive-text parser and serializer, glint-cue reconciliation, and
//! the content fingerprint used for cache keying. Everything here is a
//! synchronous, side-effect-free computation; host I/O and caching live in the
//! `runtime` crate, which depends on the types re-exported here.
pub mod definition;
pub mod error;
pub mod fingerprint;
pub mod lore;
pub mod numerals;
pub mod registry;
pub mod shine;
pub mod state;
pub mod target;

pub use definition::{
    EnchantKey, EnchantmentBacking, EnchantmentDefinition, EnchantmentId, NativeEnchant,
};
pub use error::RegistryError;
pub use fingerprint::ItemFingerprint;
pub use lore::{RenderedMeta, SOUL_MARKER, parse_state, render_souls, render_state};
pub use registry::{EnchantmentRegistry, RegistryBuilder};
pub use shine::{ItemFlags, reconcile};
pub use state::EnchantState;
pub use target::{EnchantmentTarget, ItemKind};
