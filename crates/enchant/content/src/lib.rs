//! Static enchantment content and catalog loaders.
//!
//! This crate houses the built-in custom enchantment catalog and provides a
//! loader for RON catalog files so server operators can extend the set
//! without recompiling. Content is consumed by the runtime when it builds the
//! process-wide registry; nothing here appears in derived item state.
//!
//! All loaders use enchant-core types directly with serde for RON
//! deserialization.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{
    CHARGING, DISARMING, EXPLOSIVE, MISFORTUNE_CURSE, SMELTING, STILLNESS, builtin_enchantments,
};

#[cfg(feature = "loaders")]
pub use loaders::CatalogLoader;
