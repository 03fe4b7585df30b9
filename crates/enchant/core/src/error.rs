//! Registry construction errors.
//!
//! Parsing is deliberately infallible (foreign text is skipped, never an
//! error), so the only typed failures in this crate happen while the
//! enchantment registry is being built at startup.

use crate::definition::{EnchantmentId, NativeEnchant};

/// Errors raised while registering enchantment definitions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Two definitions were registered under the same id.
    #[error("duplicate enchantment id {0:?}")]
    DuplicateId(EnchantmentId),

    /// Two definitions resolve to the same lookup name.
    #[error("duplicate enchantment name '{0}'")]
    DuplicateName(String),

    /// The same native enchantment was wrapped twice.
    #[error("native enchantment '{0}' wrapped twice")]
    DuplicateNative(NativeEnchant),

    /// A definition declared inverted or zero-based level bounds.
    #[error("enchantment '{name}' has invalid level bounds {min}..={max}")]
    InvalidLevels { name: String, min: u32, max: u32 },
}
