//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod extension;
mod hash;
mod kind;
mod tier;

pub use extension::ExtensionFilter;
pub use hash::ContentHash;
pub use kind::ApplianceKind;
pub use tier::SearchTier;
