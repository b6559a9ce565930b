//! Domain Layer
//!
//! Core types and rules of rulesnap, free of process and terminal concerns.
//!
//! ## Structure
//!
//! - `entities/` - Appliances, discovered targets, path cache, hash record
//! - `value_objects/` - Immutable value types (ContentHash, SearchTier, ExtensionFilter)
//! - `services/` - Pure helpers (anchor-relative paths, target de-duplication)
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
