//! The concrete card catalog, one submodule per expansion.
//!
//! Each submodule registers its cards with fixed ids (per-expansion id
//! blocks, so new printings never renumber older cards) and exports name
//! constants for the cards the setup rules key off.
//!
//! `standard_registry()` builds the full catalog a server instance uses.

use super::registry::CardRegistry;

pub mod alchemy;
pub mod base;
pub mod cornucopia;
pub mod dark_ages;
pub mod prosperity;

/// Build a registry containing every supported expansion.
#[must_use]
pub fn standard_registry() -> CardRegistry {
    let mut registry = CardRegistry::new();
    base::register(&mut registry);
    cornucopia::register(&mut registry);
    dark_ages::register(&mut registry);
    prosperity::register(&mut registry);
    alchemy::register(&mut registry);
    registry
}
