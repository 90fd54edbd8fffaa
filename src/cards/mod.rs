//! Card catalog: definitions, kinds, expansions, registry, and set data.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for a card definition
//! - `CardKind`: Type-line entries (Action, Victory, Looter, ...)
//! - `Cost`: Coin cost with optional potion component
//! - `CardDefinition`: Static card data (name, cost, kinds, expansion)
//! - `CardRegistry`: Lookup by id or name, plus randomizer-pool queries
//! - `sets`: The concrete catalog, one submodule per expansion

pub mod definition;
pub mod expansion;
pub mod kinds;
pub mod registry;
pub mod sets;

pub use definition::{CardDefinition, CardId, Cost, SupplyClass};
pub use expansion::Expansion;
pub use kinds::{CardKind, KindList};
pub use registry::CardRegistry;
pub use sets::standard_registry;
