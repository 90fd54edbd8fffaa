//! # kingdom-setup
//!
//! Expansion-aware match setup for a Dominion-style deck-building
//! server.
//!
//! ## What this crate does
//!
//! Given a requested match (chosen kingdom cards, expansions, player
//! count), it validates the request against the card catalog and
//! completes the setup: basic supply sizing, plus every auxiliary pile
//! the chosen cards call for - a bane pile for Young Witch, Ruins for
//! Looters, Madman/Mercenary for Hermit/Urchin, Spoils for its gainers,
//! Reward piles for Joust, a ferryman target, Platinum/Colony, and the
//! Potion.
//!
//! The turn engine (phases, card effects) is a separate component; this
//! crate only produces the `MatchConfiguration` it starts from.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: every random decision draws a named stream
//!    from the match seed, so a setup replays exactly.
//!
//! 2. **Idempotent**: configurators guard on pile presence; running
//!    setup twice changes nothing.
//!
//! 3. **Silent no-op**: a configurator whose preconditions are unmet
//!    (trigger card absent, no eligible candidate) does nothing rather
//!    than erroring. Errors exist only at the request-validation edge.
//!
//! ## Modules
//!
//! - `core`: deterministic setup RNG
//! - `cards`: card catalog (definitions, registry, per-expansion sets)
//! - `setup`: match configuration, piles, and expansion configurators
//!
//! ## Example
//!
//! ```
//! use kingdom_setup::cards::standard_registry;
//! use kingdom_setup::core::SetupRng;
//! use kingdom_setup::setup::{configure_match, MatchBuilder, PileTag};
//!
//! let registry = standard_registry();
//! let mut config = MatchBuilder::new(2)
//!     .kingdom_cards(&[
//!         "Young Witch", "Hermit", "Marauder", "Village", "Smithy",
//!         "Market", "Militia", "Hamlet", "Sage", "Festival",
//!     ])
//!     .build(&registry)
//!     .unwrap();
//!
//! let mut rng = SetupRng::new(0xC0FFEE);
//! configure_match(&mut config, &registry, &mut rng);
//!
//! // Young Witch brought a bane, Marauder brought Ruins,
//! // Hermit brought the Madman pile.
//! assert!(config.kingdom_pile_tagged(PileTag::Bane).is_some());
//! assert!(config.kingdom_pile("Ruins").is_some());
//! assert!(config.non_supply_pile("Madman").is_some());
//! ```

pub mod cards;
pub mod core;
pub mod setup;

// Re-export commonly used types
pub use crate::cards::{
    standard_registry, CardDefinition, CardId, CardKind, CardRegistry, Cost, Expansion,
    SupplyClass,
};

pub use crate::core::{SetupRng, SetupRngState};

pub use crate::setup::{
    configure_match, populate_basic_supply, random_kingdom, run_configurators, ColonyChoice,
    ConfiguratorContext, ExpansionConfigurator, MatchBuilder, MatchConfiguration, NonSupplyPile,
    PileTag, SetupError, SupplyPile,
};
