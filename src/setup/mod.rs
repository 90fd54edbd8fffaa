//! Match setup: configuration, piles, and expansion configurators.
//!
//! The flow a lobby drives:
//!
//! 1. `MatchBuilder` validates the requested kingdom against the
//!    catalog and yields a `MatchConfiguration` with sized kingdom
//!    piles.
//! 2. `configure_match` populates the basic supply and runs every
//!    expansion configurator in play, appending auxiliary piles (bane,
//!    Ruins, Madman, Spoils, Rewards, Platinum/Colony, Potion...).
//!
//! Both steps are deterministic given the catalog, the request, and the
//! match seed, and both are idempotent.

use tracing::debug;

use crate::cards::sets::base;
use crate::cards::{CardId, CardRegistry, Expansion};
use crate::core::SetupRng;

pub mod config;
pub mod configurators;
pub mod context;
pub mod error;
pub mod supply;

pub use config::{ColonyChoice, MatchBuilder, MatchConfiguration};
pub use configurators::{run_configurators, ExpansionConfigurator};
pub use context::ConfiguratorContext;
pub use error::SetupError;
pub use supply::{NonSupplyPile, PileTag, SupplyPile};

/// Populate the always-present basic supply.
///
/// Adds the three treasures, the three victory cards and the Curse
/// pile, sized for the player count. No-op when a basic supply is
/// already present.
pub fn populate_basic_supply(ctx: &mut ConfiguratorContext<'_>) {
    if !ctx.config.basic.is_empty() {
        return;
    }

    let players = ctx.config.player_count();
    let piles = [
        (base::COPPER, supply::copper_pile_size(players)),
        (base::SILVER, supply::SILVER_PILE_SIZE),
        (base::GOLD, supply::GOLD_PILE_SIZE),
        (base::ESTATE, supply::victory_pile_size(players)),
        (base::DUCHY, supply::victory_pile_size(players)),
        (base::PROVINCE, supply::province_pile_size(players)),
        (base::CURSE, supply::curse_pile_size(players)),
    ];
    for (name, size) in piles {
        let Some(card) = ctx.registry.by_name(name) else {
            continue;
        };
        ctx.config
            .add_basic_pile(supply::SupplyPile::uniform(card, size));
    }
    debug!(players, "populated basic supply");
}

/// Complete a match configuration in place.
///
/// Populates the basic supply, then runs every expansion configurator
/// in play. Deterministic for a given seed; running it again changes
/// nothing.
pub fn configure_match(
    config: &mut MatchConfiguration,
    registry: &CardRegistry,
    rng: &mut SetupRng,
) {
    let mut ctx = ConfiguratorContext::new(config, registry, rng);
    populate_basic_supply(&mut ctx);
    run_configurators(&mut ctx);
}

/// Draw a random kingdom of `count` distinct randomizer cards.
///
/// Uses the `"kingdom"` stream of the match RNG over the selected
/// expansions' pools, excluding banned cards. Returns fewer ids only
/// when the pool is smaller than `count`.
#[must_use]
pub fn random_kingdom(
    registry: &CardRegistry,
    expansions: &[Expansion],
    banned: &[CardId],
    count: usize,
    rng: &SetupRng,
) -> Vec<CardId> {
    let mut pool: Vec<CardId> = registry
        .kingdom_pool(expansions)
        .into_iter()
        .filter(|id| !banned.contains(id))
        .collect();

    let mut stream = rng.for_context("kingdom");
    stream.shuffle(&mut pool);
    pool.truncate(count);
    pool
}
