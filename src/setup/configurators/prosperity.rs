//! Prosperity setup rules: Platinum and Colony.

use tracing::debug;

use crate::cards::sets::prosperity::{COLONY, PLATINUM};
use crate::cards::Expansion;

use crate::setup::config::ColonyChoice;
use crate::setup::context::ConfiguratorContext;
use crate::setup::supply::{victory_pile_size, SupplyPile, PLATINUM_PILE_SIZE};
use super::ExpansionConfigurator;

/// Prosperity configurator.
pub struct Prosperity;

impl ExpansionConfigurator for Prosperity {
    fn expansion(&self) -> Expansion {
        Expansion::Prosperity
    }

    fn configure(&self, ctx: &mut ConfiguratorContext<'_>) {
        configure_colonies(ctx);
    }
}

/// Roll for a colony game and, when it is one, extend the basic supply.
///
/// The published rule: use Platinum and Colony with probability equal
/// to the share of Prosperity cards among the kingdom piles.
fn configure_colonies(ctx: &mut ConfiguratorContext<'_>) {
    if ctx.config.basic_pile(COLONY).is_some() {
        return;
    }

    let colony_game = match ctx.config.colony {
        ColonyChoice::Always => true,
        ColonyChoice::Never => false,
        ColonyChoice::Auto => {
            let prosperity_piles = ctx
                .config
                .kingdom
                .iter()
                .filter_map(|pile| ctx.registry.by_name(&pile.name))
                .filter(|card| card.expansion == Expansion::Prosperity)
                .count()
                .min(10);
            prosperity_piles > 0
                && ctx
                    .rng
                    .for_context("colony")
                    .gen_bool(prosperity_piles as f64 / 10.0)
        }
    };
    if !colony_game {
        debug!("not a colony game");
        return;
    }

    let players = ctx.config.player_count();
    for (name, size) in [
        (PLATINUM, PLATINUM_PILE_SIZE),
        (COLONY, victory_pile_size(players)),
    ] {
        if ctx.config.basic_pile(name).is_some() {
            continue;
        }
        let Some(card) = ctx.registry.by_name(name) else {
            continue;
        };
        debug!(card = %card.name, "adding colony-game pile");
        ctx.config.add_basic_pile(SupplyPile::uniform(card, size));
    }
}
