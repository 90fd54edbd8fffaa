//! Dark Ages setup rules: Ruins, Madman, Mercenary, Spoils.

use tracing::debug;

use crate::cards::sets::dark_ages::{
    BANDIT_CAMP, HERMIT, MADMAN, MARAUDER, MERCENARY, PILLAGE, RUINS, SPOILS, URCHIN,
};
use crate::cards::{CardId, Expansion};

use crate::setup::context::ConfiguratorContext;
use crate::setup::supply::{
    ruins_pile_size, NonSupplyPile, SupplyPile, MADMAN_PILE_SIZE, MERCENARY_PILE_SIZE,
    SPOILS_PILE_SIZE,
};
use super::ExpansionConfigurator;

/// Identity of the mixed Ruins pile.
pub const RUINS_PILE: &str = "Ruins";

/// Dark Ages configurator.
pub struct DarkAges;

impl ExpansionConfigurator for DarkAges {
    fn expansion(&self) -> Expansion {
        Expansion::DarkAges
    }

    fn configure(&self, ctx: &mut ConfiguratorContext<'_>) {
        configure_ruins(ctx);
        configure_non_supply(ctx, HERMIT, MADMAN, MADMAN_PILE_SIZE);
        configure_non_supply(ctx, URCHIN, MERCENARY, MERCENARY_PILE_SIZE);
        configure_spoils(ctx);
    }
}

/// Looters bring a shuffled Ruins pile of ten cards per opponent.
fn configure_ruins(ctx: &mut ConfiguratorContext<'_>) {
    let has_looter = ctx
        .config
        .kingdom
        .iter()
        .filter_map(|pile| ctx.registry.by_name(&pile.name))
        .any(|card| card.is_looter());
    if !has_looter {
        return;
    }
    if ctx.config.kingdom_pile(RUINS_PILE).is_some() {
        return;
    }

    // Ten copies of each Ruins card, shuffled, cut down to size.
    let mut cards: Vec<CardId> = RUINS
        .iter()
        .filter_map(|name| ctx.registry.id_of(name))
        .flat_map(|id| std::iter::repeat(id).take(10))
        .collect();
    let mut rng = ctx.rng.for_context("ruins");
    rng.shuffle(&mut cards);
    cards.truncate(ruins_pile_size(ctx.config.player_count()));

    debug!(size = cards.len(), "adding ruins pile");
    ctx.config.add_kingdom_pile(SupplyPile::mixed(RUINS_PILE, cards));
}

/// Hermit and Urchin each bring a fixed companion pile.
fn configure_non_supply(
    ctx: &mut ConfiguratorContext<'_>,
    trigger: &str,
    companion: &str,
    size: usize,
) {
    if ctx.config.kingdom_pile(trigger).is_none() {
        return;
    }
    if ctx.config.non_supply_pile(companion).is_some() {
        return;
    }
    let Some(card) = ctx.registry.by_name(companion) else {
        return;
    };
    debug!(trigger, card = %card.name, "adding non-supply pile");
    ctx.config
        .add_non_supply_pile(NonSupplyPile::uniform(card, size));
}

/// Any Spoils gainer brings the shared Spoils pile.
fn configure_spoils(ctx: &mut ConfiguratorContext<'_>) {
    let gainers = [BANDIT_CAMP, MARAUDER, PILLAGE];
    if !gainers
        .iter()
        .any(|name| ctx.config.kingdom_pile(name).is_some())
    {
        return;
    }
    if ctx.config.non_supply_pile(SPOILS).is_some() {
        return;
    }
    let Some(card) = ctx.registry.by_name(SPOILS) else {
        return;
    };
    debug!("adding spoils pile");
    ctx.config
        .add_non_supply_pile(NonSupplyPile::uniform(card, SPOILS_PILE_SIZE));
}
