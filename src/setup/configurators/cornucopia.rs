//! Cornucopia & Guilds setup rules: bane pile, ferryman target, Rewards.

use tracing::debug;

use crate::cards::sets::cornucopia::{FERRYMAN, JOUST, REWARDS, YOUNG_WITCH};
use crate::cards::Expansion;

use crate::setup::context::ConfiguratorContext;
use crate::setup::supply::{kingdom_pile_size, NonSupplyPile, PileTag, SupplyPile, REWARD_PILE_SIZE};
use super::ExpansionConfigurator;

/// Cornucopia & Guilds configurator.
pub struct Cornucopia;

impl ExpansionConfigurator for Cornucopia {
    fn expansion(&self) -> Expansion {
        Expansion::Cornucopia
    }

    fn configure(&self, ctx: &mut ConfiguratorContext<'_>) {
        configure_bane(ctx);
        configure_ferryman(ctx);
        configure_rewards(ctx);
    }
}

/// Young Witch: an eleventh kingdom pile costing $2 or $3, the bane.
fn configure_bane(ctx: &mut ConfiguratorContext<'_>) {
    if ctx.config.kingdom_pile(YOUNG_WITCH).is_none() {
        return;
    }
    if ctx.config.kingdom_pile_tagged(PileTag::Bane).is_some() {
        return;
    }

    let Some(id) = ctx.pick_extra_kingdom_card("bane", 2, 3) else {
        debug!("no eligible bane card, skipping");
        return;
    };
    let card = ctx.registry.get_unchecked(id);
    let size = kingdom_pile_size(card, ctx.config.player_count());
    debug!(card = %card.name, "adding bane pile");
    ctx.config
        .add_kingdom_pile(SupplyPile::uniform(card, size).with_tag(PileTag::Bane));
}

/// Ferryman: an extra kingdom pile costing $3 or $4, set aside at setup.
fn configure_ferryman(ctx: &mut ConfiguratorContext<'_>) {
    if ctx.config.kingdom_pile(FERRYMAN).is_none() {
        return;
    }
    if ctx
        .config
        .kingdom_pile_tagged(PileTag::FerrymanTarget)
        .is_some()
    {
        return;
    }

    let Some(id) = ctx.pick_extra_kingdom_card("ferryman", 3, 4) else {
        debug!("no eligible ferryman target, skipping");
        return;
    };
    let card = ctx.registry.get_unchecked(id);
    let size = kingdom_pile_size(card, ctx.config.player_count());
    debug!(card = %card.name, "adding ferryman target pile");
    ctx.config
        .add_kingdom_pile(SupplyPile::uniform(card, size).with_tag(PileTag::FerrymanTarget));
}

/// Joust: the six Reward piles, two cards each, outside the supply.
fn configure_rewards(ctx: &mut ConfiguratorContext<'_>) {
    if ctx.config.kingdom_pile(JOUST).is_none() {
        return;
    }

    for name in REWARDS {
        if ctx.config.non_supply_pile(name).is_some() {
            continue;
        }
        let Some(card) = ctx.registry.by_name(name) else {
            continue;
        };
        debug!(card = %card.name, "adding reward pile");
        ctx.config
            .add_non_supply_pile(NonSupplyPile::uniform(card, REWARD_PILE_SIZE));
    }
}
