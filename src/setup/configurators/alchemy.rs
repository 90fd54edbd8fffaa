//! Alchemy setup rules: the Potion pile.

use tracing::debug;

use crate::cards::sets::alchemy::POTION;
use crate::cards::Expansion;

use crate::setup::context::ConfiguratorContext;
use crate::setup::supply::{SupplyPile, POTION_PILE_SIZE};
use super::ExpansionConfigurator;

/// Alchemy configurator.
pub struct Alchemy;

impl ExpansionConfigurator for Alchemy {
    fn expansion(&self) -> Expansion {
        Expansion::Alchemy
    }

    fn configure(&self, ctx: &mut ConfiguratorContext<'_>) {
        configure_potion(ctx);
    }
}

/// Any potion-cost kingdom pile pulls the Potion into the basic supply.
fn configure_potion(ctx: &mut ConfiguratorContext<'_>) {
    if ctx.config.basic_pile(POTION).is_some() {
        return;
    }

    let needs_potion = ctx
        .config
        .kingdom
        .iter()
        .filter_map(|pile| ctx.registry.by_name(&pile.name))
        .any(|card| card.cost.has_potion());
    if !needs_potion {
        return;
    }

    let Some(card) = ctx.registry.by_name(POTION) else {
        return;
    };
    debug!("adding potion pile");
    ctx.config
        .add_basic_pile(SupplyPile::uniform(card, POTION_PILE_SIZE));
}
