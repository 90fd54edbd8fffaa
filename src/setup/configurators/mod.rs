//! Expansion configurators - per-expansion match setup rules.
//!
//! Each configurator inspects the chosen kingdom and appends the
//! auxiliary piles its expansion calls for: the bane pile for Young
//! Witch, Ruins for Looters, Madman/Mercenary/Spoils, Joust's Rewards,
//! a ferryman target, Platinum/Colony, the Potion.
//!
//! ## Contract
//!
//! - A configurator runs to completion synchronously and only touches
//!   its `ConfiguratorContext`.
//! - Unmet preconditions (trigger card absent, pile already present,
//!   no eligible candidate) are a silent no-op, never an error.
//! - Running a configurator twice adds nothing.

use tracing::trace;

use crate::cards::Expansion;

use super::context::ConfiguratorContext;

pub mod alchemy;
pub mod cornucopia;
pub mod dark_ages;
pub mod prosperity;

pub use alchemy::Alchemy;
pub use cornucopia::Cornucopia;
pub use dark_ages::DarkAges;
pub use prosperity::Prosperity;

/// One expansion's setup rules.
pub trait ExpansionConfigurator {
    /// The expansion these rules belong to.
    fn expansion(&self) -> Expansion;

    /// Apply the rules, mutating the configuration in place.
    fn configure(&self, ctx: &mut ConfiguratorContext<'_>);
}

/// Every registered configurator, in dispatch order.
#[must_use]
pub fn all() -> Vec<Box<dyn ExpansionConfigurator>> {
    vec![
        Box::new(Cornucopia),
        Box::new(DarkAges),
        Box::new(Prosperity),
        Box::new(Alchemy),
    ]
}

/// Run each configurator whose expansion is in play.
///
/// An expansion is in play when the configuration selects it or when at
/// least one kingdom pile belongs to it. Dispatch order is fixed, so a
/// given configuration and seed always produce the same setup.
pub fn run_configurators(ctx: &mut ConfiguratorContext<'_>) {
    for configurator in all() {
        let expansion = configurator.expansion();
        if in_play(ctx, expansion) {
            configurator.configure(ctx);
        } else {
            trace!(%expansion, "expansion not in play, skipping configurator");
        }
    }
}

fn in_play(ctx: &ConfiguratorContext<'_>, expansion: Expansion) -> bool {
    ctx.config.expansions.contains(&expansion)
        || ctx
            .config
            .kingdom
            .iter()
            .filter_map(|pile| ctx.registry.by_name(&pile.name))
            .any(|card| card.expansion == expansion)
}
