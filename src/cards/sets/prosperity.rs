//! Prosperity: kingdom cards plus Platinum and Colony.
//!
//! Platinum and Colony join the basic supply only in "colony games";
//! see `setup::configurators::prosperity`.
//!
//! Id block: 300-399.

use crate::cards::definition::{CardDefinition, CardId, Cost};
use crate::cards::expansion::Expansion;
use crate::cards::kinds::CardKind;
use crate::cards::registry::CardRegistry;

pub const PLATINUM: &str = "Platinum";
pub const COLONY: &str = "Colony";

fn card(id: u32, name: &str, coins: u8) -> CardDefinition {
    CardDefinition::new(
        CardId::new(id),
        name,
        Expansion::Prosperity,
        Cost::coins(coins),
    )
}

/// Register the Prosperity set.
pub fn register(registry: &mut CardRegistry) {
    use CardKind::*;

    registry.register(card(300, "Loan", 3).with_kind(Treasure));
    registry.register(card(301, "Trade Route", 3).with_kind(Action));
    registry.register(card(302, "Watchtower", 3).with_kind(Action).with_kind(Reaction));
    registry.register(card(303, "Bishop", 4).with_kind(Action));
    registry.register(card(304, "Monument", 4).with_kind(Action));
    registry.register(card(305, "Quarry", 4).with_kind(Treasure));
    registry.register(card(306, "Worker's Village", 4).with_kind(Action));
    registry.register(card(307, "City", 5).with_kind(Action));
    registry.register(card(308, "Counting House", 5).with_kind(Action));
    registry.register(card(309, "Mint", 5).with_kind(Action));
    registry.register(card(310, "Mountebank", 5).with_kind(Action).with_kind(Attack));
    registry.register(card(311, "Rabble", 5).with_kind(Action).with_kind(Attack));
    registry.register(card(312, "Royal Seal", 5).with_kind(Treasure));
    registry.register(card(313, "Vault", 5).with_kind(Action));
    registry.register(card(314, "Venture", 5).with_kind(Treasure));
    registry.register(card(315, "Goons", 6).with_kind(Action).with_kind(Attack));
    registry.register(card(316, "Grand Market", 6).with_kind(Action));
    registry.register(card(317, "Hoard", 6).with_kind(Treasure));
    registry.register(card(318, "Bank", 7).with_kind(Treasure));
    registry.register(card(319, "Expand", 7).with_kind(Action));
    registry.register(card(320, "Forge", 7).with_kind(Action));
    registry.register(card(321, "King's Court", 7).with_kind(Action));
    registry.register(card(322, "Peddler", 8).with_kind(Action));

    // Basic supply extensions for colony games
    registry.register(card(330, PLATINUM, 9).with_kind(Treasure).basic());
    registry.register(card(331, COLONY, 11).with_kind(Victory).basic());
}
