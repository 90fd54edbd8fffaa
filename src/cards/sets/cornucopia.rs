//! Cornucopia & Guilds: kingdom cards plus the six Reward cards.
//!
//! Young Witch, Ferryman and Joust each trigger an extra-pile setup
//! rule; see `setup::configurators::cornucopia`.
//!
//! Id block: 100-199.

use crate::cards::definition::{CardDefinition, CardId, Cost};
use crate::cards::expansion::Expansion;
use crate::cards::kinds::CardKind;
use crate::cards::registry::CardRegistry;

pub const YOUNG_WITCH: &str = "Young Witch";
pub const FERRYMAN: &str = "Ferryman";
pub const JOUST: &str = "Joust";

/// The six Joust prize cards, in pile order.
pub const REWARDS: [&str; 6] = [
    "Coronet",
    "Courser",
    "Demesne",
    "Housecarl",
    "Huge Turnip",
    "Renown",
];

fn card(id: u32, name: &str, coins: u8) -> CardDefinition {
    CardDefinition::new(
        CardId::new(id),
        name,
        Expansion::Cornucopia,
        Cost::coins(coins),
    )
}

/// Register the Cornucopia & Guilds set.
pub fn register(registry: &mut CardRegistry) {
    use CardKind::*;

    registry.register(card(100, "Hamlet", 2).with_kind(Action));
    registry.register(card(101, "Candlestick Maker", 2).with_kind(Action));
    registry.register(card(102, "Stonemason", 2).with_kind(Action));
    registry.register(card(103, FERRYMAN, 3).with_kind(Action));
    registry.register(card(104, "Fortune Teller", 3).with_kind(Action).with_kind(Attack));
    registry.register(card(105, "Menagerie", 3).with_kind(Action));
    registry.register(card(106, "Advisor", 4).with_kind(Action));
    registry.register(card(107, "Farming Village", 4).with_kind(Action));
    registry.register(card(108, "Horse Traders", 4).with_kind(Action).with_kind(Reaction));
    registry.register(card(109, "Remake", 4).with_kind(Action));
    registry.register(card(110, YOUNG_WITCH, 4).with_kind(Action).with_kind(Attack));
    registry.register(card(111, "Baker", 5).with_kind(Action));
    registry.register(card(112, "Butcher", 5).with_kind(Action));
    registry.register(card(113, "Harvest", 5).with_kind(Action));
    registry.register(card(114, "Horn of Plenty", 5).with_kind(Treasure));
    registry.register(card(115, "Hunting Party", 5).with_kind(Action));
    registry.register(card(116, "Jester", 5).with_kind(Action).with_kind(Attack));
    registry.register(card(117, JOUST, 5).with_kind(Action));
    registry.register(card(118, "Fairgrounds", 6).with_kind(Victory));

    // Rewards: gained only through Joust
    registry.register(card(130, "Coronet", 4).with_kind(Action).with_kind(Reward).non_supply());
    registry.register(card(131, "Courser", 4).with_kind(Action).with_kind(Reward).non_supply());
    registry.register(card(132, "Demesne", 6).with_kind(Victory).with_kind(Reward).non_supply());
    registry.register(card(133, "Housecarl", 4).with_kind(Action).with_kind(Reward).non_supply());
    registry.register(card(134, "Huge Turnip", 5).with_kind(Treasure).with_kind(Reward).non_supply());
    registry.register(card(135, "Renown", 5).with_kind(Action).with_kind(Reward).non_supply());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_cards_are_kingdom() {
        let mut registry = CardRegistry::new();
        register(&mut registry);

        for name in [YOUNG_WITCH, FERRYMAN, JOUST] {
            assert!(registry.by_name(name).unwrap().is_kingdom(), "{name}");
        }
    }

    #[test]
    fn test_rewards_excluded_from_pool() {
        let mut registry = CardRegistry::new();
        register(&mut registry);

        let pool = registry.kingdom_pool(&[Expansion::Cornucopia]);
        for name in REWARDS {
            let id = registry.id_of(name).unwrap();
            assert!(!pool.contains(&id), "{name} must not be a randomizer");
        }
    }
}
