//! Dark Ages: kingdom cards, the five Ruins, and the non-supply cards.
//!
//! The Looters (Death Cart, Marauder, Cultist) pull Ruins into the
//! supply; Hermit and Urchin bring Madman and Mercenary; Bandit Camp,
//! Marauder and Pillage bring Spoils. See
//! `setup::configurators::dark_ages`.
//!
//! Id block: 200-299.

use crate::cards::definition::{CardDefinition, CardId, Cost};
use crate::cards::expansion::Expansion;
use crate::cards::kinds::CardKind;
use crate::cards::registry::CardRegistry;

pub const HERMIT: &str = "Hermit";
pub const URCHIN: &str = "Urchin";
pub const MADMAN: &str = "Madman";
pub const MERCENARY: &str = "Mercenary";
pub const SPOILS: &str = "Spoils";
pub const BANDIT_CAMP: &str = "Bandit Camp";
pub const MARAUDER: &str = "Marauder";
pub const PILLAGE: &str = "Pillage";

/// The five Ruins cards, in pile order.
pub const RUINS: [&str; 5] = [
    "Abandoned Mine",
    "Ruined Library",
    "Ruined Market",
    "Ruined Village",
    "Survivors",
];

fn card(id: u32, name: &str, coins: u8) -> CardDefinition {
    CardDefinition::new(
        CardId::new(id),
        name,
        Expansion::DarkAges,
        Cost::coins(coins),
    )
}

/// Register the Dark Ages set.
pub fn register(registry: &mut CardRegistry) {
    use CardKind::*;

    registry.register(card(200, "Beggar", 2).with_kind(Action).with_kind(Reaction));
    registry.register(card(201, "Squire", 2).with_kind(Action));
    registry.register(card(202, "Vagrant", 2).with_kind(Action));
    registry.register(card(203, "Forager", 3).with_kind(Action));
    registry.register(card(204, HERMIT, 3).with_kind(Action));
    registry.register(card(205, "Market Square", 3).with_kind(Action).with_kind(Reaction));
    registry.register(card(206, "Sage", 3).with_kind(Action));
    registry.register(card(207, "Storeroom", 3).with_kind(Action));
    registry.register(card(208, URCHIN, 3).with_kind(Action).with_kind(Attack));
    registry.register(card(209, "Armory", 4).with_kind(Action));
    registry.register(card(210, "Death Cart", 4).with_kind(Action).with_kind(Looter));
    registry.register(card(211, "Feodum", 4).with_kind(Victory));
    registry.register(
        card(212, MARAUDER, 4)
            .with_kind(Action)
            .with_kind(Attack)
            .with_kind(Looter),
    );
    registry.register(card(213, "Rats", 4).with_kind(Action));
    registry.register(card(214, "Scavenger", 4).with_kind(Action));
    registry.register(card(215, "Wandering Minstrel", 4).with_kind(Action));
    registry.register(card(216, "Band of Misfits", 5).with_kind(Action));
    registry.register(card(217, BANDIT_CAMP, 5).with_kind(Action));
    registry.register(card(218, "Catacombs", 5).with_kind(Action));
    registry.register(card(219, "Count", 5).with_kind(Action));
    registry.register(card(220, "Counterfeit", 5).with_kind(Treasure));
    registry.register(
        card(221, "Cultist", 5)
            .with_kind(Action)
            .with_kind(Attack)
            .with_kind(Looter),
    );
    registry.register(card(222, "Graverobber", 5).with_kind(Action));
    registry.register(card(223, "Junk Dealer", 5).with_kind(Action));
    registry.register(card(224, "Mystic", 5).with_kind(Action));
    registry.register(card(225, PILLAGE, 5).with_kind(Action));
    registry.register(card(226, "Rebuild", 5).with_kind(Action));
    registry.register(card(227, "Rogue", 5).with_kind(Action).with_kind(Attack));
    registry.register(card(228, "Altar", 6).with_kind(Action));
    registry.register(card(229, "Hunting Grounds", 6).with_kind(Action));

    // Ruins: a supply pile, but only when a Looter is in the kingdom
    registry.register(card(240, "Abandoned Mine", 0).with_kind(Action).with_kind(Ruins).auxiliary());
    registry.register(card(241, "Ruined Library", 0).with_kind(Action).with_kind(Ruins).auxiliary());
    registry.register(card(242, "Ruined Market", 0).with_kind(Action).with_kind(Ruins).auxiliary());
    registry.register(card(243, "Ruined Village", 0).with_kind(Action).with_kind(Ruins).auxiliary());
    registry.register(card(244, "Survivors", 0).with_kind(Action).with_kind(Ruins).auxiliary());

    // Non-supply
    registry.register(card(245, MADMAN, 0).with_kind(Action).non_supply());
    registry.register(card(246, MERCENARY, 0).with_kind(Action).with_kind(Attack).non_supply());
    registry.register(card(247, SPOILS, 0).with_kind(Treasure).non_supply());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looters() {
        let mut registry = CardRegistry::new();
        register(&mut registry);

        let looters: Vec<_> = registry
            .find(|c| c.is_looter())
            .map(|c| c.name.clone())
            .collect();
        assert_eq!(looters.len(), 3);
        for name in ["Death Cart", MARAUDER, "Cultist"] {
            assert!(looters.iter().any(|n| n == name), "{name}");
        }
    }

    #[test]
    fn test_non_supply_cards_excluded_from_pool() {
        let mut registry = CardRegistry::new();
        register(&mut registry);

        let pool = registry.kingdom_pool(&[Expansion::DarkAges]);
        for name in [MADMAN, MERCENARY, SPOILS] {
            let id = registry.id_of(name).unwrap();
            assert!(!pool.contains(&id), "{name}");
        }
        for name in RUINS {
            let id = registry.id_of(name).unwrap();
            assert!(!pool.contains(&id), "{name}");
        }
    }
}
