//! Base set: the seven basic supply cards and the 2E kingdom cards.
//!
//! Id block: 1-99.

use crate::cards::definition::{CardDefinition, CardId, Cost};
use crate::cards::expansion::Expansion;
use crate::cards::kinds::CardKind;
use crate::cards::registry::CardRegistry;

pub const COPPER: &str = "Copper";
pub const SILVER: &str = "Silver";
pub const GOLD: &str = "Gold";
pub const ESTATE: &str = "Estate";
pub const DUCHY: &str = "Duchy";
pub const PROVINCE: &str = "Province";
pub const CURSE: &str = "Curse";

fn card(id: u32, name: &str, coins: u8) -> CardDefinition {
    CardDefinition::new(CardId::new(id), name, Expansion::Base, Cost::coins(coins))
}

/// Register the Base set.
pub fn register(registry: &mut CardRegistry) {
    use CardKind::*;

    // Basic supply
    registry.register(card(1, COPPER, 0).with_kind(Treasure).basic());
    registry.register(card(2, SILVER, 3).with_kind(Treasure).basic());
    registry.register(card(3, GOLD, 6).with_kind(Treasure).basic());
    registry.register(card(4, ESTATE, 2).with_kind(Victory).basic());
    registry.register(card(5, DUCHY, 5).with_kind(Victory).basic());
    registry.register(card(6, PROVINCE, 8).with_kind(Victory).basic());
    registry.register(card(7, CURSE, 0).with_kind(Curse).basic());

    // Kingdom cards (second edition)
    registry.register(card(10, "Cellar", 2).with_kind(Action));
    registry.register(card(11, "Chapel", 2).with_kind(Action));
    registry.register(card(12, "Moat", 2).with_kind(Action).with_kind(Reaction));
    registry.register(card(13, "Harbinger", 3).with_kind(Action));
    registry.register(card(14, "Merchant", 3).with_kind(Action));
    registry.register(card(15, "Vassal", 3).with_kind(Action));
    registry.register(card(16, "Village", 3).with_kind(Action));
    registry.register(card(17, "Workshop", 3).with_kind(Action));
    registry.register(card(18, "Bureaucrat", 4).with_kind(Action).with_kind(Attack));
    registry.register(card(19, "Gardens", 4).with_kind(Victory));
    registry.register(card(20, "Militia", 4).with_kind(Action).with_kind(Attack));
    registry.register(card(21, "Moneylender", 4).with_kind(Action));
    registry.register(card(22, "Poacher", 4).with_kind(Action));
    registry.register(card(23, "Remodel", 4).with_kind(Action));
    registry.register(card(24, "Smithy", 4).with_kind(Action));
    registry.register(card(25, "Throne Room", 4).with_kind(Action));
    registry.register(card(26, "Bandit", 5).with_kind(Action).with_kind(Attack));
    registry.register(card(27, "Council Room", 5).with_kind(Action));
    registry.register(card(28, "Festival", 5).with_kind(Action));
    registry.register(card(29, "Laboratory", 5).with_kind(Action));
    registry.register(card(30, "Library", 5).with_kind(Action));
    registry.register(card(31, "Market", 5).with_kind(Action));
    registry.register(card(32, "Mine", 5).with_kind(Action));
    registry.register(card(33, "Sentry", 5).with_kind(Action));
    registry.register(card(34, "Witch", 5).with_kind(Action).with_kind(Attack));
    registry.register(card(35, "Artisan", 6).with_kind(Action));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_cards_are_basic() {
        let mut registry = CardRegistry::new();
        register(&mut registry);

        for name in [COPPER, SILVER, GOLD, ESTATE, DUCHY, PROVINCE, CURSE] {
            assert!(registry.by_name(name).unwrap().is_basic(), "{name}");
        }
    }

    #[test]
    fn test_kingdom_pool_excludes_basics() {
        let mut registry = CardRegistry::new();
        register(&mut registry);

        let pool = registry.kingdom_pool(&[Expansion::Base]);
        assert_eq!(pool.len(), 26);
        assert!(!pool.contains(&registry.id_of(COPPER).unwrap()));
    }
}
