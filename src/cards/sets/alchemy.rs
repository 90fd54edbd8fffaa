//! Alchemy: potion-cost kingdom cards plus the Potion itself.
//!
//! Any kingdom card with a potion in its cost pulls the Potion pile into
//! the basic supply; see `setup::configurators::alchemy`.
//!
//! Id block: 400-499.

use crate::cards::definition::{CardDefinition, CardId, Cost};
use crate::cards::expansion::Expansion;
use crate::cards::kinds::CardKind;
use crate::cards::registry::CardRegistry;

pub const POTION: &str = "Potion";

fn card(id: u32, name: &str, cost: Cost) -> CardDefinition {
    CardDefinition::new(CardId::new(id), name, Expansion::Alchemy, cost)
}

/// Register the Alchemy set.
pub fn register(registry: &mut CardRegistry) {
    use CardKind::*;

    registry.register(card(400, "Transmute", Cost::coins(0).plus_potion()).with_kind(Action));
    registry.register(card(401, "Vineyard", Cost::coins(0).plus_potion()).with_kind(Victory));
    registry.register(card(402, "Herbalist", Cost::coins(2)).with_kind(Action));
    registry.register(card(403, "Apothecary", Cost::coins(2).plus_potion()).with_kind(Action));
    registry.register(
        card(404, "Scrying Pool", Cost::coins(2).plus_potion())
            .with_kind(Action)
            .with_kind(Attack),
    );
    registry.register(card(405, "University", Cost::coins(2).plus_potion()).with_kind(Action));
    registry.register(card(406, "Alchemist", Cost::coins(3).plus_potion()).with_kind(Action));
    registry.register(
        card(407, "Familiar", Cost::coins(3).plus_potion())
            .with_kind(Action)
            .with_kind(Attack),
    );
    registry.register(
        card(408, "Philosopher's Stone", Cost::coins(3).plus_potion()).with_kind(Treasure),
    );
    registry.register(card(409, "Golem", Cost::coins(4).plus_potion()).with_kind(Action));
    registry.register(card(410, "Apprentice", Cost::coins(5)).with_kind(Action));
    registry.register(card(411, "Possession", Cost::coins(6).plus_potion()).with_kind(Action));

    registry.register(card(420, POTION, Cost::coins(4)).with_kind(Treasure).basic());
}
