//! Card registry for catalog lookup.
//!
//! The `CardRegistry` stores every card definition the server knows
//! about. It provides lookup by `CardId` and by name, and the pool
//! queries the setup rules are built on.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use super::expansion::Expansion;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use kingdom_setup::cards::{CardDefinition, CardId, CardRegistry, Cost, Expansion};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new(
///     CardId::new(1),
///     "Village",
///     Expansion::Base,
///     Cost::coins(3),
/// ));
///
/// let id = registry.id_of("Village").unwrap();
/// assert_eq!(registry.get(id).unwrap().name, "Village");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
    by_name: FxHashMap<String, CardId>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID or name already exists; the
    /// catalog is authored in code, so a clash is a bug at the source.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        if self.by_name.contains_key(&card.name) {
            panic!("Card named {:?} already registered", card.name);
        }
        self.by_name.insert(card.name.clone(), card.id);
        self.cards.insert(card.id, card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card definition by ID, panicking if not found.
    ///
    /// Use when the ID is known to come from this registry.
    #[must_use]
    pub fn get_unchecked(&self, id: CardId) -> &CardDefinition {
        self.cards.get(&id).expect("Card not found in registry")
    }

    /// Look up a card ID by name.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<CardId> {
        self.by_name.get(name).copied()
    }

    /// Look up a card definition by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&CardDefinition> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardDefinition>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }

    /// Kingdom randomizer pool for a selection of expansions.
    ///
    /// Returns ids sorted for deterministic downstream iteration; random
    /// decisions over the pool are owned by the caller's `SetupRng`.
    #[must_use]
    pub fn kingdom_pool(&self, expansions: &[Expansion]) -> Vec<CardId> {
        let mut pool: Vec<CardId> = self
            .cards
            .values()
            .filter(|c| c.is_kingdom() && expansions.contains(&c.expansion))
            .map(|c| c.id)
            .collect();
        pool.sort();
        pool
    }

    /// All cards of one expansion, sorted by id.
    #[must_use]
    pub fn in_expansion(&self, expansion: Expansion) -> Vec<CardId> {
        let mut cards: Vec<CardId> = self
            .cards
            .values()
            .filter(|c| c.expansion == expansion)
            .map(|c| c.id)
            .collect();
        cards.sort();
        cards
    }
}
