//! Match configuration and its validating builder.
//!
//! A `MatchConfiguration` is the mutable setup record the expansion
//! configurators operate on: kingdom piles, basic piles, non-supply
//! piles, banned cards, and the colony-game policy. The builder resolves
//! client-supplied card names against the registry and rejects requests
//! the catalog cannot satisfy.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardRegistry, Expansion};

use super::error::SetupError;
use super::supply::{kingdom_pile_size, NonSupplyPile, PileTag, SupplyPile};

/// Whether a match uses Platinum and Colony.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColonyChoice {
    /// Roll once per match, weighted by the number of Prosperity
    /// kingdom piles (the published rule).
    #[default]
    Auto,
    Always,
    Never,
}

/// The match setup record.
///
/// Built by `MatchBuilder`, then completed in place by
/// `setup::configure_match`. Fully serializable so a lobby can echo the
/// final setup to clients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfiguration {
    player_count: usize,

    /// Expansions whose card pools are in play.
    pub expansions: Vec<Expansion>,

    /// Kingdom piles, including configurator-added extras (bane,
    /// ferryman target, Ruins).
    pub kingdom: Vec<SupplyPile>,

    /// Basic supply piles (treasure, victory, Curse, Potion, ...).
    pub basic: Vec<SupplyPile>,

    /// Piles gained from outside the supply.
    pub non_supply: Vec<NonSupplyPile>,

    /// Cards excluded from random selections.
    pub banned: Vec<CardId>,

    /// Platinum/Colony policy.
    pub colony: ColonyChoice,
}

impl MatchConfiguration {
    /// Number of players (2-6).
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Find a kingdom pile by identity.
    #[must_use]
    pub fn kingdom_pile(&self, name: &str) -> Option<&SupplyPile> {
        self.kingdom.iter().find(|p| p.name == name)
    }

    /// Find the kingdom pile carrying `tag`, if any.
    #[must_use]
    pub fn kingdom_pile_tagged(&self, tag: PileTag) -> Option<&SupplyPile> {
        self.kingdom.iter().find(|p| p.has_tag(tag))
    }

    /// Find a basic pile by identity.
    #[must_use]
    pub fn basic_pile(&self, name: &str) -> Option<&SupplyPile> {
        self.basic.iter().find(|p| p.name == name)
    }

    /// Find a non-supply pile by identity.
    #[must_use]
    pub fn non_supply_pile(&self, name: &str) -> Option<&NonSupplyPile> {
        self.non_supply.iter().find(|p| p.name == name)
    }

    /// Is `id` banned from random selections?
    #[must_use]
    pub fn is_banned(&self, id: CardId) -> bool {
        self.banned.contains(&id)
    }

    /// Append a kingdom pile.
    pub fn add_kingdom_pile(&mut self, pile: SupplyPile) {
        self.kingdom.push(pile);
    }

    /// Append a basic pile.
    pub fn add_basic_pile(&mut self, pile: SupplyPile) {
        self.basic.push(pile);
    }

    /// Append a non-supply pile.
    pub fn add_non_supply_pile(&mut self, pile: NonSupplyPile) {
        self.non_supply.push(pile);
    }
}

/// Validating builder for `MatchConfiguration`.
///
/// ## Example
///
/// ```
/// use kingdom_setup::cards::standard_registry;
/// use kingdom_setup::setup::MatchBuilder;
///
/// let registry = standard_registry();
/// let config = MatchBuilder::new(2)
///     .kingdom_cards(&["Village", "Smithy", "Witch", "Market", "Moat"])
///     .build(&registry)
///     .unwrap();
///
/// assert_eq!(config.kingdom.len(), 5);
/// assert_eq!(config.kingdom_pile("Village").unwrap().len(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct MatchBuilder {
    player_count: usize,
    kingdom: Vec<String>,
    expansions: Vec<Expansion>,
    banned: Vec<String>,
    colony: ColonyChoice,
}

impl MatchBuilder {
    /// Start a builder for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            kingdom: Vec::new(),
            expansions: Vec::new(),
            banned: Vec::new(),
            colony: ColonyChoice::default(),
        }
    }

    /// Request a kingdom pile by card name.
    #[must_use]
    pub fn kingdom_card(mut self, name: impl Into<String>) -> Self {
        self.kingdom.push(name.into());
        self
    }

    /// Request several kingdom piles.
    #[must_use]
    pub fn kingdom_cards(mut self, names: &[&str]) -> Self {
        self.kingdom.extend(names.iter().map(|n| n.to_string()));
        self
    }

    /// Put an expansion's card pool in play even if no chosen kingdom
    /// card belongs to it (widens bane/ferryman candidate pools).
    #[must_use]
    pub fn expansion(mut self, expansion: Expansion) -> Self {
        if !self.expansions.contains(&expansion) {
            self.expansions.push(expansion);
        }
        self
    }

    /// Exclude a card from random selections.
    #[must_use]
    pub fn ban(mut self, name: impl Into<String>) -> Self {
        self.banned.push(name.into());
        self
    }

    /// Set the Platinum/Colony policy.
    #[must_use]
    pub fn colony(mut self, choice: ColonyChoice) -> Self {
        self.colony = choice;
        self
    }

    /// Validate against the registry and build the configuration.
    ///
    /// Kingdom piles come out sized for the player count; basic and
    /// auxiliary piles are left for `setup::configure_match`.
    pub fn build(self, registry: &CardRegistry) -> Result<MatchConfiguration, SetupError> {
        if !(2..=6).contains(&self.player_count) {
            return Err(SetupError::PlayerCount(self.player_count));
        }
        if self.kingdom.is_empty() || self.kingdom.len() > 10 {
            return Err(SetupError::KingdomSize(self.kingdom.len()));
        }

        let mut kingdom = Vec::with_capacity(self.kingdom.len());
        let mut seen = Vec::with_capacity(self.kingdom.len());
        for name in &self.kingdom {
            let card = registry
                .by_name(name)
                .ok_or_else(|| SetupError::UnknownCard(name.clone()))?;
            if seen.contains(&card.id) {
                return Err(SetupError::DuplicateKingdomPile(name.clone()));
            }
            if !card.is_kingdom() {
                return Err(SetupError::NotAKingdomCard(name.clone()));
            }
            seen.push(card.id);
            kingdom.push(SupplyPile::uniform(
                card,
                kingdom_pile_size(card, self.player_count),
            ));
        }

        let mut banned = Vec::with_capacity(self.banned.len());
        for name in &self.banned {
            let id = registry
                .id_of(name)
                .ok_or_else(|| SetupError::UnknownCard(name.clone()))?;
            if !banned.contains(&id) {
                banned.push(id);
            }
        }

        // Expansions in play: the explicitly requested ones plus every
        // expansion a chosen kingdom card belongs to, in catalog order.
        let expansions: Vec<Expansion> = Expansion::all()
            .filter(|e| {
                self.expansions.contains(e)
                    || seen
                        .iter()
                        .any(|id| registry.get_unchecked(*id).expansion == *e)
            })
            .collect();

        Ok(MatchConfiguration {
            player_count: self.player_count,
            expansions,
            kingdom,
            basic: Vec::new(),
            non_supply: Vec::new(),
            banned,
            colony: self.colony,
        })
    }
}
