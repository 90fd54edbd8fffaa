//! Pile model and sizing rules.
//!
//! A match's supply is a list of named piles. Most piles are uniform
//! (N copies of one card); the Ruins pile is a shuffled mix. Piles can
//! carry tags for setup roles (bane, ferryman target).
//!
//! Sizing follows the published player-count tables; the functions here
//! are the single source of truth for them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardDefinition, CardId};

/// Setup role attached to a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileTag {
    /// Extra kingdom pile added for Young Witch.
    Bane,
    /// Extra kingdom pile set aside for Ferryman.
    FerrymanTarget,
}

/// A supply pile.
///
/// `cards` is ordered bottom to top; the last entry is the visible top
/// card. Uniform piles repeat one card id; the Ruins pile mixes five.
/// The pile `name` is its identity: for uniform piles it equals the
/// card name, for mixed piles it names the pile itself ("Ruins").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyPile {
    /// Pile identity.
    pub name: String,

    /// Pile contents, bottom to top.
    pub cards: Vec<CardId>,

    /// Setup roles.
    #[serde(default)]
    pub tags: SmallVec<[PileTag; 2]>,
}

impl SupplyPile {
    /// A uniform pile: `count` copies of one card.
    #[must_use]
    pub fn uniform(card: &CardDefinition, count: usize) -> Self {
        Self {
            name: card.name.clone(),
            cards: vec![card.id; count],
            tags: SmallVec::new(),
        }
    }

    /// A mixed pile with explicit contents.
    #[must_use]
    pub fn mixed(name: impl Into<String>, cards: Vec<CardId>) -> Self {
        Self {
            name: name.into(),
            cards,
            tags: SmallVec::new(),
        }
    }

    /// Attach a setup tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: PileTag) -> Self {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// The visible top card.
    #[must_use]
    pub fn top(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// Number of cards left in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the pile empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Does this pile carry `tag`?
    #[must_use]
    pub fn has_tag(&self, tag: PileTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Does the pile contain at least one copy of `id`?
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains(&id)
    }
}

/// A pile of cards gained from outside the supply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonSupplyPile {
    /// Pile identity (equals the card name).
    pub name: String,

    /// Pile contents.
    pub cards: Vec<CardId>,
}

impl NonSupplyPile {
    /// A pile of `count` copies of one card.
    #[must_use]
    pub fn uniform(card: &CardDefinition, count: usize) -> Self {
        Self {
            name: card.name.clone(),
            cards: vec![card.id; count],
        }
    }

    /// Number of cards left in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the pile empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

// === Sizing rules ===

/// Non-Victory kingdom piles always hold ten cards.
pub const ACTION_PILE_SIZE: usize = 10;

pub const SILVER_PILE_SIZE: usize = 40;
pub const GOLD_PILE_SIZE: usize = 30;
pub const PLATINUM_PILE_SIZE: usize = 12;
pub const POTION_PILE_SIZE: usize = 16;
pub const SPOILS_PILE_SIZE: usize = 15;
pub const MADMAN_PILE_SIZE: usize = 10;
pub const MERCENARY_PILE_SIZE: usize = 10;
pub const REWARD_PILE_SIZE: usize = 2;

/// Victory pile size (kingdom Victory cards, Estate, Duchy, Colony).
#[must_use]
pub fn victory_pile_size(player_count: usize) -> usize {
    if player_count <= 2 {
        8
    } else {
        12
    }
}

/// Province pile size, which keeps growing past four players.
#[must_use]
pub fn province_pile_size(player_count: usize) -> usize {
    match player_count {
        0..=2 => 8,
        3 | 4 => 12,
        5 => 15,
        _ => 18,
    }
}

/// Copper pile size: sixty minus the seven starting coppers per player.
#[must_use]
pub fn copper_pile_size(player_count: usize) -> usize {
    60usize.saturating_sub(7 * player_count)
}

/// Curse pile size: ten per player beyond the first.
#[must_use]
pub fn curse_pile_size(player_count: usize) -> usize {
    10 * player_count.saturating_sub(1)
}

/// Ruins pile size: ten per player beyond the first.
#[must_use]
pub fn ruins_pile_size(player_count: usize) -> usize {
    10 * player_count.saturating_sub(1)
}

/// Size of a kingdom pile for this card and player count.
#[must_use]
pub fn kingdom_pile_size(card: &CardDefinition, player_count: usize) -> usize {
    if card.is_victory() {
        victory_pile_size(player_count)
    } else {
        ACTION_PILE_SIZE
    }
}
