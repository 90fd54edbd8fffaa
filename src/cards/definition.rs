//! Card definitions - static catalog data.
//!
//! `CardDefinition` holds the immutable properties of a card: name, cost,
//! type line, expansion, and where its pile lives (kingdom supply, basic
//! supply, or outside the supply). Per-match pile state lives in
//! `setup::supply`, not here.

use serde::{Deserialize, Serialize};

use super::expansion::Expansion;
use super::kinds::{CardKind, KindList};

/// Unique identifier for a card definition.
///
/// Identifies the card itself (e.g. "Young Witch"), not a pile or a
/// physical copy. Ids are stable across processes so they can appear in
/// wire messages and saved matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card's cost: coins plus an optional potion component.
///
/// ## Example
///
/// ```
/// use kingdom_setup::cards::Cost;
///
/// let familiar = Cost::coins(3).plus_potion();
/// assert_eq!(familiar.coins, 3);
/// assert!(familiar.has_potion());
/// assert_eq!(format!("{}", familiar), "$3P");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cost {
    /// Coin component.
    pub coins: u8,
    /// Potion component (0 or 1 in the supported sets).
    pub potions: u8,
}

impl Cost {
    /// A plain coin cost.
    #[must_use]
    pub const fn coins(coins: u8) -> Self {
        Self { coins, potions: 0 }
    }

    /// Add a potion to the cost (builder pattern).
    #[must_use]
    pub const fn plus_potion(mut self) -> Self {
        self.potions += 1;
        self
    }

    /// Does the cost include a potion?
    #[must_use]
    pub const fn has_potion(self) -> bool {
        self.potions > 0
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.coins)?;
        for _ in 0..self.potions {
            write!(f, "P")?;
        }
        Ok(())
    }
}

/// Where a card's pile lives during a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupplyClass {
    /// A randomizer card: eligible to be one of the ten kingdom piles.
    #[default]
    Kingdom,
    /// Always-available supply card (Copper, Province, Curse, Potion...).
    Basic,
    /// Supply card that only enters play via a setup rule (the Ruins).
    Auxiliary,
    /// Gained outside the supply (Madman, Spoils, the Rewards...).
    NonSupply,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use kingdom_setup::cards::{CardDefinition, CardId, CardKind, Cost, Expansion};
///
/// let witch = CardDefinition::new(
///     CardId::new(113),
///     "Young Witch",
///     Expansion::Cornucopia,
///     Cost::coins(4),
/// )
/// .with_kind(CardKind::Action)
/// .with_kind(CardKind::Attack);
///
/// assert!(witch.has_kind(CardKind::Attack));
/// assert!(witch.is_kingdom());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card.
    pub id: CardId,

    /// Card name, unique across the catalog.
    pub name: String,

    /// Expansion this card belongs to.
    pub expansion: Expansion,

    /// Printed cost.
    pub cost: Cost,

    /// Type line, in printed order.
    pub kinds: KindList,

    /// Where this card's pile lives.
    pub class: SupplyClass,
}

impl CardDefinition {
    /// Create a new kingdom card definition.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, expansion: Expansion, cost: Cost) -> Self {
        Self {
            id,
            name: name.into(),
            expansion,
            cost,
            kinds: KindList::new(),
            class: SupplyClass::Kingdom,
        }
    }

    /// Append a kind to the type line (builder pattern).
    #[must_use]
    pub fn with_kind(mut self, kind: CardKind) -> Self {
        self.kinds.push(kind);
        self
    }

    /// Mark as a basic supply card (builder pattern).
    #[must_use]
    pub fn basic(mut self) -> Self {
        self.class = SupplyClass::Basic;
        self
    }

    /// Mark as an auxiliary supply card (builder pattern).
    #[must_use]
    pub fn auxiliary(mut self) -> Self {
        self.class = SupplyClass::Auxiliary;
        self
    }

    /// Mark as a non-supply card (builder pattern).
    #[must_use]
    pub fn non_supply(mut self) -> Self {
        self.class = SupplyClass::NonSupply;
        self
    }

    /// Does the type line contain `kind`?
    #[must_use]
    pub fn has_kind(&self, kind: CardKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Is this a kingdom randomizer card?
    #[must_use]
    pub fn is_kingdom(&self) -> bool {
        self.class == SupplyClass::Kingdom
    }

    /// Is this a basic supply card?
    #[must_use]
    pub fn is_basic(&self) -> bool {
        self.class == SupplyClass::Basic
    }

    /// Is this card gained from outside the supply?
    #[must_use]
    pub fn is_non_supply(&self) -> bool {
        self.class == SupplyClass::NonSupply
    }

    /// Is this a Victory card? (Affects kingdom pile sizing.)
    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.has_kind(CardKind::Victory)
    }

    /// Does this card pull Ruins into the supply?
    #[must_use]
    pub fn is_looter(&self) -> bool {
        self.has_kind(CardKind::Looter)
    }
}
