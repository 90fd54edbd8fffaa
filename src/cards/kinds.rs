//! Card kinds - the entries on a card's type line.
//!
//! Kinds are fixed for this game family. Setup rules key off a few of
//! them: `Victory` changes kingdom pile sizing, `Looter` pulls the Ruins
//! pile into the supply, `Reward` marks the Joust prize cards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A single type-line entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Action,
    Treasure,
    Victory,
    Curse,
    Attack,
    Reaction,
    Duration,
    /// Gains Ruins when in the kingdom.
    Looter,
    /// The five Ruins cards themselves.
    Ruins,
    /// Joust prize cards (non-supply).
    Reward,
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardKind::Action => "Action",
            CardKind::Treasure => "Treasure",
            CardKind::Victory => "Victory",
            CardKind::Curse => "Curse",
            CardKind::Attack => "Attack",
            CardKind::Reaction => "Reaction",
            CardKind::Duration => "Duration",
            CardKind::Looter => "Looter",
            CardKind::Ruins => "Ruins",
            CardKind::Reward => "Reward",
        };
        write!(f, "{name}")
    }
}

/// Ordered kind list for one card.
///
/// Cards rarely have more than two kinds; four covers every card in the
/// supported sets without spilling to the heap.
pub type KindList = SmallVec<[CardKind; 4]>;
