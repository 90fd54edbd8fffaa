//! Expansion identifiers.
//!
//! Each card belongs to exactly one expansion. Match configurations name
//! the expansions whose card pools are in play; expansion configurators
//! are dispatched by these identifiers.

use serde::{Deserialize, Serialize};

/// A published card set.
///
/// `Cornucopia` covers the combined Cornucopia & Guilds release, so the
/// second-edition additions (Joust, Ferryman, the Reward cards) live
/// there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expansion {
    Base,
    Cornucopia,
    DarkAges,
    Prosperity,
    Alchemy,
}

impl Expansion {
    /// All supported expansions, in catalog order.
    pub fn all() -> impl Iterator<Item = Expansion> {
        [
            Expansion::Base,
            Expansion::Cornucopia,
            Expansion::DarkAges,
            Expansion::Prosperity,
            Expansion::Alchemy,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for Expansion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Expansion::Base => "Base",
            Expansion::Cornucopia => "Cornucopia",
            Expansion::DarkAges => "Dark Ages",
            Expansion::Prosperity => "Prosperity",
            Expansion::Alchemy => "Alchemy",
        };
        write!(f, "{name}")
    }
}
