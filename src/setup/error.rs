//! Setup error taxonomy.
//!
//! Errors occur only while validating a requested configuration (names
//! arrive from clients). Expansion configurators never error: when a
//! precondition is unmet they silently do nothing.

use thiserror::Error;

/// Validation failure while building a match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    /// A requested card name is not in the catalog.
    #[error("unknown card: {0}")]
    UnknownCard(String),

    /// The same card was requested twice as a kingdom pile.
    #[error("duplicate kingdom pile: {0}")]
    DuplicateKingdomPile(String),

    /// A basic, auxiliary or non-supply card was requested as a kingdom pile.
    #[error("not a kingdom card: {0}")]
    NotAKingdomCard(String),

    /// Requested kingdom size is outside 1..=10.
    #[error("kingdom must have between 1 and 10 piles, got {0}")]
    KingdomSize(usize),

    /// Player count outside 2..=6.
    #[error("unsupported player count: {0} (expected 2-6)")]
    PlayerCount(usize),
}
