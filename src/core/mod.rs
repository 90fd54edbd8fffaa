//! Core setup types: deterministic RNG.
//!
//! Everything in this module is game-agnostic. The Dominion-specific
//! catalog and rules live in `cards` and `setup`.

pub mod rng;

pub use rng::{SetupRng, SetupRngState};
