//! Configurator context - the only interface expansion rules see.

use crate::cards::{CardId, CardRegistry};
use crate::core::SetupRng;

use super::config::MatchConfiguration;

/// Borrowed view handed to each expansion configurator.
///
/// Configurators mutate the configuration, read the catalog, and draw
/// named random streams from the match RNG. They never see the lobby,
/// the transport, or each other.
pub struct ConfiguratorContext<'a> {
    pub config: &'a mut MatchConfiguration,
    pub registry: &'a CardRegistry,
    pub rng: &'a mut SetupRng,
}

impl<'a> ConfiguratorContext<'a> {
    /// Create a context over a configuration, catalog and match RNG.
    pub fn new(
        config: &'a mut MatchConfiguration,
        registry: &'a CardRegistry,
        rng: &'a mut SetupRng,
    ) -> Self {
        Self {
            config,
            registry,
            rng,
        }
    }

    /// Uniformly pick an extra kingdom card within a coin-cost window.
    ///
    /// Eligible cards are kingdom randomizers from the expansions in
    /// play whose coin cost lies in `min_coins..=max_coins` with no
    /// potion component, excluding banned cards and cards that already
    /// have a kingdom pile. Draws from the `stream` context of the
    /// match RNG. Returns `None` when nothing is eligible.
    pub fn pick_extra_kingdom_card(
        &mut self,
        stream: &str,
        min_coins: u8,
        max_coins: u8,
    ) -> Option<CardId> {
        let candidates: Vec<CardId> = self
            .registry
            .kingdom_pool(&self.config.expansions)
            .into_iter()
            .filter(|id| {
                let card = self.registry.get_unchecked(*id);
                (min_coins..=max_coins).contains(&card.cost.coins)
                    && !card.cost.has_potion()
                    && !self.config.is_banned(*id)
                    && self.config.kingdom_pile(&card.name).is_none()
            })
            .collect();

        let mut rng = self.rng.for_context(stream);
        rng.choose(&candidates).copied()
    }
}
