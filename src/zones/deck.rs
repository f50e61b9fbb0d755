//! The shared pool of undrawn tiles.
//!
//! Draws are uniform without replacement: every remaining id is equally
//! likely on each draw, and an id leaves the deck for good once drawn.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::error::{GameError, Result};
use crate::core::rng::RandomSource;
use crate::tiles::{TileCatalogue, TileId};

/// Undrawn tile ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    remaining: Vec<TileId>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::full()
    }
}

impl Deck {
    /// A deck holding every catalogue tile.
    #[must_use]
    pub fn full() -> Self {
        Self {
            remaining: TileCatalogue::ids().collect(),
        }
    }

    /// A deck holding exactly `ids`.
    ///
    /// Fails with `InvalidTileId` on the first id outside the catalogue.
    pub fn from_ids(ids: impl IntoIterator<Item = TileId>) -> Result<Self> {
        let remaining = ids
            .into_iter()
            .map(TileCatalogue::validate)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { remaining })
    }

    /// Remove and return one tile chosen by `rng`.
    pub fn draw(&mut self, rng: &mut impl RandomSource) -> Result<TileId> {
        if self.remaining.is_empty() {
            return Err(GameError::DeckEmpty);
        }
        let index = rng.next_index(self.remaining.len());
        let tile = self.remaining.remove(index);
        trace!(%tile, remaining = self.remaining.len(), "drew tile from deck");
        Ok(tile)
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.remaining.contains(&id)
    }

    /// Undrawn ids, in catalogue order minus whatever has been drawn.
    #[must_use]
    pub fn ids(&self) -> &[TileId] {
        &self.remaining
    }
}
