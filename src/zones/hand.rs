//! The active player's hand.
//!
//! A bounded, ordered list of drawn tiles, each carrying its own
//! orientation. Rotating an entry also stamps a `rotating_until` deadline
//! that the presentation layer polls for its turn animation; the engine
//! never waits on it and never clears it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::error::{GameError, IndexTarget, Result};
use crate::tiles::{Orientation, TileCatalogue, TileId};

/// A held tile and its current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandEntry {
    pub tile: TileId,
    pub orientation: Orientation,
    /// Timestamp (ms) until which the entry reports itself as rotating.
    pub rotating_until: Option<u64>,
}

impl HandEntry {
    #[must_use]
    pub fn new(tile: TileId) -> Self {
        Self {
            tile,
            orientation: Orientation::NORTH,
            rotating_until: None,
        }
    }

    /// Whether the rotation animation is still settling at `now_ms`.
    #[must_use]
    pub fn is_rotating(&self, now_ms: u64) -> bool {
        self.rotating_until.is_some_and(|until| now_ms < until)
    }
}

/// Tiles held by the active player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    entries: SmallVec<[HandEntry; 3]>,
    capacity: usize,
}

impl Hand {
    /// Create an empty hand.
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Hand must hold at least one tile");
        Self {
            entries: SmallVec::new(),
            capacity,
        }
    }

    /// Append `tile` at orientation 0.
    ///
    /// Fails with `InvalidTileId` for ids outside the catalogue.
    pub fn add(&mut self, tile: TileId) -> Result<()> {
        TileCatalogue::validate(tile)?;
        if self.is_full() {
            return Err(GameError::HandFull {
                capacity: self.capacity,
            });
        }
        self.entries.push(HandEntry::new(tile));
        Ok(())
    }

    /// Turn the entry at `index` a quarter turn clockwise.
    ///
    /// The entry reports `is_rotating` until `now_ms + settle_ms`. A rotate
    /// during that window is allowed and simply extends it.
    pub fn rotate(&mut self, index: usize, now_ms: u64, settle_ms: u64) -> Result<Orientation> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or_else(|| GameError::out_of_range(IndexTarget::Hand, index, len))?;

        entry.orientation = entry.orientation.rotated_cw();
        entry.rotating_until = Some(now_ms.saturating_add(settle_ms));
        trace!(index, tile = %entry.tile, orientation = %entry.orientation, "rotated hand tile");
        Ok(entry.orientation)
    }

    /// Remove the entry at `index`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> Result<HandEntry> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    /// Fail with `IndexOutOfRange` unless `index` addresses an entry.
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(GameError::out_of_range(IndexTarget::Hand, index, self.entries.len()))
        }
    }

    pub fn get(&self, index: usize) -> Result<&HandEntry> {
        self.entries
            .get(index)
            .ok_or_else(|| GameError::out_of_range(IndexTarget::Hand, index, self.entries.len()))
    }

    #[must_use]
    pub fn entries(&self) -> &[HandEntry] {
        &self.entries
    }

    pub fn tiles(&self) -> impl Iterator<Item = TileId> + '_ {
        self.entries.iter().map(|e| e.tile)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
