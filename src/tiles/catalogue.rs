//! The fixed tile catalogue.
//!
//! Thirty-five tiles, ids 1..=35, each a distinct way of joining the eight
//! edge-points in pairs. This table is the only place tile geometry is
//! written down; everything else asks [`TileCatalogue::connectivity`].

use super::definition::{Edges, TileId};
use super::rotation::Orientation;
use crate::core::error::{GameError, Result};

/// Number of tiles in the catalogue.
pub const TILE_COUNT: usize = 35;

static TILES: [Edges; TILE_COUNT] = [
    Edges::new([1, 0, 3, 2, 5, 4, 7, 6]),
    Edges::new([3, 6, 5, 0, 7, 2, 1, 4]),
    Edges::new([4, 5, 6, 7, 0, 1, 2, 3]),
    Edges::new([5, 4, 7, 6, 1, 0, 3, 2]),
    Edges::new([7, 2, 1, 4, 3, 6, 5, 0]),
    Edges::new([1, 0, 6, 7, 5, 4, 2, 3]),
    Edges::new([1, 0, 7, 6, 5, 4, 3, 2]),
    Edges::new([5, 4, 6, 7, 1, 0, 2, 3]),
    Edges::new([6, 3, 4, 1, 2, 7, 0, 5]),
    Edges::new([3, 5, 6, 0, 7, 1, 2, 4]),
    Edges::new([2, 3, 0, 1, 6, 7, 4, 5]),
    Edges::new([4, 2, 1, 7, 0, 6, 5, 3]),
    Edges::new([3, 2, 1, 0, 7, 6, 5, 4]),
    Edges::new([4, 7, 6, 5, 0, 3, 2, 1]),
    Edges::new([2, 5, 0, 7, 6, 1, 4, 3]),
    Edges::new([6, 3, 7, 1, 5, 4, 0, 2]),
    Edges::new([3, 6, 7, 0, 5, 4, 1, 2]),
    Edges::new([7, 2, 1, 6, 5, 4, 3, 0]),
    Edges::new([2, 7, 0, 6, 5, 4, 3, 1]),
    Edges::new([3, 6, 4, 0, 2, 7, 1, 5]),
    Edges::new([2, 7, 0, 4, 3, 6, 5, 1]),
    Edges::new([6, 7, 3, 2, 5, 4, 0, 1]),
    Edges::new([7, 6, 3, 2, 5, 4, 1, 0]),
    Edges::new([5, 6, 7, 4, 3, 0, 1, 2]),
    Edges::new([5, 3, 7, 1, 6, 0, 4, 2]),
    Edges::new([2, 6, 0, 4, 3, 7, 1, 5]),
    Edges::new([3, 2, 1, 0, 6, 7, 4, 5]),
    Edges::new([3, 7, 6, 0, 5, 4, 2, 1]),
    Edges::new([2, 6, 0, 7, 5, 4, 1, 3]),
    Edges::new([6, 2, 1, 7, 5, 4, 0, 3]),
    Edges::new([7, 3, 6, 1, 5, 4, 2, 0]),
    Edges::new([4, 6, 7, 5, 0, 3, 1, 2]),
    Edges::new([3, 5, 7, 0, 6, 1, 4, 2]),
    Edges::new([7, 4, 6, 5, 1, 3, 2, 0]),
    Edges::new([5, 2, 1, 7, 6, 0, 4, 3]),
];

/// Read-only view over the tile table.
///
/// Zero-sized; construct freely.
///
/// ```
/// use rust_pathtiles::tiles::{TileCatalogue, TileId};
///
/// let edges = TileCatalogue::connectivity(TileId::new(3)).unwrap();
/// assert_eq!(edges.exit(0), 4);
/// assert!(TileCatalogue::connectivity(TileId::new(36)).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TileCatalogue;

impl TileCatalogue {
    /// Base connectivity of a tile.
    pub fn connectivity(id: TileId) -> Result<Edges> {
        Self::index_of(id).map(|i| TILES[i])
    }

    /// Connectivity of a tile turned to `orientation`.
    pub fn oriented(id: TileId, orientation: Orientation) -> Result<Edges> {
        Self::connectivity(id).map(|edges| edges.rotated(orientation))
    }

    /// Check that `id` names a catalogue tile.
    pub fn validate(id: TileId) -> Result<TileId> {
        Self::index_of(id).map(|_| id)
    }

    #[must_use]
    pub fn contains(id: TileId) -> bool {
        Self::index_of(id).is_ok()
    }

    /// Every tile id, ascending.
    pub fn ids() -> impl Iterator<Item = TileId> {
        (1..=TILE_COUNT as u32).map(TileId::new)
    }

    #[must_use]
    pub const fn len() -> usize {
        TILE_COUNT
    }

    fn index_of(id: TileId) -> Result<usize> {
        match id.raw() {
            n @ 1..=35 => Ok(n as usize - 1),
            n => Err(GameError::InvalidTileId(n)),
        }
    }
}
