//! Placement validation and commit.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. hand index, then cell index, in range (`IndexOutOfRange`)
//! 2. target cell empty (`CellOccupied`)
//!
//! Nothing is written until every check passes, so a rejected placement
//! leaves both hand and grid exactly as they were. Neighbouring tiles are
//! not consulted: any held tile may go on any empty cell.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::{GameError, Result};
use crate::tiles::{Orientation, TileId};
use crate::zones::{Grid, Hand};

/// What a successful placement wrote to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub cell_index: usize,
    pub tile: TileId,
    pub orientation: Orientation,
}

/// Check that the tile at `hand_index` may go on `cell_index`.
pub fn validate(hand: &Hand, hand_index: usize, grid: &Grid, cell_index: usize) -> Result<()> {
    hand.check_index(hand_index)?;
    if !grid.cell_at(cell_index)?.is_empty() {
        return Err(GameError::CellOccupied(cell_index));
    }
    Ok(())
}

/// Move the tile at `hand_index`, with its orientation, onto `cell_index`.
pub fn place(hand: &mut Hand, hand_index: usize, grid: &mut Grid, cell_index: usize) -> Result<Placement> {
    validate(hand, hand_index, grid, cell_index)?;

    let entry = *hand.get(hand_index)?;
    grid.occupy(cell_index, entry.tile, entry.orientation)?;
    // Index was validated above and the hand is untouched since.
    hand.remove(hand_index)?;

    debug!(
        tile = %entry.tile,
        cell_index,
        orientation = %entry.orientation,
        "placed tile"
    );
    Ok(Placement {
        cell_index,
        tile: entry.tile,
        orientation: entry.orientation,
    })
}
