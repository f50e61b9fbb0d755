//! The board.
//!
//! A fixed rows x cols array of cells addressed by a linear index
//! (`row * cols + col`). A cell is written at most once: once occupied it
//! keeps its tile and orientation for the rest of the game.

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, IndexTarget, Result};
use crate::tiles::{Orientation, TileId};

/// One board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridCell {
    #[default]
    Empty,
    Occupied {
        tile: TileId,
        orientation: Orientation,
    },
}

impl GridCell {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, GridCell::Empty)
    }

    #[must_use]
    pub fn tile(&self) -> Option<TileId> {
        match self {
            GridCell::Empty => None,
            GridCell::Occupied { tile, .. } => Some(*tile),
        }
    }
}

/// Board of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<GridCell>,
}

impl Grid {
    /// Create an empty board.
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Grid must have at least one cell");
        Self {
            rows,
            cols,
            cells: vec![GridCell::Empty; rows * cols],
        }
    }

    pub fn cell_at(&self, index: usize) -> Result<GridCell> {
        self.cells
            .get(index)
            .copied()
            .ok_or_else(|| GameError::out_of_range(IndexTarget::Grid, index, self.cells.len()))
    }

    /// Fail with `IndexOutOfRange` unless `index` is a board cell.
    pub fn check_index(&self, index: usize) -> Result<()> {
        self.cell_at(index).map(|_| ())
    }

    /// Write a tile into an empty cell.
    ///
    /// Only the placement step calls this.
    pub(crate) fn occupy(&mut self, index: usize, tile: TileId, orientation: Orientation) -> Result<()> {
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or_else(|| GameError::out_of_range(IndexTarget::Grid, index, len))?;
        if !cell.is_empty() {
            return Err(GameError::CellOccupied(index));
        }
        *cell = GridCell::Occupied { tile, orientation };
        Ok(())
    }

    /// `(row, col)` of a linear index.
    pub fn coords(&self, index: usize) -> Result<(usize, usize)> {
        self.check_index(index)?;
        Ok((index / self.cols, index % self.cols))
    }

    /// Linear index of `(row, col)`.
    pub fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            // Report the index the caller would have produced, saturating on overflow.
            let index = row.saturating_mul(self.cols).saturating_add(col);
            return Err(GameError::out_of_range(IndexTarget::Grid, index, self.cells.len()));
        }
        Ok(row * self.cols + col)
    }

    /// Whether the cell lies on the outer ring of the board.
    pub fn is_border(&self, index: usize) -> Result<bool> {
        let (row, col) = self.coords(index)?;
        Ok(row == 0 || col == 0 || row == self.rows - 1 || col == self.cols - 1)
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
    }

    pub fn placed_tiles(&self) -> impl Iterator<Item = TileId> + '_ {
        self.cells.iter().filter_map(GridCell::tile)
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True while no tile has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(6, 6);
        assert_eq!(grid.len(), 36);
        assert!(grid.is_empty());
        assert_eq!(grid.empty_cells().count(), 36);
        assert_eq!(grid.cell_at(35), Ok(GridCell::Empty));
    }

    #[test]
    fn test_cell_at_bounds() {
        let grid = Grid::new(6, 6);
        assert_eq!(
            grid.cell_at(36),
            Err(GameError::IndexOutOfRange {
                target: IndexTarget::Grid,
                index: 36,
                len: 36
            })
        );
    }

    #[test]
    fn test_occupy_once() {
        let mut grid = Grid::new(6, 6);
        grid.occupy(14, TileId::new(3), Orientation::SOUTH).unwrap();

        assert_eq!(
            grid.cell_at(14),
            Ok(GridCell::Occupied {
                tile: TileId::new(3),
                orientation: Orientation::SOUTH
            })
        );
        assert_eq!(
            grid.occupy(14, TileId::new(4), Orientation::NORTH),
            Err(GameError::CellOccupied(14))
        );
        assert_eq!(grid.cell_at(14).unwrap().tile(), Some(TileId::new(3)));
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn test_coords_round_trip() {
        let grid = Grid::new(6, 6);
        assert_eq!(grid.coords(14), Ok((2, 2)));
        assert_eq!(grid.index_of(2, 2), Ok(14));
        assert_eq!(grid.coords(35), Ok((5, 5)));
        assert!(grid.index_of(6, 0).is_err());
        assert!(grid.coords(36).is_err());
    }

    #[test]
    fn test_border_cells() {
        let grid = Grid::new(6, 6);
        assert_eq!(grid.is_border(0), Ok(true));
        assert_eq!(grid.is_border(5), Ok(true));
        assert_eq!(grid.is_border(30), Ok(true));
        assert_eq!(grid.is_border(14), Ok(false));
        let border = (0..36).filter(|&i| grid.is_border(i).unwrap()).count();
        assert_eq!(border, 20);
    }

    #[test]
    fn test_non_square_grid() {
        let grid = Grid::new(2, 3);
        assert_eq!(grid.coords(4), Ok((1, 1)));
        assert_eq!(grid.is_border(4), Ok(true));
    }

    #[test]
    fn test_full_grid() {
        let mut grid = Grid::new(1, 2);
        grid.occupy(0, TileId::new(1), Orientation::NORTH).unwrap();
        assert!(!grid.is_full());
        grid.occupy(1, TileId::new(2), Orientation::EAST).unwrap();
        assert!(grid.is_full());
        assert_eq!(grid.placed_tiles().count(), 2);
    }
}
