//! Game configuration.
//!
//! The standard game is a 6x6 board, a hand of 3, up to 8 players and a
//! 300 ms rotation settle window. The tile catalogue itself is fixed and
//! not part of the configuration.

use serde::{Deserialize, Serialize};

/// Board and hand dimensions plus presentation timing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board rows.
    pub grid_rows: usize,
    /// Board columns.
    pub grid_cols: usize,
    /// Maximum tiles held at once.
    pub hand_capacity: usize,
    /// Maximum players on the roster.
    pub max_players: usize,
    /// How long a rotated hand tile reports itself as rotating, in ms.
    pub settle_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_rows: 6,
            grid_cols: 6,
            hand_capacity: 3,
            max_players: 8,
            settle_delay_ms: 300,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board dimensions.
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Grid must have at least one cell");
        self.grid_rows = rows;
        self.grid_cols = cols;
        self
    }

    /// Set the hand capacity.
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_hand_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Hand must hold at least one tile");
        self.hand_capacity = capacity;
        self
    }

    /// Set the roster cap.
    ///
    /// Panics if `max` is zero.
    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        assert!(max > 0, "Must allow at least 1 player");
        self.max_players = max;
        self
    }

    #[must_use]
    pub fn with_settle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.settle_delay_ms = delay_ms;
        self
    }

    /// Total number of board cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.grid_rows * self.grid_cols
    }
}
